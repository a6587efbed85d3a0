use std::sync::Arc;

use tracing::{debug, error};

use crate::endpoint::Endpoint;
use crate::error::TableError;
use crate::strategies::clock_seeded::ClockSeededStrategy;
use crate::strategies::strategy::SelectionStrategy;
use crate::table::EndpointTable;

pub struct Selector {
    table: EndpointTable,
    strategy: Arc<dyn SelectionStrategy>,
}

impl Selector {
    pub fn new(table: EndpointTable, strategy: Arc<dyn SelectionStrategy>) -> Self {
        Self { table, strategy }
    }

    pub fn table(&self) -> &EndpointTable {
        &self.table
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Picks and parses one entry, returning table faults as values.
    pub fn try_pick(&self) -> Result<Endpoint, TableError> {
        let index = self
            .strategy
            .pick_index(self.table.len())
            .ok_or(TableError::Empty)?;
        let endpoint = self.table.parse_at(index)?;
        debug!(
            index,
            endpoint = %endpoint,
            strategy = self.strategy.name(),
            "picked bootstrap endpoint"
        );
        Ok(endpoint)
    }

    /// Picks one entry uniformly at random.
    ///
    /// # Panics
    ///
    /// If the table is empty or the chosen entry is not a valid `host:port`.
    /// The table is trusted configuration, so either case is a bug in the
    /// binary rather than a condition to retry.
    pub fn pick_random(&self) -> Endpoint {
        match self.try_pick() {
            Ok(endpoint) => endpoint,
            Err(e) => {
                error!(error = %e, "endpoint table is corrupt");
                panic!("{e}");
            }
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(EndpointTable::builtin(), Arc::new(ClockSeededStrategy::new()))
    }
}

/// Returns a random CM server from [`CM_SERVERS`](crate::table::CM_SERVERS).
pub fn pick_random() -> Endpoint {
    Selector::default().pick_random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Host;
    use crate::strategies::fixed::FixedStrategy;
    use crate::strategies::random::RandomStrategy;
    use crate::table::CM_SERVERS;
    use std::collections::HashMap;
    use std::net::{IpAddr, Ipv4Addr};

    fn selector(entries: &[&str], strategy: Arc<dyn SelectionStrategy>) -> Selector {
        Selector::new(EndpointTable::new(entries.iter().copied()), strategy)
    }

    #[test]
    fn builtin_pick_is_a_table_member() {
        for _ in 0..200 {
            let endpoint = pick_random();
            assert!(CM_SERVERS.contains(&endpoint.to_string().as_str()));
        }
    }

    #[test]
    fn single_entry_table_always_returns_it() {
        let selector = selector(&["10.0.0.1:1000"], Arc::new(ClockSeededStrategy::new()));
        for _ in 0..100 {
            let endpoint = selector.pick_random();
            assert_eq!(
                endpoint.host(),
                &Host::Ip(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)))
            );
            assert_eq!(endpoint.port(), 1000);
        }
    }

    #[test]
    fn can_return_first_cm_server() {
        let selector = Selector::new(EndpointTable::builtin(), Arc::new(FixedStrategy::new(0)));
        let endpoint = selector.pick_random();
        assert_eq!(endpoint.host().to_string(), "146.66.155.38");
        assert_eq!(endpoint.port(), 27017);
    }

    #[test]
    fn large_table_never_out_of_bounds() {
        let entries: Vec<String> = (0..1000)
            .map(|i| format!("10.0.{}.{}:{}", i / 256, i % 256, 1000 + i))
            .collect();
        let table = EndpointTable::new(entries);
        let selector = Selector::new(table.clone(), Arc::new(RandomStrategy::new()));
        for _ in 0..5000 {
            let endpoint = selector.pick_random();
            assert!(table.contains(&endpoint.to_string()));
        }
    }

    #[test]
    fn selection_is_roughly_uniform() {
        let selector = Selector::new(EndpointTable::builtin(), Arc::new(RandomStrategy::new()));
        assert_roughly_uniform(|| selector.pick_random());
    }

    #[test]
    fn clock_seeded_selection_is_roughly_uniform() {
        assert_roughly_uniform(pick_random);
    }

    fn assert_roughly_uniform(mut pick: impl FnMut() -> Endpoint) {
        let draws = 50_000;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(pick().to_string()).or_default() += 1;
        }
        assert_eq!(counts.len(), CM_SERVERS.len());
        let expected = draws as f64 / CM_SERVERS.len() as f64;
        for (entry, count) in counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.1, "{entry} picked {count} times, expected ~{expected}");
        }
    }

    #[test]
    fn non_canonical_entries_come_back_verbatim() {
        let entries = ["10.0.0.1:080", "[2001:DB8::1]:443", "[2001:0db8::1]:443"];
        let table = EndpointTable::new(entries);
        for (index, entry) in entries.iter().enumerate() {
            let selector = Selector::new(table.clone(), Arc::new(FixedStrategy::new(index)));
            let endpoint = selector.pick_random();
            assert_eq!(endpoint.to_string(), *entry);
            assert!(table.contains(&endpoint.to_string()));
        }
    }

    #[test]
    fn try_pick_surfaces_malformed_entry() {
        let selector = selector(
            &["10.0.0.1:1000", "not-an-address"],
            Arc::new(FixedStrategy::new(1)),
        );
        assert!(matches!(
            selector.try_pick(),
            Err(TableError::MalformedTableEntry { index: 1, .. })
        ));
    }

    #[test]
    #[should_panic(expected = "invalid address in endpoint table")]
    fn malformed_entry_is_fatal() {
        let selector = selector(
            &["10.0.0.1:1000", "not-an-address"],
            Arc::new(FixedStrategy::new(1)),
        );
        selector.pick_random();
    }

    #[test]
    #[should_panic(expected = "endpoint table is empty")]
    fn empty_table_is_fatal() {
        selector(&[], Arc::new(RandomStrategy::new())).pick_random();
    }

    #[test]
    fn selector_is_shareable_across_threads() {
        let selector = Arc::new(Selector::new(
            EndpointTable::builtin(),
            Arc::new(RandomStrategy::new()),
        ));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let selector = Arc::clone(&selector);
                std::thread::spawn(move || selector.pick_random())
            })
            .collect();
        for handle in handles {
            let endpoint = handle.join().unwrap();
            assert!(selector.table().contains(&endpoint.to_string()));
        }
    }
}
