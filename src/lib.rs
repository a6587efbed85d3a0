pub mod config;
pub mod endpoint;
pub mod error;
pub mod selector;
pub mod strategies;
pub mod table;

pub use config::{BootstrapConfig, Seeding};
pub use endpoint::{Endpoint, Host};
pub use error::{ConfigError, EndpointParseError, TableError};
pub use selector::{pick_random, Selector};
pub use strategies::strategy::SelectionStrategy;
pub use table::{EndpointTable, CM_SERVERS};
