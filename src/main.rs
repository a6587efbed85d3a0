use cm_bootstrap::BootstrapConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Built-in CM list unless CM_BOOTSTRAP_CONFIG points at a JSON file.
    let config = BootstrapConfig::from_env()?;
    let selector = config.into_selector()?;

    let endpoint = selector.try_pick()?;
    tracing::info!(endpoint = %endpoint, strategy = selector.strategy_name(), "selected CM server");
    println!("{}", endpoint);

    Ok(())
}
