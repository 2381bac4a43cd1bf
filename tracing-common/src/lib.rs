use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::{prelude::*, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

pub fn setup_tracing() -> Result<()> {
    color_eyre::install()?;

    let rust_log = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "warn,server=trace,convos=trace,tower_http=debug".into());

    let env_filter = EnvFilter::builder()
        .parse(&rust_log)
        .wrap_err_with(|| format!("Couldn't create env filter from {rust_log}"))?;

    let heirarchical = HierarchicalLayer::default()
        .with_writer(std::io::stdout)
        .with_indent_lines(true)
        .with_indent_amount(2)
        .with_targets(true);

    Registry::default()
        .with(heirarchical)
        .with(env_filter)
        .try_init()
        .wrap_err("Couldn't init tracing subscriber")?;

    Ok(())
}
