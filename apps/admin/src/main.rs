use anyhow::Context;
use clap::Parser;
use ladmin_admin::{Cli, summary};
use ladmin_logger::Logger;

mod demo;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings().context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_BIN_NAME"), &settings.logging)?.init()?;

    let registry = lightadmin::bootstrap(&settings).context("Administration bootstrap failed")?;
    let registry = lightadmin::publish(registry)?;

    for line in summary(registry) {
        tracing::info!("{line}");
    }
    Ok(())
}
