use anyhow::Context;
use ton_wallet_generator::{init_logging, GeneratorConfig, NAME, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = GeneratorConfig::from_env().context("Failed to load configuration")?;
    let rendered = serde_json::to_string_pretty(&config).context("Failed to render configuration")?;

    println!("{} {} configuration:\n", NAME, VERSION);
    println!("{}", rendered);
    Ok(())
}
