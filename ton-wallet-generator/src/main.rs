use std::process::ExitCode;
use ton_wallet_generator::{
    init_logging, run_session, BulkGenerator, FileStorage, GeneratorConfig, OutputStorage,
    SessionOutcome, StdinConsole, TonSdk, WalletError, WalletGenerator,
};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(SessionOutcome::Completed(outcome)) => {
            log::info!("Session completed with {} wallet(s)", outcome.generated);
            ExitCode::SUCCESS
        }
        Ok(SessionOutcome::Cancelled) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Wallet generation failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<SessionOutcome, WalletError> {
    let config = GeneratorConfig::from_env()?;
    log::debug!("Loaded configuration: {:?}", config);

    let sdk = TonSdk::new(config.address_format);
    let repository = FileStorage::new(&config.output_dir);
    let bulk = BulkGenerator::new(
        WalletGenerator::new(&sdk),
        OutputStorage::new(&repository, config.addresses_file.as_str()),
    )
    .with_progress_interval(config.progress_interval);
    let console = StdinConsole::stdin();

    run_session(&console, &bulk, config.confirm_threshold).await
}
