use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::{error, info};
use lms::catalog::controller::CatalogConsole;
use lms::catalog::factory::create_catalog_service;
use lms::core::domain::Configuration;
use lms::utils::logging::setup_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Configuration::from_env();
    setup_tracing(&config);
    info!("starting catalog console for branch {}", config.branch_id);

    let catalog = create_catalog_service(&config);
    let reader = BufReader::new(tokio::io::stdin());
    let mut console = CatalogConsole::new(&config, catalog, reader, tokio::io::stdout());
    match console.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("catalog console failed {}", err);
            ExitCode::FAILURE
        }
    }
}
