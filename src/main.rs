use std::process::ExitCode;

use octofit_tracker::config::EnvConfig;
use octofit_tracker::db::database_service::DatabaseService;
use octofit_tracker::seed;
use octofit_tracker::types::error::AppError;
use tracing::{error, info};

async fn run() -> Result<(), AppError> {
    let config = EnvConfig::from_env()?;

    let database_service = DatabaseService::new(&config).await?;

    let report = seed::populate(&database_service).await?;
    info!("Removed before seeding: {:?}", report.removed);
    info!("Database now holds: {:?}", database_service.count_all().await?);

    println!("{}", seed::SUCCESS_MESSAGE);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("populate-db failed ({})", err.kind());
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
