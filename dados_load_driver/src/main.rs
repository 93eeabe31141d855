use dados_load_driver::{config::DriverConfiguration, error::DriverError, LoadDriver};
use dados_shared::logging::init_tracing;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(exit_code) => exit_code,
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode, DriverError> {
    let config = DriverConfiguration::new()?;
    init_tracing(&config.log_format)?;

    let driver = LoadDriver::from_config(&config)?;
    info!("Target: {}", driver.target_url());

    println!(
        "#### Iniciando Teste de Carga: {} Requisições Concorrentes ####",
        config.total_requests
    );

    let summary = driver.run(config.total_requests).await;

    println!("\n{summary}");

    Ok(summary.exit_code(config.fail_on_error))
}
