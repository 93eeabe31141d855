use dados_api_rest::app;
use dados_shared::{config::ApplicationConfiguration, error::SharedError, logging::init_tracing};
use dados_store::in_memory::seeded_record_state;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), SharedError> {
    let config = ApplicationConfiguration::new()?;
    init_tracing(&config.log_format)?;

    let state = seeded_record_state();
    let app = app(state, config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(config.socket_address()).await?;
    info!("Servidor escutando em http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
