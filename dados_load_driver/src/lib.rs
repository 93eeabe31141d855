pub mod config;
pub mod error;
pub mod summary;

use dados_shared::Record;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{error, info, warn, Instrument};
use url::Url;

use crate::{config::DriverConfiguration, error::DriverError, summary::RunSummary};

/// What happened to a single POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    Created,
    UnexpectedStatus(u16),
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
    pub id: usize,
    pub outcome: CallOutcome,
}

/// Fires one POST per synthetic record at the target URL, all at once, and collects every outcome.
#[derive(Debug, Clone)]
pub struct LoadDriver {
    client: Client,
    target_url: Url,
}

impl LoadDriver {
    pub fn new(target_url: &str, request_timeout: Option<Duration>) -> Result<Self, DriverError> {
        let target_url = Url::parse(target_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            target_url,
        })
    }

    pub fn from_config(config: &DriverConfiguration) -> Result<Self, DriverError> {
        Self::new(&config.target_url, config.request_timeout())
    }

    pub fn target_url(&self) -> &Url {
        &self.target_url
    }

    /// Sends `total_requests` records concurrently and waits for every one of them. Failed calls are neither retried
    /// nor allowed to stop the batch.
    pub async fn run(&self, total_requests: usize) -> RunSummary {
        let start = Instant::now();

        let calls = (1..=total_requests).map(|id| {
            let client = self.client.clone();
            let target_url = self.target_url.clone();
            tokio::spawn(async move { send_record(&client, target_url, id).await }.in_current_span())
        });

        let mut summary = RunSummary::new(total_requests);
        for result in futures::future::join_all(calls).await {
            match result {
                Ok(call) => summary.record(&call.outcome),
                Err(err) => {
                    error!("Worker task did not complete: {err}");
                    summary.record(&CallOutcome::Transport(err.to_string()));
                }
            }
        }

        summary.finish(start.elapsed())
    }
}

/// The record sent by worker `id`. Names and emails are unique per id.
pub fn synthetic_record(id: usize) -> Record {
    Record::new(format!("Usuario Teste #{id}"), format!("teste{id}@carga.com"))
}

async fn send_record(client: &Client, target_url: Url, id: usize) -> CallResult {
    let outcome = match client.post(target_url).json(&synthetic_record(id)).send().await {
        Ok(response) => {
            let status = response.status();
            // Drained so the pooled connection can be reused.
            response.bytes().await.ok();

            if status == StatusCode::CREATED {
                CallOutcome::Created
            } else {
                CallOutcome::UnexpectedStatus(status.as_u16())
            }
        }
        Err(err) => CallOutcome::Transport(err.to_string()),
    };

    match &outcome {
        CallOutcome::Created => info!("[Worker {id}] Sucesso: Status {}", StatusCode::CREATED.as_u16()),
        CallOutcome::UnexpectedStatus(status) => warn!("[Worker {id}] Falha: Status {status}"),
        CallOutcome::Transport(err) => warn!("[Worker {id}] Erro na requisição HTTP: {err}"),
    }

    CallResult { id, outcome }
}
