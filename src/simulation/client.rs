use std::time::Duration;

use crate::simulation::request::SimulationRequest;
use crate::simulation::response::{SimulationResponse, SimulationRun};

pub const RUN_PATH: &str = "/api/v1/simulation/run";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("board is empty, nothing to simulate")]
    EmptyBoard,
    #[error("simulation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("simulation service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unable to decode simulation response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the remote combat simulation service.
#[derive(Debug, Clone)]
pub struct SimulationClient {
    base_url: String,
    http: reqwest::Client,
    timeout: Duration,
}

impl SimulationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn run_url(&self) -> String {
        format!("{}{RUN_PATH}", self.base_url)
    }

    pub async fn run(&self, request: SimulationRequest) -> Result<SimulationRun, SimulationError> {
        if request.is_empty() {
            return Err(SimulationError::EmptyBoard);
        }

        let url = self.run_url();
        tracing::info!(%url, units = request.board_champions.len(), "submitting simulation");
        let response = self
            .http
            .post(&url)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "simulation service rejected request");
            return Err(SimulationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: SimulationResponse = serde_json::from_str(&body)?;
        tracing::info!(
            results = decoded.results.len(),
            events = decoded.events.len(),
            "simulation complete"
        );
        Ok(SimulationRun::new(request, decoded))
    }
}
