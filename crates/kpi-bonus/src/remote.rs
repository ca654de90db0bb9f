//! Calls a calculator service when one is reachable and falls back to the
//! in-process engine otherwise.

use reqwest::Client as ReqwestClient;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::calculation::{CalculationRequest, CalculationResult};
use crate::config::RemoteConfig;

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("unable to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("{url} returned an unreadable result: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Where a calculation result came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationSource {
    Remote { base_url: String },
    Local,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOutcome {
    pub result: CalculationResult,
    pub source: CalculationSource,
}

/// Tries each configured calculator service in order before computing locally.
#[derive(Debug, Clone)]
pub struct RemoteCalculator {
    client: ReqwestClient,
    base_urls: Vec<String>,
}

impl RemoteCalculator {
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RemoteError::ClientBuild)?;

        Ok(Self {
            client,
            base_urls: RemoteConfig::parse_bases(&config.base_urls.join(",")),
        })
    }

    pub fn base_urls(&self) -> &[String] {
        &self.base_urls
    }

    /// Never fails: unreachable or misbehaving services are skipped and the
    /// local engine answers last.
    pub async fn calculate(&self, request: &CalculationRequest) -> CalculationOutcome {
        for base_url in &self.base_urls {
            match self.call(base_url, request).await {
                Ok(result) => {
                    info!(%base_url, "calculation served by remote service");
                    return CalculationOutcome {
                        result,
                        source: CalculationSource::Remote {
                            base_url: base_url.clone(),
                        },
                    };
                }
                Err(err) => warn!(%base_url, error = %err, "remote calculation failed, trying next"),
            }
        }

        debug!(
            candidates = self.base_urls.len(),
            "no remote calculator answered, computing locally"
        );
        CalculationOutcome {
            result: request.calculate(),
            source: CalculationSource::Local,
        }
    }

    async fn call(
        &self,
        base_url: &str,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, RemoteError> {
        let url = format!("{base_url}/calculate");
        debug!(%url, "sending calculation request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| RemoteError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status { url, status });
        }

        response
            .json::<CalculationResult>()
            .await
            .map_err(|source| RemoteError::Decode { url, source })
    }
}
