use crate::SolverClient;
use crate::error::{Result, SubmitError};
use crate::response::{SolverResponse, decode_response};
use log::debug;
use reqwest::multipart::Form;
use std::time::Duration;

pub const DEFAULT_SOLVER_URL: &str =
    "https://www.wolframcloud.com/obj/herzeghenrique/MinhaAPI_Circuitos_V16";

/// Multipart field carrying the JSON netlist
pub const NETLIST_FIELD: &str = "netlist";

pub struct HttpSolverClient {
    http: reqwest::Client,
    url: String,
}

impl HttpSolverClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Transport(format!("{e}")))?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SolverClient for HttpSolverClient {
    async fn exchange(&self, payload: String) -> Result<SolverResponse> {
        debug!("POST {} ({} bytes)", self.url, payload.len());
        let form = Form::new().text(NETLIST_FIELD, payload);
        let response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(format!("{e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            )));
        }
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(format!("{e}")))?;
        decode_response(&body)
    }
}
