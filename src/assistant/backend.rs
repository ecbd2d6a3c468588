//! Ollama HTTP backend.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assistant::ChatBackend;
use crate::errors::{AppError, AppResult};
use crate::models::ai_config::{AiConfig, ConnectionStatus};

pub const LOCAL_PROBE_TIMEOUT: Duration = Duration::from_secs(3);
pub const REMOTE_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OllamaBackend {
    pub local_url: String,
    pub remote_url: Option<String>,
    pub model: String,
    pub enabled: bool,
}

impl OllamaBackend {
    pub fn from_config(cfg: &AiConfig) -> Self {
        let remote = cfg.ollama_remote_url.trim();
        Self {
            local_url: cfg.ollama_local_url.trim_end_matches('/').to_string(),
            remote_url: (!remote.is_empty()).then(|| remote.trim_end_matches('/').to_string()),
            model: cfg.ollama_model.clone(),
            enabled: cfg.ollama_enabled,
        }
    }

    fn client(timeout: Duration) -> AppResult<Client> {
        Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::BackendUnavailable(e.to_string()))
    }

    fn tags_ok(base: &str, timeout: Duration) -> bool {
        let Ok(client) = Self::client(timeout) else {
            return false;
        };

        match client.get(format!("{base}/api/tags")).send() {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!(%base, error = %e, "ollama probe failed");
                false
            }
        }
    }

    fn base_for(&self, status: ConnectionStatus) -> Option<&str> {
        match status {
            ConnectionStatus::Local => Some(&self.local_url),
            ConnectionStatus::Remote => self.remote_url.as_deref(),
            ConnectionStatus::Disconnected => None,
        }
    }
}

impl ChatBackend for OllamaBackend {
    fn probe(&self) -> ConnectionStatus {
        if !self.enabled {
            return ConnectionStatus::Disconnected;
        }

        if Self::tags_ok(&self.local_url, LOCAL_PROBE_TIMEOUT) {
            return ConnectionStatus::Local;
        }

        if let Some(remote) = &self.remote_url
            && Self::tags_ok(remote, REMOTE_PROBE_TIMEOUT)
        {
            return ConnectionStatus::Remote;
        }

        ConnectionStatus::Disconnected
    }

    fn generate(&self, status: ConnectionStatus, prompt: &str, system: &str) -> AppResult<String> {
        let base = self
            .base_for(status)
            .ok_or_else(|| AppError::BackendUnavailable("no backend connected".into()))?;

        let body = GenerateRequest {
            model: &self.model,
            prompt,
            system,
            stream: false,
            options: GenerateOptions {
                temperature: 0.7,
                num_predict: 256,
            },
        };

        let resp = Self::client(GENERATE_TIMEOUT)?
            .post(format!("{base}/api/generate"))
            .json(&body)
            .send()
            .map_err(|e| AppError::BackendUnavailable(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AppError::BackendUnavailable(format!(
                "generate returned {}",
                resp.status()
            )));
        }

        let payload: GenerateResponse = resp
            .json()
            .map_err(|e| AppError::BackendUnavailable(e.to_string()))?;

        Ok(payload
            .response
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| "I couldn't generate a response.".to_string()))
    }
}
