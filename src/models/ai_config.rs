use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Local,
    Remote,
    #[default]
    Disconnected,
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        !matches!(self, ConnectionStatus::Disconnected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Local => "Local AI",
            ConnectionStatus::Remote => "Remote AI",
            ConnectionStatus::Disconnected => "Local Only",
        }
    }
}

/// Assistant backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiConfig {
    pub ollama_local_url: String,
    pub ollama_remote_url: String,
    pub ollama_model: String,
    pub ollama_enabled: bool,
    pub connection_status: ConnectionStatus,
    pub voice_enabled: bool,
    pub voice_language: String,
    pub suggestions_enabled: bool,
    pub last_suggestion_update: Option<i64>,
    pub use_local_fallback: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            ollama_local_url: "http://localhost:11434".to_string(),
            ollama_remote_url: String::new(),
            ollama_model: "llama3".to_string(),
            ollama_enabled: true,
            connection_status: ConnectionStatus::Disconnected,
            voice_enabled: true,
            voice_language: "en-US".to_string(),
            suggestions_enabled: true,
            last_suggestion_update: None,
            use_local_fallback: true,
        }
    }
}
