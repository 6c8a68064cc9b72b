//! Relay server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::http::routes::create_router;
use crate::state::RelayState;

/// Relay listener configuration.
#[derive(Debug, Clone)]
pub struct RelayServerConfig {
    pub host: String,
    pub port: u16,
}

impl RelayServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Default for RelayServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

/// The relay server.
pub struct RelayServer {
    config: RelayServerConfig,
    state: Arc<RelayState>,
}

impl RelayServer {
    pub fn new(config: RelayServerConfig, state: RelayState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Start the server.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(self.state.clone());

        let addr: SocketAddr = self.addr().parse()?;
        let listener = TcpListener::bind(addr).await?;

        info!(
            "Relay listening on {} (model={}, word_limit={})",
            addr,
            self.state.upstream.model(),
            self.state.word_limit
        );
        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reright_core::{PromptBuilder, PromptTemplate};
    use reright_protocols::{PromptPayload, RawCompletion, UpstreamError, UpstreamModel};

    struct NullUpstream;

    #[async_trait]
    impl UpstreamModel for NullUpstream {
        fn model(&self) -> &str {
            "null"
        }

        async fn generate(&self, _payload: &PromptPayload) -> Result<RawCompletion, UpstreamError> {
            Ok(RawCompletion::new("[]"))
        }
    }

    fn state() -> RelayState {
        RelayState::new(
            Arc::new(NullUpstream),
            PromptBuilder::new(PromptTemplate::new("sys", 1)),
        )
    }

    #[test]
    fn test_relay_config_default() {
        let config = RelayServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8787);
    }

    #[test]
    fn test_relay_server_addr_format() {
        let server = RelayServer::new(RelayServerConfig::new("0.0.0.0", 443), state());
        assert_eq!(server.addr(), "0.0.0.0:443");
    }

    #[test]
    fn test_state_default_word_limit() {
        assert_eq!(state().word_limit, 100);
        assert_eq!(state().with_word_limit(7).word_limit, 7);
    }
}
