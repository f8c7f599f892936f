//! Model availability resolution.
//!
//! Before a model is used for the first time, the resolver checks whether it
//! is installed on the server and, if not, pulls it. Availability is judged
//! on base names: a request for `"llama3"` is satisfied by an installed
//! `"llama3:latest"`.

use super::errors::OllamaError;
use super::transport::OllamaTransport;
use super::types::base_name;

/// Resolves whether a requested model is present, pulling it when absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModelResolver;

impl ModelResolver {
    /// Ensure `requested` is available on the server.
    ///
    /// Queries the model listing and compares base names. A match returns
    /// immediately with no side effects. On a miss the full identifier is
    /// pulled with blocking semantics; success requires the terminal status
    /// to be exactly `"success"`. No retries, no partial state.
    pub async fn ensure_available(
        &self,
        transport: &OllamaTransport,
        requested: &str,
    ) -> Result<(), OllamaError> {
        let installed = transport.list_models().await?;

        let wanted = base_name(requested);
        if installed.iter().any(|m| base_name(&m.name) == wanted) {
            tracing::debug!(model = %requested, "model already available");
            return Ok(());
        }

        tracing::info!(model = %requested, "model not installed, pulling");
        let pull = transport.pull_model(requested).await?;

        if pull.status == "success" {
            Ok(())
        } else {
            Err(OllamaError::PullFailed {
                model: requested.to_string(),
                status: pull.status,
            })
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_with_tags(models: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"models": models})),
            )
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_installed_base_name_skips_pull() {
        let server = server_with_tags(serde_json::json!([{"name": "llama3:latest"}])).await;
        Mock::given(method("POST"))
            .and(path("/api/pull"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let transport = OllamaTransport::new(server.uri()).unwrap();
        ModelResolver
            .ensure_available(&transport, "llama3")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_exact_tagged_identifier_matches_on_base_name() {
        let server = server_with_tags(serde_json::json!([{"name": "llama3:latest"}])).await;
        let transport = OllamaTransport::new(server.uri()).unwrap();
        ModelResolver
            .ensure_available(&transport, "llama3:70b")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_model_pulls_full_identifier_once() {
        let server = server_with_tags(serde_json::json!([])).await;
        Mock::given(method("POST"))
            .and(path("/api/pull"))
            .and(body_partial_json(
                serde_json::json!({"name": "mistral", "stream": false}),
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "success"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = OllamaTransport::new(server.uri()).unwrap();
        ModelResolver
            .ensure_available(&transport, "mistral")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_non_success_pull_status_is_an_error() {
        let server = server_with_tags(serde_json::json!([])).await;
        Mock::given(method("POST"))
            .and(path("/api/pull"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"status": "pull model manifest: file does not exist"}),
            ))
            .mount(&server)
            .await;

        let transport = OllamaTransport::new(server.uri()).unwrap();
        let err = ModelResolver
            .ensure_available(&transport, "nonexistent")
            .await
            .unwrap_err();
        assert!(matches!(err, OllamaError::PullFailed { .. }));
    }

    #[tokio::test]
    async fn test_listing_failure_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(503).set_body_string("loading"))
            .mount(&server)
            .await;

        let transport = OllamaTransport::new(server.uri()).unwrap();
        let err = ModelResolver
            .ensure_available(&transport, "llama3")
            .await
            .unwrap_err();
        assert!(matches!(err, OllamaError::Http { status: 503, .. }));
    }
}
