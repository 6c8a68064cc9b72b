    use super::*;
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

    fn payload(text: &str) -> PromptPayload {
        PromptPayload {
            system_prompt: "server-side prompt".to_string(),
            user_text: text.to_string(),
            temperature: 0.8,
            max_output_tokens: 500,
        }
    }

    #[tokio::test]
    async fn test_posts_only_text_and_reencodes_suggestions() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/"))
            .and(matchers::body_json(serde_json::json!({"text": "a b c"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "suggestions": ["one", "two"]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let backend = RelayBackend::new(format!("{}/", mock_server.uri()));
        let raw = backend.complete(&payload("a b c")).await.unwrap();
        assert_eq!(raw.as_str(), r#"["one","two"]"#);
    }

    #[tokio::test]
    async fn test_error_status_uses_server_message() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Please select 100 words or fewer"
            })))
            .mount(&mock_server)
            .await;

        let backend = RelayBackend::new(mock_server.uri());
        let err = backend.complete(&payload("x")).await.unwrap_err();
        assert_eq!(
            err,
            CompletionError::BackendError("Please select 100 words or fewer".to_string())
        );
    }

    #[tokio::test]
    async fn test_error_status_without_message_is_generic() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
            .mount(&mock_server)
            .await;

        let backend = RelayBackend::new(mock_server.uri());
        let err = backend.complete(&payload("x")).await.unwrap_err();
        assert_eq!(err, CompletionError::BackendError("API request failed".to_string()));
    }

    #[tokio::test]
    async fn test_success_without_suggestions_field() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&mock_server)
            .await;

        let backend = RelayBackend::new(mock_server.uri());
        let err = backend.complete(&payload("x")).await.unwrap_err();
        assert!(matches!(err, CompletionError::BackendError(m) if m.contains("did not include")));
    }

    #[tokio::test]
    async fn test_success_with_non_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let backend = RelayBackend::new(mock_server.uri());
        let err = backend.complete(&payload("x")).await.unwrap_err();
        assert!(matches!(
            err,
            CompletionError::BackendError(m) if m.contains("Invalid relay response")
        ));
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_network_error() {
        let backend = RelayBackend::new("http://127.0.0.1:1/");
        let err = backend.complete(&payload("x")).await.unwrap_err();
        assert!(matches!(err, CompletionError::Network(_)));
    }

    #[tokio::test]
    async fn test_slow_relay_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"suggestions": ["late"]}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let backend =
            RelayBackend::with_timeout(mock_server.uri(), Duration::from_secs(1)).unwrap();
        let err = backend.complete(&payload("x")).await.unwrap_err();
        assert_eq!(err, CompletionError::Timeout(1));
    }

    #[test]
    fn test_backend_identity() {
        let backend = RelayBackend::new("http://relay.test/");
        assert_eq!(backend.id(), "relay");
        assert_eq!(backend.url(), "http://relay.test/");
        assert!(backend.capabilities().supports_prompting);
    }
