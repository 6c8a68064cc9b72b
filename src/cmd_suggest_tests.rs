    use super::*;
    use reright_config::ConfigLoader;
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

    fn shipped_config() -> Config {
        ConfigLoader::load_str(include_str!("../config/default.toml")).unwrap()
    }

    async fn suggest_to_string(
        config: &Config,
        api_key: Option<String>,
        relay_url: Option<String>,
        text: &str,
    ) -> Result<String, String> {
        let mut out = Vec::new();
        run_suggest(config, api_key, relay_url, text, &mut out)
            .await
            .map_err(|e| e.to_string())?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_suggest_through_relay_prints_one_per_line() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/"))
            .and(matchers::body_json(serde_json::json!({"text": "just do it"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "suggestions": ["Act now", "Commit fully"]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = shipped_config();
        let url = format!("{}/", mock_server.uri());
        let output = suggest_to_string(&config, None, Some(url), "just do it")
            .await
            .unwrap();
        assert_eq!(output, "Act now\nCommit fully\n");
    }

    #[tokio::test]
    async fn test_suggest_uses_configured_relay_url() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "suggestions": ["Stand firm"]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = shipped_config();
        config.client.relay_url = mock_server.uri();
        let output = suggest_to_string(&config, None, None, "hold on").await.unwrap();
        assert_eq!(output, "Stand firm\n");
    }

    #[tokio::test]
    async fn test_over_client_word_limit_never_reaches_relay() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "suggestions": ["unused"]
            })))
            .expect(0)
            .mount(&mock_server)
            .await;

        let config = shipped_config();
        let text = "one two three four five six seven eight nine ten eleven";
        let err = suggest_to_string(&config, None, Some(mock_server.uri()), text)
            .await
            .unwrap_err();
        assert_eq!(err, "Please select 10 words or fewer");
    }

    #[tokio::test]
    async fn test_relay_error_message_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Please select 100 words or fewer"
            })))
            .mount(&mock_server)
            .await;

        let config = shipped_config();
        let err = suggest_to_string(&config, None, Some(mock_server.uri()), "too long")
            .await
            .unwrap_err();
        assert_eq!(err, "Please select 100 words or fewer");
    }

    #[tokio::test]
    async fn test_direct_gemini_backend_uses_key() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path_regex(r"^/models/.+:generateContent$"))
            .and(matchers::query_param("key", "direct-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "[\"Go for it\"]"}]}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = shipped_config();
        config.client.backend = ClientBackend::Gemini;
        config.relay.base_url = mock_server.uri();
        let output = suggest_to_string(&config, Some("direct-key".to_string()), None, "do it")
            .await
            .unwrap();
        assert_eq!(output, "Go for it\n");
    }

    #[tokio::test]
    async fn test_direct_gemini_backend_without_key_fails() {
        let mut config = shipped_config();
        config.client.backend = ClientBackend::Gemini;
        config.relay.api_key = None;

        let err = suggest_to_string(&config, None, None, "do it").await.unwrap_err();
        assert!(err.contains("GEMINI_API_KEY"));
    }
