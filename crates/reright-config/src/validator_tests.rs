    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        // Missing API key is only a warning
        assert!(result.warnings.iter().any(|w| w.path == "relay.api_key"));
    }

    #[test]
    fn test_validate_invalid_port() {
        let mut config = Config::default();
        config.server.port = 0;

        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "server.port"));
    }

    #[test]
    fn test_validate_zero_word_limits() {
        let mut config = Config::default();
        config.relay.word_limit = 0;
        config.client.word_limit = 0;

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "relay.word_limit"));
        assert!(result.errors.iter().any(|e| e.path == "client.word_limit"));
    }

    #[test]
    fn test_validate_temperature_range() {
        let mut config = Config::default();
        config.prompt.temperature = 2.5;
        assert!(!ConfigValidator::validate(&config).is_valid());

        config.prompt.temperature = 2.0;
        assert!(ConfigValidator::validate(&config).is_valid());

        config.prompt.temperature = -0.1;
        assert!(!ConfigValidator::validate(&config).is_valid());
    }

    #[test]
    fn test_validate_zero_max_tokens() {
        let mut config = Config::default();
        config.prompt.max_output_tokens = 0;

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "prompt.max_output_tokens"));
    }

    #[test]
    fn test_validate_invalid_relay_url() {
        let mut config = Config::default();
        config.client.relay_url = "not a url".to_string();

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "client.relay_url"));

        config.client.relay_url = "ftp://example.com/".to_string();
        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "client.relay_url"));
    }

    #[test]
    fn test_validate_invalid_base_url() {
        let mut config = Config::default();
        config.relay.base_url = "generativelanguage.googleapis.com".to_string();

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "relay.base_url"));
    }

    #[test]
    fn test_validate_blank_system_prompt() {
        let mut config = Config::default();
        config.prompt.system_prompt = Some("   ".to_string());

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "prompt.system_prompt"));
    }

    #[test]
    fn test_validate_override_without_count_warns() {
        let mut config = Config::default();
        config.prompt.system_prompt = Some("Return a JSON array.".to_string());

        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "prompt.expected_count"));
    }

    #[test]
    fn test_into_result_reports_first_error() {
        let mut config = Config::default();
        config.server.port = 0;

        let err = ConfigValidator::validate(&config).into_result().unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_into_result_passes_warnings() {
        let warnings = ConfigValidator::validate(&Config::default())
            .into_result()
            .unwrap();
        assert!(!warnings.is_empty());
    }

    #[test]
    fn test_validate_blank_log_dir() {
        let mut config = Config::default();
        config.logging.dir = "  ".to_string();

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "logging.dir"));
    }
