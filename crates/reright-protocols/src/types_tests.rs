    use super::*;

    fn payload(text: &str) -> PromptPayload {
        PromptPayload {
            system_prompt: "Be bold.".to_string(),
            user_text: text.to_string(),
            temperature: 0.8,
            max_output_tokens: 500,
        }
    }

    #[test]
    fn test_inline_prompt_template() {
        let p = payload("I want to become a better writer");
        assert_eq!(
            p.inline_prompt(),
            "Be bold.\n\nTransform this phrase: \"I want to become a better writer\""
        );
    }

    #[test]
    fn test_inline_prompt_keeps_inner_quotes() {
        let p = payload("say \"hi\"");
        assert!(p.inline_prompt().ends_with("\"say \"hi\"\""));
    }

    #[test]
    fn test_raw_completion_conversions() {
        let raw = RawCompletion::from("[\"a\"]");
        assert_eq!(raw.as_str(), "[\"a\"]");
        assert_eq!(RawCompletion::new(String::from("x")).into_inner(), "x");
    }

    #[test]
    fn test_suggestion_list_accepts_non_empty() {
        let list = SuggestionList::try_from_vec(vec!["one".into(), "two".into()]).unwrap();
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.as_slice()[1], "two");
        let collected: Vec<&String> = list.iter().collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn test_suggestion_list_rejects_empty() {
        let result = SuggestionList::try_from_vec(vec![]);
        assert_eq!(result, Err(ParseError::EmptyList));
    }

    #[test]
    fn test_suggestion_list_rejects_blank_entry() {
        let result = SuggestionList::try_from_vec(vec!["ok".into(), "   ".into()]);
        match result {
            Err(ParseError::MalformedJson(msg)) => assert!(msg.contains("index 1")),
            other => panic!("expected MalformedJson, got {:?}", other),
        }
    }

    #[test]
    fn test_suggestion_list_serializes_as_array() {
        let list = SuggestionList::try_from_vec(vec!["a".into(), "b".into()]).unwrap();
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_suggestion_request_serde() {
        let req = SuggestionRequest {
            text: "hello world".to_string(),
            word_limit: 10,
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: SuggestionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn test_prompt_variant_names() {
        let v: PromptVariant = serde_json::from_str("\"stoic\"").unwrap();
        assert_eq!(v, PromptVariant::Stoic);
        assert_eq!(PromptVariant::default(), PromptVariant::Adaptive);
        assert_eq!(serde_json::to_string(&PromptVariant::Coach).unwrap(), "\"coach\"");
    }
