//! Tolerant extraction of the reply text from a chat-completion response.
//!
//! Only `choices[0].message.content` is read. Anything else in the body is
//! ignored, and a body that does not have that shape yields `None` instead
//! of an error.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Return the first choice's message content, if the body has one.
pub fn extract_reply(body: &str) -> Option<String> {
    let completion: ChatCompletion = serde_json::from_str(body).ok()?;
    completion.choices.into_iter().next()?.message?.content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_first_choice() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "2024-03-04 - 完成登录"}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ],
            "usage": {"total_tokens": 42}
        }"#;
        assert_eq!(extract_reply(body).as_deref(), Some("2024-03-04 - 完成登录"));
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(extract_reply("{}"), None);
    }

    #[test]
    fn test_empty_choices() {
        assert_eq!(extract_reply(r#"{"choices": []}"#), None);
    }

    #[test]
    fn test_missing_message() {
        assert_eq!(extract_reply(r#"{"choices": [{"index": 0}]}"#), None);
    }

    #[test]
    fn test_null_content() {
        assert_eq!(
            extract_reply(r#"{"choices": [{"message": {"content": null}}]}"#),
            None
        );
    }

    #[test]
    fn test_non_string_content() {
        assert_eq!(
            extract_reply(r#"{"choices": [{"message": {"content": 7}}]}"#),
            None
        );
    }

    #[test]
    fn test_api_error_body() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(extract_reply(body), None);
    }

    #[test]
    fn test_not_json() {
        assert_eq!(extract_reply("<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_reply(""), None);
    }

    #[test]
    fn test_empty_content_is_some() {
        assert_eq!(
            extract_reply(r#"{"choices": [{"message": {"content": ""}}]}"#).as_deref(),
            Some("")
        );
    }
}
