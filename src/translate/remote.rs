// SPDX-License-Identifier: PMPL-1.0-or-later

//! MyMemory-compatible translation endpoint client

use super::languages::AUTO;
use super::{BackendError, TranslationBackend};
use log::debug;
use serde::Deserialize;
use std::time::Duration;

pub const PROXY_ENDPOINT: &str = "http://localhost:5173/api/translate";
pub const MYMEMORY_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
    #[serde(rename = "responseStatus", default)]
    response_status: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// `langpair` query value: `source|target`, with auto-detection spelled the
/// way MyMemory expects it.
pub fn language_pair(source: &str, target: &str) -> String {
    if source == AUTO {
        format!("autodetect|{}", target)
    } else {
        format!("{}|{}", source, target)
    }
}

/// Extract the translated text from a response body.
///
/// `Ok(None)` means the service answered but had no translation. A non-200
/// `responseStatus` is a rejection; MyMemory puts its error message in
/// `translatedText` in that case.
pub fn parse_response(body: &str) -> Result<Option<String>, BackendError> {
    let parsed: MyMemoryResponse = serde_json::from_str(body)
        .map_err(|e| BackendError::Rejected(format!("unreadable response: {}", e)))?;

    let text = parsed
        .response_data
        .and_then(|data| data.translated_text)
        .filter(|text| !text.trim().is_empty());

    let status_ok = match &parsed.response_status {
        None => true,
        Some(serde_json::Value::Number(n)) => n.as_u64() == Some(200),
        Some(serde_json::Value::String(s)) => s.trim() == "200",
        Some(_) => false,
    };
    if !status_ok {
        return Err(BackendError::Rejected(
            text.unwrap_or_else(|| "service reported an error".to_string()),
        ));
    }

    Ok(text)
}

pub struct MyMemoryBackend {
    name: String,
    endpoint: String,
    agent: ureq::Agent,
}

impl MyMemoryBackend {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            agent,
        }
    }
}

impl TranslationBackend for MyMemoryBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn translate(&self, text: &str, source: &str, target: &str) -> Result<Option<String>, BackendError> {
        let pair = language_pair(source, target);
        debug!("{}: GET {} langpair={}", self.name, self.endpoint, pair);

        let response = self
            .agent
            .get(&self.endpoint)
            .query("q", text)
            .query("langpair", &pair)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(code) => {
                    BackendError::Rejected(format!("HTTP status {}", code))
                }
                other => BackendError::Unreachable(other.to_string()),
            })?;

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| BackendError::Unreachable(format!("reading response: {}", e)))?;
        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_uses_autodetect_for_auto_source() {
        assert_eq!(language_pair("en", "es"), "en|es");
        assert_eq!(language_pair(AUTO, "de"), "autodetect|de");
    }

    #[test]
    fn successful_response_yields_text() {
        let body = r#"{"responseData":{"translatedText":"hola","match":1},"responseStatus":200}"#;
        assert_eq!(parse_response(body).unwrap(), Some("hola".to_string()));
    }

    #[test]
    fn missing_or_blank_text_is_none() {
        assert_eq!(parse_response(r#"{"responseData":{}}"#).unwrap(), None);
        assert_eq!(
            parse_response(r#"{"responseData":{"translatedText":"  "},"responseStatus":"200"}"#)
                .unwrap(),
            None
        );
    }

    #[test]
    fn error_status_is_rejected_with_service_message() {
        let body = r#"{"responseData":{"translatedText":"INVALID LANGUAGE PAIR"},"responseStatus":"403"}"#;
        match parse_response(body) {
            Err(BackendError::Rejected(message)) => assert_eq!(message, "INVALID LANGUAGE PAIR"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn garbage_body_is_rejected() {
        assert!(matches!(
            parse_response("<html>"),
            Err(BackendError::Rejected(_))
        ));
    }
}
