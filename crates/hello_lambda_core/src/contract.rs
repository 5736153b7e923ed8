use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub type Headers = BTreeMap<String, String>;

/// Response envelope for HTTP-proxy integrations.
///
/// `body` holds JSON text that the host forwards to the caller byte-for-byte,
/// so it is always an encoded value and never the value itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProxyResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Headers,
    pub body: String,
}

impl ProxyResponse {
    /// Builds an envelope whose body is the JSON encoding of `payload`.
    pub fn json<T>(
        status_code: u16,
        headers: Headers,
        payload: &T,
    ) -> Result<Self, EnvelopeError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_string(payload).map_err(|error| {
            EnvelopeError::new(format!("failed to encode response body: {error}"))
        })?;
        Ok(Self {
            status_code,
            headers,
            body,
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn decode_body<T: DeserializeOwned>(&self) -> Result<T, EnvelopeError> {
        serde_json::from_str(&self.body)
            .map_err(|error| EnvelopeError::new(format!("failed to decode response body: {error}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeError {
    message: String,
}

impl EnvelopeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EnvelopeError {}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(<S::Error as serde::ser::Error>::custom(
                "payload refused to encode",
            ))
        }
    }

    #[test]
    fn json_encodes_string_payload_as_literal() {
        let response =
            ProxyResponse::json(200, Headers::new(), "hi").expect("string should encode");
        assert_eq!(response.body, "\"hi\"");
    }

    #[test]
    fn json_encodes_object_payload_as_text() {
        let response = ProxyResponse::json(201, Headers::new(), &json!({"ok": true}))
            .expect("object should encode");
        assert_eq!(response.status_code, 201);
        assert_eq!(response.body, r#"{"ok":true}"#);
    }

    #[test]
    fn json_reports_encoding_failure() {
        let error = ProxyResponse::json(200, Headers::new(), &Unencodable)
            .expect_err("payload should fail to encode");
        assert!(error.message().starts_with("failed to encode response body"));
        assert!(error.to_string().contains("payload refused to encode"));
    }

    #[test]
    fn serializes_status_code_in_camel_case() {
        let response = ProxyResponse {
            status_code: 404,
            headers: Headers::from([("A".to_string(), "b".to_string())]),
            body: "null".to_string(),
        };

        let wire = serde_json::to_value(&response).expect("envelope should serialize");
        assert_eq!(
            wire,
            json!({"statusCode": 404, "headers": {"A": "b"}, "body": "null"})
        );
    }

    #[test]
    fn decode_body_rejects_non_json_text() {
        let response = ProxyResponse {
            status_code: 200,
            headers: Headers::new(),
            body: "Hello".to_string(),
        };

        let error = response.decode_body::<Value>().expect_err("raw text is not JSON");
        assert!(error.message().starts_with("failed to decode response body"));
    }

    #[test]
    fn header_lookup_is_exact() {
        let response = ProxyResponse {
            status_code: 200,
            headers: Headers::from([("X-Some-Header".to_string(), "Wow".to_string())]),
            body: "null".to_string(),
        };

        assert_eq!(response.header("X-Some-Header"), Some("Wow"));
        assert_eq!(response.header("Content-Type"), None);
    }
}
