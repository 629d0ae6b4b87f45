//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// `url` is optional at the wire level so that a missing field is reported
/// with the same message as an empty one.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// A newly created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub short_url: String,
    pub code: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_missing_url() {
        let req: CreateLinkRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.url.is_none());

        let req: CreateLinkRequest = serde_json::from_value(json!({ "url": null })).unwrap();
        assert!(req.url.is_none());
    }

    #[test]
    fn test_request_rejects_non_string_url() {
        assert!(serde_json::from_value::<CreateLinkRequest>(json!({ "url": 42 })).is_err());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let body = serde_json::to_value(CreateLinkResponse {
            short_url: "http://sho.rt/aB3dE".to_string(),
            code: "aB3dE".to_string(),
            original_url: "http://example.com".to_string(),
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "shortUrl": "http://sho.rt/aB3dE",
                "code": "aB3dE",
                "originalUrl": "http://example.com"
            })
        );
    }
}
