//! Generic HTTP request helpers for the REST transport
//!
//! Sending, logging and status classification live here so each endpoint
//! method only builds its `RequestBuilder` and picks a decoder.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::types::ActionResult;
use crate::utils::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, body, headers)
    /// * `method_name` - request method, for logs
    /// * `path` - endpoint path, for logs
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> CoreResult<(u16, String)> {
        log::debug!("[rest] {method_name} {path}");

        let response = request_builder.send().await.map_err(CoreError::from)?;

        let status_code = response.status().as_u16();
        log::debug!("[rest] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("Failed to read response body: {e}")))?;

        log::debug!("[rest] Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str, path: &str) -> CoreResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[rest] {path}: JSON parse failed: {e}");
            log::error!("[rest] Raw response: {}", truncate_for_log(response_text));
            CoreError::Parse(e.to_string())
        })
    }

    /// Decode a data response; any non-2xx status is a transport error.
    pub fn parse_data<T>(status: u16, response_text: &str, path: &str) -> CoreResult<T>
    where
        T: DeserializeOwned,
    {
        if !(200..300).contains(&status) {
            return Err(CoreError::Http {
                status,
                body: truncate_for_log(response_text),
            });
        }
        Self::parse_json(response_text, path)
    }

    /// Decode a mutating call's answer.
    ///
    /// Backends report refusals as `{success: false, message}`, sometimes with
    /// a 4xx/5xx status. Such bodies are answers, not transport errors.
    pub fn parse_action(status: u16, response_text: &str, path: &str) -> CoreResult<ActionResult> {
        if (200..300).contains(&status) {
            return Self::parse_json(response_text, path);
        }

        match serde_json::from_str::<ActionResult>(response_text) {
            Ok(result) => {
                log::warn!("[rest] {path} answered HTTP {status}: {}", result.message);
                Ok(result)
            }
            Err(_) => Err(CoreError::Http {
                status,
                body: truncate_for_log(response_text),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_body_on_error_status_is_an_answer() {
        let result =
            HttpUtils::parse_action(404, r#"{"success":false,"message":"Account not found"}"#, "/x")
                .unwrap();
        assert!(!result.success);
        assert_eq!(result.message, "Account not found");
    }

    #[test]
    fn plain_error_page_is_a_transport_error() {
        let err = HttpUtils::parse_action(502, "Bad Gateway", "/x").unwrap_err();
        assert_eq!(
            err,
            CoreError::Http {
                status: 502,
                body: "Bad Gateway".into()
            }
        );
    }

    #[test]
    fn data_with_error_status_is_rejected() {
        let err = HttpUtils::parse_data::<Vec<String>>(500, "[]", "/api/regions").unwrap_err();
        assert!(err.is_transport());
    }
}
