use serde::{Deserialize, Serialize};

/// JSON envelope returned by every backend endpoint.
///
/// `data` is present on success, `message` carries a human-readable reason
/// on failure. Both are optional on the wire, so error responses without a
/// body and success responses without a message deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Consumes the envelope and yields the payload, or the server message
    /// (falling back to a generic reason) when the call did not succeed.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("respuesta sin datos".to_string()),
            (false, _) => Err(self
                .message
                .unwrap_or_else(|| "error del servidor".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_payload() {
        let raw = r#"{"success":true,"data":{"url":"/uploads/a.jpg"}}"#;
        let resp: ApiResponse<crate::model::upload::UploadedImage> =
            serde_json::from_str(raw).unwrap();
        assert_eq!(resp.into_result().unwrap().url, "/uploads/a.jpg");
    }

    #[test]
    fn failure_envelope_yields_server_message() {
        let raw = r#"{"success":false,"message":"archivo demasiado grande"}"#;
        let resp: ApiResponse<crate::model::upload::UploadedImage> =
            serde_json::from_str(raw).unwrap();
        assert_eq!(resp.into_result().unwrap_err(), "archivo demasiado grande");
    }

    #[test]
    fn missing_optionals_deserialize() {
        let raw = r#"{"success":false}"#;
        let resp: ApiResponse<String> = serde_json::from_str(raw).unwrap();
        assert!(resp.data.is_none());
        assert!(resp.message.is_none());
    }
}
