use serde::{Deserialize, Serialize};

/// Request payload for the image upload endpoint.
/// The file bytes travel base64-encoded in a JSON body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadImageRequest {
    pub file_name: String,
    pub content_type: String,
    /// Base64-encoded file contents.
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_request_wire_fields() {
        let req = UploadImageRequest {
            file_name: "plano.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            data: "aGVsbG8=".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""file_name":"plano.jpg""#));
        assert!(json.contains(r#""content_type":"image/jpeg""#));
        assert!(json.contains(r#""data":"aGVsbG8=""#));
    }
}
