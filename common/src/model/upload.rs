use serde::{Deserialize, Serialize};

/// Result of a successful image upload: the public URL under which the
/// stored file is served.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedImage {
    pub url: String,
}
