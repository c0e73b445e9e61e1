use serde::{Deserialize, Serialize};

/// A news article managed from the admin back-office.
///
/// `content` is the serialized HTML produced by the rich-text editor; by the
/// time an article is saved, every embedded image has been uploaded and its
/// `src` rewritten to the returned URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub content: String,
}
