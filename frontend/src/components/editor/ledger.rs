//! Deferred-upload ledger: images inserted into the document that have not
//! been persisted yet.
//!
//! Entries live only as long as the editor instance; nothing survives a
//! reload or navigation away without submit. The `data-image-id` attribute
//! stamped on each inserted `<img>` joins the markup to its entry here.

use web_sys::File;

/// One not-yet-uploaded image: the generated id, the original file, and the
/// recompressed data URI currently shown inline.
#[derive(Clone, Debug)]
pub struct PendingImage {
    pub id: String,
    pub file: File,
    pub preview_url: String,
}

/// Ordered list of pending images, in insertion order.
#[derive(Default)]
pub struct UploadLedger {
    entries: Vec<PendingImage>,
}

impl UploadLedger {
    pub fn record(&mut self, entry: PendingImage) {
        self.entries.push(entry);
    }

    /// Drops entries whose image tag no longer occurs in `html`, so images
    /// the user edited out of the document are never uploaded. Returns
    /// whether anything was removed.
    pub fn retain_embedded(&mut self, html: &str) -> bool {
        let live = super::content::embedded_image_ids(html);
        let before = self.entries.len();
        self.entries
            .retain(|entry| live.iter().any(|id| id == &entry.id));
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
