//! Component state for the rich-text editor.
//!
//! The document itself lives in the DOM, inside the editable surface; this
//! struct only holds what cannot be derived from it: node refs, the
//! one-shot seed guard, the ingestion queue, and the deferred-upload
//! ledger.

use std::collections::VecDeque;

use web_sys::{File, HtmlElement};
use yew::prelude::*;

use super::ledger::UploadLedger;

/// State container for the `RichTextEditor` component.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct RichTextEditor {
    /// Reference to the `contenteditable` surface.
    pub surface_ref: NodeRef,

    /// Reference to the hidden file input behind the image toolbar button.
    pub file_input_ref: NodeRef,

    /// Guard for the one-shot initial seed. Once set, later
    /// `initial_content` prop values are ignored.
    pub seeded: bool,

    /// Files accepted for ingestion but not yet started. Invocations are
    /// serialized: one in-flight ingestion at a time, in arrival order.
    pub queue: VecDeque<File>,

    /// Id of the ingestion currently in flight, if any. A completion or
    /// timeout message carrying any other id is stale and gets dropped.
    pub in_flight: Option<String>,

    /// Images inserted but not yet uploaded (deferred variant only).
    pub ledger: UploadLedger,
}

impl RichTextEditor {
    pub fn new() -> Self {
        Self {
            surface_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            seeded: false,
            queue: VecDeque::new(),
            in_flight: None,
            ledger: UploadLedger::default(),
        }
    }

    pub fn surface(&self) -> Option<HtmlElement> {
        self.surface_ref.cast::<HtmlElement>()
    }

    /// Current serialized document.
    pub fn serialize(&self) -> String {
        self.surface()
            .map(|surface| surface.inner_html())
            .unwrap_or_default()
    }
}
