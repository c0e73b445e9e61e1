//! Defines the properties for the `RichTextEditor` component.
//!
//! These are the whole public surface of the editor: host pages configure
//! the image pipeline (width cap, encoder quality, optional byte ceiling)
//! and receive the serialized document through callbacks. The editor owns
//! no persistent state; whatever the host does with the emitted HTML is
//! its own business.

use yew::prelude::*;

use super::ledger::PendingImage;

fn default_height() -> String {
    "300px".to_string()
}

/// Properties for the `RichTextEditor` component.
#[derive(Properties, PartialEq, Clone)]
pub struct RichTextEditorProps {
    /// HTML the editable surface is seeded with on the first render.
    ///
    /// The seed is applied exactly once. Passing a different value after the
    /// component has mounted does not clobber what the user typed; hosts
    /// that load content asynchronously must wait before mounting the
    /// editor.
    #[prop_or_default]
    pub initial_content: String,

    /// Hint text shown while the surface is empty.
    #[prop_or_default]
    pub placeholder: String,

    /// Minimum height of the editable surface, as a CSS length.
    #[prop_or_else(default_height)]
    pub height: String,

    /// Pixel width cap for ingested images. Wider bitmaps are scaled down
    /// preserving aspect ratio; narrower ones are never upscaled.
    #[prop_or(800)]
    pub max_image_width: u32,

    /// Quality handed to the lossy encoder, nominally 0..=1. The value is
    /// passed through unmodified; out-of-range input is the encoder's
    /// problem, not the pipeline's.
    #[prop_or(0.7)]
    pub image_quality: f64,

    /// Optional byte ceiling imposed by the host page. Files above it are
    /// rejected with a notice before the pipeline starts.
    #[prop_or_default]
    pub max_file_size: Option<f64>,

    /// Fired with the full serialized document on every user mutation and
    /// once per successful image insertion.
    pub on_content_change: Callback<String>,

    /// Enables the deferred-upload ledger. When set, every ingested image
    /// is reported here with its generated id and preview data URI so the
    /// host form can upload the files at submit time.
    #[prop_or_default]
    pub on_image_acquired: Option<Callback<PendingImage>>,

    /// Informational: the host form is currently submitting. The surface is
    /// dimmed and made read-only while this is true.
    #[prop_or(false)]
    pub is_submitting: bool,
}
