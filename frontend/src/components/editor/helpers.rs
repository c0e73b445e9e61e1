//! DOM utilities for the editor component.
//!
//! Everything that touches the live document tree lives here, behind small
//! functions the update logic can call without caring about the browser
//! plumbing:
//!
//! - **Caret handling**: locating the selection inside the editable
//!   surface, splicing nodes at the caret (replacing a selected range),
//!   and advancing the caret past a freshly inserted node.
//! - **Placeholder lifecycle**: the non-editable spinner span that marks an
//!   in-flight ingestion, keyed by its `data-pending-id`.
//! - **File extraction**: pulling `File`s out of paste, drop, and
//!   file-input events.
//!
//! All operations are synchronous DOM calls; their only failure mode is an
//! unsupported browser, in which case they degrade to silent no-ops.

use wasm_bindgen::JsCast;
use web_sys::{
    ClipboardEvent, DragEvent, Element, File, HtmlDocument, HtmlElement, HtmlInputElement, Node,
    Range, Selection,
};

use super::pipeline;

pub fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into().ok()
}

fn selection() -> Option<Selection> {
    web_sys::window()?.get_selection().ok().flatten()
}

/// The current selection range, but only when it lives inside `surface`.
/// A selection parked elsewhere on the page must not receive our nodes.
fn caret_range_in(surface: &HtmlElement) -> Option<Range> {
    let selection = selection()?;
    if selection.range_count() == 0 {
        return None;
    }
    let anchor = selection.anchor_node()?;
    if !surface.contains(Some(&anchor)) {
        return None;
    }
    selection.get_range_at(0).ok()
}

/// Splices `node` into the surface at the caret, replacing any selected
/// content. When no usable caret exists the node is appended at the end of
/// the document instead.
pub fn insert_at_caret(surface: &HtmlElement, node: &Node) {
    match caret_range_in(surface) {
        Some(range) => {
            range.delete_contents().ok();
            if range.insert_node(node).is_err() {
                surface.append_child(node).ok();
            }
        }
        None => {
            surface.append_child(node).ok();
        }
    }
}

/// Collapses the selection to just after `node`, so typing continues past
/// a freshly inserted image.
pub fn set_caret_after(node: &Node) {
    let Some(selection) = selection() else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(range) = document.create_range() else {
        return;
    };
    if range.set_start_after(node).is_ok() {
        range.collapse_with_to_start(true);
        selection.remove_all_ranges().ok();
        selection.add_range(&range).ok();
    }
}

/// Builds the transient spinner span shown while an ingestion is in
/// flight. `contenteditable="false"` keeps the caret from entering it.
pub fn placeholder_node(id: &str) -> Option<Element> {
    let document = web_sys::window()?.document()?;
    let node = document.create_element("span").ok()?;
    node.set_class_name("editor-image-placeholder");
    node.set_attribute("data-pending-id", id).ok()?;
    node.set_attribute("contenteditable", "false").ok()?;
    node.set_inner_html(r#"<span class="editor-spinner"></span> Procesando imagen…"#);
    Some(node)
}

pub fn find_placeholder(surface: &HtmlElement, id: &str) -> Option<Element> {
    surface
        .query_selector(&format!(r#"[data-pending-id="{}"]"#, id))
        .ok()
        .flatten()
}

/// Builds the embedded image reference: recompressed data URI as `src`,
/// original file name as `alt`, generated id as the `data-image-id` stamp.
pub fn image_node(id: &str, src: &str, alt: &str) -> Option<Element> {
    let document = web_sys::window()?.document()?;
    let node = document.create_element("img").ok()?;
    node.set_attribute("src", src).ok()?;
    node.set_attribute("alt", alt).ok()?;
    node.set_attribute("data-image-id", id).ok()?;
    Some(node)
}

/// Image files carried by a paste event. Non-image items (plain text, HTML
/// fragments) are left alone so ordinary pasting keeps working.
pub fn clipboard_image_files(event: &ClipboardEvent) -> Vec<File> {
    let mut files = Vec::new();
    if let Some(data) = event.clipboard_data() {
        let items = data.items();
        for index in 0..items.length() {
            if let Some(item) = items.get(index) {
                if item.kind() == "file" && pipeline::is_image_mime(&item.type_()) {
                    if let Ok(Some(file)) = item.get_as_file() {
                        files.push(file);
                    }
                }
            }
        }
    }
    files
}

/// All files carried by a drop event; MIME filtering happens later in the
/// shared acquisition path.
pub fn drop_files(event: &DragEvent) -> Vec<File> {
    let mut files = Vec::new();
    if let Some(data) = event.data_transfer() {
        if let Some(list) = data.files() {
            for index in 0..list.length() {
                if let Some(file) = list.get(index) {
                    files.push(file);
                }
            }
        }
    }
    files
}

pub fn input_files(input: &HtmlInputElement) -> Vec<File> {
    let mut files = Vec::new();
    if let Some(list) = input.files() {
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                files.push(file);
            }
        }
    }
    files
}
