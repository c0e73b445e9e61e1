//! Update function for the rich-text editor component.
//!
//! Elm-style single entry point: every mutation of the document — user
//! input, formatting commands, placeholder insertion, image splicing —
//! funnels through here as a `Msg`, so the paste, drop, toolbar, and
//! picker paths cannot race each other's DOM edits.
//!
//! Key behaviors
//! - Formatting commands delegate to the native command set and refocus
//!   the surface.
//! - Image acquisition validates files, then feeds a single-slot queue:
//!   one ingestion in flight at a time, completions pump the next one.
//! - Each in-flight ingestion is covered by a watchdog; on timeout the
//!   placeholder is removed and a late completion is discarded.
//! - Exactly one `on_content_change` fires per successful insertion, and
//!   one `on_image_acquired` when the host enabled the deferred ledger.

use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::notify::show_toast;

use super::commands::{self, EditorCommand};
use super::content;
use super::helpers;
use super::ledger::PendingImage;
use super::messages::{AcquireSource, Msg};
use super::pipeline::{self, IngestError};
use super::state::RichTextEditor;

/// An ingestion that has not produced a result after this long is failed
/// and its placeholder removed; the editor must never wait forever.
const INGEST_TIMEOUT_MILLIS: u32 = 30_000;

/// Central update function for the component.
///
/// Mutates `component` based on `msg`, may dispatch follow-up messages via
/// `ctx.link()`, and returns whether the view must re-render. Most arms
/// are pure side effects on the DOM and short-circuit with `false`; only
/// changes to the pending badge re-render.
pub fn update(component: &mut RichTextEditor, ctx: &Context<RichTextEditor>, msg: Msg) -> bool {
    match msg {
        Msg::Input => {
            let html = component.serialize();
            let pruned = component.ledger.retain_embedded(&html);
            ctx.props().on_content_change.emit(html);
            // Re-render only when the pending badge changed.
            pruned
        }
        Msg::Exec(command) => {
            commands::execute(&command);
            if let Some(surface) = component.surface() {
                surface.focus().ok();
            }
            false
        }
        Msg::InsertLink => {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(url)) = window.prompt_with_message("Dirección del enlace:") {
                    if !url.trim().is_empty() {
                        ctx.link()
                            .send_message(Msg::Exec(EditorCommand::CreateLink(url)));
                    }
                }
            }
            false
        }
        Msg::OpenFilePicker => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::Acquire { files, source } => {
            let mut accepted = 0usize;
            for file in files {
                match pipeline::check_acceptable(&file, ctx.props().max_file_size) {
                    Ok(()) => {
                        component.queue.push_back(file);
                        accepted += 1;
                    }
                    // A directly-picked file was an explicit user choice;
                    // stray non-image items in a paste or drop are expected
                    // and skipped quietly. Size violations always notify.
                    Err(error) => {
                        if source == AcquireSource::Picker || error == IngestError::TooLarge {
                            show_toast(error.notice());
                        }
                    }
                }
            }
            if accepted > 0 {
                ctx.link().send_message(Msg::PumpQueue);
            }
            false
        }
        Msg::PumpQueue => {
            if component.in_flight.is_some() {
                return false;
            }
            let Some(file) = component.queue.pop_front() else {
                return false;
            };
            let Some(surface) = component.surface() else {
                return false;
            };

            let id = Uuid::new_v4().to_string();
            if let Some(placeholder) = helpers::placeholder_node(&id) {
                helpers::insert_at_caret(&surface, &placeholder);
            }
            component.in_flight = Some(id.clone());

            let max_width = ctx.props().max_image_width;
            let quality = ctx.props().image_quality;
            {
                let id = id.clone();
                let file = file.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match pipeline::ingest(file.clone(), max_width, quality).await {
                        Ok(preview_url) => link.send_message(Msg::IngestFinished {
                            id,
                            file,
                            preview_url,
                        }),
                        Err(error) => link.send_message(Msg::IngestFailed { id, error }),
                    }
                });
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(INGEST_TIMEOUT_MILLIS).await;
                link.send_message(Msg::IngestTimedOut { id });
            });
            false
        }
        Msg::IngestFinished {
            id,
            file,
            preview_url,
        } => {
            // Stale completion after a timeout: the placeholder is gone.
            if component.in_flight.as_deref() != Some(id.as_str()) {
                return false;
            }
            component.in_flight = None;

            let Some(surface) = component.surface() else {
                return false;
            };
            let Some(image) = helpers::image_node(&id, &preview_url, &file.name()) else {
                return false;
            };
            match helpers::find_placeholder(&surface, &id) {
                Some(placeholder) => {
                    let swapped = placeholder
                        .parent_node()
                        .map(|parent| parent.replace_child(&image, &placeholder).is_ok())
                        .unwrap_or(false);
                    if !swapped {
                        helpers::insert_at_caret(&surface, &image);
                    }
                }
                // The user edited the placeholder out mid-flight; fall back
                // to the caret.
                None => helpers::insert_at_caret(&surface, &image),
            }
            helpers::set_caret_after(&image);

            debug_assert!(content::is_image_data_uri(&preview_url));
            ctx.props().on_content_change.emit(component.serialize());
            if let Some(on_image_acquired) = &ctx.props().on_image_acquired {
                let entry = PendingImage {
                    id,
                    file,
                    preview_url,
                };
                component.ledger.record(entry.clone());
                on_image_acquired.emit(entry);
            }

            ctx.link().send_message(Msg::PumpQueue);
            true
        }
        Msg::IngestFailed { id, error } => {
            fail_in_flight(component, ctx, &id, error);
            false
        }
        Msg::IngestTimedOut { id } => {
            // Usually the ingestion finished long ago and this is a no-op.
            fail_in_flight(component, ctx, &id, IngestError::Timeout);
            false
        }
    }
}

/// Shared failure path: removes the placeholder, notifies the user, and
/// pumps the queue. Messages for ids that are not in flight are stale and
/// ignored.
fn fail_in_flight(
    component: &mut RichTextEditor,
    ctx: &Context<RichTextEditor>,
    id: &str,
    error: IngestError,
) {
    if component.in_flight.as_deref() != Some(id) {
        return;
    }
    component.in_flight = None;

    if let Some(surface) = component.surface() {
        if let Some(placeholder) = helpers::find_placeholder(&surface, id) {
            placeholder.remove();
        }
    }
    gloo_console::error!("ingestión de imagen fallida:", error.to_string());
    show_toast(error.notice());
    ctx.link().send_message(Msg::PumpQueue);
}
