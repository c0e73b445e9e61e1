//! Rich-text editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and the image
//! ingestion pipeline.
//!
//! Responsibilities
//! - Re-export the component's public surface (`RichTextEditor`,
//!   `RichTextEditorProps`, `PendingImage`, plus the markup helpers host
//!   forms need at submit time).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Seed the editable surface with `initial_content` exactly once, on the
//!   first render; re-renders and later prop values never touch the
//!   surface's markup again.

use web_sys::HtmlElement;
use yew::prelude::*;

mod commands;
pub mod content;
mod helpers;
mod ledger;
mod messages;
mod pipeline;
mod props;
mod state;
mod styles;
mod update;
mod view;

pub use ledger::PendingImage;
pub use messages::Msg;
pub use props::RichTextEditorProps;
pub use state::RichTextEditor;

impl Component for RichTextEditor {
    type Message = Msg;
    type Properties = RichTextEditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RichTextEditor::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.seeded {
            self.seeded = true;
            if let Some(surface) = self.surface_ref.cast::<HtmlElement>() {
                surface.set_inner_html(&ctx.props().initial_content);
            }
        }
    }
}
