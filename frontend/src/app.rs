use js_sys::Reflect;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::BeforeUnloadEvent;
use yew::{classes, html, Component, Context, Html};

use crate::pages::news_editor::NewsEditorPage;
use crate::pages::package_editor::PackageEditorPage;

pub enum Msg {
    SetTab(String),
}

pub struct App {
    active_tab: String,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        register_unload_guard();
        Self {
            active_tab: "noticias".to_string(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.active_tab = tab;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="admin-shell">
                <header class="admin-header">
                    <h1>{"Back-office — Portal Inmobiliario"}</h1>
                </header>
                <div class="tab-bar">
                    <button
                        class={classes!("tab-btn", (self.active_tab == "noticias").then_some("active"))}
                        onclick={link.callback(|_| Msg::SetTab("noticias".to_string()))}
                    >
                        {"Noticias"}
                    </button>
                    <button
                        class={classes!("tab-btn", (self.active_tab == "paquetes").then_some("active"))}
                        onclick={link.callback(|_| Msg::SetTab("paquetes".to_string()))}
                    >
                        {"Paquetes"}
                    </button>
                </div>
                {
                    if self.active_tab == "noticias" {
                        html! { <NewsEditorPage /> }
                    } else {
                        html! { <PackageEditorPage /> }
                    }
                }
            </div>
        }
    }
}

/// Warns before leaving the page while the news editor has unsaved
/// changes. The editor pages mirror their dirty state into the global
/// `app_dirty` flag this guard reads.
fn register_unload_guard() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let guard = Closure::<dyn FnMut(BeforeUnloadEvent)>::new(|event: BeforeUnloadEvent| {
        let dirty = web_sys::window()
            .and_then(|w| Reflect::get(&w, &JsValue::from_str("app_dirty")).ok())
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        if dirty {
            event.prevent_default();
            event.set_return_value("Hay cambios sin guardar.");
        }
    });
    if window
        .add_event_listener_with_callback("beforeunload", guard.as_ref().unchecked_ref())
        .is_ok()
    {
        guard.forget();
    }
}
