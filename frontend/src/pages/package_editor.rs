//! Admin page for posting packages (the plans property sellers buy).
//!
//! Uses the editor in its simple, eager mode: no upload ledger, images stay
//! inline as data URIs in the description, encoded at a slightly higher
//! quality because package descriptions carry at most a banner or two.

use gloo_net::http::Request;
use num_format::{Locale, ToFormattedString};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::package::ListingPackage;
use common::model::response::ApiResponse;

use crate::components::editor::RichTextEditor;
use crate::notify::show_toast;

pub enum Msg {
    NameChanged(String),
    PriceChanged(String),
    DescriptionChanged(String),
    Save,
    SaveSucceeded,
    SaveFailed(String),
}

pub struct PackageEditorPage {
    package_id: String,
    name: String,
    price_input: String,
    description: String,
    submitting: bool,
}

impl Component for PackageEditorPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            package_id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            price_input: String::new(),
            description: String::new(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::NameChanged(name) => {
                self.name = name;
                true
            }
            Msg::PriceChanged(price) => {
                self.price_input = price;
                true
            }
            Msg::DescriptionChanged(html) => {
                self.description = html;
                false
            }
            Msg::Save => {
                if self.submitting {
                    return false;
                }
                if self.name.trim().is_empty() {
                    show_toast("El nombre del paquete no puede estar vacío.");
                    return false;
                }
                let Some(price) = self.parsed_price() else {
                    show_toast("El precio no es válido.");
                    return false;
                };
                self.submitting = true;

                let package = ListingPackage {
                    id: self.package_id.clone(),
                    name: self.name.trim().to_string(),
                    price,
                    description: self.description.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match save_package(package).await {
                        Ok(()) => {
                            link.send_message(Msg::SaveSucceeded);
                            show_toast("Paquete guardado correctamente.");
                        }
                        Err(reason) => link.send_message(Msg::SaveFailed(reason)),
                    }
                });
                true
            }
            Msg::SaveSucceeded => {
                self.submitting = false;
                true
            }
            Msg::SaveFailed(reason) => {
                self.submitting = false;
                show_toast(&format!("Error al guardar el paquete: {}", reason));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let price_preview = self
            .parsed_price()
            .map(|price| format!("{} € al mes", price.to_formatted_string(&Locale::es)));

        html! {
            <section class="editor-page">
                <h2>{"Paquetes de publicación"}</h2>
                <label class="field-label" for="package-name">{"Nombre"}</label>
                <input
                    id="package-name"
                    class="field-input"
                    value={self.name.clone()}
                    disabled={self.submitting}
                    oninput={link.callback(|e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        Msg::NameChanged(input.value())
                    })}
                />
                <label class="field-label" for="package-price">{"Precio mensual (€)"}</label>
                <input
                    id="package-price"
                    class="field-input"
                    inputmode="numeric"
                    value={self.price_input.clone()}
                    disabled={self.submitting}
                    oninput={link.callback(|e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        Msg::PriceChanged(input.value())
                    })}
                />
                {
                    match (self.price_input.is_empty(), price_preview) {
                        (true, _) => html! {},
                        (false, Some(preview)) => html! {
                            <p class="price-preview">{ preview }</p>
                        },
                        (false, None) => html! {
                            <p class="price-preview invalid">{"Precio no válido"}</p>
                        },
                    }
                }
                <RichTextEditor
                    placeholder={"Describe el paquete…".to_string()}
                    image_quality={0.8}
                    on_content_change={link.callback(Msg::DescriptionChanged)}
                    is_submitting={self.submitting}
                />
                <div class="editor-page-footer">
                    <button
                        class="primary-btn"
                        disabled={self.submitting}
                        onclick={link.callback(|_| Msg::Save)}
                    >
                        { if self.submitting { "Guardando…" } else { "Guardar" } }
                    </button>
                </div>
            </section>
        }
    }
}

impl PackageEditorPage {
    /// Accepts both "1234" and the grouped "1.234" the preview renders.
    fn parsed_price(&self) -> Option<u64> {
        let cleaned = self.price_input.trim().replace('.', "");
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse::<u64>().ok()
    }
}

async fn save_package(package: ListingPackage) -> Result<(), String> {
    let request = Request::post("/api/packages")
        .json(&package)
        .map_err(|err| err.to_string())?;
    let response = request.send().await.map_err(|err| err.to_string())?;
    if response.status() != 200 {
        return Err(format!("estado HTTP {}", response.status()));
    }
    let envelope: ApiResponse<serde_json::Value> =
        response.json().await.map_err(|err| err.to_string())?;
    if !envelope.success {
        return Err(envelope
            .message
            .unwrap_or_else(|| "error del servidor".to_string()));
    }
    Ok(())
}
