//! Admin page for writing and publishing news articles.
//!
//! Hosts the rich-text editor in its deferred-upload mode: images are shown
//! inline immediately as data URIs, but the actual upload happens here, at
//! submit time. For every image still embedded in the document the page
//! posts the original file to the upload endpoint, rewrites that image's
//! `src` to the returned URL, and only then saves the article. Pending
//! images live in memory only; navigating away before saving discards
//! them.
//!
//! Unsaved changes are tracked with an MD5 digest of the document and
//! mirrored into the global `app_dirty` flag the app shell's beforeunload
//! guard reads.

use base64::{engine::general_purpose, Engine as _};
use gloo_file::{futures::read_as_bytes, Blob};
use gloo_net::http::Request;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::article::NewsArticle;
use common::model::response::ApiResponse;
use common::model::upload::UploadedImage;
use common::requests::UploadImageRequest;

use crate::components::editor::{content, PendingImage, RichTextEditor};
use crate::notify::show_toast;

/// Byte ceiling for images embedded in articles.
const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

#[derive(Properties, PartialEq, Clone)]
pub struct NewsEditorProps {
    /// Article to load on first render; a fresh article is created when
    /// absent or when loading fails.
    #[prop_or_default]
    pub article_id: Option<String>,
}

pub enum Msg {
    ArticleLoaded(NewsArticle),
    StartFresh,
    TitleChanged(String),
    ContentChanged(String),
    ImageAcquired(PendingImage),
    Save,
    SaveSucceeded {
        saved_md5: String,
        uploaded: Vec<String>,
    },
    SaveFailed(String),
}

pub struct NewsEditorPage {
    article_id: String,
    title: String,
    content: String,
    /// Images reported by the editor that have not been uploaded yet.
    pending: Vec<PendingImage>,
    submitting: bool,
    loaded: bool,
    /// Digest of the document at the last successful save.
    saved_md5: Option<String>,
}

impl Component for NewsEditorPage {
    type Message = Msg;
    type Properties = NewsEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let fresh = ctx.props().article_id.is_none();
        Self {
            // A brand-new article gets its id up front so saving just works.
            article_id: if fresh {
                uuid::Uuid::new_v4().to_string()
            } else {
                String::new()
            },
            title: String::new(),
            content: String::new(),
            pending: Vec::new(),
            submitting: false,
            loaded: fresh,
            saved_md5: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ArticleLoaded(article) => {
                self.article_id = article.id;
                self.title = article.title;
                self.saved_md5 = Some(compute_md5(&article.content));
                self.content = article.content;
                self.loaded = true;
                self.sync_dirty_flag();
                true
            }
            Msg::StartFresh => {
                self.article_id = uuid::Uuid::new_v4().to_string();
                self.loaded = true;
                true
            }
            Msg::TitleChanged(title) => {
                self.title = title;
                true
            }
            Msg::ContentChanged(html) => {
                // Keep the local copy of pending uploads honest when the
                // user edits an image out of the document.
                self.pending
                    .retain(|entry| content::contains_image_id(&html, &entry.id));
                self.content = html;
                self.sync_dirty_flag();
                true
            }
            Msg::ImageAcquired(entry) => {
                self.pending.push(entry);
                true
            }
            Msg::Save => {
                if self.submitting {
                    return false;
                }
                if self.title.trim().is_empty() {
                    show_toast("El título no puede estar vacío.");
                    return false;
                }
                self.submitting = true;

                let article = NewsArticle {
                    id: self.article_id.clone(),
                    title: self.title.clone(),
                    content: self.content.clone(),
                };
                let pending: Vec<PendingImage> = self
                    .pending
                    .iter()
                    .filter(|entry| content::contains_image_id(&article.content, &entry.id))
                    .cloned()
                    .collect();

                let link = ctx.link().clone();
                spawn_local(async move {
                    match upload_and_save(article, pending).await {
                        Ok((saved_md5, uploaded)) => {
                            link.send_message(Msg::SaveSucceeded {
                                saved_md5,
                                uploaded,
                            });
                            show_toast("Artículo guardado correctamente.");
                        }
                        Err(reason) => {
                            link.send_message(Msg::SaveFailed(reason));
                        }
                    }
                });
                true
            }
            Msg::SaveSucceeded {
                saved_md5,
                uploaded,
            } => {
                self.submitting = false;
                self.saved_md5 = Some(saved_md5);
                self.pending.retain(|entry| !uploaded.contains(&entry.id));
                self.sync_dirty_flag();
                true
            }
            Msg::SaveFailed(reason) => {
                self.submitting = false;
                show_toast(&format!("Error al guardar el artículo: {}", reason));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if !self.loaded {
            return html! { <p class="page-loading">{"Cargando artículo…"}</p> };
        }

        let dirty = self
            .saved_md5
            .as_ref()
            .map_or(!self.content.is_empty(), |orig| {
                orig != &compute_md5(&self.content)
            });

        let on_image_acquired: Callback<PendingImage> = link.callback(Msg::ImageAcquired);

        html! {
            <section class="editor-page">
                <h2>
                    {"Redacción de noticias"}
                    if dirty {
                        <span class="dirty-dot" title="Cambios sin guardar"></span>
                    }
                </h2>
                <label class="field-label" for="news-title">{"Título"}</label>
                <input
                    id="news-title"
                    class="field-input"
                    value={self.title.clone()}
                    disabled={self.submitting}
                    oninput={link.callback(|e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        Msg::TitleChanged(input.value())
                    })}
                />
                <RichTextEditor
                    initial_content={self.content.clone()}
                    placeholder={"Escribe el contenido de la noticia…".to_string()}
                    height={"420px".to_string()}
                    max_file_size={Some(MAX_IMAGE_BYTES)}
                    on_content_change={link.callback(Msg::ContentChanged)}
                    on_image_acquired={Some(on_image_acquired)}
                    is_submitting={self.submitting}
                />
                <div class="editor-page-footer">
                    <span class="pending-count">
                        {
                            match self.pending.len() {
                                0 => "Sin imágenes pendientes".to_string(),
                                1 => "1 imagen pendiente de subir".to_string(),
                                n => format!("{} imágenes pendientes de subir", n),
                            }
                        }
                    </span>
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

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            if let Some(article_id) = ctx.props().article_id.clone() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let response = Request::get(&format!("/api/news/{}", article_id))
                        .send()
                        .await;
                    match response {
                        Ok(resp) if resp.status() == 200 => {
                            match resp.json::<ApiResponse<NewsArticle>>().await {
                                Ok(envelope) => match envelope.into_result() {
                                    Ok(article) => {
                                        link.send_message(Msg::ArticleLoaded(article));
                                        show_toast("Artículo cargado correctamente.");
                                    }
                                    Err(reason) => start_fresh(link, &reason),
                                },
                                Err(err) => start_fresh(link, &err.to_string()),
                            }
                        }
                        _ => start_fresh(link, "el servidor no respondió"),
                    }
                });
            }
        }
    }
}

fn start_fresh(link: yew::html::Scope<NewsEditorPage>, reason: &str) {
    gloo_console::error!("no se pudo cargar el artículo:", reason.to_string());
    link.send_message(Msg::StartFresh);
    show_toast("Error cargando el artículo. Se creó uno nuevo.");
}

impl NewsEditorPage {
    /// Mirrors the dirty state into the global flag read by the app
    /// shell's beforeunload guard.
    fn sync_dirty_flag(&self) {
        let dirty = self
            .saved_md5
            .as_ref()
            .map_or(!self.content.is_empty(), |orig| {
                orig != &compute_md5(&self.content)
            });
        if let Some(window) = web_sys::window() {
            let _ = Reflect::set(
                &window,
                &JsValue::from_str("app_dirty"),
                &JsValue::from_bool(dirty),
            );
        }
    }
}

/// Uploads every still-embedded pending image, rewrites the corresponding
/// `src` attributes, and posts the article. Returns the digest of the
/// document snapshot that was saved plus the ids that were uploaded.
async fn upload_and_save(
    article: NewsArticle,
    pending: Vec<PendingImage>,
) -> Result<(String, Vec<String>), String> {
    let snapshot_md5 = compute_md5(&article.content);
    let mut html = article.content.clone();
    let mut uploaded = Vec::new();

    for entry in &pending {
        let url = upload_image(entry).await?;
        html = content::rewrite_image_source(&html, &entry.id, &url);
        uploaded.push(entry.id.clone());
    }

    let payload = NewsArticle {
        content: html,
        ..article
    };
    let request = Request::post("/api/news")
        .json(&payload)
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

    Ok((snapshot_md5, uploaded))
}

/// Posts one pending image to the upload endpoint and returns the public
/// URL it was stored under.
async fn upload_image(entry: &PendingImage) -> Result<String, String> {
    let bytes = read_as_bytes(&Blob::from(entry.file.clone()))
        .await
        .map_err(|err| err.to_string())?;
    let request = UploadImageRequest {
        file_name: entry.file.name(),
        content_type: entry.file.type_(),
        data: general_purpose::STANDARD.encode(&bytes),
    };
    let request = Request::post("/api/uploads")
        .json(&request)
        .map_err(|err| err.to_string())?;
    let response = request.send().await.map_err(|err| err.to_string())?;
    if response.status() != 200 {
        return Err(format!("estado HTTP {}", response.status()));
    }
    let envelope: ApiResponse<UploadedImage> =
        response.json().await.map_err(|err| err.to_string())?;
    envelope.into_result().map(|image| image.url)
}

fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}
