//! View rendering for the rich-text editor component.
//!
//! Renders the formatting toolbar, the `contenteditable` surface, and the
//! hidden file input behind the image button. The surface is deliberately
//! rendered without children: its markup is seeded once in `rendered` and
//! owned by the browser afterwards, so the virtual DOM never fights the
//! user's edits.

use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent, HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::commands::EditorCommand;
use super::helpers;
use super::messages::{AcquireSource, Msg};
use super::state::RichTextEditor;
use super::styles;

/// Literal whitespace run inserted when Tab is pressed inside the surface.
const TAB_WHITESPACE: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

pub fn view(component: &RichTextEditor, ctx: &Context<RichTextEditor>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    html! {
        <div class="rich-editor">
            { build_toolbar(link) }
            <div
                class="editor-surface"
                ref={component.surface_ref.clone()}
                contenteditable={if props.is_submitting { "false" } else { "true" }}
                data-placeholder={props.placeholder.clone()}
                style={styles::surface_style(&props.height, props.is_submitting)}
                oninput={link.callback(|_: InputEvent| Msg::Input)}
                onkeydown={link.batch_callback(on_key_down)}
                onpaste={link.batch_callback(on_paste)}
                ondragover={link.batch_callback(|e: DragEvent| -> Vec<Msg> {
                    e.prevent_default();
                    Vec::new()
                })}
                ondrop={link.batch_callback(on_drop)}
            ></div>
            if !component.ledger.is_empty() {
                <div class="editor-pending-badge">
                    { format!("{} sin subir", component.ledger.len()) }
                </div>
            }
            <input
                type="file"
                accept="image/*"
                multiple=true
                ref={component.file_input_ref.clone()}
                style="display:none"
                onchange={link.batch_callback(on_files_chosen)}
            />
        </div>
    }
}

/// Tab inserts an indentation run instead of moving focus away.
fn on_key_down(event: KeyboardEvent) -> Vec<Msg> {
    if event.key() == "Tab" {
        event.prevent_default();
        vec![Msg::Exec(EditorCommand::InsertHtml(
            TAB_WHITESPACE.to_string(),
        ))]
    } else {
        Vec::new()
    }
}

/// A paste carrying images is claimed by the pipeline; anything else is
/// left to the browser's default handling.
fn on_paste(event: Event) -> Vec<Msg> {
    let event: ClipboardEvent = event.unchecked_into();
    let files = helpers::clipboard_image_files(&event);
    if files.is_empty() {
        Vec::new()
    } else {
        event.prevent_default();
        vec![Msg::Acquire {
            files,
            source: AcquireSource::Paste,
        }]
    }
}

fn on_drop(event: DragEvent) -> Vec<Msg> {
    event.prevent_default();
    let files = helpers::drop_files(&event);
    if files.is_empty() {
        Vec::new()
    } else {
        vec![Msg::Acquire {
            files,
            source: AcquireSource::Drop,
        }]
    }
}

fn on_files_chosen(event: Event) -> Vec<Msg> {
    let input: HtmlInputElement = event.target_unchecked_into();
    let files = helpers::input_files(&input);
    // Reset so picking the same file twice re-fires the change event.
    input.set_value("");
    if files.is_empty() {
        Vec::new()
    } else {
        vec![Msg::Acquire {
            files,
            source: AcquireSource::Picker,
        }]
    }
}

fn build_toolbar(link: &Scope<RichTextEditor>) -> Html {
    html! {
        <div class="editor-toolbar">
            { command_button(link, "undo", "Deshacer", EditorCommand::Undo) }
            { command_button(link, "redo", "Rehacer", EditorCommand::Redo) }
            <span class="toolbar-sep"></span>
            { block_format_select(link) }
            { font_family_select(link) }
            { font_size_select(link) }
            <span class="toolbar-sep"></span>
            { command_button(link, "format_bold", "Negrita", EditorCommand::Bold) }
            { command_button(link, "format_italic", "Cursiva", EditorCommand::Italic) }
            { command_button(link, "format_underlined", "Subrayado", EditorCommand::Underline) }
            { command_button(link, "strikethrough_s", "Tachado", EditorCommand::Strikethrough) }
            <span class="toolbar-sep"></span>
            { color_input(link, "Color de texto", EditorCommand::ForeColor) }
            { color_input(link, "Color de fondo", EditorCommand::BackColor) }
            <span class="toolbar-sep"></span>
            { command_button(link, "format_list_numbered", "Lista numerada", EditorCommand::OrderedList) }
            { command_button(link, "format_list_bulleted", "Lista", EditorCommand::UnorderedList) }
            { command_button(link, "format_align_left", "Alinear a la izquierda", EditorCommand::JustifyLeft) }
            { command_button(link, "format_align_center", "Centrar", EditorCommand::JustifyCenter) }
            { command_button(link, "format_align_right", "Alinear a la derecha", EditorCommand::JustifyRight) }
            { command_button(link, "format_align_justify", "Justificar", EditorCommand::JustifyFull) }
            <span class="toolbar-sep"></span>
            { icon_button("link", "Insertar enlace", link.callback(|_| Msg::InsertLink)) }
            { icon_button("image", "Insertar imagen", link.callback(|_| Msg::OpenFilePicker)) }
            { command_button(link, "horizontal_rule", "Línea horizontal", EditorCommand::HorizontalRule) }
            { command_button(link, "format_clear", "Quitar formato", EditorCommand::RemoveFormat) }
        </div>
    }
}

fn command_button(
    link: &Scope<RichTextEditor>,
    icon: &str,
    title: &str,
    command: EditorCommand,
) -> Html {
    icon_button(
        icon,
        title,
        link.callback(move |_| Msg::Exec(command.clone())),
    )
}

/// Renders a toolbar button with a Material icon.
///
/// `mousedown` is suppressed so clicking the button does not steal focus
/// from the surface: the native commands operate on the active selection,
/// which must survive the click.
fn icon_button(icon: &str, title: &str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button
            type="button"
            class="icon-btn"
            title={title.to_string()}
            onmousedown={Callback::from(|e: MouseEvent| e.prevent_default())}
            onclick={on_click}
        >
            <i class="material-icons">{ icon.to_string() }</i>
        </button>
    }
}

fn block_format_select(link: &Scope<RichTextEditor>) -> Html {
    html! {
        <select
            class="toolbar-select"
            title="Formato de bloque"
            onchange={link.callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                match value.parse::<u8>() {
                    Ok(level) => Msg::Exec(EditorCommand::Heading(level)),
                    Err(_) => Msg::Exec(EditorCommand::Paragraph),
                }
            })}
        >
            <option value="p" selected=true>{"Párrafo"}</option>
            <option value="1">{"Título 1"}</option>
            <option value="2">{"Título 2"}</option>
            <option value="3">{"Título 3"}</option>
        </select>
    }
}

fn font_family_select(link: &Scope<RichTextEditor>) -> Html {
    html! {
        <select
            class="toolbar-select"
            title="Tipografía"
            onchange={link.callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                Msg::Exec(EditorCommand::FontName(value))
            })}
        >
            { for styles::FONT_FAMILIES.iter().map(|font| html! {
                <option value={*font}>{ *font }</option>
            }) }
        </select>
    }
}

fn font_size_select(link: &Scope<RichTextEditor>) -> Html {
    html! {
        <select
            class="toolbar-select"
            title="Tamaño"
            onchange={link.callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                Msg::Exec(EditorCommand::FontSize(value))
            })}
        >
            { for styles::FONT_SIZES.iter().map(|(value, label)| html! {
                <option value={*value} selected={*value == "3"}>{ *label }</option>
            }) }
        </select>
    }
}

fn color_input(
    link: &Scope<RichTextEditor>,
    title: &str,
    build: fn(String) -> EditorCommand,
) -> Html {
    html! {
        <input
            type="color"
            class="toolbar-color"
            title={title.to_string()}
            onchange={link.callback(move |e: Event| {
                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                Msg::Exec(build(value))
            })}
        />
    }
}
