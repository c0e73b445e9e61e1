//! Formatting commands dispatched to the browser's native rich-text
//! command set.
//!
//! Each toolbar action maps to a `document.execCommand` invocation on the
//! current selection. The mapping itself is a pure function so it can be
//! unit-tested off the DOM; only [`execute`] touches the document. Behavior
//! of the native command set differs between browsers; portability here is
//! an accepted non-goal.

use super::helpers;

/// A formatting operation applied to the active selection.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    /// Wraps the current block in `<h1>`..`<h6>`.
    Heading(u8),
    /// Resets the current block to a plain paragraph.
    Paragraph,
    FontName(String),
    /// Legacy 1..=7 font size scale.
    FontSize(String),
    ForeColor(String),
    BackColor(String),
    OrderedList,
    UnorderedList,
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    JustifyFull,
    RemoveFormat,
    HorizontalRule,
    Undo,
    Redo,
    InsertHtml(String),
    CreateLink(String),
}

impl EditorCommand {
    /// Native command identifier.
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::Bold => "bold",
            EditorCommand::Italic => "italic",
            EditorCommand::Underline => "underline",
            EditorCommand::Strikethrough => "strikeThrough",
            EditorCommand::Heading(_) | EditorCommand::Paragraph => "formatBlock",
            EditorCommand::FontName(_) => "fontName",
            EditorCommand::FontSize(_) => "fontSize",
            EditorCommand::ForeColor(_) => "foreColor",
            EditorCommand::BackColor(_) => "hiliteColor",
            EditorCommand::OrderedList => "insertOrderedList",
            EditorCommand::UnorderedList => "insertUnorderedList",
            EditorCommand::JustifyLeft => "justifyLeft",
            EditorCommand::JustifyCenter => "justifyCenter",
            EditorCommand::JustifyRight => "justifyRight",
            EditorCommand::JustifyFull => "justifyFull",
            EditorCommand::RemoveFormat => "removeFormat",
            EditorCommand::HorizontalRule => "insertHorizontalRule",
            EditorCommand::Undo => "undo",
            EditorCommand::Redo => "redo",
            EditorCommand::InsertHtml(_) => "insertHTML",
            EditorCommand::CreateLink(_) => "createLink",
        }
    }

    /// Value argument for commands that take one.
    pub fn value(&self) -> Option<String> {
        match self {
            EditorCommand::Heading(level) => Some(format!("<h{}>", level)),
            EditorCommand::Paragraph => Some("<p>".to_string()),
            EditorCommand::FontName(font) => Some(font.clone()),
            EditorCommand::FontSize(size) => Some(size.clone()),
            EditorCommand::ForeColor(color) | EditorCommand::BackColor(color) => {
                Some(color.clone())
            }
            EditorCommand::InsertHtml(html) => Some(html.clone()),
            EditorCommand::CreateLink(url) => Some(url.clone()),
            _ => None,
        }
    }
}

/// Applies `command` to the current selection.
///
/// No validation is performed; unknown or unsupported commands are silent
/// no-ops in the browsers this runs in, which is exactly the contract the
/// native command set offers.
pub fn execute(command: &EditorCommand) {
    let Some(document) = helpers::html_document() else {
        return;
    };
    let outcome = match command.value() {
        Some(value) => document.exec_command_with_show_ui_and_value(command.name(), false, &value),
        None => document.exec_command(command.name()),
    };
    if let Err(err) = outcome {
        gloo_console::debug!("execCommand rechazado:", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_commands_have_no_value() {
        for command in [
            EditorCommand::Bold,
            EditorCommand::OrderedList,
            EditorCommand::RemoveFormat,
            EditorCommand::HorizontalRule,
            EditorCommand::Undo,
        ] {
            assert!(command.value().is_none(), "{}", command.name());
        }
    }

    #[test]
    fn heading_maps_to_format_block() {
        let command = EditorCommand::Heading(2);
        assert_eq!(command.name(), "formatBlock");
        assert_eq!(command.value().as_deref(), Some("<h2>"));
    }

    #[test]
    fn paragraph_resets_block() {
        let command = EditorCommand::Paragraph;
        assert_eq!(command.name(), "formatBlock");
        assert_eq!(command.value().as_deref(), Some("<p>"));
    }

    #[test]
    fn valued_commands_carry_their_argument() {
        assert_eq!(
            EditorCommand::FontName("Georgia".to_string()).value().as_deref(),
            Some("Georgia")
        );
        assert_eq!(
            EditorCommand::CreateLink("https://example.com".to_string())
                .value()
                .as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            EditorCommand::BackColor("#ffff00".to_string()).name(),
            "hiliteColor"
        );
    }
}
