//! Presentation constants for the editor chrome. Structural styling lives
//! in the host page stylesheet; only the bits that depend on props are
//! computed here.

/// Font families offered in the toolbar.
pub const FONT_FAMILIES: [&str; 5] = ["Arial", "Georgia", "Tahoma", "Times New Roman", "Verdana"];

/// Legacy execCommand font sizes: (value, label).
pub const FONT_SIZES: [(&str, &str); 4] = [
    ("2", "Pequeña"),
    ("3", "Normal"),
    ("5", "Grande"),
    ("7", "Enorme"),
];

pub fn surface_style(height: &str, submitting: bool) -> String {
    let dimmed = if submitting {
        "opacity:0.5;pointer-events:none;"
    } else {
        ""
    };
    format!("min-height:{};{}", height, dimmed)
}
