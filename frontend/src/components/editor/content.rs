//! String-level operations on the serialized document.
//!
//! The document is an opaque HTML fragment; the only structure this module
//! knows about is the `data-image-id` attribute stamped on images inserted
//! by the pipeline. Host forms use [`rewrite_image_source`] at submit time
//! to swap a pending image's data URI for the URL the upload endpoint
//! returned, which also retires the id stamp.

use regex::{NoExpand, Regex};

/// All `data-image-id` values embedded in `html`, in document order.
pub fn embedded_image_ids(html: &str) -> Vec<String> {
    let re = Regex::new(r#"\bdata-image-id="([^"]+)""#).unwrap();
    re.captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn contains_image_id(html: &str, id: &str) -> bool {
    html.contains(&format!(r#"data-image-id="{}""#, id))
}

/// True for the data URIs the pipeline produces.
pub fn is_image_data_uri(src: &str) -> bool {
    src.starts_with("data:image/")
}

/// Rewrites the `<img>` tag carrying `id`: its `src` becomes `url` and the
/// `data-image-id` stamp is removed, marking the reference as resolved.
/// Tags with other ids, and `html` without a match, pass through unchanged.
pub fn rewrite_image_source(html: &str, id: &str, url: &str) -> String {
    let tag_re = Regex::new(&format!(
        r#"<img\b[^>]*\bdata-image-id="{}"[^>]*>"#,
        regex::escape(id)
    ))
    .unwrap();
    let src_re = Regex::new(r#"\bsrc="[^"]*""#).unwrap();
    let stamp_re = Regex::new(r#"\s*\bdata-image-id="[^"]*""#).unwrap();

    tag_re
        .replace_all(html, |caps: &regex::Captures| {
            let tag = caps.get(0).map(|m| m.as_str()).unwrap_or("");
            let replacement = format!(r#"src="{}""#, url);
            let resolved = src_re.replace(tag, NoExpand(&replacement));
            stamp_re.replace(&resolved, "").into_owned()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str) -> String {
        format!(
            r#"<p>Antes</p><img src="data:image/jpeg;base64,AAAA" alt="plano.jpg" data-image-id="{}"><p>Después</p>"#,
            id
        )
    }

    #[test]
    fn ids_are_extracted_in_document_order() {
        let html = format!("{}{}", sample("id-uno"), sample("id-dos"));
        assert_eq!(embedded_image_ids(&html), vec!["id-uno", "id-dos"]);
        assert!(contains_image_id(&html, "id-uno"));
        assert!(!contains_image_id(&html, "id-tres"));
    }

    #[test]
    fn rewrite_swaps_src_and_retires_the_stamp() {
        let html = sample("abc-123");
        let out = rewrite_image_source(&html, "abc-123", "/uploads/plano.jpg");
        assert!(out.contains(r#"src="/uploads/plano.jpg""#));
        assert!(!out.contains("data:image/jpeg"));
        assert!(!out.contains("data-image-id"));
        // Surrounding markup is untouched.
        assert!(out.starts_with("<p>Antes</p>"));
        assert!(out.ends_with("<p>Después</p>"));
    }

    #[test]
    fn rewrite_targets_only_the_matching_tag() {
        let html = format!("{}{}", sample("primera"), sample("segunda"));
        let out = rewrite_image_source(&html, "primera", "/uploads/a.jpg");
        assert!(out.contains(r#"src="/uploads/a.jpg""#));
        assert!(out.contains(r#"data-image-id="segunda""#));
        assert_eq!(embedded_image_ids(&out), vec!["segunda"]);
    }

    #[test]
    fn rewrite_without_match_is_identity() {
        let html = sample("presente");
        assert_eq!(rewrite_image_source(&html, "ausente", "/u.jpg"), html);
    }

    #[test]
    fn data_uri_prefix_detection() {
        assert!(is_image_data_uri("data:image/jpeg;base64,QUJD"));
        assert!(is_image_data_uri("data:image/png;base64,QUJD"));
        assert!(!is_image_data_uri("https://example.com/a.jpg"));
        assert!(!is_image_data_uri("data:text/plain;base64,QUJD"));
    }
}
