//! Tree-based display backend.
//!
//! Parses the input as a fragment in a `<div>` context, mutates elements
//! in place and serializes the fragment root's children back out. Any
//! failure along the way returns the input unchanged.

use crate::display::DisplayBackend;
use crate::style;
use html5ever::{LocalName, Namespace, QualName};
use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;
use reprose_config::SanitizeConfig;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Display backend backed by an HTML5 parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomBackend;

impl DisplayBackend for DomBackend {
    fn name(&self) -> &'static str {
        "dom"
    }

    fn sanitize(&self, html: &str, config: &SanitizeConfig) -> String {
        let Some(root) = parse_fragment(html) else {
            log::warn!("could not locate fragment root, leaving HTML unchanged");
            return html.to_string();
        };

        remove_all(&root, "script, style, noscript");
        remove_hidden(&root);
        fix_images(&root, config);
        fix_svgs(&root);
        fix_figures(&root, config);
        remove_empty_containers(&root);
        clamp_font_sizes(&root, config);

        serialize_children(&root).unwrap_or_else(|| html.to_string())
    }

    fn extract_text(&self, html: &str) -> String {
        match parse_fragment(html) {
            Some(root) => root.text_contents(),
            None => html.to_string(),
        }
    }
}

/// Parse `html` the way `innerHTML` on a `<div>` would.
///
/// Head-only elements such as `<title>` and `<meta>` stay in place. The
/// parser wraps the fragment in a single `<html>` element, which is returned.
fn parse_fragment(html: &str) -> Option<NodeRef> {
    let context = QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from("div"));
    let document = kuchiki::parse_fragment(context, Vec::new()).one(html);
    document
        .select_first("html")
        .ok()
        .map(|root| root.as_node().clone())
}

/// Collect matches up front so detaching does not disturb iteration.
fn select_nodes(root: &NodeRef, selector: &str) -> Vec<NodeRef> {
    match root.select(selector) {
        Ok(matches) => matches.map(|el| el.as_node().clone()).collect(),
        Err(()) => Vec::new(),
    }
}

fn remove_all(root: &NodeRef, selector: &str) {
    for node in select_nodes(root, selector) {
        node.detach();
    }
}

fn style_of(node: &NodeRef) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    attributes.get("style").map(str::to_string)
}

fn remove_hidden(root: &NodeRef) {
    for node in select_nodes(root, "[style]") {
        if style_of(&node).is_some_and(|s| style::is_hidden(&s)) {
            node.detach();
        }
    }
}

fn fix_images(root: &NodeRef, config: &SanitizeConfig) {
    for node in select_nodes(root, "img") {
        let Some(element) = node.as_element() else {
            continue;
        };
        let mut attributes = element.attributes.borrow_mut();

        let current = attributes.get("style").unwrap_or("").to_string();
        if !style::has_max_width(&current) {
            attributes.insert("style", style::make_responsive(&current));
        }
        if !attributes.contains("loading") {
            attributes.insert("loading", "lazy".to_string());
        }
        if !attributes.contains("alt") {
            attributes.insert("alt", config.image_alt.clone());
        }
    }
}

fn fix_svgs(root: &NodeRef) {
    for node in select_nodes(root, "svg") {
        let Some(element) = node.as_element() else {
            continue;
        };
        let mut attributes = element.attributes.borrow_mut();

        let current = attributes.get("style").unwrap_or("").to_string();
        if !style::has_max_width(&current) {
            attributes.insert("style", style::make_responsive(&current));
        }

        let has_view_box = attributes.contains("viewBox") || attributes.contains("viewbox");
        if !has_view_box {
            let size = attributes
                .get("width")
                .zip(attributes.get("height"))
                .map(|(w, h)| format!("0 0 {w} {h}"));
            if let Some(view_box) = size {
                attributes.insert("viewBox", view_box);
            }
        }
    }
}

fn fix_figures(root: &NodeRef, config: &SanitizeConfig) {
    for node in select_nodes(root, "figure") {
        if let Some(element) = node.as_element() {
            let mut attributes = element.attributes.borrow_mut();
            if !attributes.contains("style") {
                attributes.insert("style", config.figure_margin.clone());
            }
        }
    }
}

/// Remove `div`/`span` elements with no content and no class or id.
fn remove_empty_containers(root: &NodeRef) {
    for node in select_nodes(root, "div, span") {
        if is_empty(&node) && !has_identity(&node) {
            node.detach();
        }
    }
}

fn is_empty(node: &NodeRef) -> bool {
    node.children().all(|child| {
        if child.as_element().is_some() {
            return false;
        }
        match child.as_text() {
            Some(text) => text.borrow().trim().is_empty(),
            None => true,
        }
    })
}

fn has_identity(node: &NodeRef) -> bool {
    let Some(element) = node.as_element() else {
        return false;
    };
    let attributes = element.attributes.borrow();
    ["class", "id"].iter().any(|name| {
        attributes
            .get(*name)
            .is_some_and(|value| !value.trim().is_empty())
    })
}

fn clamp_font_sizes(root: &NodeRef, config: &SanitizeConfig) {
    for node in select_nodes(root, "[style]") {
        let Some(element) = node.as_element() else {
            continue;
        };
        let mut attributes = element.attributes.borrow_mut();
        let clamped = attributes.get("style").and_then(|current| {
            style::clamp_font_size(current, config.font_size_limit, &config.font_size_clamp)
        });
        if let Some(clamped) = clamped {
            attributes.insert("style", clamped);
        }
    }
}

fn serialize_children(node: &NodeRef) -> Option<String> {
    let mut buf = Vec::new();
    for child in node.children() {
        if let Err(e) = child.serialize(&mut buf) {
            log::warn!("failed to serialize sanitized HTML: {}", e);
            return None;
        }
    }
    String::from_utf8(buf).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(html: &str) -> String {
        DomBackend.sanitize(html, &SanitizeConfig::default())
    }

    #[test]
    fn test_removes_script_style_noscript() {
        let out = sanitize("<p>a</p><script>x()</script><noscript>n</noscript><p>b<style>p{}</style></p>");
        assert_eq!(out, "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_removes_hidden_elements() {
        let out = sanitize(
            r#"<p>keep</p><div style="display: none">a</div><span style="visibility:hidden">b</span><p style="display:none">c</p>"#,
        );
        assert_eq!(out, "<p>keep</p>");
    }

    #[test]
    fn test_image_attributes() {
        let out = sanitize(r#"<img src="a.png">"#);
        assert!(out.contains(r#"alt="Article image""#));
        assert!(out.contains(r#"loading="lazy""#));
        assert!(out.contains(r#"style="max-width: 100%; height: auto;""#));
        assert!(out.contains(r#"src="a.png""#));
    }

    #[test]
    fn test_image_existing_attributes_kept() {
        let out = sanitize(r#"<img src="a.png" alt="Chart" loading="eager" style="max-width: 50%">"#);
        assert!(out.contains(r#"alt="Chart""#));
        assert!(out.contains(r#"loading="eager""#));
        assert!(out.contains(r#"style="max-width: 50%""#));
        assert!(!out.contains("Article image"));
    }

    #[test]
    fn test_image_style_prefixed() {
        let out = sanitize(r#"<img src="a.png" style="border: 0;">"#);
        assert!(out.contains(r#"style="max-width: 100%; height: auto; border: 0;""#));
    }

    #[test]
    fn test_svg_view_box_synthesized() {
        let out = sanitize(r#"<svg width="40" height="20"><rect width="4" height="2"></rect></svg>"#);
        assert!(out.contains(r#"viewBox="0 0 40 20""#));
        assert!(out.contains(r#"style="max-width: 100%; height: auto;""#));
    }

    #[test]
    fn test_svg_existing_view_box_kept() {
        let out = sanitize(r#"<svg width="40" height="20" viewBox="0 0 4 2"></svg>"#);
        assert!(out.contains(r#"viewBox="0 0 4 2""#));
        assert!(!out.contains("0 0 40 20"));
    }

    #[test]
    fn test_figure_default_margin() {
        let out = sanitize(r#"<figure><img src="a.png" alt="x"><figcaption>Cap</figcaption></figure>"#);
        assert!(out.starts_with(r#"<figure style="margin: 1.5rem 0;">"#));
        assert!(out.contains("<figcaption>Cap</figcaption>"));
    }

    #[test]
    fn test_figure_existing_style_kept() {
        let out = sanitize(r#"<figure style="margin: 0"></figure>"#);
        assert_eq!(out, r#"<figure style="margin: 0"></figure>"#);
    }

    #[test]
    fn test_empty_containers_removed() {
        let out = sanitize(r#"<div></div><span> </span><div class="spacer"></div><span id="anchor"></span><div>text</div>"#);
        assert_eq!(
            out,
            r#"<div class="spacer"></div><span id="anchor"></span><div>text</div>"#
        );
    }

    #[test]
    fn test_font_size_clamped() {
        let out = sanitize(r#"<p style="font-size: 180px">Big</p><p style="font-size: 16px">Small</p>"#);
        assert_eq!(
            out,
            r#"<p style="font-size: 2rem">Big</p><p style="font-size: 16px">Small</p>"#
        );
    }

    #[test]
    fn test_head_elements_kept() {
        let out = sanitize(r#"<title>Guide</title><meta name="x" content="y"><p>a</p>"#);
        assert!(out.starts_with("<title>Guide</title><meta "));
        assert!(out.contains(r#"name="x""#));
        assert!(out.ends_with("<p>a</p>"));
        assert!(DomBackend.extract_text("<title>Guide</title><p>a</p>").contains("Guide"));
    }

    #[test]
    fn test_plain_text_preserved() {
        assert_eq!(sanitize("just text"), "just text");
    }

    #[test]
    fn test_extract_text() {
        assert_eq!(
            DomBackend.extract_text("<h2>Title</h2><p>Some <b>bold</b> text</p>"),
            "TitleSome bold text"
        );
    }
}
