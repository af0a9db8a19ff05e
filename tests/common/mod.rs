//! Helpers shared by the integration tests.
#![allow(dead_code)]

/// `(attributes, trimmed text)` of every `<text>` element in an SVG document.
/// The SVG backend puts element content on its own line, so the text is trimmed.
pub fn svg_texts(svg: &str) -> Vec<(String, String)> {
    svg.split("<text")
        .skip(1)
        .filter_map(|chunk| {
            let (attrs, rest) = chunk.split_once('>')?;
            let (content, _) = rest.split_once("</text>")?;
            Some((attrs.to_string(), content.trim().to_string()))
        })
        .collect()
}

/// Text of the labels drawn on top of the bars, in drawing order: numeric text, centered
/// and anchored at its bottom edge. Y ticks are right-anchored and the bottom-anchored
/// axis description is not numeric, so neither is picked up.
pub fn bar_value_labels(svg: &str) -> Vec<String> {
    svg_texts(svg)
        .into_iter()
        .filter(|(attrs, text)| {
            attrs.contains(r#"dy="-0.5ex""#)
                && attrs.contains(r#"text-anchor="middle""#)
                && !text.is_empty()
                && text.chars().all(|c| c.is_ascii_digit() || c == ',')
        })
        .map(|(_, text)| text)
        .collect()
}
