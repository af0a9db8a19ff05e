//! Text measurement for label layout.

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Height of the bottom label band needed to fit vertically rotated category labels,
/// plus room for the axis description underneath.
pub fn rotated_label_band_px<'a>(labels: impl IntoIterator<Item = &'a str>, font_px: u32) -> u32 {
    let longest = labels
        .into_iter()
        .map(|l| estimate_text_width_px(l, font_px))
        .max()
        .unwrap_or(0);
    longest.saturating_add(40).clamp(60, 260)
}
