//! Utility functions for visualization: colors, number formatting, axis range.

use num_format::{Locale, ToFormattedString};
use plotters::prelude::*;

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

/// Get a color from the Office palette.
#[inline]
pub fn office_color(idx: usize) -> RGBAColor {
    OFFICE10[idx % OFFICE10.len()].to_rgba()
}

/// Integer with English thousands separators, e.g. `1500` -> `"1,500"`.
pub fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Exclusive upper bound of the Y axis: ~12% headroom above the tallest bar so the value
/// label fits, never below 1 (an all-zero chart still needs a non-empty range).
pub fn axis_ceiling(max_count: u64) -> u64 {
    let headroom = (max_count as f64 * 0.12).ceil() as u64;
    max_count.saturating_add(headroom.max(1)).max(1)
}
