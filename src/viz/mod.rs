//! Visualization: render the result table as a bar chart to **SVG** or **PNG**.
//!
//! - One vertical bar per record, in table order
//! - Country labels rotated vertical on the X axis
//! - Each bar annotated with its count, with thousands separators (`1,500`)
//! - An empty table still produces a chart (frame, title and axes only)

pub mod text;
pub mod util;

use crate::models::ResultTable;
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontFamily, FontTransform};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use text::rotated_label_band_px;
use util::{axis_ceiling, format_count, office_color};

pub const CHART_TITLE: &str = "Innovation Manager Positions by Country";
pub const X_AXIS_LABEL: &str = "Country";
pub const Y_AXIS_LABEL: &str = "Number of Positions";

const LABEL_FONT_PX: u32 = 13;
/// Bars fill 80% of their slot.
const BAR_HALF_WIDTH: f64 = 0.4;

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Render `table` as a bar chart. The output format follows the extension: `.svg` renders
/// SVG, anything else PNG. An existing file at `out_path` is replaced.
pub fn plot_bars<P: AsRef<Path>>(
    table: &ResultTable,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    ensure_fonts_registered();
    let out_path = out_path.as_ref();

    let is_svg = out_path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        let root = SVGBackend::new(out_path, (width, height)).into_drawing_area();
        draw_chart(root, table)?;
    } else {
        let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
        draw_chart(root, table)?;
    }
    Ok(())
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, table: &ResultTable) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let names = table.countries();
    // Bar i is centered on x = i; an empty table keeps a single empty slot.
    let x_max = names.len().max(1) as f64 - 0.5;
    let y_max = axis_ceiling(table.iter().map(|r| r.count).max().unwrap_or(0));

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption(CHART_TITLE, (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(
            LabelAreaPosition::Bottom,
            rotated_label_band_px(names.iter().copied(), LABEL_FONT_PX),
        )
        .build_cartesian_2d(-0.5f64..x_max, 0u64..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let y_label_fmt = |v: &u64| format_count(*v);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        // Category labels are drawn per bar below; the mesh only carries the Y ticks.
        .x_labels(0)
        .y_labels(10)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, LABEL_FONT_PX))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let bar_style = office_color(0).filled();
    chart
        .draw_series(table.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            Rectangle::new([(x - BAR_HALF_WIDTH, 0u64), (x + BAR_HALF_WIDTH, r.count)], bar_style)
        }))
        .map_err(|e| anyhow!("{:?}", e))?;

    // Value labels sit centered on top of each bar.
    let value_style = TextStyle::from((FontFamily::SansSerif, LABEL_FONT_PX).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(table.iter().enumerate().map(|(i, r)| {
            Text::new(
                format_count(r.count),
                (i as f64, r.count),
                value_style.clone(),
            )
        }))
        .map_err(|e| anyhow!("{:?}", e))?;

    // Country names, rotated to read downwards from just under each bar.
    let country_style = TextStyle::from(
        (FontFamily::SansSerif, LABEL_FONT_PX)
            .into_font()
            .transform(FontTransform::Rotate90),
    )
    .pos(Pos::new(HPos::Left, VPos::Center));
    for (i, name) in names.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(i as f64, 0u64));
        root.draw(&Text::new(name.to_string(), (px, py + 8), country_style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
