//! Chart composition and rasterization.
//!
//! A frame is first composed as a resolution-independent display list
//! ([`ChartSpec`]) and then rasterized to an RGBA bitmap. Keeping the
//! two steps separate makes the geometry testable without decoding
//! pixels.

use crate::glyph;
use crate::scale::{LinearScale, PointScale, ScaleBounds};
use image::{Rgba, RgbaImage};
use netbar_core::{History, NetbarError, Result};

/// Canvas width of the text region, as a multiple of the tray height.
pub const TEXT_WIDTH_RATIO: f32 = 3.6;
/// Canvas width of the chart region, as a multiple of the tray height.
pub const CHART_WIDTH_RATIO: f32 = 3.0;
/// Vertical margin factor keeping bars clear of the menu-bar edges.
const HEIGHT_MARGIN: f32 = 0.8;
/// Fraction of each bar slot left empty between neighbouring bars.
const BAR_PADDING: f32 = 0.25;
/// Gap between the label text and the right edge of the text region.
const TEXT_MARGIN: f32 = 2.0;
/// Blank rows between the two label lines.
const LABEL_GAP: u32 = 1;

/// One vertical bar, in canvas coordinates. `y0` is the top end (the
/// upload half), `y1` the bottom end (the download half); a zero-height
/// bar has both on the midline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x:     f32,
    pub y0:    f32,
    pub y1:    f32,
    pub width: f32,
}

/// One text run, in canvas coordinates (top-left anchored).
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x:    i32,
    pub y:    i32,
    pub text: String,
}

/// Resolution-independent description of one rendered frame: the
/// canvas, the up/down bars, and the throughput labels.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub width:    u32,
    pub height:   u32,
    pub midline:  f32,
    pub segments: Vec<Segment>,
    pub labels:   Vec<Label>,
}

impl ChartSpec {
    /// Compose a frame from the current history window.
    ///
    /// The text region occupies the left edge; the chart sits to its
    /// right with bar index 0 (oldest displayed) in the rightmost slot.
    pub fn compose(history: &History, tray_height: u32, max_bars: usize) -> Self {
        let text_width = (tray_height as f32 * TEXT_WIDTH_RATIO).round();
        let chart_width = (tray_height as f32 * CHART_WIDTH_RATIO).round();
        let height = (tray_height as f32 * HEIGHT_MARGIN).round();
        let midline = height / 2.0;

        let bounds = ScaleBounds::from_history(history, max_bars);
        let up = LinearScale::new(bounds.output_max, midline);
        let down = LinearScale::new(bounds.input_max, midline);
        let points = PointScale::new(text_width, chart_width, max_bars, BAR_PADDING);

        // `tail` yields oldest-first, which is exactly the point
        // scale's index order (0 = rightmost slot).
        let segments = history
            .tail(max_bars)
            .enumerate()
            .map(|(i, sample)| Segment {
                x:     points.x(i),
                y0:    midline - up.apply(sample.output_bytes),
                y1:    midline + down.apply(sample.input_bytes),
                width: points.bar_width(),
            })
            .collect();

        let labels = Self::labels(history, max_bars, text_width, height);

        Self {
            width: (text_width + chart_width) as u32,
            height: height as u32,
            midline,
            segments,
            labels,
        }
    }

    /// Two right-aligned rows: upload (avg/max) above download
    /// (avg/max), both in Mbps with a fixed field width so the columns
    /// stay put as values change.
    fn labels(history: &History, max_bars: usize, text_width: f32, height: f32) -> Vec<Label> {
        let up = format!(
            "▲{:>5.1}/{:>5.1}",
            mbps(history.avg_output(max_bars)),
            mbps(history.max_output(max_bars)),
        );
        let down = format!(
            "▼{:>5.1}/{:>5.1}",
            mbps(history.avg_input(max_bars)),
            mbps(history.max_input(max_bars)),
        );

        let block = glyph::GLYPH_HEIGHT * 2 + LABEL_GAP;
        let y_up = ((height as u32).saturating_sub(block) / 2) as i32;
        let y_down = y_up + (glyph::GLYPH_HEIGHT + LABEL_GAP) as i32;

        [(up, y_up), (down, y_down)]
            .into_iter()
            .map(|(text, y)| {
                let x = (text_width - glyph::text_width(&text) as f32 - TEXT_MARGIN).max(0.0);
                Label { x: x as i32, y, text }
            })
            .collect()
    }
}

/// Rasterize a composed frame to an RGBA bitmap.
pub fn rasterize(spec: &ChartSpec, foreground: Rgba<u8>, background: Rgba<u8>) -> Result<RgbaImage> {
    if spec.width == 0 || spec.height == 0 {
        return Err(NetbarError::Render(format!(
            "degenerate canvas {}x{}",
            spec.width, spec.height
        )));
    }

    let mut img = RgbaImage::from_pixel(spec.width, spec.height, background);

    for segment in &spec.segments {
        draw_segment(&mut img, segment, foreground);
    }
    for label in &spec.labels {
        glyph::draw_text(&mut img, label.x, label.y, &label.text, foreground);
    }

    Ok(img)
}

fn draw_segment(img: &mut RgbaImage, segment: &Segment, color: Rgba<u8>) {
    let half = segment.width / 2.0;
    let x0 = (segment.x - half).round().max(0.0) as u32;
    let x1 = ((segment.x + half).round().max(0.0) as u32).min(img.width());
    let y0 = segment.y0.round().max(0.0) as u32;
    let y1 = (segment.y1.round().max(0.0) as u32).min(img.height().saturating_sub(1));

    for x in x0..x1 {
        for y in y0..=y1 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Megabits per second for a bytes-per-second rate.
pub fn mbps(bytes_per_sec: u64) -> f64 {
    bytes_per_sec as f64 * 8.0 / 1_000_000.0
}

/// Format a bytes-per-second rate as `"<n.n> Mbps"`.
pub fn bytes_to_mbps(bytes_per_sec: u64) -> String {
    format!("{:.1} Mbps", mbps(bytes_per_sec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use netbar_core::Sample;

    const TRAY_HEIGHT: u32 = 22;
    const MAX_BARS: usize = 20;
    const FG: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const BG: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn compose_zeroed() -> ChartSpec {
        ChartSpec::compose(&History::zeroed(), TRAY_HEIGHT, MAX_BARS)
    }

    #[test]
    fn canvas_follows_tray_height() {
        let spec = compose_zeroed();
        // text 22 × 3.6 → 79, chart 22 × 3.0 → 66, height 22 × 0.8 → 18.
        assert_eq!(spec.width, 145);
        assert_eq!(spec.height, 18);
        assert_eq!(spec.segments.len(), MAX_BARS);
    }

    #[test]
    fn zero_history_bars_collapse_to_the_midline() {
        let spec = compose_zeroed();
        for segment in &spec.segments {
            assert_eq!(segment.y0, spec.midline);
            assert_eq!(segment.y1, spec.midline);
        }
    }

    #[test]
    fn zero_history_paints_chart_region_only_on_the_midline() {
        let spec = compose_zeroed();
        let img = rasterize(&spec, FG, BG).unwrap();

        let chart_left = (TRAY_HEIGHT as f32 * TEXT_WIDTH_RATIO).round() as u32;
        let mid_row = spec.midline.round() as u32;
        for x in chart_left..img.width() {
            for y in 0..img.height() {
                if img.get_pixel(x, y).0[3] != 0 {
                    assert_eq!(y, mid_row, "stray pixel at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn newest_sample_is_adjacent_to_the_text_region() {
        let mut history = History::zeroed();
        history.push(Sample::new(500, 1_000));

        let spec = ChartSpec::compose(&history, TRAY_HEIGHT, MAX_BARS);
        let newest = spec.segments.last().unwrap();
        let oldest = spec.segments.first().unwrap();

        assert!(newest.x < oldest.x);
        // The newest sample holds the window maximum, so its upload bar
        // spans the full upper half.
        assert_eq!(newest.y0, 0.0);
        assert_eq!(newest.y1, spec.midline * 2.0);
    }

    #[test]
    fn full_height_bar_reaches_the_canvas_edges() {
        let mut history = History::zeroed();
        history.push(Sample::new(1_000, 1_000));

        let spec = ChartSpec::compose(&history, TRAY_HEIGHT, MAX_BARS);
        let img = rasterize(&spec, FG, BG).unwrap();

        let top_painted = (0..img.width()).any(|x| img.get_pixel(x, 0).0[3] != 0);
        let bottom_painted =
            (0..img.width()).any(|x| img.get_pixel(x, img.height() - 1).0[3] != 0);
        assert!(top_painted);
        assert!(bottom_painted);
    }

    #[test]
    fn labels_are_inside_the_text_region() {
        let spec = compose_zeroed();
        let text_width = (TRAY_HEIGHT as f32 * TEXT_WIDTH_RATIO).round() as i32;

        assert_eq!(spec.labels.len(), 2);
        assert!(spec.labels[0].text.starts_with('▲'));
        assert!(spec.labels[1].text.starts_with('▼'));
        for label in &spec.labels {
            assert!(label.x >= 0);
            assert!(label.x + glyph::text_width(&label.text) as i32 <= text_width);
        }
        assert!(spec.labels[0].y < spec.labels[1].y);
    }

    #[test]
    fn label_fields_have_fixed_width() {
        let mut history = History::zeroed();
        history.push(Sample::new(125_000, 125_000));
        let spec = ChartSpec::compose(&history, TRAY_HEIGHT, MAX_BARS);

        // avg over 20 bars = 6,250 B/s → 0.1 Mbps; max = 1.0 Mbps.
        assert_eq!(spec.labels[0].text, "▲  0.1/  1.0");
        assert_eq!(spec.labels[1].text, "▼  0.1/  1.0");
    }

    #[test]
    fn rasterize_rejects_degenerate_canvas() {
        let spec = ChartSpec {
            width:    0,
            height:   0,
            midline:  0.0,
            segments: Vec::new(),
            labels:   Vec::new(),
        };
        assert!(rasterize(&spec, FG, BG).is_err());
    }

    #[test]
    fn converts_bytes_per_second_to_mbps() {
        assert_eq!(bytes_to_mbps(125_000), "1.0 Mbps");
        assert_eq!(bytes_to_mbps(0), "0.0 Mbps");
        assert_eq!(bytes_to_mbps(2_500_000), "20.0 Mbps");
    }
}
