use netbar_core::History;

/// Fallback input-axis maximum when the scale window is all zeros
/// (~10 MB/s, a plausible home downlink).
pub const DEFAULT_INPUT_MAX: u64 = 10_000_000;
/// Fallback output-axis maximum when the scale window is all zeros
/// (~100 KB/s).
pub const DEFAULT_OUTPUT_MAX: u64 = 100_000;
/// The scale window is this many times wider than the displayed window,
/// so a single outlier bar doesn't yank the axis around on every render.
pub const SCALE_WINDOW_FACTOR: usize = 3;

/// Linear byte-count → pixel-height mapping over `[0, domain_max]`.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_max: f32,
    range_max:  f32,
}

impl LinearScale {
    pub fn new(domain_max: u64, range_max: f32) -> Self {
        Self {
            domain_max: domain_max.max(1) as f32,
            range_max,
        }
    }

    /// Pixel height for `value`, clamped to the range so an over-max
    /// sample cannot draw outside the chart.
    pub fn apply(&self, value: u64) -> f32 {
        (value as f32 / self.domain_max * self.range_max).clamp(0.0, self.range_max)
    }
}

/// Axis maxima for one render, taken over the wider trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleBounds {
    pub input_max:  u64,
    pub output_max: u64,
}

impl ScaleBounds {
    /// Compute bounds from the last `max_bars × SCALE_WINDOW_FACTOR`
    /// samples, falling back to the fixed defaults on an all-zero
    /// window (cold start).
    pub fn from_history(history: &History, max_bars: usize) -> Self {
        let window = max_bars * SCALE_WINDOW_FACTOR;
        let input_max = history.max_input(window);
        let output_max = history.max_output(window);

        Self {
            input_max: if input_max == 0 {
                DEFAULT_INPUT_MAX
            } else {
                input_max
            },
            output_max: if output_max == 0 {
                DEFAULT_OUTPUT_MAX
            } else {
                output_max
            },
        }
    }
}

/// Horizontal slot positions for the displayed bars.
///
/// Index 0 (the oldest displayed sample) sits in the rightmost slot and
/// the newest bar lands next to the text region, so the chart appears
/// to scroll left as samples age.
#[derive(Debug, Clone, Copy)]
pub struct PointScale {
    origin:  f32,
    slot:    f32,
    bars:    usize,
    padding: f32,
}

impl PointScale {
    /// `origin` is the left edge of the chart region, `width` its total
    /// width, and `padding` the fraction of each slot left empty.
    pub fn new(origin: f32, width: f32, bars: usize, padding: f32) -> Self {
        Self {
            origin,
            slot: width / bars.max(1) as f32,
            bars,
            padding,
        }
    }

    /// Centre x of the bar at `index` (0 = oldest displayed).
    pub fn x(&self, index: usize) -> f32 {
        let from_right = index as f32 + 0.5;
        self.origin + self.slot * (self.bars as f32 - from_right)
    }

    /// Drawn thickness of one bar, at least one pixel.
    pub fn bar_width(&self) -> f32 {
        (self.slot * (1.0 - self.padding)).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netbar_core::Sample;

    #[test]
    fn linear_scale_passes_through_origin_and_max() {
        let scale = LinearScale::new(10_000, 50.0);
        assert_eq!(scale.apply(0), 0.0);
        assert_eq!(scale.apply(10_000), 50.0);
        assert_eq!(scale.apply(5_000), 25.0);
    }

    #[test]
    fn linear_scale_clamps_above_max() {
        let scale = LinearScale::new(10_000, 50.0);
        assert_eq!(scale.apply(20_000), 50.0);
    }

    #[test]
    fn zero_domain_does_not_divide_by_zero() {
        let scale = LinearScale::new(0, 50.0);
        assert_eq!(scale.apply(0), 0.0);
    }

    #[test]
    fn bounds_fall_back_on_cold_start() {
        let bounds = ScaleBounds::from_history(&History::zeroed(), 20);
        assert_eq!(
            bounds,
            ScaleBounds {
                input_max:  DEFAULT_INPUT_MAX,
                output_max: DEFAULT_OUTPUT_MAX,
            }
        );
    }

    #[test]
    fn bounds_track_the_wider_window() {
        let mut history = History::zeroed();
        // An outlier that has scrolled out of the displayed 20 bars but
        // is still inside the 60-sample scale window.
        history.push(Sample::new(9_000, 900));
        for _ in 0..30 {
            history.push(Sample::new(1_000, 100));
        }

        let bounds = ScaleBounds::from_history(&history, 20);
        assert_eq!(bounds.input_max, 9_000);
        assert_eq!(bounds.output_max, 900);
    }

    #[test]
    fn oldest_bar_is_rightmost() {
        let points = PointScale::new(80.0, 60.0, 20, 0.25);
        assert!(points.x(0) > points.x(1));
        assert!(points.x(19) > 80.0);
        assert!(points.x(0) < 140.0);
    }

    #[test]
    fn bar_width_is_at_least_one_pixel() {
        let narrow = PointScale::new(0.0, 10.0, 20, 0.5);
        assert_eq!(narrow.bar_width(), 1.0);

        let wide = PointScale::new(0.0, 200.0, 20, 0.5);
        assert_eq!(wide.bar_width(), 5.0);
    }
}
