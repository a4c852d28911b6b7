pub mod chart;
pub mod color;
pub mod glyph;
pub mod scale;

pub use chart::{bytes_to_mbps, ChartSpec};
pub use color::Color;
pub use scale::{LinearScale, PointScale, ScaleBounds};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use netbar_core::{History, NetbarError, Result};
use std::io::Cursor;

/// Renders history windows into tray-sized bitmaps.
pub struct Renderer {
    tray_height: u32,
    max_bars:    usize,
    foreground:  image::Rgba<u8>,
    background:  image::Rgba<u8>,
}

impl Renderer {
    /// The background stays transparent so macOS can treat the icon as
    /// a template image.
    pub fn new(tray_height: u32, max_bars: usize, foreground: Color) -> Self {
        Self {
            tray_height,
            max_bars,
            foreground: foreground.to_rgba8(),
            background: Color::TRANSPARENT.to_rgba8(),
        }
    }

    /// Compose and rasterize one frame from the current history.
    pub fn render(&self, history: &History) -> Result<RgbaImage> {
        let spec = ChartSpec::compose(history, self.tray_height, self.max_bars);
        chart::rasterize(&spec, self.foreground, self.background)
    }
}

/// Encode a rendered frame as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());

    PngEncoder::new(&mut buffer)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| NetbarError::Render(format!("PNG encode: {e}")))?;

    Ok(buffer.into_inner())
}
