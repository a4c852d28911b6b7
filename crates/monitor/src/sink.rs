use image::RgbaImage;
use netbar_core::Result;
use std::path::PathBuf;

/// Receives each freshly rendered tray frame.
///
/// The menu-bar shell is an external collaborator; this trait is the
/// hand-off point between the pipeline and whatever displays the icon.
pub trait TraySink {
    fn update(&mut self, frame: &RgbaImage) -> Result<()>;
}

/// Writes each frame as a PNG at a fixed path.
///
/// The surrounding shell watches this file and swaps the tray icon
/// whenever it changes.
pub struct PngFileSink {
    path: PathBuf,
}

impl PngFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TraySink for PngFileSink {
    fn update(&mut self, frame: &RgbaImage) -> Result<()> {
        let png = netbar_render::encode_png(frame)?;
        std::fs::write(&self.path, png)?;
        Ok(())
    }
}
