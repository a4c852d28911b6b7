use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `netbar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Tray icon geometry and colours.
    pub tray: TrayConfig,
    /// Chart layout and failure policy.
    pub chart: ChartConfig,
    /// History persistence settings.
    pub store: StoreConfig,
}

/// Settings for the rendered tray icon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    /// Menu-bar icon height in pixels; the canvas size is derived from it.
    pub height: u32,
    /// Foreground colour (hex, e.g. `"#000000"`).  Black suits the
    /// macOS template-image treatment, which re-tints it per theme.
    pub foreground: String,
    /// Where each rendered frame is written for the menu-bar shell to
    /// pick up.
    pub image_path: PathBuf,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            height:     22,
            foreground: "#000000".to_string(),
            image_path: PathBuf::from("tray-image.png"),
        }
    }
}

/// Chart layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Number of bars displayed (each bar is one one-second sample).
    pub max_bars: usize,
    /// What to do when a frame cannot be rendered or handed over.
    pub on_render_error: RenderErrorPolicy,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_bars:        20,
            on_render_error: RenderErrorPolicy::default(),
        }
    }
}

/// Behaviour on a failed render or tray hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderErrorPolicy {
    /// Keep the previous icon and log a warning.
    #[default]
    Skip,
    /// Terminate the session so a broken pipeline surfaces immediately
    /// instead of freezing the icon forever.
    Exit,
}

/// History persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Seconds between best-effort history snapshots.
    pub persist_interval_secs: u64,
    /// Override for the state file location; `None` uses the per-user
    /// application-data directory.
    pub state_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            persist_interval_secs: 5,
            state_path:            None,
        }
    }
}
