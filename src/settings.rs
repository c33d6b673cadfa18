use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_icon() -> u16 {
    528
}

fn default_icon_offsets() -> HashMap<u16, (i32, i32)> {
    HashMap::from([(529, (-8, 0))])
}

fn default_true() -> bool {
    true
}

fn default_fade_delay() -> u32 {
    600
}

fn default_fade_duration() -> u32 {
    60
}

/// Startup configuration for the pointer controller. Everything here is
/// frozen once the controller is constructed; only the enabled flag can be
/// changed at runtime, and that lives on the controller itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerSettings {
    /// Icon drawn when nothing under the pointer advertises one.
    #[serde(default = "default_icon")]
    pub default_icon: u16,
    /// Pixel offset per icon id, correcting for hotspot misalignment between
    /// the icon artwork and the logical pointer tip.
    #[serde(default = "default_icon_offsets")]
    pub icon_offsets: HashMap<u16, (i32, i32)>,
    /// Offset applied to icons missing from `icon_offsets`.
    #[serde(default)]
    pub fallback_offset: (i32, i32),
    /// Keep the rendered cursor inside the window.
    #[serde(default = "default_true")]
    pub clamp_to_window: bool,
    /// Widgets only accept a click while the pointer is inside their bounds.
    /// Consumed by widget glue, not by the controller.
    #[serde(default = "default_true")]
    pub click_within_widget: bool,
    /// Fade the cursor out after a period without movement.
    #[serde(default = "default_true")]
    pub fade_enabled: bool,
    /// Frames of inactivity before the fade starts.
    #[serde(default = "default_fade_delay")]
    pub fade_delay_frames: u32,
    /// Frames the fade takes to reach full transparency.
    #[serde(default = "default_fade_duration")]
    pub fade_duration_frames: u32,
    /// When enabled the host initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

impl Default for PointerSettings {
    fn default() -> Self {
        Self {
            default_icon: default_icon(),
            icon_offsets: default_icon_offsets(),
            fallback_offset: (0, 0),
            clamp_to_window: true,
            click_within_widget: true,
            fade_enabled: true,
            fade_delay_frames: default_fade_delay(),
            fade_duration_frames: default_fade_duration(),
            debug_logging: false,
        }
    }
}

impl PointerSettings {
    /// Load settings from `path`. A missing or empty file yields defaults;
    /// a present but malformed file is a startup error.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Pixel offset for `icon`, falling back to the wildcard entry.
    pub fn icon_offset(&self, icon: u16) -> (i32, i32) {
        self.icon_offsets
            .get(&icon)
            .copied()
            .unwrap_or(self.fallback_offset)
    }
}
