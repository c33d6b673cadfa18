use crate::settings::PointerSettings;

/// Idle-fade configuration, frozen at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadePolicy {
    pub enabled: bool,
    pub delay_frames: u32,
    pub duration_frames: u32,
}

impl From<&PointerSettings> for FadePolicy {
    fn from(settings: &PointerSettings) -> Self {
        Self {
            enabled: settings.fade_enabled,
            delay_frames: settings.fade_delay_frames,
            duration_frames: settings.fade_duration_frames,
        }
    }
}

/// Frame-stepped idle timer driving the cursor opacity.
#[derive(Debug, Default, Clone, Copy)]
pub struct FadeState {
    idle_frames: u32,
}

impl FadeState {
    /// Advance one frame and return the opacity for it. The idle counter
    /// clamps at `delay + duration` so it cannot grow without bound.
    pub fn advance(&mut self, policy: &FadePolicy, moved: bool) -> u8 {
        if !policy.enabled {
            return 255;
        }

        if moved {
            self.idle_frames = 0;
        } else {
            self.idle_frames += 1;
        }

        if self.idle_frames > policy.delay_frames {
            let limit = policy.delay_frames + policy.duration_frames;
            if self.idle_frames > limit {
                self.idle_frames = limit;
            }
            let ramp =
                (self.idle_frames - policy.delay_frames) as f32 / policy.duration_frames as f32;
            (255.0 - ramp * 255.0) as u8
        } else {
            255
        }
    }

    pub fn idle_frames(&self) -> u32 {
        self.idle_frames
    }

    pub(crate) fn reset(&mut self) {
        self.idle_frames = 0;
    }
}
