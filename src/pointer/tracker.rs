use crate::platform::{PhysicalButton, PointerDevice, Viewport};
use crate::pointer::buttons::{ButtonGate, PointerButton};
use crate::pointer::fade::{FadePolicy, FadeState};
use crate::pointer::region::Region;
use crate::settings::PointerSettings;
use crate::surface::CursorSurface;
use crate::world::{pixel_to_tile, TileProbe};

/// Pixels shaved off the far window edges when clamping, so the glyph stays
/// fully visible.
const CLAMP_MARGIN: i32 = 5;

/// Where the glyph is parked until the first tick places it for real.
const SPAWN_POS: (i32, i32) = (50, 50);

/// The pointer controller. Owns all mouse state and the capability handles
/// it reads through; one instance per game window, ticked exactly once per
/// frame by the host loop.
///
/// The tick must run before collaborators read passive state for that
/// frame: `position` and the hover icon are defined as "value as of the
/// last tick", not a fresh OS query.
pub struct PointerTracker {
    settings: PointerSettings,
    device: Box<dyn PointerDevice>,
    viewport: Box<dyn Viewport>,
    surface: Box<dyn CursorSurface>,
    fade_policy: FadePolicy,
    render_pos: (i32, i32),
    moved: bool,
    enabled: bool,
    fade: FadeState,
    opacity: u8,
    hover_icon: Option<u16>,
    displayed_icon: Option<u16>,
    last_tile: Option<(i32, i32)>,
    left: ButtonGate,
    right: ButtonGate,
    middle: ButtonGate,
    physical_left: PhysicalButton,
    physical_right: PhysicalButton,
}

impl PointerTracker {
    pub fn new(
        settings: PointerSettings,
        device: Box<dyn PointerDevice>,
        viewport: Box<dyn Viewport>,
        surface: Box<dyn CursorSurface>,
    ) -> Self {
        let fade_policy = FadePolicy::from(&settings);
        let mut tracker = Self {
            settings,
            device,
            viewport,
            surface,
            fade_policy,
            render_pos: (0, 0),
            moved: false,
            enabled: true,
            fade: FadeState::default(),
            opacity: 255,
            hover_icon: None,
            displayed_icon: None,
            last_tile: None,
            left: ButtonGate::default(),
            right: ButtonGate::default(),
            middle: ButtonGate::default(),
            physical_left: PhysicalButton::Left,
            physical_right: PhysicalButton::Right,
        };
        tracker.initialize();
        tracker
    }

    /// (Re)build the controller state from defaults: resolve the button
    /// swap, hide the native cursor, draw the default icon and park the
    /// glyph at its spawn position.
    fn initialize(&mut self) {
        // "Left" must mean the user's primary button regardless of the OS
        // swap setting.
        let swapped = self.device.buttons_swapped();
        self.physical_left = if swapped {
            PhysicalButton::Right
        } else {
            PhysicalButton::Left
        };
        self.physical_right = if swapped {
            PhysicalButton::Left
        } else {
            PhysicalButton::Right
        };

        self.render_pos = (0, 0);
        self.moved = false;
        self.enabled = true;
        self.fade.reset();
        self.opacity = 255;
        self.hover_icon = None;
        self.last_tile = None;
        self.left.reset();
        self.right.reset();
        self.middle.reset();

        self.device.set_native_cursor_visible(false);

        let icon = self.settings.default_icon;
        self.surface.draw_icon(icon);
        self.displayed_icon = Some(icon);
        self.surface.set_position(SPAWN_POS.0, SPAWN_POS.1);
        self.surface.set_opacity(self.opacity);
    }

    /// Fresh OS read, transformed to game pixel space and clamped when
    /// configured. Side-effect-free; callers that must not trigger an OS
    /// query mid-frame use `position` instead.
    pub fn poll_position(&self) -> (i32, i32) {
        let (origin_x, origin_y) = self.device.client_origin();
        let (screen_x, screen_y) = self.device.cursor_screen_position();
        let mut x = screen_x - origin_x;
        let mut y = screen_y - origin_y;

        if self.settings.clamp_to_window {
            let (w, h) = self.viewport.drawable_size();
            x = x.max(0).min(w - CLAMP_MARGIN);
            y = y.max(0).min(h - CLAMP_MARGIN);
        }

        (x, y)
    }

    /// Render position as of the last tick.
    pub fn position(&self) -> (i32, i32) {
        self.render_pos
    }

    /// Half-open containment test of the passive position.
    pub fn is_within(&self, region: Region) -> bool {
        region.contains(self.render_pos.0, self.render_pos.1)
    }

    /// Debounced (or, with `allow_repeat`, level-triggered) button query.
    ///
    /// Edge mode fires once per physical press, provided the call site
    /// queries every tick while the button is held; see [`ButtonGate`].
    pub fn button_down(&mut self, button: PointerButton, allow_repeat: bool) -> bool {
        let physical = match button {
            PointerButton::Left => self.physical_left,
            PointerButton::Right => self.physical_right,
            PointerButton::Middle => PhysicalButton::Middle,
        };
        let raw = self.device.button_down(physical);
        self.gate_mut(button).observe(raw, allow_repeat)
    }

    fn gate_mut(&mut self, button: PointerButton) -> &mut ButtonGate {
        match button {
            PointerButton::Left => &mut self.left,
            PointerButton::Right => &mut self.right,
            PointerButton::Middle => &mut self.middle,
        }
    }

    pub fn left_down(&mut self, allow_repeat: bool) -> bool {
        self.button_down(PointerButton::Left, allow_repeat)
    }

    pub fn right_down(&mut self, allow_repeat: bool) -> bool {
        self.button_down(PointerButton::Right, allow_repeat)
    }

    pub fn middle_down(&mut self, allow_repeat: bool) -> bool {
        self.button_down(PointerButton::Middle, allow_repeat)
    }

    /// True while switched off or fully faded out. Collaborators check this
    /// before hit-testing; the controller keeps answering queries either
    /// way.
    pub fn is_disabled(&self) -> bool {
        !self.enabled || self.opacity == 0
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::debug!(enabled, "pointer controller switched");
        }
        self.enabled = enabled;
        if !enabled {
            self.opacity = 0;
            self.surface.set_opacity(0);
        }
    }

    pub fn toggle_enabled(&mut self) {
        let enabled = !self.enabled;
        self.set_enabled(enabled);
    }

    /// Opacity as of the last tick.
    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    /// Hover icon resolved by the last tick; `None` means the default icon.
    pub fn hover_icon(&self) -> Option<u16> {
        self.hover_icon
    }

    /// Whether the pointer moved during the last tick.
    pub fn moved_this_frame(&self) -> bool {
        self.moved
    }

    pub fn settings(&self) -> &PointerSettings {
        &self.settings
    }

    /// Per-frame update. Runs exactly once per frame, before any
    /// collaborator reads passive state.
    pub fn tick(&mut self, probe: &dyn TileProbe) {
        let fresh = self.poll_position();
        self.moved = fresh != self.render_pos;
        self.render_pos = fresh;

        self.refresh_hover_icon(probe);
        self.place_glyph();
        self.refresh_opacity();
    }

    /// Defensive recovery for scene transitions that tear down graphics
    /// resources: a disposed surface is rebuilt and the controller restarts
    /// from defaults rather than attempting partial repair.
    pub fn reinitialize_if_disposed(&mut self) {
        if !self.surface.is_disposed() {
            return;
        }
        tracing::warn!("cursor surface was disposed; reinitializing pointer state");
        self.surface.recreate();
        self.initialize();
    }

    fn refresh_hover_icon(&mut self, probe: &dyn TileProbe) {
        let tile = pixel_to_tile(probe.display_offset(), self.render_pos);
        if self.last_tile == Some(tile) {
            // Same tile as last frame; the resolution cannot change.
            return;
        }
        self.last_tile = Some(tile);

        self.hover_icon = probe
            .occupants_at(tile.0, tile.1)
            .into_iter()
            .find_map(|occupant| occupant.hover_icon);

        let icon = self.hover_icon.unwrap_or(self.settings.default_icon);
        if self.displayed_icon != Some(icon) {
            tracing::debug!(icon, "cursor icon changed");
            self.surface.draw_icon(icon);
            self.displayed_icon = Some(icon);
        }
    }

    fn place_glyph(&mut self) {
        let icon = self.displayed_icon.unwrap_or(self.settings.default_icon);
        let (dx, dy) = self.settings.icon_offset(icon);
        self.surface
            .set_position(self.render_pos.0 + dx, self.render_pos.1 + dy);
    }

    fn refresh_opacity(&mut self) {
        self.opacity = if self.enabled {
            self.fade.advance(&self.fade_policy, self.moved)
        } else {
            0
        };
        self.surface.set_opacity(self.opacity);
    }
}
