/// Cursor glyph collaborator, owned by the renderer and injected into the
/// controller. The controller decides *when* to draw, move or fade the
/// glyph; the implementation decides how.
pub trait CursorSurface {
    /// Blit the glyph for `icon`. Only invoked when the resolved icon
    /// actually changed since the last draw.
    fn draw_icon(&mut self, icon: u16);

    /// Place the glyph in game pixel space. The per-icon hotspot offset has
    /// already been applied.
    fn set_position(&mut self, x: i32, y: i32);

    /// 0 is fully transparent, 255 fully opaque.
    fn set_opacity(&mut self, opacity: u8);

    /// True once the renderer has torn the surface down behind the
    /// controller's back, e.g. on a scene transition.
    fn is_disposed(&self) -> bool;

    /// Rebuild the surface after disposal.
    fn recreate(&mut self);
}
