#[cfg(windows)]
mod win32;

#[cfg(windows)]
pub use win32::Win32PointerDevice;

/// Physical mouse buttons as the OS reports them, before any primary-button
/// swap is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalButton {
    Left,
    Right,
    Middle,
}

/// OS pointer and key-state capability consumed by the controller.
///
/// Calls never fail at runtime: a platform where they could is a startup
/// configuration error, handled when the implementation is constructed.
pub trait PointerDevice {
    /// Pointer position in screen coordinates.
    fn cursor_screen_position(&self) -> (i32, i32);

    /// Top-left corner of the window's drawable client area, in screen
    /// coordinates (window origin adjusted for border and title-bar metrics).
    fn client_origin(&self) -> (i32, i32);

    /// Instantaneous physical state of `button`.
    fn button_down(&self, button: PhysicalButton) -> bool;

    /// OS accessibility setting that swaps the primary and secondary buttons.
    fn buttons_swapped(&self) -> bool;

    /// Show or hide the OS cursor while it is over the game window.
    fn set_native_cursor_visible(&mut self, visible: bool);
}

/// Drawable-size capability of the game window.
pub trait Viewport {
    /// Width and height of the drawable area in game pixels.
    fn drawable_size(&self) -> (i32, i32);
}
