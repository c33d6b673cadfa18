use super::{PhysicalButton, PointerDevice};
use anyhow::Context;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{BOOL, HWND, POINT, RECT};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetAsyncKeyState, VK_LBUTTON, VK_MBUTTON, VK_RBUTTON,
};
use windows::Win32::UI::WindowsAndMessaging::{
    FindWindowW, GetCursorPos, GetSystemMetrics, GetWindowRect, ShowCursor, SM_CXBORDER, SM_CXEDGE,
    SM_CYBORDER, SM_CYCAPTION, SM_CYEDGE, SM_SWAPBUTTON,
};

/// `PointerDevice` backed by the Win32 user32 API.
pub struct Win32PointerDevice {
    hwnd: HWND,
    cursor_hidden: bool,
}

impl Win32PointerDevice {
    /// Attach to the game window by its class name. The window must already
    /// exist; not finding it is a fatal configuration error for the host.
    pub fn attach(window_class: &str) -> anyhow::Result<Self> {
        let class = widestring(window_class);
        let hwnd = unsafe { FindWindowW(PCWSTR(class.as_ptr()), PCWSTR::null()) }
            .with_context(|| format!("game window class '{window_class}' not found"))?;
        Ok(Self {
            hwnd,
            cursor_hidden: false,
        })
    }
}

fn widestring(value: &str) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;
    std::ffi::OsStr::new(value)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

impl PointerDevice for Win32PointerDevice {
    fn cursor_screen_position(&self) -> (i32, i32) {
        let mut point = POINT::default();
        unsafe {
            if GetCursorPos(&mut point).is_ok() {
                (point.x, point.y)
            } else {
                (0, 0)
            }
        }
    }

    fn client_origin(&self) -> (i32, i32) {
        let mut rect = RECT::default();
        unsafe {
            let _ = GetWindowRect(self.hwnd, &mut rect);
            let x = rect.left + GetSystemMetrics(SM_CXBORDER) + GetSystemMetrics(SM_CXEDGE);
            let y = rect.top
                + GetSystemMetrics(SM_CYBORDER)
                + GetSystemMetrics(SM_CYEDGE)
                + GetSystemMetrics(SM_CYCAPTION);
            (x, y)
        }
    }

    fn button_down(&self, button: PhysicalButton) -> bool {
        let vk = match button {
            PhysicalButton::Left => VK_LBUTTON,
            PhysicalButton::Right => VK_RBUTTON,
            PhysicalButton::Middle => VK_MBUTTON,
        };
        unsafe { (GetAsyncKeyState(vk.0 as i32) as u16 & 0x8000) != 0 }
    }

    fn buttons_swapped(&self) -> bool {
        unsafe { GetSystemMetrics(SM_SWAPBUTTON) != 0 }
    }

    fn set_native_cursor_visible(&mut self, visible: bool) {
        // ShowCursor keeps an internal display counter; drive it one step at
        // most so repeated calls stay balanced.
        if self.cursor_hidden == !visible {
            return;
        }
        unsafe {
            let _ = ShowCursor(BOOL::from(visible));
        }
        self.cursor_hidden = !visible;
    }
}
