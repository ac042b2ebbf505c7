use winit::window::{Window, WindowId};

use crate::device::GlDevice;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl WindowCtx<'_> {
    /// Asks the platform for a `RedrawRequested` pass.
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Context passed to `core::App` callbacks.
///
/// `'a` is the duration of the callback invocation.
pub struct FrameCtx<'a> {
    pub window: WindowCtx<'a>,
    pub device: &'a mut GlDevice,
}

impl FrameCtx<'_> {
    /// Returns the loaded GL function table.
    pub fn gl(&self) -> &glow::Context {
        self.device.gl()
    }

    /// Swaps the back buffer to the window. Failures are logged, not raised.
    pub fn present(&self) {
        self.window.window.pre_present_notify();
        if let Err(e) = self.device.swap_buffers() {
            log::error!("{e:#}");
        }
    }
}
