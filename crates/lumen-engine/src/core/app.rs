use anyhow::Result;

use crate::device::GlDevice;
use crate::input::InputEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// All callbacks run on the thread that owns the GL context, with the context
/// current.
pub trait App {
    /// Called once after the window and context exist, before any other
    /// callback. An error aborts startup.
    fn on_start(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()>;

    /// Called for each translated input event.
    ///
    /// Handlers may draw and call [`FrameCtx::present`] directly; nothing is
    /// queued for a later frame.
    fn on_input(&mut self, ctx: &mut FrameCtx<'_>, event: &InputEvent) -> AppControl {
        let _ = (ctx, event);
        AppControl::Continue
    }

    /// Called when the platform asks for the window contents. The runtime
    /// presents afterwards.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called once before the context is destroyed.
    fn on_exit(&mut self, device: &GlDevice) {
        let _ = device;
    }
}
