use std::num::NonZeroU32;
use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, bail, Context, Result};
use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::GlInit;

/// Driver identification strings queried from a live context.
#[derive(Debug, Clone)]
pub struct GlInfo {
    pub version: String,
    pub glsl_version: String,
    pub renderer: String,
}

/// Owns the GL context, its window surface, and the loaded function table.
///
/// This type is the low-level rendering context:
/// - creates the window together with a matching framebuffer config
/// - creates a context at the requested version/profile and makes it current
/// - swaps buffers and tracks the drawable size
pub struct GlDevice {
    /// Loaded GL entry points. Declared first so it drops before the context.
    gl: glow::Context,

    /// Window surface the context renders into.
    surface: Surface<WindowSurface>,

    /// The context, current on the thread that created it.
    context: PossiblyCurrentContext,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,
}

impl GlDevice {
    /// Creates a window and a GL context bound to it.
    ///
    /// The window has to be created by the display builder so that its visual
    /// matches the chosen framebuffer config on X11.
    pub fn create(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        init: &GlInit,
    ) -> Result<(Window, Self)> {
        let template = ConfigTemplateBuilder::new();
        let built = catch_missing_config(|| {
            DisplayBuilder::new()
                .with_window_attributes(Some(attrs))
                .build(event_loop, template, pick_config)
        })
        .context("failed to create window")?;
        let (window, config) = built.map_err(|e| anyhow!("failed to create window: {e}"))?;

        let window = window.context("failed to create window: no window returned")?;
        let device = Self::new(&window, &config, init).context("failed to create OpenGL context")?;

        Ok((window, device))
    }

    fn new(window: &Window, config: &Config, init: &GlInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let GlInit {
            version: (major, minor),
            core_profile,
            vsync,
        } = *init;

        let raw_handle = window
            .window_handle()
            .context("window handle unavailable")?
            .as_raw();

        let profile = if core_profile {
            GlProfile::Core
        } else {
            GlProfile::Compatibility
        };

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(profile)
            .build(Some(raw_handle));

        let display = config.display();

        let not_current = unsafe { display.create_context(config, &context_attrs) }
            .with_context(|| format!("driver refused a {major}.{minor} context"))?;

        let surface_attrs = window
            .build_surface_attributes(Default::default())
            .context("failed to describe window surface")?;

        let surface = unsafe { display.create_window_surface(config, &surface_attrs) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make context current")?;

        let interval = if vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("failed to set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name))
        };

        Ok(Self {
            gl,
            surface,
            context,
            size,
        })
    }

    /// Returns the loaded GL function table.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Queries version, GLSL version, and renderer strings.
    pub fn info(&self) -> GlInfo {
        unsafe {
            GlInfo {
                version: self.gl.get_parameter_string(glow::VERSION),
                glsl_version: self.gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION),
                renderer: self.gl.get_parameter_string(glow::RENDERER),
            }
        }
    }

    /// Resizes the surface and the viewport. Zero-sized requests are ignored.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let (Some(w), Some(h)) = (NonZeroU32::new(new_size.width), NonZeroU32::new(new_size.height))
        else {
            return;
        };

        self.surface.resize(&self.context, w, h);
        unsafe {
            self.gl
                .viewport(0, 0, new_size.width as i32, new_size.height as i32);
        }
        self.size = new_size;
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}

/// Unwind payload raised by [`pick_config`] when the display offers no
/// framebuffer configs; the picker must return a `Config`.
#[derive(Debug)]
struct NoFramebufferConfig;

/// Takes the config with the most samples.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    match configs.max_by_key(|c| c.num_samples()) {
        Some(config) => config,
        // `resume_unwind` skips the panic hook; nothing is printed.
        None => panic::resume_unwind(Box::new(NoFramebufferConfig)),
    }
}

/// Runs `f`, turning a [`NoFramebufferConfig`] unwind into an error. Any other
/// panic keeps unwinding.
fn catch_missing_config<T>(f: impl FnOnce() -> T) -> Result<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) if payload.is::<NoFramebufferConfig>() => {
            bail!("display offered no framebuffer configs")
        }
        Err(payload) => panic::resume_unwind(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_list_is_an_error() {
        let err = catch_missing_config(|| pick_config(Box::new(std::iter::empty::<Config>())))
            .expect_err("no configs must not yield a config");
        assert_eq!(err.to_string(), "display offered no framebuffer configs");
    }

    #[test]
    fn normal_return_passes_through() {
        assert_eq!(catch_missing_config(|| 7).ok(), Some(7));
    }

    #[test]
    #[should_panic(expected = "unrelated")]
    fn other_panics_keep_unwinding() {
        let _ = catch_missing_config(|| -> u8 { panic!("unrelated") });
    }
}
