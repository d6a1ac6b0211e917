//! Browser binding.
//!
//! DESIGN
//! ======
//! Everything here is glue: it owns the canvas context, the
//! `requestAnimationFrame` callback and the window listeners, and forwards
//! them to [`FieldCore`] and [`Animation`]. The mounted state lives in one
//! `Rc<RefCell<Mounted>>`; every JS closure holds only a `Weak` to it, so
//! dropping the [`ParticlesHandle`] frees the field even if the host keeps a
//! stale closure around.
//!
//! Unmounting cancels the outstanding frame, disarms the resize timer and
//! removes both listeners before returning. After that the canvas is never
//! drawn to again.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};

use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::field::FieldCore;
use crate::geom::{Point, Viewport};
use crate::scheduler::{Animation, FrameId, FrameScheduler, LoopState};
use crate::surface::Surface;
use crate::theme::{Rgba, Theme};

type FrameCallback = Closure<dyn FnMut(f64)>;
type EventCallback = Closure<dyn FnMut(web_sys::Event)>;

// ── Canvas surface ──────────────────────────────────────────────

/// [`Surface`] over a canvas 2D context. The only code that touches it.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NoContext`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, FieldError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| FieldError::NoContext)?
            .ok_or(FieldError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::NoContext)?;
        let viewport = Viewport::new(f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(Self { canvas, ctx, viewport })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.canvas.set_width(viewport.width.max(0.0) as u32);
        self.canvas.set_height(viewport.height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x, center.y, radius, 0.0, TAU) {
            warn!(error = ?e, "arc rejected");
            return;
        }
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}

// ── Frame scheduler ─────────────────────────────────────────────

/// [`FrameScheduler`] backed by `window.requestAnimationFrame`.
pub struct RafScheduler {
    window: Window,
    callback: Option<Rc<FrameCallback>>,
}

impl RafScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window, callback: None }
    }

    fn bind(&mut self, callback: Rc<FrameCallback>) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&mut self) -> Result<FrameId, FieldError> {
        let Some(cb) = self.callback.as_ref() else {
            return Err(FieldError::HostCall("frame callback not bound".into()));
        };
        let handle = self
            .window
            .request_animation_frame((**cb).as_ref().unchecked_ref())
            .map_err(|e| FieldError::HostCall(format!("{e:?}")))?;
        Ok(FrameId(u64::from(handle.unsigned_abs())))
    }

    fn cancel(&mut self, id: FrameId) {
        let Ok(handle) = i32::try_from(id.0) else {
            return;
        };
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            warn!(error = ?e, frame = id.0, "cancelAnimationFrame failed");
        }
    }
}

// ── Mount ───────────────────────────────────────────────────────

struct Mounted {
    core: FieldCore,
    surface: CanvasSurface,
    animation: Animation<RafScheduler>,
}

impl Mounted {
    fn frame(&mut self, now_ms: f64) {
        let Some(id) = self.animation.pending() else {
            return;
        };
        let Self { core, surface, animation } = self;
        animation.on_frame(id, now_ms, core, surface);
    }
}

struct Listener {
    event: &'static str,
    callback: EventCallback,
}

/// A running particle background. Dropping it unmounts.
pub struct ParticlesHandle {
    window: Window,
    state: Rc<RefCell<Mounted>>,
    listeners: Vec<Listener>,
    _frame: Rc<FrameCallback>,
}

fn window() -> Result<Window, FieldError> {
    web_sys::window().ok_or(FieldError::Host("window"))
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map_or(0.0, |p| p.now())
}

fn window_viewport(window: &Window) -> Result<Viewport, FieldError> {
    let dim = |v: Result<JsValue, JsValue>, name: &'static str| match v {
        Ok(v) => v.as_f64().ok_or(FieldError::Host(name)),
        Err(_) => Err(FieldError::Host(name)),
    };
    Ok(Viewport::new(dim(window.inner_width(), "innerWidth")?, dim(window.inner_height(), "innerHeight")?))
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

/// Mount the particle field on `canvas` using the default config.
///
/// # Errors
///
/// Returns [`FieldError::NoContext`] if the canvas has no 2D context, or a
/// host error if the window or a listener registration is unavailable.
pub fn mount(canvas: HtmlCanvasElement, theme: Theme) -> Result<ParticlesHandle, FieldError> {
    mount_with(canvas, theme, FieldConfig::default())
}

/// Mount the particle field on `canvas` with an explicit config.
///
/// # Errors
///
/// See [`mount`]; also rejects an invalid `config`.
pub fn mount_with(canvas: HtmlCanvasElement, theme: Theme, config: FieldConfig) -> Result<ParticlesHandle, FieldError> {
    let window = window()?;
    let viewport = window_viewport(&window)?;
    let mut surface = CanvasSurface::new(canvas)?;
    surface.resize(viewport);
    let core = FieldCore::new(config, theme, viewport, random_seed())?;
    let animation = Animation::new(RafScheduler::new(window.clone()));
    let state = Rc::new(RefCell::new(Mounted { core, surface, animation }));

    let weak = Rc::downgrade(&state);
    let frame: Rc<FrameCallback> = Rc::new(Closure::wrap(Box::new(move |ts: f64| {
        if let Some(state) = weak.upgrade() {
            state.borrow_mut().frame(ts);
        }
    }) as Box<dyn FnMut(f64)>));
    state.borrow_mut().animation.scheduler_mut().bind(Rc::clone(&frame));

    let mut handle = ParticlesHandle { window, state, listeners: Vec::new(), _frame: frame };
    handle.listen("resize", resize_listener(Rc::downgrade(&handle.state), handle.window.clone()))?;
    handle.listen("mousemove", pointer_listener(Rc::downgrade(&handle.state)))?;
    handle.state.borrow_mut().animation.start()?;

    info!(width = viewport.width, height = viewport.height, %theme, "particle background mounted");
    Ok(handle)
}

fn resize_listener(state: Weak<RefCell<Mounted>>, window: Window) -> EventCallback {
    Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let Some(state) = state.upgrade() else { return };
        match window_viewport(&window) {
            Ok(viewport) => {
                let now = now_ms(&window);
                let mut mounted = state.borrow_mut();
                let Mounted { core, surface, .. } = &mut *mounted;
                core.on_resize(viewport, now, surface);
            }
            Err(e) => warn!(error = %e, "could not measure viewport"),
        }
    }) as Box<dyn FnMut(web_sys::Event)>)
}

fn pointer_listener(state: Weak<RefCell<Mounted>>) -> EventCallback {
    Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(state) = state.upgrade() else { return };
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            let p = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            state.borrow_mut().core.set_pointer(p);
        }
    }) as Box<dyn FnMut(web_sys::Event)>)
}

impl ParticlesHandle {
    fn listen(&mut self, event: &'static str, callback: EventCallback) -> Result<(), FieldError> {
        self.window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| FieldError::HostCall(format!("{e:?}")))?;
        self.listeners.push(Listener { event, callback });
        Ok(())
    }

    /// Switch palette; takes effect on the next frame.
    pub fn set_theme(&self, theme: Theme) {
        self.state.borrow_mut().core.set_theme(theme);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.borrow().animation.state() == LoopState::Running
    }

    /// Stop the loop and release all host resources. Idempotent.
    pub fn unmount(&mut self) {
        {
            let mut mounted = self.state.borrow_mut();
            mounted.animation.stop();
            mounted.core.teardown();
        }
        for Listener { event, callback } in self.listeners.drain(..) {
            if let Err(e) = self.window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                warn!(error = ?e, event, "removeEventListener failed");
            }
        }
        debug!("particle background unmounted");
    }
}

impl Drop for ParticlesHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

// ── JS surface ──────────────────────────────────────────────────

/// JS-facing wrapper around [`ParticlesHandle`].
///
/// A canvas without a 2D context leaves the background inert instead of
/// throwing.
#[wasm_bindgen]
pub struct ParticleBackground {
    handle: Option<ParticlesHandle>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// # Errors
    ///
    /// Throws for host failures other than a missing 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, theme: &str) -> Result<ParticleBackground, JsError> {
        let theme = theme.parse::<Theme>().unwrap_or_else(|e| {
            warn!(error = %e, "unknown theme, using dark");
            Theme::Dark
        });
        match mount(canvas, theme) {
            Ok(handle) => Ok(Self { handle: Some(handle) }),
            Err(FieldError::NoContext) => {
                warn!("canvas has no 2d context, background disabled");
                Ok(Self { handle: None })
            }
            Err(e) => Err(JsError::new(&e.to_string())),
        }
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, theme: &str) {
        match (theme.parse::<Theme>(), self.handle.as_ref()) {
            (Ok(theme), Some(handle)) => handle.set_theme(theme),
            (Err(e), _) => warn!(error = %e, "ignoring theme change"),
            (Ok(_), None) => {}
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.handle.as_ref().is_some_and(ParticlesHandle::is_running)
    }

    pub fn unmount(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.unmount();
        }
    }
}

/// Route `tracing` output to the browser console. Call once at startup.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
}
