//! Drives a [`Scene`] on a `<canvas>`: frame loop, resize, teardown.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use psicologia_ambient::{AmbientConfig, Painter, Rgb, Rgba, Scene, SceneKind};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::dom;
use crate::error::DomError;

/// [`Painter`] over a 2d canvas context.
#[derive(Clone)]
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// Wrap an existing context.
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// The 2d context of `canvas`.
    pub fn for_canvas(canvas: &HtmlCanvasElement) -> Result<Self, DomError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(DomError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DomError::NoContext)?;
        Ok(Self::new(ctx))
    }

    /// Start a new circular path. A rejected arc (negative radius) is
    /// logged and leaves the path empty.
    fn disc(&self, x: f64, y: f64, radius: f64) -> bool {
        self.ctx.begin_path();
        match self.ctx.arc(x, y, radius, 0.0, TAU) {
            Ok(()) => true,
            Err(err) => {
                debug!(?err, radius, "arc rejected");
                false
            }
        }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn halo(&mut self, x: f64, y: f64, radius: f64, color: Rgb, fade: Rgb, alpha: f64) {
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius) {
            Ok(gradient) => gradient,
            Err(err) => {
                debug!(?err, radius, "radial gradient rejected");
                return;
            }
        };
        let stops = gradient
            .add_color_stop(0.0, &color.to_string())
            .and_then(|()| gradient.add_color_stop(1.0, &fade.with_alpha(0.0).to_string()));
        if let Err(err) = stops {
            debug!(?err, "gradient stop rejected");
            return;
        }
        if self.disc(x, y, radius) {
            self.ctx.set_global_alpha(alpha);
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill();
        }
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        if self.disc(x, y, radius) {
            self.ctx.set_global_alpha(color.alpha);
            self.ctx.set_fill_style_str(&color.rgb.to_string());
            self.ctx.fill();
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running canvas animation. Dropping it cancels the pending frame and
/// removes the resize listener.
pub struct CanvasAnimation {
    window: Window,
    frame: Rc<Cell<Option<i32>>>,
    tick: FrameCallback,
    on_resize: Closure<dyn FnMut()>,
}

impl CanvasAnimation {
    /// Size `canvas` to the viewport, seed a scene and start redrawing.
    ///
    /// With `animate` off a single still frame is drawn and only resizes
    /// redraw it.
    pub fn start(
        canvas: HtmlCanvasElement,
        kind: SceneKind,
        config: &AmbientConfig,
        animate: bool,
    ) -> Result<Self, DomError> {
        let window = dom::window()?;
        let mut painter = CanvasPainter::for_canvas(&canvas)?;

        let (width, height) = dom::viewport(&window);
        fit(&canvas, width, height);
        let scene = Scene::new(kind, config, width, height, seed());
        scene.draw(&mut painter);
        let scene = Rc::new(RefCell::new(scene));

        let on_resize = {
            let window = window.clone();
            let scene = Rc::clone(&scene);
            let mut painter = painter.clone();
            Closure::<dyn FnMut()>::new(move || {
                let (width, height) = dom::viewport(&window);
                fit(&canvas, width, height);
                let mut scene = scene.borrow_mut();
                scene.resize(width, height);
                scene.draw(&mut painter);
            })
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        let frame = Rc::new(Cell::new(None));
        let tick: FrameCallback = Rc::new(RefCell::new(None));
        if animate {
            let next = Rc::clone(&tick);
            let frame = Rc::clone(&frame);
            let window = window.clone();
            *tick.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
                {
                    let mut scene = scene.borrow_mut();
                    scene.step();
                    scene.draw(&mut painter);
                }
                if let Some(callback) = next.borrow().as_ref() {
                    frame.set(request_frame(&window, callback));
                }
            }));
        }
        if let Some(callback) = tick.borrow().as_ref() {
            frame.set(request_frame(&window, callback));
        }

        debug!(kind = kind.as_str(), width, height, animate, "ambient animation started");
        Ok(Self {
            window,
            frame,
            tick,
            on_resize,
        })
    }

    /// True while a frame callback is scheduled.
    pub fn is_animating(&self) -> bool {
        self.frame.get().is_some()
    }
}

impl Drop for CanvasAnimation {
    fn drop(&mut self) {
        if let Some(id) = self.frame.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                debug!(?err, id, "cancel animation frame failed");
            }
        }
        // The frame closure holds a handle to itself; releasing it here
        // breaks the cycle.
        self.tick.borrow_mut().take();
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            debug!(?err, "resize listener removal failed");
        }
        debug!("ambient animation stopped");
    }
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Option<i32> {
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            debug!(?err, "animation frame request failed");
            None
        }
    }
}

fn fit(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    now.rotate_left(32) ^ noise
}
