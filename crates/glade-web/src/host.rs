use glade_engine::{FrameRequest, Host, ResizeSubscription, SurfaceSize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::canvas::CanvasPainter;

/// Viewport fallback when the window reports no size.
const FALLBACK_WIDTH: f32 = 800.0;
const FALLBACK_HEIGHT: f32 = 600.0;

/// Browser host: requestAnimationFrame for frames, `window` resize events
/// for viewport changes, a `<canvas>` element for the surface.
///
/// The callbacks route back into the mounted instance through
/// `crate::with_mount`, because the mount owns this host.
pub struct WebHost {
    window: Window,
    canvas: HtmlCanvasElement,
    on_frame: Closure<dyn FnMut(f64)>,
    on_resize: Closure<dyn FnMut()>,
}

impl WebHost {
    /// Look up `canvas_id` in the current document.
    pub fn new(canvas_id: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let canvas = window
            .document()?
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;

        let on_frame = Closure::<dyn FnMut(f64)>::new(|_timestamp: f64| {
            crate::with_mount(|m| m.on_frame());
        });
        let on_resize = Closure::<dyn FnMut()>::new(|| {
            crate::with_mount(|m| m.on_resize());
        });

        Some(Self {
            window,
            canvas,
            on_frame,
            on_resize,
        })
    }

    fn dimension(value: Result<JsValue, JsValue>, fallback: f32) -> f32 {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|v| v as f32)
            .unwrap_or(fallback)
    }
}

impl Host for WebHost {
    type Surface = CanvasPainter;

    fn acquire_surface(&self) -> Option<CanvasPainter> {
        let ctx = self
            .canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasPainter::new(self.canvas.clone(), ctx))
    }

    fn viewport(&self) -> SurfaceSize {
        SurfaceSize::new(
            Self::dimension(self.window.inner_width(), FALLBACK_WIDTH),
            Self::dimension(self.window.inner_height(), FALLBACK_HEIGHT),
        )
    }

    fn seed(&self) -> u64 {
        (js_sys::Math::random() * (1u64 << 53) as f64) as u64
    }

    fn request_frame(&self) -> Option<FrameRequest> {
        match self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameRequest(id as u32)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&self, request: FrameRequest) {
        if let Err(e) = self.window.cancel_animation_frame(request.0 as i32) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }

    fn subscribe_resize(&self) -> Option<ResizeSubscription> {
        match self
            .window
            .add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            // One listener per host, so the handle carries no information.
            Ok(()) => Some(ResizeSubscription(0)),
            Err(e) => {
                log::warn!("resize listener registration failed: {:?}", e);
                None
            }
        }
    }

    fn unsubscribe_resize(&self, _subscription: ResizeSubscription) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::warn!("resize listener removal failed: {:?}", e);
        }
    }
}
