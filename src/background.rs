// Binds a ParticleField to a <canvas> on the page: keeps the canvas the size of
// the viewport, re-seeds on resize, and drives the field from a
// self-rescheduling requestAnimationFrame loop.

use crate::dom;
use crate::field::{FieldConfig, ParticleField};
use crate::logging::{self, ResultExt, Timer};
use crate::surface::CanvasSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub const CANVAS_ID: &str = "particle-canvas";

type FrameCallback = Closure<dyn FnMut()>;

// One animation frame: forget the id that just fired, draw, then ask for the
// next frame. A failed step or a refused request leaves nothing pending, which
// is what ends the loop.
fn run_frame<E>(
    frame_id: &mut Option<i32>,
    step: impl FnOnce() -> Result<(), E>,
    schedule: impl FnOnce() -> Option<i32>,
) -> Result<(), E> {
    *frame_id = None;
    step()?;
    *frame_id = schedule();
    Ok(())
}

struct Animation {
    field: ParticleField,
    surface: CanvasSurface,
    canvas: HtmlCanvasElement,
    frame_id: Option<i32>,
    profiling: bool,
}

impl Animation {
    fn resize_to(&mut self, window: &Window) -> Result<(), JsValue> {
        let _timer = if self.profiling {
            Some(Timer::new("ParticleBackground::resize"))
        } else {
            None
        };
        let (width, height) = fit_canvas(window, &self.canvas)?;
        self.field.resize(width, height);
        Ok(())
    }
}

#[wasm_bindgen]
pub struct ParticleBackground {
    window: Window,
    animation: Rc<RefCell<Animation>>,
    frame_callback: Rc<RefCell<Option<FrameCallback>>>,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Start the particle background on the canvas with id `canvas_id`.
    ///
    /// Returns `None` without touching the page when there is no such canvas
    /// or it has no 2d context.
    pub fn attach(canvas_id: &str, count: Option<u32>) -> Result<Option<ParticleBackground>, JsValue> {
        let window = dom::window()?;
        let document = dom::document(&window)?;

        let canvas = match document
            .get_element_by_id(canvas_id)
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => return Ok(None),
        };
        let context = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
        {
            Some(context) => context,
            None => return Ok(None),
        };

        let mut config = FieldConfig::default();
        if let Some(count) = count {
            config = config.with_count(count as usize);
        }
        let (width, height) = fit_canvas(&window, &canvas)?;
        let field = ParticleField::with_rng(width, height, config, StdRng::from_entropy());

        let mut background = ParticleBackground {
            window,
            animation: Rc::new(RefCell::new(Animation {
                field,
                surface: CanvasSurface::new(context),
                canvas,
                frame_id: None,
                profiling: false,
            })),
            frame_callback: Rc::new(RefCell::new(None)),
            resize_listener: None,
        };
        background.start_loop()?;
        background.listen_for_resize()?;
        Ok(Some(background))
    }

    /// Cancel the pending frame and unhook the resize listener.
    pub fn stop(&mut self) {
        let pending = self.animation.borrow_mut().frame_id.take();
        if let Some(id) = pending {
            self.window.cancel_animation_frame(id).ok_or_log_js_error();
        }
        // Dropping the frame closure breaks its reference to itself
        self.frame_callback.borrow_mut().take();

        if let Some(listener) = self.resize_listener.take() {
            self.window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
                .ok_or_log_js_error();
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.animation.borrow().frame_id.is_some()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.animation.borrow().field.particles().len()
    }

    /// Time each resize re-seed with console.time.
    #[wasm_bindgen(js_name = setProfiling)]
    pub fn set_profiling(&mut self, profiling: bool) {
        self.animation.borrow_mut().profiling = profiling;
    }
}

impl ParticleBackground {
    fn start_loop(&mut self) -> Result<(), JsValue> {
        let animation = Rc::clone(&self.animation);
        let callback = Rc::clone(&self.frame_callback);
        let window = self.window.clone();

        *self.frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut animation = animation.borrow_mut();
            let Animation {
                field,
                surface,
                frame_id,
                ..
            } = &mut *animation;
            let frame = run_frame(
                frame_id,
                || field.step(surface),
                || {
                    let callback = callback.borrow();
                    let callback = callback.as_ref()?;
                    window
                        .request_animation_frame(callback.as_ref().unchecked_ref())
                        .ok_or_log_js_error()
                },
            );
            if let Err(err) = frame {
                logging::error("particle frame failed", &err);
            }
        }) as Box<dyn FnMut()>));

        let id = match self.frame_callback.borrow().as_ref() {
            Some(callback) => self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())?,
            None => return Ok(()),
        };
        self.animation.borrow_mut().frame_id = Some(id);
        Ok(())
    }

    fn listen_for_resize(&mut self) -> Result<(), JsValue> {
        let animation = Rc::clone(&self.animation);
        let window = self.window.clone();
        let listener = Closure::wrap(Box::new(move || {
            animation
                .borrow_mut()
                .resize_to(&window)
                .ok_or_log_js_error();
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())?;
        self.resize_listener = Some(listener);
        Ok(())
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

// Match the canvas backing store to the viewport and return its size
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0).max(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0).max(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok((canvas.width() as f64, canvas.height() as f64))
}

#[cfg(test)]
mod tests {
    use super::run_frame;

    #[test]
    fn successful_frame_keeps_the_next_one_pending() {
        let mut frame_id = Some(1);
        let result = run_frame::<()>(&mut frame_id, || Ok(()), || Some(2));
        assert_eq!(result, Ok(()));
        assert_eq!(frame_id, Some(2));
    }

    #[test]
    fn failed_step_leaves_no_frame_pending() {
        let mut frame_id = Some(1);
        let mut scheduled = false;
        let result = run_frame(
            &mut frame_id,
            || Err("arc failed"),
            || {
                scheduled = true;
                Some(2)
            },
        );
        assert_eq!(result, Err("arc failed"));
        assert_eq!(frame_id, None);
        assert!(!scheduled);
    }

    #[test]
    fn refused_request_leaves_no_frame_pending() {
        let mut frame_id = Some(1);
        let result = run_frame::<()>(&mut frame_id, || Ok(()), || None);
        assert_eq!(result, Ok(()));
        assert_eq!(frame_id, None);
    }
}
