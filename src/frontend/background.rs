use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use super::dom::{device_pixel_ratio, prefers_reduced_motion, viewport};
use crate::lifecycle::Subscriptions;
use crate::logging::{client_log_level, log_event, LogLevel};
use crate::motion::{FrameContext, SceneGeometry, Viewport, PARTICLE_OPACITY, WIREFRAME_OPACITY};
use crate::theme::Theme;

struct BackgroundScene {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    geometry: SceneGeometry,
    frame: Rc<RefCell<FrameContext>>,
    pending: RefCell<Option<AnimationFrame>>,
}

impl BackgroundScene {
    fn fit_surface(&self, viewport: Viewport) {
        let ratio = device_pixel_ratio();
        self.canvas
            .set_width((f64::from(viewport.width) * ratio).round() as u32);
        self.canvas
            .set_height((f64::from(viewport.height) * ratio).round() as u32);
        // Resizing the canvas resets its transform.
        let _ = self.context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
    }

    fn resized(&self) {
        let viewport = viewport();
        self.fit_surface(viewport);
        self.frame.borrow_mut().resized(viewport);
    }

    fn schedule(self: &Rc<Self>) {
        let scene = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            scene.draw();
            scene.schedule();
        });
        *self.pending.borrow_mut() = Some(handle);
    }

    fn stop(&self) {
        self.pending.borrow_mut().take();
    }

    fn draw(&self) {
        let mut frame = self.frame.borrow_mut();
        let colors = frame.advance();
        let camera = frame.camera();
        let viewport = camera.viewport();
        let ctx = &self.context;

        let _ = ctx.set_global_composite_operation("source-over");
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(&colors.backdrop.css());
        ctx.fill_rect(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        );

        let shell = frame.shell_rotation().matrix();
        ctx.set_global_alpha(f64::from(WIREFRAME_OPACITY));
        ctx.set_stroke_style_str(&colors.wireframe.css());
        ctx.set_line_width(1.0);
        ctx.begin_path();
        for (from, to) in &self.geometry.wireframe {
            let (Some(from), Some(to)) = (camera.project(&shell, *from), camera.project(&shell, *to))
            else {
                continue;
            };
            ctx.move_to(f64::from(from.x), f64::from(from.y));
            ctx.line_to(f64::from(to.x), f64::from(to.y));
        }
        ctx.stroke();

        let field = frame.field_rotation().matrix();
        if colors.additive {
            let _ = ctx.set_global_composite_operation("lighter");
        }
        ctx.set_global_alpha(f64::from(PARTICLE_OPACITY));
        ctx.set_fill_style_str(&colors.particles.css());
        for particle in &self.geometry.particles {
            let Some(point) = camera.project(&field, *particle) else {
                continue;
            };
            let size = f64::from(camera.point_size(point.depth));
            ctx.fill_rect(
                f64::from(point.x) - size / 2.0,
                f64::from(point.y) - size / 2.0,
                size,
                size,
            );
        }
    }
}

/// Cancels the frame loop; the pending callback owns the last strong
/// reference cycle back to the scene.
struct FrameLoop(Rc<BackgroundScene>);

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.0.stop();
    }
}

/// Shrinks the canvas so the browser can drop its backing store.
struct SurfaceRelease(HtmlCanvasElement);

impl Drop for SurfaceRelease {
    fn drop(&mut self) {
        self.0.set_width(0);
        self.0.set_height(0);
    }
}

struct MountedScene {
    frame: Rc<RefCell<FrameContext>>,
    subscriptions: Subscriptions,
}

fn mount_scene(canvas: HtmlCanvasElement, theme: Theme) -> Result<MountedScene, JsValue> {
    let win = window().ok_or("window unavailable")?;
    let document = win.document().ok_or("document unavailable")?;
    let context = canvas
        .get_context("2d")?
        .ok_or("2d canvas unavailable")?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let viewport = viewport();
    let frame = Rc::new(RefCell::new(FrameContext::new(
        viewport,
        theme,
        prefers_reduced_motion(),
    )));
    let scene = Rc::new(BackgroundScene {
        canvas: canvas.clone(),
        context,
        geometry: SceneGeometry::build(|| js_sys::Math::random() as f32),
        frame: Rc::clone(&frame),
        pending: RefCell::new(None),
    });
    scene.fit_surface(viewport);

    let mut subscriptions = Subscriptions::new();
    {
        let frame = Rc::clone(&frame);
        subscriptions.hold(EventListener::new(&document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                frame
                    .borrow_mut()
                    .pointer_moved(event.client_x() as f32, event.client_y() as f32);
            }
        }));
    }
    {
        let scene = Rc::clone(&scene);
        subscriptions.hold(EventListener::new(&win, "resize", move |_| scene.resized()));
    }

    scene.schedule();
    subscriptions.hold(FrameLoop(scene));
    subscriptions.hold(SurfaceRelease(canvas));

    Ok(MountedScene {
        frame,
        subscriptions,
    })
}

#[derive(Properties, PartialEq)]
pub struct BackgroundProps {
    pub theme: Theme,
}

/// Full-viewport particle shell behind the page. Without a 2D canvas the
/// container's plain backdrop color shows instead.
#[function_component(Background)]
pub fn background(props: &BackgroundProps) -> Html {
    let canvas_ref = use_node_ref();
    let frame_slot = use_mut_ref(|| None::<Rc<RefCell<FrameContext>>>);

    {
        let canvas_ref = canvas_ref.clone();
        let frame_slot = frame_slot.clone();
        let theme = props.theme;
        use_effect_with((), move |_| {
            let mounted = match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => mount_scene(canvas, theme).map_err(|error| {
                    error.as_string().unwrap_or_else(|| "canvas setup failed".to_string())
                }),
                None => Err("canvas host missing".to_string()),
            };

            let subscriptions = match mounted {
                Ok(MountedScene {
                    frame,
                    subscriptions,
                }) => {
                    *frame_slot.borrow_mut() = Some(frame);
                    log_event(
                        client_log_level(),
                        LogLevel::Debug,
                        "background.mounted",
                        json!({ "subscriptions": subscriptions.len() }),
                    );
                    Some(subscriptions)
                }
                Err(reason) => {
                    log_event(
                        client_log_level(),
                        LogLevel::Debug,
                        "background.fallback",
                        json!({ "reason": reason }),
                    );
                    None
                }
            };

            move || {
                frame_slot.borrow_mut().take();
                drop(subscriptions);
                log_event(
                    client_log_level(),
                    LogLevel::Debug,
                    "background.unmounted",
                    json!({ "live_subscriptions": crate::lifecycle::live_subscriptions() }),
                );
            }
        });
    }

    {
        let frame_slot = frame_slot.clone();
        use_effect_with(props.theme, move |theme| {
            if let Some(frame) = frame_slot.borrow().as_ref() {
                frame.borrow_mut().theme_changed(*theme);
            }
            || ()
        });
    }

    html! {
        <div class="scene-backdrop" aria-hidden="true">
            <canvas ref={canvas_ref} class="scene-canvas" />
        </div>
    }
}
