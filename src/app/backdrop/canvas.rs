use rand::{rngs::SmallRng, SeedableRng};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::scene::camera::{Camera, Viewport};
use crate::scene::render::{build_draw_list, Draw, DrawCommand};
use crate::scene::{stage_lights, FrameClock, SceneHost};
use crate::section::Section;

#[derive(Error, Debug, Clone)]
pub enum RenderError {
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("canvas call failed: {0}")]
    Js(String),
}

fn js_err(e: wasm_bindgen::JsValue) -> RenderError {
    RenderError::Js(format!("{e:?}"))
}

fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
}

/// 2D context of the background canvas, kept in step with the element size.
struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    dpr: f64,
}

impl CanvasRenderer {
    fn new(canvas: &HtmlCanvasElement) -> Result<Self, RenderError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(RenderError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::NoContext)?;
        let mut renderer = Self {
            ctx,
            width: 0,
            height: 0,
            dpr: 0.0,
        };
        renderer.fit(canvas)?;
        Ok(renderer)
    }

    /// Resizes the backing store when the element or pixel ratio changed.
    fn fit(&mut self, canvas: &HtmlCanvasElement) -> Result<(), RenderError> {
        let width = canvas.client_width().max(0) as u32;
        let height = canvas.client_height().max(0) as u32;
        // cap at 2x like most WebGL setups do
        let dpr = device_pixel_ratio().clamp(1.0, 2.0);
        if width == self.width && height == self.height && dpr == self.dpr {
            return Ok(());
        }
        self.width = width;
        self.height = height;
        self.dpr = dpr;
        canvas.set_width((width as f64 * dpr) as u32);
        canvas.set_height((height as f64 * dpr) as u32);
        self.ctx
            .set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(js_err)?;
        log::debug!("background canvas: {width}x{height} @{dpr}x");
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    fn draw(&self, draws: &[Draw]) -> Result<(), RenderError> {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        for draw in draws {
            match &draw.command {
                DrawCommand::Polygon { points, fill } => {
                    let Some(((x0, y0), rest)) = points.split_first() else {
                        continue;
                    };
                    ctx.begin_path();
                    ctx.move_to(*x0 as f64, *y0 as f64);
                    for (x, y) in rest {
                        ctx.line_to(*x as f64, *y as f64);
                    }
                    ctx.close_path();
                    ctx.set_fill_style_str(&fill.css());
                    ctx.fill();
                }
                DrawCommand::Polyline {
                    points,
                    stroke,
                    width,
                } => {
                    let Some(((x0, y0), rest)) = points.split_first() else {
                        continue;
                    };
                    ctx.begin_path();
                    ctx.move_to(*x0 as f64, *y0 as f64);
                    for (x, y) in rest {
                        ctx.line_to(*x as f64, *y as f64);
                    }
                    ctx.set_line_width(*width as f64);
                    ctx.set_stroke_style_str(&stroke.css());
                    ctx.stroke();
                }
                DrawCommand::Disc {
                    center: (x, y),
                    radius,
                    fill,
                } => {
                    ctx.begin_path();
                    ctx.arc(
                        *x as f64,
                        *y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    )
                    .map_err(js_err)?;
                    ctx.set_fill_style_str(&fill.css());
                    ctx.fill();
                }
                DrawCommand::Text {
                    at: (x, y),
                    text,
                    size,
                    fill,
                } => {
                    ctx.set_font(&format!("600 {:.1}px sans-serif", size.max(1.0)));
                    ctx.set_text_align("center");
                    ctx.set_text_baseline("middle");
                    ctx.set_fill_style_str(&fill.css());
                    ctx.fill_text(text, *x as f64, *y as f64).map_err(js_err)?;
                }
            }
        }
        Ok(())
    }
}

/// Everything the background owns: the mounted scene, its RNG, and the canvas
/// context once the element is attached.
pub struct Stage {
    host: SceneHost,
    rng: SmallRng,
    camera: Camera,
    renderer: Option<CanvasRenderer>,
    started_at: Option<f64>,
    failed: bool,
}

impl Stage {
    pub fn new() -> Self {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        Self {
            host: SceneHost::new(),
            rng: SmallRng::seed_from_u64(seed),
            camera: Camera::default(),
            renderer: None,
            started_at: None,
            failed: false,
        }
    }

    /// One animation frame: sync the mounted scene with `section`, advance it
    /// and draw it. Timings are `requestAnimationFrame` milliseconds.
    pub fn frame(&mut self, canvas: &HtmlCanvasElement, section: Section, now: f64, delta: f64) {
        if self.failed {
            return;
        }
        if let Err(e) = self.try_frame(canvas, section, now, delta) {
            log::error!("background disabled: {e}");
            self.failed = true;
            self.host.clear();
        }
    }

    fn try_frame(
        &mut self,
        canvas: &HtmlCanvasElement,
        section: Section,
        now: f64,
        delta: f64,
    ) -> Result<(), RenderError> {
        match self.renderer.as_mut() {
            Some(r) => r.fit(canvas)?,
            None => self.renderer = Some(CanvasRenderer::new(canvas)?),
        }
        let Some(renderer) = self.renderer.as_ref() else {
            return Ok(());
        };

        self.host.show(section, &mut self.rng);
        let started_at = *self.started_at.get_or_insert(now);
        self.host
            .tick(&FrameClock::from_millis(now - started_at, delta));

        let viewport = renderer.viewport();
        if viewport.is_empty() {
            return Ok(());
        }
        let Some(scene) = self.host.scene() else {
            return Ok(());
        };
        let mut lights = stage_lights().to_vec();
        lights.extend(scene.lights());
        let draws = build_draw_list(&scene.nodes(), &lights, &self.camera, viewport);
        renderer.draw(&draws)
    }

    pub fn unmount(&mut self) {
        self.host.clear();
        self.renderer = None;
    }
}
