use crate::constants::*;
use crate::dom::{self, ImageSlot};
use crate::overlay;
use crate::projection::{
    bounds, circle, lift_outline, particle_world, point_size_px, project, project_all,
    rotate_x_about, rounded_rect,
};
use card_core::{Camera, Scene};
use glam::{Mat4, Vec2, Vec3};
use std::f64::consts::TAU;
use web_sys as web;

// ===================== Canvas 2D scene =====================

/// Painter's-algorithm rendition of the card scene on a 2D canvas.
///
/// Holds the mutable scene-graph values the frame driver pushes each tick and
/// draws them back to front on `render`.
pub struct CanvasScene {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    document: web::Document,

    background: ImageSlot,
    message_texture: ImageSlot,
    background_offset: Vec2,

    // None once the seal has been removed
    seal_scale: Option<f32>,
    flap_rotation: f32,
    message_opacity: f32,
    last_text_opacity: Option<f32>,

    particles: Vec<Vec3>,
    particle_offset_y: f32,
    particle_rotation_y: f32,

    seal_outline: Vec<Vec2>,
    paper_outline: Vec<Vec2>,
}

impl CanvasScene {
    pub fn new(canvas: web::HtmlCanvasElement, document: web::Document) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            document,
            background: dom::load_image(BACKGROUND_SRC),
            message_texture: dom::load_image(MESSAGE_SRC),
            background_offset: Vec2::ZERO,
            seal_scale: Some(1.0),
            flap_rotation: card_core::FLAP_CLOSED_ANGLE,
            message_opacity: 0.0,
            last_text_opacity: None,
            particles: Vec::new(),
            particle_offset_y: 0.0,
            particle_rotation_y: 0.0,
            seal_outline: circle(SEAL_RADIUS, SEAL_SEGMENTS),
            paper_outline: rounded_rect(
                PAPER_WIDTH,
                PAPER_HEIGHT,
                PAPER_CORNER_RADIUS,
                PAPER_CORNER_SEGMENTS,
            ),
        })
    }

    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn draw_background(&self, w: f32, h: f32) {
        self.ctx.set_fill_style_str(CLEAR_COLOR);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
        if let Some(img) = self.background.borrow().as_ref() {
            let dw = w * BACKGROUND_OVERSCAN;
            let dh = h * BACKGROUND_OVERSCAN;
            // A positive texture offset slides the image left/down on screen
            let dx = (w - dw) * 0.5 - self.background_offset.x * w;
            let dy = (h - dh) * 0.5 + self.background_offset.y * h;
            _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img, dx as f64, dy as f64, dw as f64, dh as f64,
            );
        }
    }

    fn fill_polygon(&self, points: &[Vec2], fill: &str, stroke: Option<(&str, f64)>) {
        let Some(first) = points.first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in &points[1..] {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        if let Some((color, width)) = stroke {
            self.ctx.set_stroke_style_str(color);
            self.ctx.set_line_width(width);
            self.ctx.stroke();
        }
    }

    /// Draw particles whose depth is on the requested side of `split_depth`.
    fn draw_particles(&self, view_proj: &Mat4, w: f32, h: f32, split_depth: f32, far: bool) {
        self.ctx.save();
        _ = self.ctx.set_global_composite_operation("lighter");
        for p in &self.particles {
            let world = particle_world(*p, self.particle_offset_y, self.particle_rotation_y);
            let Some(pr) = project(view_proj, world, w, h) else {
                continue;
            };
            if (pr.depth > split_depth) != far {
                continue;
            }
            let r = (point_size_px(PARTICLE_SIZE, pr.depth, h) * 0.5).max(PARTICLE_MIN_PX) as f64;
            let (x, y) = (pr.pos.x as f64, pr.pos.y as f64);
            self.ctx.set_global_alpha(PARTICLE_OPACITY as f64);
            self.ctx.set_fill_style_str(PARTICLE_GLOW_COLOR);
            self.ctx.begin_path();
            _ = self.ctx.arc(x, y, r, 0.0, TAU);
            self.ctx.fill();
            self.ctx.set_fill_style_str(PARTICLE_CORE_COLOR);
            self.ctx.begin_path();
            _ = self.ctx.arc(x, y, r * 0.3, 0.0, TAU);
            self.ctx.fill();
        }
        self.ctx.restore();
    }

    fn draw_card(&self, view_proj: &Mat4, w: f32, h: f32) {
        let face = [
            Vec3::new(-CARD_HALF_WIDTH, -CARD_HALF_HEIGHT, CARD_FRONT_Z),
            Vec3::new(CARD_HALF_WIDTH, -CARD_HALF_HEIGHT, CARD_FRONT_Z),
            Vec3::new(CARD_HALF_WIDTH, CARD_HALF_HEIGHT, CARD_FRONT_Z),
            Vec3::new(-CARD_HALF_WIDTH, CARD_HALF_HEIGHT, CARD_FRONT_Z),
        ];
        if let Some(pts) = project_all(view_proj, &face, w, h) {
            self.fill_polygon(&pts, CARD_COLOR, Some((CARD_EDGE_COLOR, 1.0)));
        }

        let hinge = Vec3::from_array(FLAP_HINGE);
        let flap = [
            Vec3::new(-FLAP_BASE_HALF_WIDTH, 0.0, 0.0),
            Vec3::new(FLAP_BASE_HALF_WIDTH, 0.0, 0.0),
            Vec3::new(0.0, FLAP_HEIGHT, 0.0),
        ]
        .map(|v| rotate_x_about(v, self.flap_rotation, hinge));
        if let Some(pts) = project_all(view_proj, &flap, w, h) {
            self.fill_polygon(&pts, FLAP_COLOR, Some((FLAP_EDGE_COLOR, FLAP_EDGE_WIDTH_PX)));
        }

        if let Some(scale) = self.seal_scale.filter(|s| *s > 0.0) {
            let seal = lift_outline(&self.seal_outline, Vec3::from_array(SEAL_CENTER), scale);
            if let Some(pts) = project_all(view_proj, &seal, w, h) {
                self.fill_polygon(&pts, SEAL_COLOR, Some((SEAL_RIM_COLOR, 1.5)));
            }
        }
    }

    fn draw_paper(&self, view_proj: &Mat4, w: f32, h: f32) {
        if self.message_opacity <= 0.0 {
            return;
        }
        let outline = lift_outline(&self.paper_outline, Vec3::new(0.0, 0.0, PAPER_Z), 1.0);
        let Some(pts) = project_all(view_proj, &outline, w, h) else {
            return;
        };
        self.ctx.save();
        self.ctx.set_global_alpha(self.message_opacity.clamp(0.0, 1.0) as f64);
        self.fill_polygon(&pts, PAPER_COLOR, None);
        if let (Some(img), Some((lo, hi))) = (self.message_texture.borrow().as_ref(), bounds(&pts)) {
            // The shape's UVs span the whole texture, so the image fills the paper bounds
            self.ctx.clip();
            _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                lo.x as f64,
                lo.y as f64,
                (hi.x - lo.x) as f64,
                (hi.y - lo.y) as f64,
            );
        }
        self.ctx.restore();
    }

    fn sync_message_text(&mut self) {
        let opacity = (self.message_opacity * 1000.0).round() / 1000.0;
        if self.last_text_opacity != Some(opacity) {
            overlay::set_message_text_opacity(&self.document, opacity);
            self.last_text_opacity = Some(opacity);
        }
    }
}

impl Scene for CanvasScene {
    fn has_background(&self) -> bool {
        self.background.borrow().is_some()
    }

    fn set_background_offset(&mut self, offset: Vec2) {
        self.background_offset = offset;
    }

    fn has_seal(&self) -> bool {
        self.seal_scale.is_some()
    }

    fn set_seal_scale(&mut self, scale: f32) {
        if self.seal_scale.is_some() {
            self.seal_scale = Some(scale);
        }
    }

    fn remove_seal(&mut self) {
        self.seal_scale = None;
    }

    fn set_flap_rotation(&mut self, angle: f32) {
        self.flap_rotation = angle;
    }

    fn set_message_opacity(&mut self, opacity: f32) {
        self.message_opacity = opacity;
    }

    fn set_particles(&mut self, positions: &[f32], offset_y: f32, rotation_y: f32) {
        self.particles.clear();
        self.particles.extend(
            positions
                .chunks_exact(3)
                .map(|c| Vec3::new(c[0], c[1], c[2])),
        );
        self.particle_offset_y = offset_y;
        self.particle_rotation_y = rotation_y;
    }

    fn render(&mut self, camera: &Camera) {
        let (w, h) = self.size();
        let mut camera = camera.clone();
        camera.set_viewport(w, h);
        let view_proj = camera.view_projection();
        // Particles behind the card plane are drawn before it, the rest after
        let card_depth = project(&view_proj, Vec3::ZERO, w, h).map_or(camera.eye.z, |p| p.depth);

        self.draw_background(w, h);
        self.draw_particles(&view_proj, w, h, card_depth, true);
        self.draw_card(&view_proj, w, h);
        self.draw_paper(&view_proj, w, h);
        self.draw_particles(&view_proj, w, h, card_depth, false);
        self.sync_message_text();
    }
}
