// Screen projection and local geometry helpers for the canvas scene.
// Pure glam math so host tests can include this file directly.

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// A world point mapped to canvas pixels, with its view depth (clip w).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub pos: Vec2,
    pub depth: f32,
}

/// Project `world` through `view_proj` into a `width` x `height` canvas
/// (origin top-left, +Y down). Points behind the eye yield `None`.
#[inline]
pub fn project(view_proj: &Mat4, world: Vec3, width: f32, height: f32) -> Option<Projected> {
    let clip = *view_proj * Vec4::new(world.x, world.y, world.z, 1.0);
    if clip.w <= 1e-6 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Projected {
        pos: Vec2::new((ndc.x * 0.5 + 0.5) * width, (0.5 - ndc.y * 0.5) * height),
        depth: clip.w,
    })
}

/// Project a whole outline; `None` if any vertex falls behind the eye.
pub fn project_all(view_proj: &Mat4, points: &[Vec3], width: f32, height: f32) -> Option<Vec<Vec2>> {
    points
        .iter()
        .map(|p| project(view_proj, *p, width, height).map(|pr| pr.pos))
        .collect()
}

/// Rotate a local point about +X by `angle` and place it at `origin`.
#[inline]
pub fn rotate_x_about(local: Vec3, angle: f32, origin: Vec3) -> Vec3 {
    Quat::from_rotation_x(angle) * local + origin
}

/// Particle position inside the field → world, given the field's transform.
#[inline]
pub fn particle_world(local: Vec3, offset_y: f32, rotation_y: f32) -> Vec3 {
    Quat::from_rotation_y(rotation_y) * local + Vec3::new(0.0, offset_y, 0.0)
}

/// Distance-attenuated point size in pixels (half the canvas height per unit at depth 1).
#[inline]
pub fn point_size_px(world_size: f32, depth: f32, canvas_height: f32) -> f32 {
    if depth <= 1e-6 {
        return 0.0;
    }
    world_size * canvas_height * 0.5 / depth
}

/// Closed polygon approximating a circle, counter-clockwise from +X.
pub fn circle(radius: f32, segments: usize) -> Vec<Vec2> {
    let n = segments.max(3);
    (0..n)
        .map(|i| {
            let a = i as f32 / n as f32 * std::f32::consts::TAU;
            Vec2::new(a.cos(), a.sin()) * radius
        })
        .collect()
}

/// Rounded rectangle outline centered on the origin, counter-clockwise.
pub fn rounded_rect(width: f32, height: f32, radius: f32, corner_segments: usize) -> Vec<Vec2> {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let r = radius.clamp(0.0, hw.min(hh));
    let n = corner_segments.max(1);
    let corners = [
        (Vec2::new(hw - r, -hh + r), -std::f32::consts::FRAC_PI_2),
        (Vec2::new(hw - r, hh - r), 0.0),
        (Vec2::new(-hw + r, hh - r), std::f32::consts::FRAC_PI_2),
        (Vec2::new(-hw + r, -hh + r), std::f32::consts::PI),
    ];
    let mut out = Vec::with_capacity(corners.len() * (n + 1));
    for (center, start) in corners {
        for i in 0..=n {
            let a = start + i as f32 / n as f32 * std::f32::consts::FRAC_PI_2;
            out.push(center + Vec2::new(a.cos(), a.sin()) * r);
        }
    }
    out
}

/// Place a flat outline in the XY plane around `center`, scaled.
pub fn lift_outline(outline: &[Vec2], center: Vec3, scale: f32) -> Vec<Vec3> {
    outline
        .iter()
        .map(|p| center + Vec3::new(p.x * scale, p.y * scale, 0.0))
        .collect()
}

/// Axis-aligned pixel bounds of a projected outline: (min, max).
pub fn bounds(points: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
    )
}
