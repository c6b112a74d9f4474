//! Ray casting primitives for gizmo handle picking
//!
//! This module implements the pure geometry the interaction layer is built
//! on: screen-point unprojection, ray/sphere and ray/plane intersection,
//! and the closest-approach parameter between two (possibly skew) lines.
//!
//! Every function guards its own numerical degeneracies locally; none of
//! them panic or return NaN for degenerate input.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::constants;

/// Normalize a vector, returning `Vec3::ZERO` for near-zero input.
///
/// The threshold is [`constants::AXIS_EPSILON`]; callers that need a
/// direction treat the zero result as "no usable axis" rather than
/// dividing by a vanishing length.
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    let len = v.length();
    if len < constants::AXIS_EPSILON {
        Vec3::ZERO
    } else {
        v / len
    }
}

/// World-to-screen mapping of the viewport the gizmo is embedded in.
///
/// The embedding application owns the camera; it hands the gizmo the
/// combined scene transform (world space through to screen coordinates
/// with depth in `0..=1`) and this type caches the inverse used for ray
/// casting.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    world_to_screen: Mat4,
    screen_to_world: Mat4,
}

impl ViewTransform {
    /// Wrap a world-to-screen matrix, caching its inverse
    pub fn new(world_to_screen: Mat4) -> Self {
        Self {
            world_to_screen,
            screen_to_world: world_to_screen.inverse(),
        }
    }

    /// The forward (world-to-screen) matrix
    pub fn matrix(&self) -> Mat4 {
        self.world_to_screen
    }

    /// The cached inverse (screen-to-world) matrix
    pub fn inverse(&self) -> Mat4 {
        self.screen_to_world
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

/// Map one homogeneous screen point back to world space.
///
/// Performs the homogeneous divide unless `|w|` falls below
/// [`constants::HOMOGENEOUS_EPSILON`], in which case the unnormalized
/// coordinate is returned rather than dividing by a vanishing `w`.
fn unproject(view: &ViewTransform, screen: Vec4) -> Vec3 {
    let world = view.inverse() * screen;
    if world.w.abs() > constants::HOMOGENEOUS_EPSILON {
        world.truncate() / world.w
    } else {
        world.truncate()
    }
}

/// Cast a world-space ray through a screen coordinate.
///
/// Unprojects the near (`z = 0`) and far (`z = 1`) screen points through
/// the inverse scene transform and returns `(origin, direction)` where
/// `direction` is the normalized near-to-far vector.
pub fn screen_to_world_ray(view: &ViewTransform, screen_xy: Vec2) -> (Vec3, Vec3) {
    let near = unproject(view, Vec4::new(screen_xy.x, screen_xy.y, 0.0, 1.0));
    let far = unproject(view, Vec4::new(screen_xy.x, screen_xy.y, 1.0, 1.0));
    (near, normalize_or_zero(far - near))
}

/// Ray-sphere intersection test.
///
/// Classic analytic solve: project the center onto the ray to get the
/// closest-approach parameter `t_ca`, reject when the perpendicular
/// distance exceeds the radius, otherwise pick the smaller non-negative
/// root. A sphere entirely behind the ray origin (both roots negative)
/// reports no hit.
///
/// # Returns
///
/// * `Some((t, point))` - ray parameter and world-space hit point.
/// * `None` - the ray misses the sphere.
pub fn ray_intersect_sphere(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<(f32, Vec3)> {
    let l = center - ray_origin;
    let t_ca = l.dot(ray_dir);
    let d2 = l.dot(l) - t_ca * t_ca;
    let r2 = radius * radius;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).max(0.0).sqrt();
    let t0 = t_ca - thc;
    let t1 = t_ca + thc;

    let t = if t0 >= 0.0 {
        t0
    } else if t1 >= 0.0 {
        t1
    } else {
        return None;
    };

    Some((t, ray_origin + ray_dir * t))
}

/// Ray-plane intersection.
///
/// Returns the ray parameter and hit point, or `None` when the ray is
/// parallel to the plane (`|dir · normal|` below
/// [`constants::PLANE_EPSILON`]). The parameter may be negative -
/// callers that must reject hits behind the ray origin check the sign
/// themselves, since drag-start routines deliberately accept them.
pub fn ray_plane_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<(f32, Vec3)> {
    let denom = ray_dir.dot(plane_normal);
    if denom.abs() < constants::PLANE_EPSILON {
        return None;
    }

    let t = (plane_point - ray_origin).dot(plane_normal) / denom;
    Some((t, ray_origin + ray_dir * t))
}

/// Closest-approach parameter between a line and a ray.
///
/// Solves the standard 2x2 linear system for the parameter `s` along the
/// line `l0 + s·u` at which it passes closest to the ray `origin + t·v`.
/// When the determinant `D = (u·u)(v·v) - (u·v)²` falls below
/// [`constants::PARALLEL_EPSILON`] (nearly parallel lines) the solve is
/// ill-conditioned and the function falls back to projecting the ray
/// origin directly onto the line.
///
/// # Returns
///
/// `(s, point)` where `point = l0 + u·s`. Always finite.
pub fn closest_point_between_ray_and_line(
    l0: Vec3,
    u: Vec3,
    origin: Vec3,
    v: Vec3,
) -> (f32, Vec3) {
    let u = normalize_or_zero(u);
    let v = normalize_or_zero(v);
    let w0 = l0 - origin;

    let a = u.dot(u);
    let b = u.dot(v);
    let c = v.dot(v);
    let d = u.dot(w0);
    let e = v.dot(w0);

    let det = a * c - b * b;
    if det.abs() < constants::PARALLEL_EPSILON {
        let s = (origin - l0).dot(u);
        return (s, l0 + u * s);
    }

    let s = (b * e - c * d) / det;
    (s, l0 + u * s)
}
