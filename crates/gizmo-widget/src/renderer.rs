//! Gizmo renderer state: handle construction, placement, and visuals
//!
//! [`GizmoRenderer`] owns the fifteen handles and everything about how
//! they look: meshes, transforms, highlight state, attachment. It never
//! interprets input; the controller drives it.

use glam::{Mat4, Quat, Vec3};
use gizmo_core::{
    GizmoConfig, HandleMesh, generate_arc_mesh, generate_arrow_mesh, generate_cube_mesh,
    normalize_or_zero,
};

use crate::handle::{GizmoMode, Handle, HandleFilter, HandleId, HandleShape, HitSphere, Marker};

/// Owns the fifteen gizmo handles and their visual state
pub struct GizmoRenderer {
    handles: Vec<Handle>,
    enabled: [bool; 15],
    config: GizmoConfig,
}

impl GizmoRenderer {
    /// Build all fifteen handles from the config and place them for a
    /// unit object scale
    pub fn new(config: GizmoConfig) -> Self {
        let handles = HandleId::ALL
            .into_iter()
            .map(|id| build_handle(id, &config))
            .collect();

        let mut renderer = Self {
            handles,
            enabled: [true; 15],
            config,
        };
        renderer.update_handle_positions(Vec3::ONE);
        renderer.highlight(None);
        renderer
    }

    /// The configuration the handles were built from
    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    /// Reposition the translate and scale handles for a new object
    /// scale.
    ///
    /// Each handle's corner vector takes the scale component of every
    /// axis it is named after; the anchor is the corner pushed out by
    /// the handle's radial offset. Rotate handles keep their fixed
    /// construction-time anchors.
    pub fn update_handle_positions(&mut self, scale: Vec3) {
        for handle in &mut self.handles {
            let corner = match handle.id {
                HandleId::Rotate(_) => continue,
                HandleId::Translate(a) | HandleId::Scale(a) => {
                    a.direction() * scale[a.index()]
                }
                HandleId::TranslatePlane(p) | HandleId::ScalePlane(p) => {
                    let (a, b) = p.axes();
                    a.direction() * scale[a.index()] + b.direction() * scale[b.index()]
                }
            };
            handle.position = corner + normalize_or_zero(corner) * handle.offset;
            set_handle_transforms(handle, 1.0, 1.0);
        }
    }

    /// Apply hover/drag highlighting: the active handle's mesh and hit
    /// sphere grow and the sphere takes the hover tint, everything else
    /// returns to the resting look
    pub fn highlight(&mut self, active: Option<HandleId>) {
        for handle in &mut self.handles {
            let is_active = active == Some(handle.id);
            let (mesh_scale, sphere_scale) = if is_active {
                (
                    self.config.highlight_scale,
                    self.config.highlight_sphere_scale,
                )
            } else {
                (1.0, 1.0)
            };
            set_handle_transforms(handle, mesh_scale, sphere_scale);
            if is_active {
                handle.color = self.config.palette.hover;
                handle.hit_sphere.tint = self.config.palette.sphere_hover;
            } else {
                handle.color = handle_color(handle.id, &self.config);
                handle.hit_sphere.tint = self.config.palette.sphere_default;
            }
        }
    }

    /// Spin a rotate handle about the drag normal during a rotate drag.
    ///
    /// Purely visual: `position` stays at the fixed anchor, only the
    /// transforms rotate with the accumulated drag angle.
    pub fn spin_handle(&mut self, id: HandleId, normal: Vec3, cumulative_angle: f32) {
        let rotation = Quat::from_axis_angle(normal, cumulative_angle);
        let handle = &mut self.handles[id.index()];
        let rotated = rotation * handle.position;
        handle.transform = Mat4::from_translation(rotated)
            * Mat4::from_quat(rotation)
            * Mat4::from_scale(Vec3::splat(self.config.highlight_scale));
        handle.hit_sphere.transform = Mat4::from_translation(rotated)
            * Mat4::from_scale(Vec3::splat(self.config.highlight_sphere_scale));
        if let Some(marker) = &mut handle.marker {
            marker.transform = Mat4::from_translation(rotated);
        }
    }

    /// Resolve filters to the enabled set; everything outside it is
    /// detached (invisible and excluded from hit tests)
    pub fn set_enabled(&mut self, filters: &[HandleFilter]) {
        for handle in &mut self.handles {
            let on = filters.iter().any(|f| f.matches(handle.id));
            self.enabled[handle.id.index()] = on;
            handle.attached = on;
        }
    }

    /// Detach every handle except the one being dragged
    pub fn isolate(&mut self, id: HandleId) {
        for handle in &mut self.handles {
            handle.attached = handle.id == id;
        }
    }

    /// Re-attach the enabled set after a drag ends
    pub fn restore(&mut self) {
        for handle in &mut self.handles {
            handle.attached = self.enabled[handle.id.index()];
        }
    }

    /// Whether the handle is in the enabled set (independent of drag
    /// isolation)
    pub fn enabled(&self, id: HandleId) -> bool {
        self.enabled[id.index()]
    }

    /// Whether any handle of the given mode is enabled
    pub fn mode_visible(&self, mode: GizmoMode) -> bool {
        HandleId::ALL
            .into_iter()
            .any(|id| id.kind() == mode && self.enabled[id.index()])
    }

    /// All fifteen handles in index order
    pub fn handles(&self) -> impl Iterator<Item = &Handle> {
        self.handles.iter()
    }

    /// The handles currently visible and hit-testable
    pub fn attached_handles(&self) -> impl Iterator<Item = &Handle> {
        self.handles.iter().filter(|h| h.attached)
    }

    /// Look up one handle by id
    pub fn handle(&self, id: HandleId) -> &Handle {
        &self.handles[id.index()]
    }
}

/// Rebuild a handle's visual transforms around its current anchor
fn set_handle_transforms(handle: &mut Handle, mesh_scale: f32, sphere_scale: f32) {
    let translate = Mat4::from_translation(handle.position);
    handle.transform = translate * Mat4::from_scale(Vec3::splat(mesh_scale));
    handle.hit_sphere.transform = translate * Mat4::from_scale(Vec3::splat(sphere_scale));
    if let Some(marker) = &mut handle.marker {
        marker.transform = translate;
    }
}

fn handle_color(id: HandleId, config: &GizmoConfig) -> [f32; 4] {
    use gizmo_core::{Axis, Plane};
    let palette = &config.palette;
    match id {
        HandleId::Translate(Axis::X) | HandleId::Scale(Axis::X) => palette.x_axis,
        HandleId::Translate(Axis::Y) | HandleId::Scale(Axis::Y) => palette.y_axis,
        HandleId::Translate(Axis::Z) | HandleId::Scale(Axis::Z) => palette.z_axis,
        HandleId::TranslatePlane(Plane::Xy)
        | HandleId::ScalePlane(Plane::Xy)
        | HandleId::Rotate(Plane::Xy) => palette.xy_plane,
        HandleId::TranslatePlane(Plane::Yz)
        | HandleId::ScalePlane(Plane::Yz)
        | HandleId::Rotate(Plane::Yz) => palette.yz_plane,
        HandleId::TranslatePlane(Plane::Zx)
        | HandleId::ScalePlane(Plane::Zx)
        | HandleId::Rotate(Plane::Zx) => palette.zx_plane,
    }
}

fn build_mesh(id: HandleId, config: &GizmoConfig) -> HandleMesh {
    use gizmo_core::constants::CONE_BASE;
    let color = handle_color(id, config);
    match id {
        HandleId::Translate(a) => generate_arrow_mesh(
            a,
            config.cone_radius,
            config.cone_height,
            CONE_BASE,
            config.segments,
            color,
        ),
        HandleId::TranslatePlane(p) | HandleId::Rotate(p) => generate_arc_mesh(
            p,
            config.arc_radius,
            config.arc_thickness,
            config.segments,
            config.arc_start_angle,
            config.arc_end_angle,
            color,
        ),
        HandleId::Scale(_) => generate_cube_mesh(config.scale_cube_size, color),
        HandleId::ScalePlane(p) => generate_arc_mesh(
            p,
            config.arc_radius,
            config.wedge_thickness,
            config.wedge_segments,
            config.arc_start_angle,
            config.arc_end_angle,
            color,
        ),
    }
}

fn build_handle(id: HandleId, config: &GizmoConfig) -> Handle {
    let shape = id.shape();
    let offset = match id.kind() {
        GizmoMode::Translate => config.translate_offset,
        GizmoMode::Rotate | GizmoMode::Scale => 0.0,
    };

    // Rotate handles sit on the plane diagonal, pushed past the unit
    // corner, and stay there for the life of the gizmo.
    let position = match (id, shape) {
        (HandleId::Rotate(_), HandleShape::Planar { a, b }) => {
            normalize_or_zero(a + b) * (1.0 + config.translate_offset)
        }
        _ => Vec3::ZERO,
    };

    let marker = matches!(id, HandleId::Rotate(_)).then(|| Marker {
        radius: config.marker_radius,
        transform: Mat4::from_translation(position),
        color: handle_color(id, config),
    });

    Handle {
        id,
        shape,
        offset,
        position,
        mesh: build_mesh(id, config),
        color: handle_color(id, config),
        transform: Mat4::from_translation(position),
        hit_sphere: HitSphere {
            radius: config.hit_sphere_radius,
            transform: Mat4::from_translation(position),
            tint: config.palette.sphere_default,
        },
        marker,
        attached: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gizmo_core::{Axis, Plane};

    fn renderer() -> GizmoRenderer {
        GizmoRenderer::new(GizmoConfig::default())
    }

    fn assert_vec3_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_construction_counts_and_offsets() {
        let r = renderer();
        assert_eq!(r.handles().count(), 15);
        for h in r.handles() {
            match h.id.kind() {
                GizmoMode::Translate => assert_eq!(h.offset, 0.1),
                GizmoMode::Scale | GizmoMode::Rotate => assert_eq!(h.offset, 0.0),
            }
            assert_eq!(h.hit_sphere.radius, 0.3);
            assert_eq!(h.marker.is_some(), matches!(h.id, HandleId::Rotate(_)));
            assert!(h.attached);
        }
    }

    #[test]
    fn test_unit_scale_positions() {
        let r = renderer();
        assert_vec3_close(
            r.handle(HandleId::Translate(Axis::X)).position,
            Vec3::new(1.1, 0.0, 0.0),
        );
        assert_vec3_close(
            r.handle(HandleId::Scale(Axis::Y)).position,
            Vec3::new(0.0, 1.0, 0.0),
        );
        // Planar translate corner (1,1,0) pushed 0.1 along its diagonal.
        let expected = Vec3::new(1.0, 1.0, 0.0)
            + Vec3::new(1.0, 1.0, 0.0).normalize() * 0.1;
        assert_vec3_close(r.handle(HandleId::TranslatePlane(Plane::Xy)).position, expected);
        // Rotate anchor on the unit diagonal pushed to 1.1.
        assert_vec3_close(
            r.handle(HandleId::Rotate(Plane::Xy)).position,
            Vec3::new(1.0, 1.0, 0.0).normalize() * 1.1,
        );
    }

    #[test]
    fn test_position_update_tracks_scale() {
        let mut r = renderer();
        r.update_handle_positions(Vec3::new(2.0, 3.0, 4.0));

        // Scale handles sit exactly on the scaled corner.
        assert_vec3_close(
            r.handle(HandleId::Scale(Axis::Z)).position,
            Vec3::new(0.0, 0.0, 4.0),
        );
        assert_vec3_close(
            r.handle(HandleId::ScalePlane(Plane::Xy)).position,
            Vec3::new(2.0, 3.0, 0.0),
        );
        // Translate handles get the radial push-out on top.
        assert_vec3_close(
            r.handle(HandleId::Translate(Axis::X)).position,
            Vec3::new(2.1, 0.0, 0.0),
        );
    }

    #[test]
    fn test_rotate_handles_ignore_scale_updates() {
        let mut r = renderer();
        let before = r.handle(HandleId::Rotate(Plane::Yz)).position;
        r.update_handle_positions(Vec3::new(5.0, 0.5, 9.0));
        assert_vec3_close(r.handle(HandleId::Rotate(Plane::Yz)).position, before);
    }

    #[test]
    fn test_highlight_scales_active_handle() {
        let mut r = renderer();
        let id = HandleId::Translate(Axis::X);
        r.highlight(Some(id));

        let h = r.handle(id);
        let basis_len = h.transform.transform_vector3(Vec3::X).length();
        assert!((basis_len - 1.4).abs() < 1e-5);
        assert_eq!(h.color, r.config().palette.hover);
        assert_eq!(h.hit_sphere.tint, r.config().palette.sphere_hover);

        let other = r.handle(HandleId::Translate(Axis::Y));
        let other_len = other.transform.transform_vector3(Vec3::X).length();
        assert!((other_len - 1.0).abs() < 1e-5);
        assert_eq!(other.color, r.config().palette.y_axis);
        assert_eq!(other.hit_sphere.tint, r.config().palette.sphere_default);

        r.highlight(None);
        let h = r.handle(id);
        let basis_len = h.transform.transform_vector3(Vec3::X).length();
        assert!((basis_len - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_filters_and_isolation() {
        let mut r = renderer();
        r.set_enabled(&[HandleFilter::Translate]);
        assert_eq!(r.attached_handles().count(), 6);
        assert!(r.mode_visible(GizmoMode::Translate));
        assert!(!r.mode_visible(GizmoMode::Rotate));

        let id = HandleId::Translate(Axis::Z);
        r.isolate(id);
        assert_eq!(r.attached_handles().count(), 1);
        assert!(r.handle(id).attached);

        r.restore();
        assert_eq!(r.attached_handles().count(), 6);
        assert!(r.enabled(id));
        assert!(!r.enabled(HandleId::Rotate(Plane::Xy)));
    }

    #[test]
    fn test_spin_handle_rotates_anchor() {
        let mut r = renderer();
        let id = HandleId::Rotate(Plane::Xy);
        let anchor = r.handle(id).position;
        r.spin_handle(id, Vec3::Z, std::f32::consts::FRAC_PI_2);

        let h = r.handle(id);
        let moved = h.transform.transform_point3(Vec3::ZERO);
        let expected = Quat::from_axis_angle(Vec3::Z, std::f32::consts::FRAC_PI_2) * anchor;
        assert_vec3_close(moved, expected);
        // Anchor itself untouched.
        assert_vec3_close(h.position, anchor);
    }
}
