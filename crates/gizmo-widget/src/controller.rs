//! Gizmo interaction controller
//!
//! [`GizmoController`] owns the full interaction state machine: hover
//! detection, drag lifecycle, and the per-mode drag math. The embedding
//! application feeds it pointer and wheel events plus the current view
//! transform, and consumes the [`GizmoUpdate`] events it returns.

use glam::{Quat, Vec3};
use tracing::{debug, trace};
use uuid::Uuid;

use gizmo_core::constants::MIN_SCALE_FACTOR;
use gizmo_core::{
    GizmoConfig, Rotation, ViewTransform, closest_point_between_ray_and_line, normalize_or_zero,
    ray_intersect_sphere, ray_plane_intersection, screen_to_world_ray,
};

use crate::handle::{GizmoMode, HandleFilter, HandleId, HandleShape};
use crate::input::{CursorIcon, PointerButton, PointerEvent, WheelEvent};
use crate::renderer::GizmoRenderer;

/// A drag produced a new object transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoUpdate {
    /// Identity of the bound object, if one was set
    pub target: Option<Uuid>,
    /// New object translation
    pub translation: Vec3,
    /// New object scale
    pub scale: Vec3,
    /// New object orientation
    pub rotation: Quat,
}

/// Publicly observable interaction state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoState {
    /// No handle under the pointer
    Idle,
    /// A handle is under the pointer but no button is held
    Hovering(HandleId),
    /// A drag is in progress
    Dragging {
        /// The handle the drag started on
        handle: HandleId,
        /// The transform mode in effect (button overrides included)
        mode: GizmoMode,
    },
}

/// Per-mode ephemeral drag state. Lives only inside the `Dragging`
/// variant, so stale fields cannot leak into the next drag.
#[derive(Debug, Clone, Copy)]
enum DragState {
    Rotate {
        normal: Vec3,
        start_vec: Vec3,
        cumulative_angle: f32,
    },
    TranslateLinear {
        axis_dir: Vec3,
        start_axis_pos: f32,
    },
    TranslatePlanar {
        normal: Vec3,
        start_plane_pos: Vec3,
    },
    Scale {
        axis_dir: Vec3,
        start_axis_pos: f32,
        initial_handle_pos: f32,
    },
}

#[derive(Debug, Clone, Copy)]
enum InteractionState {
    Idle,
    Hovering(HandleId),
    Dragging {
        handle: HandleId,
        mode: GizmoMode,
        drag: DragState,
    },
}

/// Interaction state machine driving a [`GizmoRenderer`]
pub struct GizmoController {
    renderer: GizmoRenderer,
    rotation: Rotation,
    state: InteractionState,
    object_translation: Vec3,
    object_scale: Vec3,
    ring_center: Vec3,
    original_translation: Vec3,
    original_scale: Vec3,
    uniform_scale: bool,
    view: ViewTransform,
    target: Option<Uuid>,
}

impl GizmoController {
    /// Build a controller and its renderer from a config
    pub fn new(config: GizmoConfig) -> Self {
        let uniform_scale = config.uniform_scale;
        Self {
            renderer: GizmoRenderer::new(config),
            rotation: Rotation::new(),
            state: InteractionState::Idle,
            object_translation: Vec3::ZERO,
            object_scale: Vec3::ONE,
            ring_center: Vec3::ZERO,
            original_translation: Vec3::ZERO,
            original_scale: Vec3::ONE,
            uniform_scale,
            view: ViewTransform::default(),
            target: None,
        }
    }

    /// The renderer, for drawing
    pub fn renderer(&self) -> &GizmoRenderer {
        &self.renderer
    }

    /// Update the screen-from-world transform used for ray casting
    pub fn set_view(&mut self, view: ViewTransform) {
        self.view = view;
    }

    /// Bind (or unbind) the object identity echoed in updates
    pub fn set_target(&mut self, target: Option<Uuid>) {
        self.target = target;
    }

    /// Choose which handles are available, by filter vocabulary
    pub fn set_handles(&mut self, filters: &[HandleFilter]) {
        self.renderer.set_enabled(filters);
        // A hovered handle that just got disabled must not stay lit.
        if let InteractionState::Hovering(id) = self.state
            && !self.renderer.enabled(id)
        {
            self.state = InteractionState::Idle;
            self.renderer.highlight(None);
        }
    }

    /// Set the object scale and reposition the handles.
    ///
    /// `reset_originals` re-baselines the scale that subsequent scale
    /// drags multiply from; drag-internal updates pass `false` so the
    /// factor always applies to the pre-drag scale.
    pub fn set_scale(&mut self, scale: Vec3, reset_originals: bool) {
        self.object_scale = scale;
        if reset_originals {
            self.original_scale = scale;
        }
        self.renderer.update_handle_positions(scale);
    }

    /// Set the object translation; the handle ring follows
    pub fn set_translation(&mut self, translation: Vec3) {
        self.object_translation = translation;
        self.ring_center = translation;
    }

    /// Replace the accumulated orientation (caller re-sync on selection
    /// change)
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Toggle uniform scaling (every scale drag scales all three axes)
    pub fn set_uniform_scale(&mut self, uniform: bool) {
        self.uniform_scale = uniform;
    }

    /// Whether any handle of the given mode is enabled
    pub fn get_visibility(&self, mode: GizmoMode) -> bool {
        self.renderer.mode_visible(mode)
    }

    /// Current object translation
    pub fn translation(&self) -> Vec3 {
        self.object_translation
    }

    /// Current object scale
    pub fn scale(&self) -> Vec3 {
        self.object_scale
    }

    /// Current accumulated orientation
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Publicly observable state
    pub fn state(&self) -> GizmoState {
        match self.state {
            InteractionState::Idle => GizmoState::Idle,
            InteractionState::Hovering(id) => GizmoState::Hovering(id),
            InteractionState::Dragging { handle, mode, .. } => {
                GizmoState::Dragging { handle, mode }
            }
        }
    }

    /// The handle under the pointer, if any (hover or drag)
    pub fn hovered(&self) -> Option<HandleId> {
        match self.state {
            InteractionState::Idle => None,
            InteractionState::Hovering(id) => Some(id),
            InteractionState::Dragging { handle, .. } => Some(handle),
        }
    }

    /// True while a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging { .. })
    }

    /// Cursor the embedding application should show
    pub fn cursor_icon(&self) -> CursorIcon {
        match self.state {
            InteractionState::Idle => CursorIcon::Default,
            InteractionState::Hovering(_) | InteractionState::Dragging { .. } => CursorIcon::Move,
        }
    }

    /// Handle a button press. Starts a drag when the press lands on an
    /// attached handle and the button/mode combination allows it.
    pub fn handle_mouse_press(&mut self, event: &PointerEvent) -> Option<GizmoUpdate> {
        if self.is_dragging() {
            return None;
        }
        // A press must carry a button; motion events misrouted here are
        // ignored.
        let button = event.button?;

        let (ray_origin, ray_dir) = screen_to_world_ray(&self.view, event.position);
        let handle = self.nearest_candidate(ray_origin, ray_dir)?;

        let mode = match (handle.kind(), button) {
            (GizmoMode::Translate, PointerButton::Primary) => GizmoMode::Translate,
            (GizmoMode::Translate, PointerButton::Secondary) => GizmoMode::Scale,
            (GizmoMode::Translate, PointerButton::Tertiary) => GizmoMode::Rotate,
            (other, _) => other,
        };

        let drag = self.start_drag(handle, mode, ray_origin, ray_dir)?;
        self.original_translation = self.object_translation;
        self.original_scale = self.object_scale;
        self.state = InteractionState::Dragging { handle, mode, drag };
        self.renderer.isolate(handle);
        self.renderer.highlight(Some(handle));
        debug!(handle = %handle, ?mode, "gizmo drag started");
        None
    }

    /// Handle pointer motion: hover tracking when idle, drag math while
    /// a drag is in progress
    pub fn handle_mouse_move(&mut self, event: &PointerEvent) -> Option<GizmoUpdate> {
        let (ray_origin, ray_dir) = screen_to_world_ray(&self.view, event.position);

        let (handle, mode, drag) = match self.state {
            InteractionState::Dragging { handle, mode, drag } => (handle, mode, drag),
            _ => {
                self.update_hover(ray_origin, ray_dir);
                return None;
            }
        };

        let drag = match drag {
            DragState::Rotate {
                normal,
                start_vec,
                cumulative_angle,
            } => {
                let (_, hit) =
                    ray_plane_intersection(ray_origin, ray_dir, self.ring_center, normal)?;
                let cur_vec = normalize_or_zero(hit - self.ring_center);
                if cur_vec == Vec3::ZERO {
                    return None;
                }

                let unsigned = start_vec.dot(cur_vec).clamp(-1.0, 1.0).acos();
                let angle = if start_vec.cross(cur_vec).dot(normal) < 0.0 {
                    -unsigned
                } else {
                    unsigned
                };

                self.rotation
                    .rotate_around_local_axis(normal, (-angle).to_degrees());
                let cumulative_angle = cumulative_angle + angle;
                self.renderer.spin_handle(handle, normal, cumulative_angle);

                DragState::Rotate {
                    normal,
                    start_vec: cur_vec,
                    cumulative_angle,
                }
            }
            DragState::TranslateLinear {
                axis_dir,
                start_axis_pos,
            } => {
                let (s, _) = closest_point_between_ray_and_line(
                    self.original_translation,
                    axis_dir,
                    ray_origin,
                    ray_dir,
                );
                self.object_translation =
                    self.original_translation + axis_dir * (s - start_axis_pos);
                self.ring_center = self.object_translation;
                drag
            }
            DragState::TranslatePlanar {
                normal,
                start_plane_pos,
            } => {
                let (t, hit) = ray_plane_intersection(
                    ray_origin,
                    ray_dir,
                    self.original_translation,
                    normal,
                )?;
                if t < 0.0 {
                    return None;
                }
                self.object_translation = self.original_translation + (hit - start_plane_pos);
                self.ring_center = self.object_translation;
                drag
            }
            DragState::Scale {
                axis_dir,
                start_axis_pos,
                initial_handle_pos,
            } => {
                let (s, _) = closest_point_between_ray_and_line(
                    self.ring_center,
                    axis_dir,
                    ray_origin,
                    ray_dir,
                );
                let delta = s - start_axis_pos;
                let factor = if initial_handle_pos == 0.0 {
                    1.0
                } else {
                    (initial_handle_pos + delta) / initial_handle_pos
                };
                let factor = factor.max(MIN_SCALE_FACTOR);

                let scale = self.scaled_from_original(handle, factor);
                self.set_scale(scale, false);
                self.renderer.highlight(Some(handle));
                drag
            }
        };

        self.state = InteractionState::Dragging { handle, mode, drag };
        Some(self.make_update())
    }

    /// Handle a button release: commit the drag and re-enter hover
    /// tracking from a fresh candidate search
    pub fn handle_mouse_release(&mut self, event: &PointerEvent) -> Option<GizmoUpdate> {
        let InteractionState::Dragging { handle, mode, .. } = self.state else {
            return None;
        };

        if mode == GizmoMode::Scale {
            // Re-baseline so the next scale drag multiplies from here.
            self.set_scale(self.object_scale, true);
        }
        debug!(handle = %handle, ?mode, "gizmo drag ended");

        self.renderer.restore();
        self.state = InteractionState::Idle;
        // Always clear the drag highlight; update_hover only repaints on
        // a hover *change*, and an empty release spot is no change from
        // the fresh idle state.
        self.renderer.highlight(None);
        let (ray_origin, ray_dir) = screen_to_world_ray(&self.view, event.position);
        self.update_hover(ray_origin, ray_dir);
        None
    }

    /// Handle a scroll tick. Only meaningful while dragging a translate
    /// or scale handle: rotates the object around the handle's axis (or
    /// plane normal) in fixed steps.
    pub fn handle_mouse_wheel(&mut self, event: &WheelEvent) -> Option<GizmoUpdate> {
        let InteractionState::Dragging { handle, mode, .. } = self.state else {
            return None;
        };
        if mode == GizmoMode::Rotate || event.delta == 0.0 {
            return None;
        }

        let axis = handle.shape().drag_normal();
        let step = self.renderer.config().wheel_step_degrees * event.delta.signum();
        self.rotation.rotate_around_local_axis(axis, step);
        Some(self.make_update())
    }

    /// Nearest attached handle whose hit sphere the ray intersects
    fn nearest_candidate(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<HandleId> {
        self.renderer
            .attached_handles()
            .filter_map(|h| {
                let center = self.ring_center + h.position;
                ray_intersect_sphere(ray_origin, ray_dir, center, h.hit_sphere.radius)
                    .map(|(t, _)| (t, h.id))
            })
            .min_by(|(ta, _), (tb, _)| ta.total_cmp(tb))
            .map(|(_, id)| id)
    }

    fn update_hover(&mut self, ray_origin: Vec3, ray_dir: Vec3) {
        let next = self.nearest_candidate(ray_origin, ray_dir);
        let prev = match self.state {
            InteractionState::Hovering(id) => Some(id),
            _ => None,
        };
        if next == prev {
            return;
        }

        trace!(from = ?prev.map(|h| h.name()), to = ?next.map(|h| h.name()), "hover changed");
        self.renderer.highlight(next);
        self.state = match next {
            Some(id) => InteractionState::Hovering(id),
            None => InteractionState::Idle,
        };
    }

    /// Compute the mode-specific drag baseline. Returns `None` when the
    /// configuration is degenerate (ray parallel to the drag plane), in
    /// which case the press is ignored.
    fn start_drag(
        &self,
        handle: HandleId,
        mode: GizmoMode,
        ray_origin: Vec3,
        ray_dir: Vec3,
    ) -> Option<DragState> {
        let shape = handle.shape();
        match mode {
            GizmoMode::Rotate => {
                let normal = shape.drag_normal();
                let (_, hit) =
                    ray_plane_intersection(ray_origin, ray_dir, self.ring_center, normal)?;
                let start_vec = normalize_or_zero(hit - self.ring_center);
                if start_vec == Vec3::ZERO {
                    return None;
                }
                Some(DragState::Rotate {
                    normal,
                    start_vec,
                    cumulative_angle: 0.0,
                })
            }
            GizmoMode::Translate => match shape {
                HandleShape::Linear { axis } => {
                    let (s, _) = closest_point_between_ray_and_line(
                        self.object_translation,
                        axis,
                        ray_origin,
                        ray_dir,
                    );
                    Some(DragState::TranslateLinear {
                        axis_dir: axis,
                        start_axis_pos: s,
                    })
                }
                HandleShape::Planar { .. } => {
                    let normal = shape.drag_normal();
                    let (_, hit) = ray_plane_intersection(
                        ray_origin,
                        ray_dir,
                        self.object_translation,
                        normal,
                    )?;
                    Some(DragState::TranslatePlanar {
                        normal,
                        start_plane_pos: hit,
                    })
                }
            },
            GizmoMode::Scale => {
                let axis_dir = shape.scale_axis();
                let position = self.renderer.handle(handle).position;
                let (s, _) = closest_point_between_ray_and_line(
                    self.ring_center,
                    axis_dir,
                    ray_origin,
                    ray_dir,
                );
                Some(DragState::Scale {
                    axis_dir,
                    start_axis_pos: s,
                    initial_handle_pos: position.dot(axis_dir),
                })
            }
        }
    }

    /// Apply a scale factor to the pre-drag scale, respecting uniform
    /// mode and which axes the handle names
    fn scaled_from_original(&self, handle: HandleId, factor: f32) -> Vec3 {
        if self.uniform_scale {
            return self.original_scale * factor;
        }

        let mut scale = self.original_scale;
        if let Some(axis) = handle.axis() {
            scale[axis.index()] = self.original_scale[axis.index()] * factor;
        } else if let Some(plane) = handle.plane() {
            let (a, b) = plane.axes();
            scale[a.index()] = self.original_scale[a.index()] * factor;
            scale[b.index()] = self.original_scale[b.index()] * factor;
        }
        scale
    }

    fn make_update(&self) -> GizmoUpdate {
        GizmoUpdate {
            target: self.target,
            translation: self.object_translation,
            scale: self.object_scale,
            rotation: self.rotation.quat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec2};
    use gizmo_core::Axis;

    // Looking down -Z from behind the scene: screen (x, y) unprojects to
    // world (x, y, -5) on the near plane with the ray travelling +Z, so
    // handle spheres near the origin are hit at positive t.
    fn test_view() -> ViewTransform {
        ViewTransform::new(Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0)))
    }

    fn controller() -> GizmoController {
        let mut c = GizmoController::new(GizmoConfig::default());
        c.set_view(test_view());
        c
    }

    fn press_at(c: &mut GizmoController, x: f32, y: f32, button: PointerButton) {
        c.handle_mouse_press(&PointerEvent::press(button, Vec2::new(x, y)));
    }

    fn move_to(c: &mut GizmoController, x: f32, y: f32) -> Option<GizmoUpdate> {
        c.handle_mouse_move(&PointerEvent::motion(Vec2::new(x, y)))
    }

    fn release_at(c: &mut GizmoController, x: f32, y: f32) {
        c.handle_mouse_release(&PointerEvent::motion(Vec2::new(x, y)));
    }

    #[test]
    fn test_hover_picks_nearest_candidate() {
        let mut c = controller();
        // Screen (0.9, 0) is inside both the tx sphere (center x=1.1)
        // and the sx sphere (center x=1.0). The ray passes closer to
        // the sx center, so the sx sphere surface is reached first.
        move_to(&mut c, 0.9, 0.0);
        assert_eq!(c.hovered(), Some(HandleId::Scale(Axis::X)));
        assert_eq!(c.cursor_icon(), CursorIcon::Move);

        move_to(&mut c, 50.0, 50.0);
        assert_eq!(c.hovered(), None);
        assert_eq!(c.cursor_icon(), CursorIcon::Default);
    }

    #[test]
    fn test_translate_requires_primary_button() {
        let mut c = controller();
        press_at(&mut c, 1.1, 0.0, PointerButton::Primary);
        assert_eq!(
            c.state(),
            GizmoState::Dragging {
                handle: HandleId::Translate(Axis::X),
                mode: GizmoMode::Translate,
            }
        );

        let mut c = controller();
        press_at(&mut c, 1.1, 0.0, PointerButton::Secondary);
        assert_eq!(
            c.state(),
            GizmoState::Dragging {
                handle: HandleId::Translate(Axis::X),
                mode: GizmoMode::Scale,
            }
        );

        // Tertiary on a translate handle rotates about the handle axis,
        // so pick tz (axis Z faces the view ray; X and Y would be
        // degenerate head-on). Scale handles are disabled because the
        // sz sphere sits in front of tz along this ray. Press slightly
        // off-center: a ray straight through the ring center yields no
        // usable rotate start vector and the press would be refused.
        let mut c = controller();
        c.set_handles(&[HandleFilter::Translate]);
        press_at(&mut c, 0.2, 0.0, PointerButton::Tertiary);
        assert_eq!(
            c.state(),
            GizmoState::Dragging {
                handle: HandleId::Translate(Axis::Z),
                mode: GizmoMode::Rotate,
            }
        );
    }

    #[test]
    fn test_degenerate_rotate_press_is_ignored() {
        // Tertiary on tx asks for rotation about X, but the view ray
        // runs parallel to every plane with an X normal. The press must
        // leave the state machine untouched instead of starting a
        // half-initialized drag.
        let mut c = controller();
        press_at(&mut c, 1.1, 0.0, PointerButton::Tertiary);
        assert!(!c.is_dragging());
        assert_eq!(c.state(), GizmoState::Idle);
        assert_eq!(c.renderer().attached_handles().count(), 15);
    }

    #[test]
    fn test_drag_isolates_and_release_restores() {
        let mut c = controller();
        press_at(&mut c, 1.1, 0.0, PointerButton::Primary);
        assert!(c.is_dragging());
        assert_eq!(c.renderer().attached_handles().count(), 1);

        release_at(&mut c, 1.1, 0.0);
        assert!(!c.is_dragging());
        assert_eq!(c.renderer().attached_handles().count(), 15);
        // Fresh candidate search at the release point re-hovers.
        assert_eq!(c.hovered(), Some(HandleId::Translate(Axis::X)));
    }

    #[test]
    fn test_linear_translate_drag() {
        let mut c = controller();
        press_at(&mut c, 1.1, 0.0, PointerButton::Primary);
        let update = move_to(&mut c, 6.1, 0.0).unwrap();
        assert!((update.translation - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-4);
        assert_eq!(update.scale, Vec3::ONE);

        release_at(&mut c, 6.1, 0.0);
        assert!((c.translation() - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_linear_scale_drag_and_clamp() {
        let mut c = controller();
        c.set_uniform_scale(false);
        // Press lands on sx, anchored exactly at the unit corner.
        press_at(&mut c, 1.0, 0.0, PointerButton::Primary);
        assert_eq!(
            c.state(),
            GizmoState::Dragging {
                handle: HandleId::Scale(Axis::X),
                mode: GizmoMode::Scale,
            }
        );

        let update = move_to(&mut c, 2.0, 0.0).unwrap();
        assert!((update.scale - Vec3::new(2.0, 1.0, 1.0)).length() < 1e-4);

        // Dragging far past the center clamps instead of inverting.
        let update = move_to(&mut c, -20.0, 0.0).unwrap();
        assert!((update.scale.x - MIN_SCALE_FACTOR).abs() < 1e-6);
        assert!((update.scale.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_planar_translate_drag() {
        let mut c = controller();
        // txy sits at the (1,1,0) corner pushed 0.1 along the diagonal.
        let pos = c
            .renderer()
            .handle(HandleId::TranslatePlane(gizmo_core::Plane::Xy))
            .position;
        press_at(&mut c, pos.x, pos.y, PointerButton::Primary);
        assert_eq!(
            c.state(),
            GizmoState::Dragging {
                handle: HandleId::TranslatePlane(gizmo_core::Plane::Xy),
                mode: GizmoMode::Translate,
            }
        );

        let update = move_to(&mut c, pos.x + 2.0, pos.y).unwrap();
        assert!((update.translation - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-4);

        // The whole ring follows the drag, so the handle is still under
        // the pointer after release.
        release_at(&mut c, pos.x + 2.0, pos.y);
        assert_eq!(
            c.hovered(),
            Some(HandleId::TranslatePlane(gizmo_core::Plane::Xy))
        );
    }

    #[test]
    fn test_uniform_planar_scale_drag() {
        let mut c = controller();
        // sxy anchors exactly at the (1,1,0) corner; dragging outward
        // along the plane diagonal doubles the projected anchor
        // distance, and uniform mode spreads the factor to all axes.
        press_at(&mut c, 1.0, 1.0, PointerButton::Primary);
        assert_eq!(
            c.state(),
            GizmoState::Dragging {
                handle: HandleId::ScalePlane(gizmo_core::Plane::Xy),
                mode: GizmoMode::Scale,
            }
        );

        let update = move_to(&mut c, 2.0, 2.0).unwrap();
        assert!((update.scale - Vec3::splat(2.0)).length() < 1e-4);
    }

    #[test]
    fn test_non_uniform_planar_scale_names_two_axes() {
        let mut c = controller();
        c.set_uniform_scale(false);
        press_at(&mut c, 1.0, 1.0, PointerButton::Primary);
        let update = move_to(&mut c, 2.0, 2.0).unwrap();
        assert!((update.scale - Vec3::new(2.0, 2.0, 1.0)).length() < 1e-4);
    }

    #[test]
    fn test_scale_commit_rebaselines() {
        let mut c = controller();
        press_at(&mut c, 1.0, 0.0, PointerButton::Primary);
        move_to(&mut c, 2.0, 0.0);
        release_at(&mut c, 200.0, 0.0);
        let committed = c.scale();
        assert!((committed - Vec3::splat(2.0)).length() < 1e-4);

        // A second drag multiplies from the committed scale, not from
        // the original unit scale. The sx handle now sits at x = 2.
        press_at(&mut c, 2.0, 0.0, PointerButton::Primary);
        let update = move_to(&mut c, 2.0, 0.0).unwrap();
        assert!((update.scale - committed).length() < 1e-4);

        let update = move_to(&mut c, 3.0, 0.0).unwrap();
        assert!((update.scale - Vec3::splat(3.0)).length() < 1e-4);
    }

    #[test]
    fn test_wheel_only_during_translate_or_scale_drags() {
        let mut c = controller();
        let wheel = WheelEvent {
            position: Vec2::ZERO,
            delta: 1.0,
        };

        // No drag: ignored.
        assert!(c.handle_mouse_wheel(&wheel).is_none());

        press_at(&mut c, 1.1, 0.0, PointerButton::Primary);
        let update = c.handle_mouse_wheel(&wheel).unwrap();
        let expected = Quat::from_axis_angle(Vec3::X, 15f32.to_radians());
        assert!(update.rotation.dot(expected).abs() > 1.0 - 1e-5);

        // Zero delta: ignored.
        assert!(c
            .handle_mouse_wheel(&WheelEvent {
                position: Vec2::ZERO,
                delta: 0.0,
            })
            .is_none());
        release_at(&mut c, 1.1, 0.0);

        // Rotate drags never react to the wheel.
        let mut c = controller();
        let anchor = c
            .renderer()
            .handle(HandleId::Rotate(gizmo_core::Plane::Xy))
            .position;
        press_at(&mut c, anchor.x, anchor.y, PointerButton::Primary);
        assert!(matches!(
            c.state(),
            GizmoState::Dragging {
                mode: GizmoMode::Rotate,
                ..
            }
        ));
        assert!(c.handle_mouse_wheel(&wheel).is_none());
    }

    #[test]
    fn test_rotate_drag_composes_rotation() {
        let mut c = controller();
        let anchor = c
            .renderer()
            .handle(HandleId::Rotate(gizmo_core::Plane::Xy))
            .position;
        press_at(&mut c, anchor.x, anchor.y, PointerButton::Primary);
        assert!(matches!(
            c.state(),
            GizmoState::Dragging {
                mode: GizmoMode::Rotate,
                ..
            }
        ));

        // Quarter turn counterclockwise in the XY plane.
        let update = move_to(&mut c, -anchor.y, anchor.x).unwrap();
        let expected = Quat::from_axis_angle(Vec3::Z, -std::f32::consts::FRAC_PI_2);
        assert!(update.rotation.dot(expected).abs() > 1.0 - 1e-4);
        assert_eq!(update.translation, Vec3::ZERO);

        // Each frame measures from the previous pointer position, so a
        // further quarter turn accumulates to half a turn.
        let update = move_to(&mut c, -anchor.x, -anchor.y).unwrap();
        let expected = Quat::from_axis_angle(Vec3::Z, -std::f32::consts::PI);
        assert!(update.rotation.dot(expected).abs() > 1.0 - 1e-4);
    }

    #[test]
    fn test_release_over_empty_space_clears_highlight() {
        let mut c = controller();
        press_at(&mut c, 1.1, 0.0, PointerButton::Primary);
        release_at(&mut c, 40.0, 40.0);
        assert_eq!(c.hovered(), None);

        let h = c.renderer().handle(HandleId::Translate(Axis::X));
        let basis_len = h.transform.transform_vector3(Vec3::X).length();
        assert!((basis_len - 1.0).abs() < 1e-5, "mesh scale still {basis_len}");
        assert_eq!(h.hit_sphere.tint, c.renderer().config().palette.sphere_default);
        assert_eq!(h.color, c.renderer().config().palette.x_axis);

        // Same for a rotate drag, whose spin transform must also reset.
        let mut c = controller();
        let anchor = c
            .renderer()
            .handle(HandleId::Rotate(gizmo_core::Plane::Xy))
            .position;
        press_at(&mut c, anchor.x, anchor.y, PointerButton::Primary);
        move_to(&mut c, -anchor.y, anchor.x);
        release_at(&mut c, 40.0, 40.0);

        let h = c.renderer().handle(HandleId::Rotate(gizmo_core::Plane::Xy));
        let moved = h.transform.transform_point3(Vec3::ZERO);
        assert!((moved - anchor).length() < 1e-5, "spin transform not reset");
    }

    #[test]
    fn test_buttonless_press_is_ignored() {
        let mut c = controller();
        // A motion event misrouted to the press handler must not start a
        // drag, even over a scale handle that accepts any button.
        c.handle_mouse_press(&PointerEvent::motion(Vec2::new(1.0, 0.0)));
        assert!(!c.is_dragging());
        assert_eq!(c.state(), GizmoState::Idle);
    }

    #[test]
    fn test_press_in_empty_space_is_ignored() {
        let mut c = controller();
        press_at(&mut c, 40.0, 40.0, PointerButton::Primary);
        assert!(!c.is_dragging());
        assert_eq!(c.state(), GizmoState::Idle);
    }

    #[test]
    fn test_set_handles_drops_disabled_hover() {
        let mut c = controller();
        move_to(&mut c, 1.1, 0.0);
        assert_eq!(c.hovered(), Some(HandleId::Translate(Axis::X)));

        c.set_handles(&[HandleFilter::Rotate]);
        assert_eq!(c.hovered(), None);
        assert!(c.get_visibility(GizmoMode::Rotate));
        assert!(!c.get_visibility(GizmoMode::Translate));
    }

    #[test]
    fn test_update_carries_target() {
        let mut c = controller();
        let id = Uuid::new_v4();
        c.set_target(Some(id));
        press_at(&mut c, 1.1, 0.0, PointerButton::Primary);
        let update = move_to(&mut c, 2.1, 0.0).unwrap();
        assert_eq!(update.target, Some(id));
    }
}
