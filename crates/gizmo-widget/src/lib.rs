//! Interactive 3D transform gizmo widget
//!
//! Builds on [`gizmo_core`] and provides the stateful side of the
//! gizmo: the fifteen-handle model, the renderer state that places and
//! highlights them, and the controller that turns pointer events into
//! transform updates.
//!
//! The embedding application owns the camera and the GPU pipeline. It
//! feeds [`GizmoController`] a [`ViewTransform`] plus pointer/wheel
//! events, draws the meshes exposed by [`GizmoRenderer`], and applies
//! the [`GizmoUpdate`] events to its scene.

pub mod controller;
pub mod handle;
pub mod input;
pub mod renderer;

pub use controller::{GizmoController, GizmoState, GizmoUpdate};
pub use handle::{GizmoMode, Handle, HandleFilter, HandleId, HandleShape, ParseHandleError};
pub use input::{CursorIcon, PointerButton, PointerEvent, WheelEvent};
pub use renderer::GizmoRenderer;

pub use gizmo_core::{
    Axis, GizmoConfig, GizmoConfigError, HandleMesh, HandlePalette, HandleVertex, Plane, Rotation,
    ViewTransform,
};
