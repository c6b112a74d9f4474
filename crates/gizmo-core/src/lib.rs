//! Core math and geometry for the 3D transform gizmo
//!
//! This crate is the dependency-light foundation of the gizmo widget:
//!
//! - [`raycast`] - Ray casting primitives (unprojection, ray/sphere,
//!   ray/plane, closest point between skew lines)
//! - [`rotation`] - Incremental local-axis rotation composition
//! - [`geometry`] - Procedural handle meshes (arrows, arcs, cubes)
//! - [`axis`] - Coordinate axis and plane value types
//! - [`config`] - Serializable gizmo configuration
//! - [`constants`] - Default geometry and interaction constants

pub mod axis;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod raycast;
pub mod rotation;

pub use axis::{Axis, Plane};
pub use config::{GizmoConfig, GizmoConfigError, HandlePalette};
pub use geometry::{
    HandleMesh, HandleVertex, generate_arc_mesh, generate_arrow_mesh, generate_cube_mesh,
};
pub use raycast::{
    ViewTransform, closest_point_between_ray_and_line, normalize_or_zero, ray_intersect_sphere,
    ray_plane_intersection, screen_to_world_ray,
};
pub use rotation::Rotation;
