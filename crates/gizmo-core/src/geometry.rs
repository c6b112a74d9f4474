//! Procedural mesh generation for gizmo handles
//!
//! Generates the small renderable meshes the widget hands to the
//! embedding renderer:
//! - Arrow cones for linear translate handles
//! - Annulus arcs for planar translate/rotate handles (and a degenerate
//!   2-segment "wedge" variant for planar scale handles)
//! - Cubes for linear scale handles

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::axis::{Axis, Plane};

/// Handle vertex data, laid out for direct GPU upload
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct HandleVertex {
    /// Position in handle-local space
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

/// Indexed triangle mesh for one handle
#[derive(Debug, Clone, Default)]
pub struct HandleMesh {
    /// Vertex buffer
    pub vertices: Vec<HandleVertex>,
    /// Triangle index buffer (three indices per face)
    pub indices: Vec<u32>,
}

impl HandleMesh {
    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generate an arrow cone pointing along the given axis.
///
/// A fan of `segments` base-ring vertices plus a single apex; the axis
/// selects a coordinate-slot permutation so one generator serves all
/// three arrows. The base ring sits at the axial coordinate `base`, the
/// apex at `height`.
pub fn generate_arrow_mesh(
    axis: Axis,
    cone_radius: f32,
    cone_height: f32,
    base: f32,
    segments: u32,
    color: [f32; 4],
) -> HandleMesh {
    let (idx_axial, idx_rad_a, idx_rad_b) = axis.slots();

    let mut vertices = Vec::with_capacity(segments as usize + 1);
    for i in 0..segments {
        let theta = std::f32::consts::TAU * i as f32 / segments as f32;
        let mut p = [0.0f32; 3];
        p[idx_rad_a] = cone_radius * theta.cos();
        p[idx_rad_b] = cone_radius * theta.sin();
        p[idx_axial] = base;
        vertices.push(HandleVertex { position: p, color });
    }
    let mut tip = [0.0f32; 3];
    tip[idx_axial] = cone_height;
    vertices.push(HandleVertex {
        position: tip,
        color,
    });

    let tip_idx = segments;
    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        let c0 = i;
        let c1 = (i + 1) % segments;
        indices.extend_from_slice(&[c0, tip_idx, c1]);
    }

    HandleMesh { vertices, indices }
}

/// Generate an annulus-sector ribbon in the given plane.
///
/// Sweeps from `start_angle` to `end_angle` (degrees, measured from the
/// plane's first axis toward its second), producing `segments + 1`
/// paired inner/outer vertices at `radius -/+ thickness/2` connected as
/// two triangles per segment. The default sweep (110 deg to -20 deg) is a
/// quarter-plus arc rather than a full ring so neighboring planar
/// handles don't visually collide.
pub fn generate_arc_mesh(
    plane: Plane,
    radius: f32,
    thickness: f32,
    segments: u32,
    start_angle: f32,
    end_angle: f32,
    color: [f32; 4],
) -> HandleMesh {
    let (axis_a, axis_b) = plane.directions();
    let start = start_angle.to_radians();
    let end = end_angle.to_radians();

    let mut vertices = Vec::with_capacity(2 * (segments as usize + 1));
    for i in 0..=segments {
        let theta = start + (end - start) * i as f32 / segments as f32;
        let dir = axis_a * theta.cos() + axis_b * theta.sin();
        let inner = dir * (radius - thickness * 0.5);
        let outer = dir * (radius + thickness * 0.5);
        vertices.push(HandleVertex {
            position: inner.into(),
            color,
        });
        vertices.push(HandleVertex {
            position: outer.into(),
            color,
        });
    }

    let mut indices = Vec::with_capacity(segments as usize * 6);
    for i in 0..segments {
        let i0 = 2 * i;
        let i1 = 2 * i + 1;
        let i2 = 2 * (i + 1);
        let i3 = 2 * (i + 1) + 1;
        indices.extend_from_slice(&[i0, i1, i2, i1, i3, i2]);
    }

    HandleMesh { vertices, indices }
}

/// Generate an axis-aligned cube centered on the origin.
///
/// Used for linear scale handles. Eight shared vertices, twelve
/// triangles; no per-face normals since gizmo handles render unlit.
pub fn generate_cube_mesh(size: f32, color: [f32; 4]) -> HandleMesh {
    let h = size * 0.5;
    let corners = [
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];
    let vertices = corners
        .iter()
        .map(|c| HandleVertex {
            position: (*c).into(),
            color,
        })
        .collect();

    let indices = vec![
        0, 1, 2, 0, 2, 3, // -Z
        4, 6, 5, 4, 7, 6, // +Z
        0, 4, 5, 0, 5, 1, // -Y
        2, 6, 7, 2, 7, 3, // +Y
        1, 5, 6, 1, 6, 2, // +X
        0, 3, 7, 0, 7, 4, // -X
    ];

    HandleMesh { vertices, indices }
}
