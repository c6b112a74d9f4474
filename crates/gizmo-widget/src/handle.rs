//! Handle model: the fifteen manipulation affordances of the gizmo
//!
//! Handles are identified by a closed enum rather than by name strings,
//! so shape and drag mode are total functions and storage is a fixed
//! array indexed by [`HandleId::index`].

use std::fmt;
use std::str::FromStr;

use glam::{Mat4, Vec3};
use gizmo_core::{Axis, HandleMesh, Plane, normalize_or_zero};

/// Which kind of transform a handle (or drag) manipulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoMode {
    /// Translation along an axis or within a plane
    Translate,
    /// Rotation about a plane normal or axis
    Rotate,
    /// Scaling along one axis, a plane pair, or uniformly
    Scale,
}

impl FromStr for GizmoMode {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move" | "translate" => Ok(GizmoMode::Translate),
            "rotate" => Ok(GizmoMode::Rotate),
            "scale" => Ok(GizmoMode::Scale),
            other => Err(ParseHandleError(other.to_string())),
        }
    }
}

/// Identity of one manipulation affordance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleId {
    /// Arrow handle translating along one axis (`tx`, `ty`, `tz`)
    Translate(Axis),
    /// Arc handle translating within a plane (`txy`, `tyz`, `tzx`)
    TranslatePlane(Plane),
    /// Cube handle scaling one axis (`sx`, `sy`, `sz`)
    Scale(Axis),
    /// Wedge handle scaling a plane pair (`sxy`, `syz`, `szx`)
    ScalePlane(Plane),
    /// Arc handle rotating about a plane normal (`rxy`, `ryz`, `rzx`)
    Rotate(Plane),
}

/// Geometric shape of a handle's manipulation direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleShape {
    /// One axis direction
    Linear {
        /// Unit axis the handle manipulates along
        axis: Vec3,
    },
    /// Two axis directions spanning a plane
    Planar {
        /// First spanning axis
        a: Vec3,
        /// Second spanning axis
        b: Vec3,
    },
}

impl HandleShape {
    /// Rotation/drag-plane normal: the axis itself for linear handles,
    /// the normalized cross product for planar handles
    pub fn drag_normal(&self) -> Vec3 {
        match self {
            HandleShape::Linear { axis } => normalize_or_zero(*axis),
            HandleShape::Planar { a, b } => normalize_or_zero(a.cross(*b)),
        }
    }

    /// Axis a scale drag projects onto: the axis itself, or the
    /// normalized diagonal of the plane pair
    pub fn scale_axis(&self) -> Vec3 {
        match self {
            HandleShape::Linear { axis } => normalize_or_zero(*axis),
            HandleShape::Planar { a, b } => normalize_or_zero(*a + *b),
        }
    }
}

impl HandleId {
    /// All fifteen handles, in stable index order
    pub const ALL: [HandleId; 15] = [
        HandleId::Translate(Axis::X),
        HandleId::Translate(Axis::Y),
        HandleId::Translate(Axis::Z),
        HandleId::TranslatePlane(Plane::Xy),
        HandleId::TranslatePlane(Plane::Yz),
        HandleId::TranslatePlane(Plane::Zx),
        HandleId::Scale(Axis::X),
        HandleId::Scale(Axis::Y),
        HandleId::Scale(Axis::Z),
        HandleId::ScalePlane(Plane::Xy),
        HandleId::ScalePlane(Plane::Yz),
        HandleId::ScalePlane(Plane::Zx),
        HandleId::Rotate(Plane::Xy),
        HandleId::Rotate(Plane::Yz),
        HandleId::Rotate(Plane::Zx),
    ];

    /// Stable storage index, `0..15`
    pub fn index(self) -> usize {
        match self {
            HandleId::Translate(a) => a.index(),
            HandleId::TranslatePlane(p) => 3 + plane_index(p),
            HandleId::Scale(a) => 6 + a.index(),
            HandleId::ScalePlane(p) => 9 + plane_index(p),
            HandleId::Rotate(p) => 12 + plane_index(p),
        }
    }

    /// The transform kind this handle manipulates by default
    pub fn kind(self) -> GizmoMode {
        match self {
            HandleId::Translate(_) | HandleId::TranslatePlane(_) => GizmoMode::Translate,
            HandleId::Scale(_) | HandleId::ScalePlane(_) => GizmoMode::Scale,
            HandleId::Rotate(_) => GizmoMode::Rotate,
        }
    }

    /// The single axis of a linear handle
    pub fn axis(self) -> Option<Axis> {
        match self {
            HandleId::Translate(a) | HandleId::Scale(a) => Some(a),
            _ => None,
        }
    }

    /// The plane of a planar or rotate handle
    pub fn plane(self) -> Option<Plane> {
        match self {
            HandleId::TranslatePlane(p) | HandleId::ScalePlane(p) | HandleId::Rotate(p) => Some(p),
            _ => None,
        }
    }

    /// Manipulation direction(s) as unit vectors
    pub fn shape(self) -> HandleShape {
        match self {
            HandleId::Translate(a) | HandleId::Scale(a) => HandleShape::Linear {
                axis: a.direction(),
            },
            HandleId::TranslatePlane(p) | HandleId::ScalePlane(p) | HandleId::Rotate(p) => {
                let (a, b) = p.directions();
                HandleShape::Planar { a, b }
            }
        }
    }

    /// Short handle name (`tx`, `txy`, `sxy`, `rxy`, ...)
    pub fn name(self) -> String {
        match self {
            HandleId::Translate(a) => format!("t{}", a.letter()),
            HandleId::TranslatePlane(p) => format!("t{}", p.letters()),
            HandleId::Scale(a) => format!("s{}", a.letter()),
            HandleId::ScalePlane(p) => format!("s{}", p.letters()),
            HandleId::Rotate(p) => format!("r{}", p.letters()),
        }
    }
}

fn plane_index(p: Plane) -> usize {
    match p {
        Plane::Xy => 0,
        Plane::Yz => 1,
        Plane::Zx => 2,
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HandleId {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandleId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| ParseHandleError(s.to_string()))
    }
}

/// Selector vocabulary accepted by `set_handles`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleFilter {
    /// All six translate handles (`"t"`)
    Translate,
    /// All six scale handles (`"s"`)
    Scale,
    /// All three rotate handles (`"r"`)
    Rotate,
    /// Every handle (`"all"`)
    All,
    /// One specific handle by name
    Single(HandleId),
}

impl HandleFilter {
    /// Whether this filter selects the given handle
    pub fn matches(self, id: HandleId) -> bool {
        match self {
            HandleFilter::Translate => id.kind() == GizmoMode::Translate,
            HandleFilter::Scale => id.kind() == GizmoMode::Scale,
            HandleFilter::Rotate => id.kind() == GizmoMode::Rotate,
            HandleFilter::All => true,
            HandleFilter::Single(single) => single == id,
        }
    }
}

impl FromStr for HandleFilter {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t" => Ok(HandleFilter::Translate),
            "s" => Ok(HandleFilter::Scale),
            "r" => Ok(HandleFilter::Rotate),
            "all" => Ok(HandleFilter::All),
            other => other.parse().map(HandleFilter::Single),
        }
    }
}

/// Unrecognized handle, group, or mode name
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown handle name: {0}")]
pub struct ParseHandleError(pub String);

/// Spherical hit volume anchored at a handle.
///
/// Larger than the visible mesh so handles are easy to target;
/// rendered as a translucent sphere.
#[derive(Debug, Clone)]
pub struct HitSphere {
    /// Sphere radius before highlight scaling
    pub radius: f32,
    /// Current visual transform
    pub transform: Mat4,
    /// Current tint color
    pub tint: [f32; 4],
}

/// Small solid marker sphere shown on rotate handles
#[derive(Debug, Clone)]
pub struct Marker {
    /// Sphere radius
    pub radius: f32,
    /// Current visual transform
    pub transform: Mat4,
    /// Marker color
    pub color: [f32; 4],
}

/// One manipulation affordance: identity, geometry, and visual state
#[derive(Debug, Clone)]
pub struct Handle {
    /// Handle identity
    pub id: HandleId,
    /// Cached manipulation direction(s)
    pub shape: HandleShape,
    /// Radial push-out distance along the anchor direction (translate
    /// handles only; zero elsewhere)
    pub offset: f32,
    /// Current world-space anchor, relative to the gizmo center.
    /// Consistent with the last position update; drags snapshot it at
    /// drag start.
    pub position: Vec3,
    /// Renderable mesh
    pub mesh: HandleMesh,
    /// Current display tint, multiplied over the mesh vertex colors by
    /// the embedding renderer; swaps to the hover color while active
    pub color: [f32; 4],
    /// Current visual transform (scale composed before translation)
    pub transform: Mat4,
    /// Hit volume
    pub hit_sphere: HitSphere,
    /// Rotate-handle marker sphere
    pub marker: Option<Marker>,
    /// Whether the handle is part of the render graph and hit-testable
    pub attached: bool,
}
