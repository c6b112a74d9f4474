//! Global constants for gizmo geometry and interaction

/// Radius of the spherical hit volume anchored at every handle
pub const HIT_SPHERE_RADIUS: f32 = 0.3;

/// Radius of the solid marker sphere on rotate handles
pub const MARKER_RADIUS: f32 = 0.05;

/// Radial push-out distance for translate handles
pub const TRANSLATE_HANDLE_OFFSET: f32 = 0.1;

/// Cone base radius for arrow handles
pub const CONE_RADIUS: f32 = 0.1;

/// Cone apex height for arrow handles
pub const CONE_HEIGHT: f32 = 0.15;

/// Axial coordinate of the arrow cone base ring
pub const CONE_BASE: f32 = -0.1;

/// Default segment count for arrow and arc mesh generation
pub const SEGMENTS: u32 = 10;

/// Edge length of the linear scale handle cube
pub const SCALE_CUBE_SIZE: f32 = 0.18;

/// Mid-line radius of planar arc handles
pub const ARC_RADIUS: f32 = 0.18;

/// Ribbon thickness of planar arc handles
pub const ARC_THICKNESS: f32 = 0.06;

/// Arc sweep start angle in degrees
pub const ARC_START_ANGLE: f32 = 110.0;

/// Arc sweep end angle in degrees
pub const ARC_END_ANGLE: f32 = -20.0;

/// Ribbon thickness of the planar scale wedge
pub const WEDGE_THICKNESS: f32 = 0.07;

/// Segment count of the planar scale wedge
pub const WEDGE_SEGMENTS: u32 = 2;

/// Visual scale multiplier for the active handle mesh
pub const HIGHLIGHT_SCALE: f32 = 1.4;

/// Visual scale multiplier for the active handle's hit sphere
pub const HIGHLIGHT_SPHERE_SCALE: f32 = 1.15;

/// Lower clamp for scale-drag factors; object scale never reaches zero
pub const MIN_SCALE_FACTOR: f32 = 0.01;

/// Rotation per scroll-wheel tick during translate/scale drags (degrees)
pub const WHEEL_STEP_DEGREES: f32 = 15.0;

/// Below this length a vector normalizes to zero
pub const AXIS_EPSILON: f32 = 1e-9;

/// Below this |denominator| a ray counts as parallel to a plane
pub const PLANE_EPSILON: f32 = 1e-8;

/// Below this |w| the homogeneous divide is skipped during unprojection
pub const HOMOGENEOUS_EPSILON: f32 = 1e-12;

/// Below this |determinant| the closest-approach solve falls back to a
/// direct projection
pub const PARALLEL_EPSILON: f32 = 1e-9;

/// Default handle colors (RGBA)
pub mod colors {
    /// X-axis handles
    pub const X_AXIS: [f32; 4] = [0.70, 0.30, 0.30, 0.75];
    /// Y-axis handles
    pub const Y_AXIS: [f32; 4] = [0.30, 0.70, 0.30, 0.75];
    /// Z-axis handles
    pub const Z_AXIS: [f32; 4] = [0.30, 0.50, 0.70, 0.75];
    /// XY-plane handles
    pub const XY_PLANE: [f32; 4] = [0.30, 0.50, 0.70, 0.75];
    /// YZ-plane handles
    pub const YZ_PLANE: [f32; 4] = [0.70, 0.30, 0.30, 0.75];
    /// ZX-plane handles
    pub const ZX_PLANE: [f32; 4] = [0.30, 0.70, 0.30, 0.75];
    /// Hovered handle tint
    pub const HOVER: [f32; 4] = [0.70, 0.70, 0.20, 0.90];
    /// Hit sphere, idle
    pub const SPHERE_DEFAULT: [f32; 4] = [0.35, 0.35, 0.35, 0.3];
    /// Hit sphere, hovered
    pub const SPHERE_HOVER: [f32; 4] = [0.82, 0.82, 0.82, 0.4];
}
