//! Gizmo configuration structures
//!
//! Serializable settings for handle appearance and interaction tuning,
//! persisted as RON so an editor can ship themeable gizmo presets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Handle color palette (RGBA)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandlePalette {
    /// X-axis handles
    pub x_axis: [f32; 4],
    /// Y-axis handles
    pub y_axis: [f32; 4],
    /// Z-axis handles
    pub z_axis: [f32; 4],
    /// XY-plane handles
    pub xy_plane: [f32; 4],
    /// YZ-plane handles
    pub yz_plane: [f32; 4],
    /// ZX-plane handles
    pub zx_plane: [f32; 4],
    /// Hovered handle tint
    pub hover: [f32; 4],
    /// Hit sphere at rest
    pub sphere_default: [f32; 4],
    /// Hit sphere while hovered
    pub sphere_hover: [f32; 4],
}

impl Default for HandlePalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl HandlePalette {
    /// Palette tuned for dark viewport backgrounds
    pub fn dark() -> Self {
        Self {
            x_axis: constants::colors::X_AXIS,
            y_axis: constants::colors::Y_AXIS,
            z_axis: constants::colors::Z_AXIS,
            xy_plane: constants::colors::XY_PLANE,
            yz_plane: constants::colors::YZ_PLANE,
            zx_plane: constants::colors::ZX_PLANE,
            hover: constants::colors::HOVER,
            sphere_default: constants::colors::SPHERE_DEFAULT,
            sphere_hover: constants::colors::SPHERE_HOVER,
        }
    }

    /// Palette tuned for light viewport backgrounds
    pub fn light() -> Self {
        Self {
            x_axis: [0.80, 0.20, 0.20, 0.85],
            y_axis: [0.20, 0.65, 0.20, 0.85],
            z_axis: [0.20, 0.40, 0.80, 0.85],
            xy_plane: [0.20, 0.40, 0.80, 0.85],
            yz_plane: [0.80, 0.20, 0.20, 0.85],
            zx_plane: [0.20, 0.65, 0.20, 0.85],
            hover: [0.85, 0.75, 0.10, 0.95],
            sphere_default: [0.55, 0.55, 0.55, 0.25],
            sphere_hover: [0.30, 0.30, 0.30, 0.35],
        }
    }
}

/// Complete gizmo configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GizmoConfig {
    /// Handle colors
    #[serde(default)]
    pub palette: HandlePalette,
    /// Radius of the spherical hit volume around every handle
    pub hit_sphere_radius: f32,
    /// Radius of the rotate-handle marker sphere
    pub marker_radius: f32,
    /// Radial push-out distance for translate handles
    pub translate_offset: f32,
    /// Arrow cone base radius
    pub cone_radius: f32,
    /// Arrow cone apex height
    pub cone_height: f32,
    /// Segment count for arrows and arcs
    pub segments: u32,
    /// Linear scale handle cube edge length
    pub scale_cube_size: f32,
    /// Planar arc mid-line radius
    pub arc_radius: f32,
    /// Planar arc ribbon thickness
    pub arc_thickness: f32,
    /// Arc sweep start angle (degrees)
    pub arc_start_angle: f32,
    /// Arc sweep end angle (degrees)
    pub arc_end_angle: f32,
    /// Planar scale wedge thickness
    pub wedge_thickness: f32,
    /// Planar scale wedge segment count
    pub wedge_segments: u32,
    /// Active handle mesh scale multiplier
    pub highlight_scale: f32,
    /// Active handle hit-sphere scale multiplier
    pub highlight_sphere_scale: f32,
    /// Degrees of rotation per scroll-wheel tick mid-drag
    pub wheel_step_degrees: f32,
    /// Whether scale drags multiply all three components by default
    pub uniform_scale: bool,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            palette: HandlePalette::default(),
            hit_sphere_radius: constants::HIT_SPHERE_RADIUS,
            marker_radius: constants::MARKER_RADIUS,
            translate_offset: constants::TRANSLATE_HANDLE_OFFSET,
            cone_radius: constants::CONE_RADIUS,
            cone_height: constants::CONE_HEIGHT,
            segments: constants::SEGMENTS,
            scale_cube_size: constants::SCALE_CUBE_SIZE,
            arc_radius: constants::ARC_RADIUS,
            arc_thickness: constants::ARC_THICKNESS,
            arc_start_angle: constants::ARC_START_ANGLE,
            arc_end_angle: constants::ARC_END_ANGLE,
            wedge_thickness: constants::WEDGE_THICKNESS,
            wedge_segments: constants::WEDGE_SEGMENTS,
            highlight_scale: constants::HIGHLIGHT_SCALE,
            highlight_sphere_scale: constants::HIGHLIGHT_SPHERE_SCALE,
            wheel_step_degrees: constants::WHEEL_STEP_DEGREES,
            uniform_scale: true,
        }
    }
}

impl GizmoConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to a pretty RON string
    pub fn to_ron_string(&self) -> Result<String, GizmoConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| GizmoConfigError::Serialize(e.to_string()))
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GizmoConfigError> {
        let content = self.to_ron_string()?;
        std::fs::write(path.as_ref(), content).map_err(|e| GizmoConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GizmoConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| GizmoConfigError::Io(e.to_string()))?;
        ron::from_str(&content).map_err(|e| GizmoConfigError::Deserialize(e.to_string()))
    }
}

/// Configuration load/save errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum GizmoConfigError {
    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(String),
    /// RON serialization failure
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// RON deserialization failure
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
