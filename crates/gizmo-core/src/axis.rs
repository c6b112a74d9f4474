//! Coordinate axis and plane value types

use glam::Vec3;

/// A world coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

impl Axis {
    /// All three axes in order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Coordinate slot of this axis (0, 1 or 2)
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit direction vector
    pub fn direction(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Lowercase axis letter, used in handle names
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    /// Coordinate slot permutation `(axial, radial_a, radial_b)` used by
    /// mesh generation to orient one generator along any axis.
    pub fn slots(self) -> (usize, usize, usize) {
        match self {
            Axis::X => (0, 1, 2),
            Axis::Y => (1, 2, 0),
            Axis::Z => (2, 0, 1),
        }
    }
}

/// A world coordinate plane, ordered so that `a × b` points along the
/// remaining positive axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    /// XY plane (normal +Z)
    Xy,
    /// YZ plane (normal +X)
    Yz,
    /// ZX plane (normal +Y)
    Zx,
}

impl Plane {
    /// All three planes in order
    pub const ALL: [Plane; 3] = [Plane::Xy, Plane::Yz, Plane::Zx];

    /// The two axes spanning this plane
    pub fn axes(self) -> (Axis, Axis) {
        match self {
            Plane::Xy => (Axis::X, Axis::Y),
            Plane::Yz => (Axis::Y, Axis::Z),
            Plane::Zx => (Axis::Z, Axis::X),
        }
    }

    /// Unit direction vectors of the two spanning axes
    pub fn directions(self) -> (Vec3, Vec3) {
        let (a, b) = self.axes();
        (a.direction(), b.direction())
    }

    /// Plane normal, the cross product of the spanning axes
    pub fn normal(self) -> Vec3 {
        let (a, b) = self.directions();
        a.cross(b)
    }

    /// Two-letter plane suffix, used in handle names
    pub fn letters(self) -> &'static str {
        match self {
            Plane::Xy => "xy",
            Plane::Yz => "yz",
            Plane::Zx => "zx",
        }
    }
}
