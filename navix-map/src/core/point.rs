//! 3D point type in the mapping coordinate frame.

use serde::{Deserialize, Serialize};

/// Position in the mapping frame (arbitrary units, consistent within a floor)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    /// X coordinate
    pub x: f32,
    /// Y coordinate (height in the AR frame)
    pub y: f32,
    /// Z coordinate
    pub z: f32,
}

impl Point3D {
    /// Create a new point
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Origin
    pub const ZERO: Point3D = Point3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point3D) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Point3D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// True if every component is finite (no NaN or infinity)
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Name of the first non-finite axis, if any
    pub(crate) fn non_finite_axis(&self) -> Option<char> {
        if !self.x.is_finite() {
            Some('x')
        } else if !self.y.is_finite() {
            Some('y')
        } else if !self.z.is_finite() {
            Some('z')
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_3d() {
        let a = Point3D::ZERO;
        let b = Point3D::new(1.0, 2.0, 2.0);
        assert!((a.distance(&b) - 3.0).abs() < 1e-6);
        assert!((a.distance_squared(&b) - 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Point3D::new(-1.5, 0.25, 4.0);
        let b = Point3D::new(2.0, -0.75, 1.0);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn test_non_finite_axis() {
        assert_eq!(Point3D::new(0.0, 0.0, 0.0).non_finite_axis(), None);
        assert_eq!(Point3D::new(f32::NAN, 0.0, 0.0).non_finite_axis(), Some('x'));
        assert_eq!(
            Point3D::new(0.0, f32::INFINITY, 0.0).non_finite_axis(),
            Some('y')
        );
        assert_eq!(
            Point3D::new(0.0, 0.0, f32::NEG_INFINITY).non_finite_axis(),
            Some('z')
        );
        assert!(!Point3D::new(0.0, 0.0, f32::NAN).is_finite());
    }
}
