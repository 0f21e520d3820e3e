//! Ray representation for ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction.

use crate::vector::Vector3;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point: the camera for primary rays, a surface point for secondary rays.
    pub origin: Vector3,

    /// Direction of travel. Primary and secondary rays are built with unit
    /// directions so `t` measures distance.
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter t along the ray.
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + t * self.direction
    }
}
