//! Infinite plane primitive.

use crate::error::{GlintError, Result};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vector::{dot, normalize, Vector3};

/// Rays closer to parallel than this never hit the plane.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Plane through `point` with unit normal `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal. Normalized on construction.
    pub normal: Vector3,
    /// Any point lying on the plane.
    pub point: Vector3,
}

impl Plane {
    /// Create a plane, normalizing `normal`.
    pub fn new(normal: Vector3, point: Vector3) -> Result<Self> {
        let normal = normalize(normal).map_err(|_| {
            GlintError::InvalidGeometry("plane normal must be non-zero".to_string())
        })?;
        Ok(Self { normal, point })
    }

    /// Parameter of the crossing inside `ray_t`, with the plane normal.
    pub fn intersect(&self, r: &Ray, ray_t: Interval) -> Option<(f64, Vector3)> {
        let denom = dot(self.normal, r.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = dot(self.normal, self.point - r.origin) / denom;
        ray_t.surrounds(t).then_some((t, self.normal))
    }
}
