//! Sphere primitive.
//!
//! Ray-sphere intersection uses the half-b form of the quadratic formula.

use crate::error::{GlintError, Result};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vector::Vector3;

/// Sphere defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vector3,
    /// Radius of the sphere, always positive.
    pub radius: f64,
}

impl Sphere {
    /// Create a new sphere, rejecting a non-positive (or non-finite) radius.
    pub fn new(center: Vector3, radius: f64) -> Result<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GlintError::InvalidGeometry(format!(
                "sphere radius {radius} must be positive"
            )));
        }
        Ok(Self { center, radius })
    }

    /// Nearest root inside `ray_t`, with the outward unit normal there.
    pub fn intersect(&self, r: &Ray, ray_t: Interval) -> Option<(f64, Vector3)> {
        let oc = self.center - r.origin;

        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Near root first, the far one covers rays starting inside the sphere
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (r.at(root) - self.center) / self.radius;
        Some((root, outward_normal))
    }
}
