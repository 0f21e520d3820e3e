//! Ray-object intersection.
//!
//! Defines the [`Hittable`] trait and the [`HitRecord`] a successful
//! intersection produces for the shading stage.

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vector::{dot, Vector3};

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Vector3,
    /// Unit surface normal at the intersection point, facing the incoming ray
    pub normal: Vector3,
    /// Distance along the ray to the intersection point
    pub t: f64,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
    /// Material of the object at the hit point
    pub material: Material,
}

impl HitRecord {
    /// Build a record at parameter `t`, orienting `outward_normal` against the ray.
    pub fn new(r: &Ray, t: f64, outward_normal: Vector3, material: Material) -> Self {
        let front_face = dot(r.direction, outward_normal) < 0.0;
        Self {
            p: r.at(t),
            normal: if front_face { outward_normal } else { -outward_normal },
            t,
            front_face,
            material,
        }
    }
}

/// Objects that can be intersected by rays.
///
/// Must be thread-safe since rows are rendered in parallel.
pub trait Hittable: Sync + Send {
    /// Nearest intersection with parameter strictly inside `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
