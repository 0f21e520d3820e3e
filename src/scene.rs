//! Scene object model.
//!
//! Every entity a ray tracer can intersect or be lit by is a [`SceneObject`]:
//! a [`Material`] plus one of a closed set of kinds. Shading code dispatches
//! on the kind with an exhaustive `match`.

use log::debug;

use crate::error::{GlintError, Result};
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::light::Light;
use crate::material::Material;
use crate::plane::Plane;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// View plane one unit in front of the eye, `width` by `height` world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub width: f64,
    pub height: f64,
}

impl Camera {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(GlintError::InvalidGeometry(format!(
                "camera view plane {width}x{height} must be positive"
            )));
        }
        Ok(Self { width, height })
    }
}

/// Kind tag of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectTag {
    Camera,
    Sphere,
    Plane,
    Light,
}

/// Kind-specific payload of a scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectKind {
    Camera(Camera),
    Sphere(Sphere),
    Plane(Plane),
    Light(Light),
}

/// Anything in the scene: shared material plus kind-specific geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub material: Material,
    pub kind: ObjectKind,
}

impl SceneObject {
    pub fn new(material: Material, kind: ObjectKind) -> Self {
        Self { material, kind }
    }

    pub fn camera(camera: Camera) -> Self {
        Self::new(Material::default(), ObjectKind::Camera(camera))
    }

    pub fn sphere(sphere: Sphere, material: Material) -> Self {
        Self::new(material, ObjectKind::Sphere(sphere))
    }

    pub fn plane(plane: Plane, material: Material) -> Self {
        Self::new(material, ObjectKind::Plane(plane))
    }

    /// A light emitting `material.diffuse_color`.
    pub fn light(light: Light, material: Material) -> Self {
        Self::new(material, ObjectKind::Light(light))
    }

    pub fn tag(&self) -> ObjectTag {
        match self.kind {
            ObjectKind::Camera(_) => ObjectTag::Camera,
            ObjectKind::Sphere(_) => ObjectTag::Sphere,
            ObjectKind::Plane(_) => ObjectTag::Plane,
            ObjectKind::Light(_) => ObjectTag::Light,
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn as_camera(&self) -> Option<&Camera> {
        match &self.kind {
            ObjectKind::Camera(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_sphere(&self) -> Option<&Sphere> {
        match &self.kind {
            ObjectKind::Sphere(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_plane(&self) -> Option<&Plane> {
        match &self.kind {
            ObjectKind::Plane(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            ObjectKind::Light(l) => Some(l),
            _ => None,
        }
    }
}

impl Hittable for SceneObject {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let (t, outward_normal) = match &self.kind {
            ObjectKind::Sphere(s) => s.intersect(r, ray_t)?,
            ObjectKind::Plane(p) => p.intersect(r, ray_t)?,
            // Cameras and lights are not visible surfaces
            ObjectKind::Camera(_) | ObjectKind::Light(_) => return None,
        };
        Some(HitRecord::new(r, t, outward_normal, self.material))
    }
}

/// Immutable collection of scene objects holding exactly one camera.
///
/// Intersection is a linear search over the surfaces.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    camera: Camera,
}

impl Scene {
    /// Validate and assemble a scene.
    ///
    /// Fails unless there is exactly one camera, every surface material
    /// passes [`Material::validate`] and every light's colors pass
    /// [`Material::validate_colors`].
    pub fn new(objects: Vec<SceneObject>) -> Result<Self> {
        let mut cameras = objects.iter().filter_map(SceneObject::as_camera);
        let camera = *cameras
            .next()
            .ok_or_else(|| GlintError::InvalidScene("scene has no camera".to_string()))?;
        let extra = cameras.count();
        if extra > 0 {
            return Err(GlintError::InvalidScene(format!(
                "scene has {} cameras, expected exactly one",
                extra + 1
            )));
        }

        for object in &objects {
            match object.kind {
                ObjectKind::Sphere(_) | ObjectKind::Plane(_) => object.material.validate()?,
                ObjectKind::Light(_) => object.material.validate_colors()?,
                ObjectKind::Camera(_) => {}
            }
        }

        debug!(
            "Scene assembled: {} objects, {} lights",
            objects.len(),
            objects.iter().filter(|o| o.tag() == ObjectTag::Light).count()
        );
        Ok(Self { objects, camera })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Lights paired with their material (whose diffuse color is the emitted color).
    pub fn lights(&self) -> impl Iterator<Item = (&Light, &Material)> {
        self.objects
            .iter()
            .filter_map(|o| o.as_light().map(|l| (l, &o.material)))
    }
}

impl Hittable for Scene {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        for object in &self.objects {
            let window = closest.map_or(ray_t, |c| ray_t.up_to(c.t));
            if let Some(rec) = object.hit(r, window) {
                closest = Some(rec);
            }
        }
        closest
    }
}
