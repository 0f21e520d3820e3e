//! JSON scene descriptions.
//!
//! A scene file is a JSON array of objects tagged by `"type"`:
//!
//! ```json
//! [
//!   { "type": "camera", "width": 2.0, "height": 2.0 },
//!   { "type": "sphere", "position": [0, 0, -5], "radius": 1,
//!     "diffuse_color": [255, 0, 0], "reflectivity": 0.2 },
//!   { "type": "plane", "position": [0, -1, 0], "normal": [0, 1, 0],
//!     "diffuse_color": [120, 120, 120] },
//!   { "type": "light", "position": [0, 5, -5], "color": [255, 255, 255],
//!     "radial-a0": 1, "radial-a1": 0, "radial-a2": 0.01 }
//! ]
//! ```
//!
//! Omitted colors are black, omitted fractions zero, `ior` defaults to 1 and
//! `theta` to 180 (point light).

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::Result;
use crate::light::{Light, OMNIDIRECTIONAL_THETA};
use crate::material::Material;
use crate::plane::Plane;
use crate::scene::{Camera, Scene, SceneObject};
use crate::sphere::Sphere;
use crate::vector::Vector3;

#[derive(Debug, Deserialize)]
struct SurfaceDesc {
    #[serde(default)]
    diffuse_color: [f64; 3],
    #[serde(default)]
    specular_color: [f64; 3],
    #[serde(default)]
    reflectivity: f64,
    #[serde(default)]
    refractivity: f64,
    #[serde(default = "default_ior")]
    ior: f64,
}

impl SurfaceDesc {
    fn material(&self) -> Material {
        Material {
            diffuse_color: Vector3::from_array(self.diffuse_color),
            specular_color: Vector3::from_array(self.specular_color),
            reflectivity: self.reflectivity,
            refractivity: self.refractivity,
            refractive_index: self.ior,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ObjectDesc {
    Camera {
        width: f64,
        height: f64,
    },
    Sphere {
        position: [f64; 3],
        radius: f64,
        #[serde(flatten)]
        surface: SurfaceDesc,
    },
    Plane {
        position: [f64; 3],
        normal: [f64; 3],
        #[serde(flatten)]
        surface: SurfaceDesc,
    },
    Light {
        position: [f64; 3],
        #[serde(default = "default_light_color")]
        color: [f64; 3],
        #[serde(default)]
        direction: [f64; 3],
        #[serde(default = "default_theta")]
        theta: f64,
        #[serde(rename = "radial-a0", default = "default_radial_a0")]
        radial_a0: f64,
        #[serde(rename = "radial-a1", default)]
        radial_a1: f64,
        #[serde(rename = "radial-a2", default)]
        radial_a2: f64,
        #[serde(rename = "angular-a0", default)]
        angular_a0: f64,
    },
}

fn default_ior() -> f64 {
    1.0
}

fn default_light_color() -> [f64; 3] {
    [255.0; 3]
}

fn default_theta() -> f64 {
    OMNIDIRECTIONAL_THETA
}

fn default_radial_a0() -> f64 {
    1.0
}

impl ObjectDesc {
    fn into_object(self) -> Result<SceneObject> {
        let object = match self {
            ObjectDesc::Camera { width, height } => SceneObject::camera(Camera::new(width, height)?),
            ObjectDesc::Sphere {
                position,
                radius,
                surface,
            } => SceneObject::sphere(
                Sphere::new(Vector3::from_array(position), radius)?,
                surface.material(),
            ),
            ObjectDesc::Plane {
                position,
                normal,
                surface,
            } => SceneObject::plane(
                Plane::new(Vector3::from_array(normal), Vector3::from_array(position))?,
                surface.material(),
            ),
            ObjectDesc::Light {
                position,
                color,
                direction,
                theta,
                radial_a0,
                radial_a1,
                radial_a2,
                angular_a0,
            } => SceneObject::light(
                Light::new(
                    Vector3::from_array(position),
                    Vector3::from_array(direction),
                    theta,
                    [radial_a0, radial_a1, radial_a2],
                    angular_a0,
                )?,
                Material::diffuse(Vector3::from_array(color)),
            ),
        };
        Ok(object)
    }
}

/// Parse and validate a scene from JSON text.
pub fn parse_scene(json: &str) -> Result<Scene> {
    let descs: Vec<ObjectDesc> = serde_json::from_str(json)?;
    let objects = descs
        .into_iter()
        .map(ObjectDesc::into_object)
        .collect::<Result<Vec<_>>>()?;
    Scene::new(objects)
}

/// Read, parse and validate a scene file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let scene = parse_scene(&json)?;
    info!("Loaded {} objects from {}", scene.objects().len(), path.display());
    Ok(scene)
}
