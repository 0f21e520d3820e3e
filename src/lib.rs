//! Glint ray tracer core
//!
//! Vector algebra with reflection and refraction derivations, a closed scene
//! object model (camera, sphere, plane, light), and a recursive CPU renderer
//! that ties them together.

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod hittable;
pub mod interval;
pub mod light;
pub mod material;
pub mod output;
pub mod plane;
pub mod random;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shading;
pub mod sphere;
pub mod vector;

pub use error::{GlintError, Result};
pub use scene::{Scene, SceneObject};
pub use vector::{Color, Vector3};
