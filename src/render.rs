//! Recursive Whitted-style renderer.
//!
//! Casts one or more primary rays per pixel through the scene camera's view
//! plane, shades each hit with direct illumination and follows mirror and
//! transmitted rays up to a fixed depth.

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::random;
use crate::ray::Ray;
use crate::scene::{Camera, Scene};
use crate::shading::{direct_illumination, SURFACE_EPSILON};
use crate::vector::{add, reflection_vector, refract, scale, to_pixel, Color, Transmission, Vector3};

/// 8-bit RGB framebuffer produced by [`Renderer::render`].
pub type Framebuffer = ImageBuffer<Rgb<u8>, Vec<u8>>;

/// Render settings.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Primary rays per pixel; more than one jitters samples inside the pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces (recursion depth limit)
    pub max_depth: u32,
    /// Phong exponent for specular highlights
    pub shininess: f64,
    /// Color of rays that escape the scene
    pub background: Color,
    /// Draw a progress bar on stderr while rendering
    pub show_progress: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            image_width: 100,
            image_height: 100,
            samples_per_pixel: 1,
            max_depth: 7,
            shininess: 20.0,
            background: Color::ZERO,
            show_progress: false,
        }
    }
}

impl Renderer {
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            ..Self::default()
        }
    }

    /// Render the scene into a new framebuffer, one parallel task per pixel.
    pub fn render(&self, scene: &Scene) -> Framebuffer {
        let width = self.image_width.max(1);
        let height = self.image_height.max(1);
        let samples = self.samples_per_pixel.max(1);
        let camera = scene.camera();

        let mut image = Framebuffer::new(width, height);

        info!(
            "Rendering {}x{} ({} spp, depth {}) using {} CPU cores...",
            width,
            height,
            samples,
            self.max_depth,
            rayon::current_num_threads()
        );
        let generation_start = std::time::Instant::now();
        let pb = if self.show_progress {
            let pb = ProgressBar::new(u64::from(width) * u64::from(height));
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:40} {pos}/{len} ETA: {eta}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        image.enumerate_pixels_mut().par_bridge().for_each(|(i, j, pixel)| {
            let mut pixel_color = Color::ZERO;
            for _ in 0..samples {
                let offset = if samples == 1 { (0.0, 0.0) } else { random::sample_square() };
                let r = self.primary_ray(camera, width, height, i, j, offset);
                pixel_color += self.ray_color(&r, scene, self.max_depth);
            }
            *pixel = to_pixel(pixel_color / f64::from(samples));
            pb.inc(1);
        });

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }

    /// Primary ray from the eye at the origin through pixel (i, j).
    ///
    /// The view plane sits at z = -1 and spans `camera.width` by
    /// `camera.height`; `offset` shifts the sample from the pixel center in
    /// pixel units.
    pub fn primary_ray(
        &self,
        camera: &Camera,
        width: u32,
        height: u32,
        i: u32,
        j: u32,
        offset: (f64, f64),
    ) -> Ray {
        let pixel_width = camera.width / f64::from(width);
        let pixel_height = camera.height / f64::from(height);

        let x = -camera.width / 2.0 + pixel_width * (f64::from(i) + 0.5 + offset.0);
        let y = camera.height / 2.0 - pixel_height * (f64::from(j) + 0.5 + offset.1);

        // z = -1 keeps the direction non-zero
        Ray::new(Vector3::ZERO, Vector3::new(x, y, -1.0).normalize())
    }

    /// Trace a ray and compute its color.
    ///
    /// Local illumination is weighted by the surface opacity, then the
    /// reflected and transmitted rays are traced recursively and weighted by
    /// reflectivity and refractivity.
    pub fn ray_color(&self, r: &Ray, scene: &Scene, depth: u32) -> Color {
        if depth == 0 {
            return self.background;
        }

        let Some(rec) = scene.hit(r, Interval::beyond(SURFACE_EPSILON)) else {
            return self.background;
        };

        let material = rec.material;
        let d = r.direction;
        let local = direct_illumination(scene, &rec, d, self.shininess);
        let mut color = scale(local, material.opacity());

        if material.reflectivity > 0.0 {
            let bounce = Ray::new(rec.p + rec.normal * SURFACE_EPSILON, reflection_vector(d, rec.normal));
            color = add(
                color,
                scale(self.ray_color(&bounce, scene, depth - 1), material.reflectivity),
            );
        }

        if material.refractivity > 0.0 {
            let eta = if rec.front_face {
                1.0 / material.refractive_index
            } else {
                material.refractive_index
            };
            match refract(d, rec.normal, eta) {
                Ok(transmission) => {
                    // Refracted rays continue past the surface, reflected ones stay on the near side
                    let origin = match transmission {
                        Transmission::Refracted(_) => rec.p - rec.normal * SURFACE_EPSILON,
                        Transmission::TotallyReflected(_) => rec.p + rec.normal * SURFACE_EPSILON,
                    };
                    let through = Ray::new(origin, transmission.direction());
                    color = add(
                        color,
                        scale(self.ray_color(&through, scene, depth - 1), material.refractivity),
                    );
                }
                Err(e) => debug!("Skipping transmission at {:?}: {}", rec.p, e),
            }
        }

        color
    }
}
