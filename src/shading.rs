//! Direct illumination at a surface hit.
//!
//! Sums a Lambert diffuse term and a Phong specular term for every light that
//! is not occluded, each scaled by the light's radial and angular attenuation.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{
    add, dot, max_val, multiply, normalize, reflection_vector, scale, Color, Vector3,
};

/// Offset applied along the normal so secondary rays do not re-hit their own surface.
pub const SURFACE_EPSILON: f64 = 1e-6;

/// Full channel intensity on the [0, 255] color scale.
const FULL_INTENSITY: f64 = 255.0;

/// Color contributed by the scene's lights at `rec`.
///
/// `view_dir` is the unit direction of the ray that produced the hit and
/// `shininess` the Phong exponent.
pub fn direct_illumination(scene: &Scene, rec: &HitRecord, view_dir: Vector3, shininess: f64) -> Color {
    let n = rec.normal;
    let to_viewer = -view_dir;
    let mut color = Color::ZERO;

    for (light, emitter) in scene.lights() {
        let to_light = light.position - rec.p;
        let distance = to_light.length();
        // A light sitting exactly on the surface has no defined direction
        let Ok(l) = normalize(to_light) else {
            continue;
        };

        let n_dot_l = dot(n, l);
        // Lights behind the surface add neither diffuse nor specular light
        if n_dot_l <= 0.0 {
            continue;
        }

        let shadow_ray = Ray::new(rec.p + n * SURFACE_EPSILON, l);
        if scene.hit(&shadow_ray, Interval::new(0.0, distance)).is_some() {
            continue;
        }

        let light_color = emitter.diffuse_color / FULL_INTENSITY;
        // Positive here already; the clamp keeps the Lambert formula in its usual form
        let diffuse = scale(
            multiply(rec.material.diffuse_color, light_color),
            max_val(0.0, n_dot_l),
        );

        let r = reflection_vector(-l, n);
        let highlight = max_val(0.0, dot(r, to_viewer)).powf(shininess);
        let specular = scale(multiply(rec.material.specular_color, light_color), highlight);

        let falloff = light.radial_attenuation(distance) * light.angular_attenuation(-l);
        color = add(color, scale(add(diffuse, specular), falloff));
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Light;
    use crate::material::Material;
    use crate::scene::{Camera, SceneObject};
    use crate::sphere::Sphere;
    use crate::vector::clamp_color_value;

    fn scene_with_light(position: Vector3, extra: Vec<SceneObject>) -> Scene {
        let mut objects = vec![
            SceneObject::camera(Camera::new(1.0, 1.0).unwrap()),
            SceneObject::sphere(
                Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0).unwrap(),
                Material::diffuse(Color::new(255.0, 0.0, 0.0)),
            ),
            SceneObject::light(Light::point(position), Material::diffuse(Color::splat(255.0))),
        ];
        objects.extend(extra);
        Scene::new(objects).unwrap()
    }

    fn primary_hit(scene: &Scene) -> (Ray, HitRecord) {
        let r = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        let rec = scene.hit(&r, Interval::beyond(0.0)).unwrap();
        (r, rec)
    }

    fn expected_lambert(rec: &HitRecord, light: Vector3) -> Color {
        let l = normalize(light - rec.p).unwrap();
        let k = max_val(0.0, dot(rec.normal, l));
        let c = scale(Color::new(255.0, 0.0, 0.0), k);
        Color::new(clamp_color_value(c.x), clamp_color_value(c.y), clamp_color_value(c.z))
    }

    #[test]
    fn light_above_sphere_center_grazes_away_from_hit() {
        let light = Vector3::new(0.0, 5.0, -5.0);
        let scene = scene_with_light(light, vec![]);
        let (r, rec) = primary_hit(&scene);
        assert!(rec.p.abs_diff_eq(Vector3::new(0.0, 0.0, -4.0), 1e-9));
        assert!(rec.normal.abs_diff_eq(Vector3::Z, 1e-9));

        let color = direct_illumination(&scene, &rec, r.direction, 20.0);
        assert!(color.abs_diff_eq(expected_lambert(&rec, light), 1e-9));
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn lambert_term_scales_diffuse_color() {
        let light = Vector3::new(0.0, 5.0, 0.0);
        let scene = scene_with_light(light, vec![]);
        let (r, rec) = primary_hit(&scene);

        let color = direct_illumination(&scene, &rec, r.direction, 20.0);
        let expected = expected_lambert(&rec, light);
        assert!(color.abs_diff_eq(expected, 1e-9), "{color:?} vs {expected:?}");
        assert!(color.x > 150.0 && color.x < 255.0);
        assert_eq!(color.y, 0.0);
    }

    #[test]
    fn occluded_light_contributes_nothing() {
        let blocker = SceneObject::sphere(
            Sphere::new(Vector3::new(0.0, 0.0, -2.0), 0.5).unwrap(),
            Material::default(),
        );
        let light = Vector3::new(0.0, 0.0, 0.0);
        let scene = scene_with_light(light, vec![blocker]);

        // Front of the red sphere, facing the light but behind the blocker
        let behind = HitRecord::new(
            &Ray::new(Vector3::ZERO, -Vector3::Z),
            4.0,
            Vector3::Z,
            Material::diffuse(Color::new(255.0, 0.0, 0.0)),
        );
        let color = direct_illumination(&scene, &behind, -Vector3::Z, 20.0);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn wide_spotlight_never_darkens_a_surface() {
        for a0 in [1.0, 0.5] {
            let spot = Light::new(
                Vector3::new(0.0, -0.5, 0.0),
                -Vector3::Y,
                120.0,
                [1.0, 0.0, 0.0],
                a0,
            )
            .unwrap();
            let scene = Scene::new(vec![
                SceneObject::camera(Camera::new(1.0, 1.0).unwrap()),
                SceneObject::sphere(
                    Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0).unwrap(),
                    Material::diffuse(Color::new(255.0, 0.0, 0.0)),
                ),
                SceneObject::light(spot, Material::diffuse(Color::splat(255.0))),
            ])
            .unwrap();
            let (r, rec) = primary_hit(&scene);

            let color = direct_illumination(&scene, &rec, r.direction, 20.0);
            assert!(color.is_finite(), "a0 = {a0}: {color:?}");
            assert_eq!(color, Color::ZERO, "a0 = {a0}");
        }
    }

    #[test]
    fn specular_highlight_faces_viewer() {
        let mut objects = vec![
            SceneObject::camera(Camera::new(1.0, 1.0).unwrap()),
            SceneObject::sphere(
                Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0).unwrap(),
                Material::diffuse(Color::ZERO).with_specular(Color::splat(255.0)),
            ),
        ];
        objects.push(SceneObject::light(
            Light::point(Vector3::ZERO),
            Material::diffuse(Color::splat(255.0)),
        ));
        let scene = Scene::new(objects).unwrap();
        let (r, rec) = primary_hit(&scene);

        // Light at the eye: mirror direction points straight back at the viewer
        let color = direct_illumination(&scene, &rec, r.direction, 20.0);
        assert!(color.abs_diff_eq(Color::splat(255.0), 1e-6));
    }
}
