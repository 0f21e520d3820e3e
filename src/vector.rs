//! Vector algebra for ray tracing.
//!
//! Stateless 3-component operations plus the two shading-vector derivations
//! (mirror reflection and Snell refraction) used by the recursive shading stage.
//! Every function is pure: inputs are taken by value and a new value is returned.

use glam::DVec3;
use image::Rgb;

use crate::error::{GlintError, Result};

/// Three-component vector with f64 components.
pub type Vector3 = DVec3;

/// RGB color, one channel per component, on the [0, 255] scale.
pub type Color = DVec3;

/// Below this tangential magnitude an incident ray counts as normal to the surface.
const NORMAL_INCIDENCE_EPSILON: f64 = 1e-12;

/// Component-wise sum `a + b`.
#[inline]
pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    a + b
}

/// Component-wise difference `a - b`.
#[inline]
pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    a - b
}

/// Multiply every component by the scalar `s`.
#[inline]
pub fn scale(a: Vector3, s: f64) -> Vector3 {
    a * s
}

/// Standard inner product.
#[inline]
pub fn dot(a: Vector3, b: Vector3) -> f64 {
    a.dot(b)
}

/// Right-handed cross product, `cross(X, Y) == Z`.
#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    a.cross(b)
}

/// Component-wise (Hadamard) product, used to combine colors and attenuations.
#[inline]
pub fn multiply(a: Vector3, b: Vector3) -> Vector3 {
    a * b
}

/// Scale `a` to unit length.
///
/// Fails with [`GlintError::DegenerateVector`] for the zero vector instead of
/// producing NaN components.
pub fn normalize(a: Vector3) -> Result<Vector3> {
    a.try_normalize().ok_or(GlintError::DegenerateVector)
}

/// Clamp a single color channel to [0, 255].
#[inline]
pub fn clamp_color_value(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 255.0 {
        255.0
    } else {
        x
    }
}

/// The greater of two scalars.
#[inline]
pub fn max_val(a: f64, b: f64) -> f64 {
    if a > b { a } else { b }
}

/// Convert a color to an 8-bit pixel, clamping every channel.
pub fn to_pixel(color: Color) -> Rgb<u8> {
    Rgb([
        clamp_color_value(color.x).round() as u8,
        clamp_color_value(color.y).round() as u8,
        clamp_color_value(color.z).round() as u8,
    ])
}

/// Mirror-reflect the incident direction `d` about the surface normal `n`.
///
/// Computes `r = d - 2 (n . d) n`. Both inputs are expected to be normalized;
/// the result then has unit length and makes the same angle with the normal
/// as the incoming direction.
#[inline]
pub fn reflection_vector(d: Vector3, n: Vector3) -> Vector3 {
    d - 2.0 * n.dot(d) * n
}

/// Outcome of bending a ray across a boundary between two media.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transmission {
    /// The ray crosses the boundary in this direction.
    Refracted(Vector3),
    /// Snell's law has no solution; the ray reflects in this direction instead.
    TotallyReflected(Vector3),
}

impl Transmission {
    /// Outgoing direction regardless of which regime produced it.
    pub fn direction(&self) -> Vector3 {
        match *self {
            Transmission::Refracted(d) | Transmission::TotallyReflected(d) => d,
        }
    }

    /// True when the boundary reflected the ray instead of transmitting it.
    pub fn is_total_internal_reflection(&self) -> bool {
        matches!(self, Transmission::TotallyReflected(_))
    }
}

/// Bend the incident direction `rd` through a surface with normal `normal`.
///
/// `eta` is the relative refractive index (incident medium over transmitting
/// medium). The incident direction is split against an orthonormal basis
/// built from `cross(normal, rd)` and its cross with the normal; the in-plane
/// basis vector `b` gives `sin(phi) = eta * (rd . b)` and
/// `cos(phi) = sqrt(1 - sin(phi)^2)`, and the refracted direction is
/// `-cos(phi) * normal + sin(phi) * b`.
///
/// The normal may face either side of the surface: it is flipped to oppose
/// `rd` first. When `1 - sin(phi)^2 < 0` the mirror reflection is returned as
/// [`Transmission::TotallyReflected`].
///
/// # Errors
///
/// [`GlintError::DegenerateVector`] if `rd` or `normal` has zero length.
pub fn refract(rd: Vector3, normal: Vector3, eta: f64) -> Result<Transmission> {
    let rd = normalize(rd)?;
    let mut normal = normalize(normal)?;
    if dot(rd, normal) > 0.0 {
        normal = -normal;
    }

    let a = cross(normal, rd);
    if a.length() < NORMAL_INCIDENCE_EPSILON {
        // Head-on: no tangential component, so sin(phi) = 0 and the ray passes straight through
        return Ok(Transmission::Refracted(rd));
    }
    let b = cross(normalize(a)?, normal);

    let sin_phi = eta * dot(rd, b);
    let discriminant = 1.0 - sin_phi * sin_phi;
    if discriminant < 0.0 {
        return Ok(Transmission::TotallyReflected(reflection_vector(rd, normal)));
    }
    let cos_phi = discriminant.sqrt();

    Ok(Transmission::Refracted(add(
        scale(normal, -cos_phi),
        scale(b, sin_phi),
    )))
}

/// Direction-only form of [`refract`]; total internal reflection yields the
/// reflected direction.
pub fn refraction_vector(rd: Vector3, normal: Vector3, eta: f64) -> Result<Vector3> {
    refract(rd, normal, eta).map(|t| t.direction())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Vector3, b: Vector3) {
        assert!(a.abs_diff_eq(b, EPS), "expected {b:?}, got {a:?}");
    }

    #[test]
    fn basic_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(add(a, b), Vector3::new(5.0, -3.0, 9.0));
        assert_eq!(subtract(a, b), Vector3::new(-3.0, 7.0, -3.0));
        assert_eq!(scale(a, 2.0), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(multiply(a, b), Vector3::new(4.0, -10.0, 18.0));
        assert_eq!(dot(a, b), 12.0);
    }

    #[test]
    fn dot_commutes_and_cross_anticommutes() {
        let a = Vector3::new(0.3, -1.2, 2.5);
        let b = Vector3::new(-4.0, 0.7, 1.1);
        assert_eq!(dot(a, b), dot(b, a));
        assert_close(cross(a, b), -cross(b, a));
    }

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(cross(Vector3::X, Vector3::Y), Vector3::Z);
        assert_eq!(cross(Vector3::Y, Vector3::Z), Vector3::X);
        assert_eq!(cross(Vector3::Z, Vector3::X), Vector3::Y);
    }

    #[test]
    fn normalize_gives_unit_length() {
        for v in [
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(-0.001, 0.002, 0.0005),
            Vector3::new(1e6, -2e6, 3e6),
        ] {
            let n = normalize(v).unwrap();
            assert!((n.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        assert!(matches!(normalize(Vector3::ZERO), Err(GlintError::DegenerateVector)));
    }

    #[test]
    fn clamp_color_channels() {
        assert_eq!(clamp_color_value(-10.0), 0.0);
        assert_eq!(clamp_color_value(300.0), 255.0);
        assert_eq!(clamp_color_value(128.0), 128.0);
        assert_eq!(to_pixel(Color::new(-5.0, 127.6, 999.0)), Rgb([0, 128, 255]));
    }

    #[test]
    fn max_val_picks_greater() {
        assert_eq!(max_val(0.0, -0.5), 0.0);
        assert_eq!(max_val(0.25, 0.75), 0.75);
    }

    #[test]
    fn reflection_bounces_across_normal() {
        let d = normalize(Vector3::new(1.0, -1.0, 0.0)).unwrap();
        let r = reflection_vector(d, Vector3::Y);
        assert_close(r, normalize(Vector3::new(1.0, 1.0, 0.0)).unwrap());
    }

    #[test]
    fn reflecting_twice_restores_vector() {
        let d = normalize(Vector3::new(0.2, -0.9, 0.4)).unwrap();
        let n = normalize(Vector3::new(0.1, 1.0, -0.3)).unwrap();
        assert_close(reflection_vector(reflection_vector(d, n), n), d);
    }

    #[test]
    fn refraction_at_normal_incidence_with_matching_media() {
        let rd = Vector3::new(0.0, 0.0, -1.0);
        assert_close(refraction_vector(rd, Vector3::Z, 1.0).unwrap(), rd);
        // Normal given on the far side of the surface
        assert_close(refraction_vector(rd, -Vector3::Z, 1.0).unwrap(), rd);
    }

    #[test]
    fn matching_media_do_not_bend_oblique_rays() {
        let rd = normalize(Vector3::new(0.5, -1.0, 0.2)).unwrap();
        assert_close(refraction_vector(rd, Vector3::Y, 1.0).unwrap(), rd);
    }

    #[test]
    fn refraction_obeys_snells_law() {
        let incidence = 30f64.to_radians();
        let rd = Vector3::new(incidence.sin(), -incidence.cos(), 0.0);
        let eta = 1.0 / 1.5;

        let t = refract(rd, Vector3::Y, eta).unwrap();
        assert!(!t.is_total_internal_reflection());
        let out = t.direction();

        assert!((out.length() - 1.0).abs() < EPS);
        assert!(out.y < 0.0, "refracted ray must continue into the surface");
        let sin_out = out.x;
        assert!((sin_out - eta * incidence.sin()).abs() < EPS);
    }

    #[test]
    fn total_internal_reflection_falls_back_to_reflection() {
        // Leaving glass at 60 degrees: sin(phi) = 1.5 * sin(60) > 1
        let incidence = 60f64.to_radians();
        let rd = Vector3::new(incidence.sin(), -incidence.cos(), 0.0);

        let t = refract(rd, Vector3::Y, 1.5).unwrap();
        assert!(t.is_total_internal_reflection());
        let out = t.direction();
        assert!(out.is_finite());
        assert_close(out, reflection_vector(rd, Vector3::Y));
    }

    #[test]
    fn refraction_rejects_degenerate_input() {
        assert!(refract(Vector3::ZERO, Vector3::Y, 1.0).is_err());
        assert!(refract(Vector3::X, Vector3::ZERO, 1.0).is_err());
    }
}
