//! Surface shading parameters shared by every scene object.
//!
//! Colors use the [0, 255] per-channel scale. A light uses its diffuse color
//! as the color it emits.

use crate::error::{GlintError, Result};
use crate::vector::Color;

/// Material attributes embedded in every scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Lambertian color (emitted color for lights).
    pub diffuse_color: Color,
    /// Phong highlight color.
    pub specular_color: Color,
    /// Fraction of light mirrored, in [0, 1].
    pub reflectivity: f64,
    /// Fraction of light transmitted, in [0, 1].
    pub refractivity: f64,
    /// Index of refraction (1.0 = vacuum, 1.5 = glass). Only used when refractivity > 0.
    pub refractive_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_color: Color::ZERO,
            specular_color: Color::ZERO,
            reflectivity: 0.0,
            refractivity: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Opaque diffuse material with no highlight.
    pub fn diffuse(color: Color) -> Self {
        Self {
            diffuse_color: color,
            ..Self::default()
        }
    }

    /// Builder-style setter for the specular color.
    pub fn with_specular(mut self, color: Color) -> Self {
        self.specular_color = color;
        self
    }

    /// Builder-style setter for the mirrored fraction.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Builder-style setter for the transmitted fraction and index of refraction.
    pub fn with_refraction(mut self, refractivity: f64, refractive_index: f64) -> Self {
        self.refractivity = refractivity;
        self.refractive_index = refractive_index;
        self
    }

    /// Share of the local (direct) illumination left after reflection and refraction.
    pub fn opacity(&self) -> f64 {
        1.0 - self.reflectivity - self.refractivity
    }

    /// Check the physical plausibility constraints.
    ///
    /// Rejects reflectivity or refractivity outside [0, 1], a sum above 1
    /// (the surface would emit more than it receives) and a non-positive
    /// refractive index.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("reflectivity", self.reflectivity),
            ("refractivity", self.refractivity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GlintError::InvalidMaterial(format!(
                    "{name} {value} is outside [0, 1]"
                )));
            }
        }
        if self.reflectivity + self.refractivity > 1.0 {
            return Err(GlintError::InvalidMaterial(format!(
                "reflectivity {} + refractivity {} exceeds 1",
                self.reflectivity, self.refractivity
            )));
        }
        if !(self.refractive_index > 0.0) {
            return Err(GlintError::InvalidMaterial(format!(
                "refractive index {} must be positive",
                self.refractive_index
            )));
        }
        self.validate_colors()
    }

    /// Check that both colors lie on the [0, 255] channel scale.
    ///
    /// This is the only check that applies to lights, whose diffuse color is
    /// the emitted color.
    pub fn validate_colors(&self) -> Result<()> {
        for (name, color) in [
            ("diffuse color", self.diffuse_color),
            ("specular color", self.specular_color),
        ] {
            if !color.to_array().iter().all(|c| (0.0..=255.0).contains(c)) {
                return Err(GlintError::InvalidMaterial(format!(
                    "{name} {color} has channels outside [0, 255]"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_is_valid() {
        assert!(Material::default().validate().is_ok());
        assert_eq!(Material::default().opacity(), 1.0);
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        assert!(Material::default().with_reflectivity(1.2).validate().is_err());
        assert!(Material::default().with_reflectivity(-0.1).validate().is_err());
        assert!(Material::default().with_refraction(1.5, 1.5).validate().is_err());
    }

    #[test]
    fn rejects_energy_gain() {
        let m = Material::default()
            .with_reflectivity(0.6)
            .with_refraction(0.5, 1.5);
        assert!(matches!(m.validate(), Err(GlintError::InvalidMaterial(_))));
    }

    #[test]
    fn rejects_non_positive_index() {
        assert!(Material::default().with_refraction(0.5, 0.0).validate().is_err());
        assert!(Material::default().with_refraction(0.5, -1.3).validate().is_err());
    }

    #[test]
    fn rejects_colors_off_the_channel_scale() {
        assert!(Material::diffuse(Color::new(-500.0, 0.0, 0.0)).validate().is_err());
        assert!(Material::default()
            .with_specular(Color::new(0.0, 256.0, 0.0))
            .validate()
            .is_err());
        assert!(Material::diffuse(Color::new(f64::NAN, 0.0, 0.0)).validate_colors().is_err());
        assert!(Material::diffuse(Color::splat(255.0)).validate_colors().is_ok());
    }

    #[test]
    fn glass_is_valid() {
        let glass = Material::diffuse(Color::splat(20.0))
            .with_reflectivity(0.1)
            .with_refraction(0.9, 1.5);
        assert!(glass.validate().is_ok());
        assert!(glass.opacity().abs() < 1e-12);
    }
}
