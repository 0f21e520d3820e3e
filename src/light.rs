//! Point and spot lights with distance and cone falloff.

use crate::error::{GlintError, Result};
use crate::vector::{dot, max_val, normalize, Vector3};

/// A theta of this many degrees (or more) lights every direction.
pub const OMNIDIRECTIONAL_THETA: f64 = 180.0;

/// Light source.
///
/// Radial attenuation is `1 / (r2 d^2 + r1 d + r0)` over distance `d`;
/// spotlights additionally fall off as `cos(alpha)^a0` inside their cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vector3,
    /// Cone axis, unit length. Only meaningful for spotlights.
    pub direction: Vector3,
    /// Cone half-angle in degrees.
    pub theta: f64,
    pub r0: f64,
    pub r1: f64,
    pub r2: f64,
    pub a0: f64,
}

impl Light {
    /// Omnidirectional light with constant radial falloff.
    pub fn point(position: Vector3) -> Self {
        Self {
            position,
            direction: Vector3::ZERO,
            theta: OMNIDIRECTIONAL_THETA,
            r0: 1.0,
            r1: 0.0,
            r2: 0.0,
            a0: 0.0,
        }
    }

    /// Validated light. A spotlight (`theta < 180`) needs a non-zero direction.
    pub fn new(
        position: Vector3,
        direction: Vector3,
        theta: f64,
        [r0, r1, r2]: [f64; 3],
        a0: f64,
    ) -> Result<Self> {
        if !(theta > 0.0 && theta <= OMNIDIRECTIONAL_THETA) {
            return Err(GlintError::InvalidGeometry(format!(
                "light theta {theta} must be in (0, 180] degrees"
            )));
        }
        if [r0, r1, r2, a0].iter().any(|c| !(*c >= 0.0)) {
            return Err(GlintError::InvalidGeometry(
                "light attenuation coefficients must be non-negative".to_string(),
            ));
        }

        let mut light = Self {
            position,
            direction,
            theta,
            r0,
            r1,
            r2,
            a0,
        };
        if light.is_spotlight() {
            light.direction = normalize(direction).map_err(|_| {
                GlintError::InvalidGeometry("spotlight direction must be non-zero".to_string())
            })?;
        }
        Ok(light)
    }

    pub fn is_spotlight(&self) -> bool {
        self.theta < OMNIDIRECTIONAL_THETA
    }

    /// Distance falloff. A non-positive denominator means no falloff.
    pub fn radial_attenuation(&self, distance: f64) -> f64 {
        let denom = self.r2 * distance * distance + self.r1 * distance + self.r0;
        if denom > 0.0 { 1.0 / denom } else { 1.0 }
    }

    /// Cone falloff for a unit vector pointing from the light to the lit point.
    ///
    /// Never negative: cones wider than 90 degrees reach points behind the
    /// axis, where `cos(alpha)` is clamped to 0 before the exponent.
    pub fn angular_attenuation(&self, to_point: Vector3) -> f64 {
        if !self.is_spotlight() {
            return 1.0;
        }
        let cos_alpha = dot(self.direction, to_point);
        if cos_alpha < self.theta.to_radians().cos() {
            0.0
        } else {
            max_val(0.0, cos_alpha).powf(self.a0)
        }
    }
}
