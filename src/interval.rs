//! Interval arithmetic for ray parameter ranges.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f64,
    /// Maximum value of the interval
    pub max: f64,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Everything strictly beyond `min`, used for rays that start on a surface.
    pub fn beyond(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Same lower bound, upper bound pulled in to `max`.
    pub fn up_to(&self, max: f64) -> Self {
        Self::new(self.min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_exclusive_for_surrounds() {
        let i = Interval::new(0.0, 1.0);
        assert!(i.contains(0.0) && i.contains(1.0));
        assert!(!i.surrounds(0.0) && !i.surrounds(1.0));
        assert!(i.surrounds(0.5));
    }

    #[test]
    fn narrowing_keeps_lower_bound() {
        let i = Interval::beyond(1e-6).up_to(4.0);
        assert_eq!(i, Interval::new(1e-6, 4.0));
        assert!(!i.surrounds(5.0));
    }
}
