use crate::cx::Cx;
use crate::scalar::Real;

impl<T: Real> Cx<T> {
    /// Create a new complex number from a magnitude and angle in radians
    pub fn from_polar(r: T, theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Cx::new(r * cos, r * sin)
    }

    /// Create a new complex number from a magnitude and angle in degrees
    pub fn from_polar_deg(r: T, theta: T) -> Self {
        Cx::from_polar(r, theta * T::PI_C / T::C180)
    }

    /// `(|z|, atan2(im, re))`; the angle lies in `(-pi, pi]`
    pub fn to_polar(self) -> (T, T) {
        (self.abs(), self.arg())
    }

    /// Project onto the unit circle, `z / |z|`.
    ///
    /// Not guarded: `normalize(0)` divides by zero and returns NaN components.
    pub fn normalize(self) -> Self {
        self.unscale(self.abs())
    }
}
