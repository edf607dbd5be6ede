//! Inverse trigonometric and inverse hyperbolic functions.
//!
//! Each one is a literal composition of [`Cx::sqrt`] and [`Cx::ln`], so every
//! branch cut here is inherited from those two (`sqrt` real part `>= 0`, `ln`
//! argument in `(-pi, pi]`) and the cuts of `asin`/`acos`/`asinh`/`acosh`
//! stay mutually consistent.

use crate::cx::Cx;
use crate::scalar::Real;

impl<T: Real> Cx<T> {
    fn neg_i() -> Self {
        Cx::new(T::C0, T::CN1)
    }

    /// `-i · ln(i·z + sqrt(1 - z²))`
    pub fn asin(self) -> Self {
        let root = (Self::ONE - self.mul(self)).sqrt();
        Self::neg_i().mul((Self::I.mul(self) + root).ln())
    }

    /// `-i · ln(z + sqrt(z² - 1))`
    pub fn acos(self) -> Self {
        let root = (self.mul(self) - Self::ONE).sqrt();
        Self::neg_i().mul((self + root).ln())
    }

    /// `(i/2) · ln((1 - i·z) / (1 + i·z))`; the quotient uses the saturating
    /// [`Cx::div`], so `atan(i)` lands on `ln(0)`.
    pub fn atan(self) -> Self {
        let iz = Self::I.mul(self);
        let half_i = Cx::new(T::C0, T::C05);
        half_i.mul((Self::ONE - iz).div(Self::ONE + iz).ln())
    }

    /// `ln(z + sqrt(z² + 1))`
    pub fn asinh(self) -> Self {
        (self + (self.mul(self) + Self::ONE).sqrt()).ln()
    }

    /// `ln(z + sqrt(z² - 1))`
    pub fn acosh(self) -> Self {
        (self + (self.mul(self) - Self::ONE).sqrt()).ln()
    }

    /// `(1/2) · ln((1 + z) / (1 - z))`
    pub fn atanh(self) -> Self {
        let half = Cx::new(T::C05, T::C0);
        half.mul((Self::ONE + self).div(Self::ONE - self).ln())
    }
}
