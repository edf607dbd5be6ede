use crate::cx::Cx;
use crate::scalar::Real;

impl<T: Real> Cx<T> {
    /// Principal natural logarithm `(ln|z|, atan2(im, re))`.
    ///
    /// The imaginary part lies in `(-pi, pi]`. At zero the real part is
    /// `-inf`; it is left to propagate.
    pub fn ln(self) -> Self {
        Cx::new(self.abs().ln(), self.arg())
    }

    /// Calculate the base 2 logarithm
    pub fn log2(self) -> Self {
        self.ln().unscale(T::LN_2_C)
    }

    /// Calculate the base 10 logarithm
    pub fn log10(self) -> Self {
        self.ln().unscale(T::LN_10_C)
    }

    /// `e^re · (cos(im), sin(im))`. Overflows to infinity for large `re`.
    pub fn exp(self) -> Self {
        let (sin, cos) = self.im.sin_cos();
        Cx::new(cos, sin).scale(self.re.exp())
    }
}
