use crate::cx::Cx;
use crate::scalar::Real;

impl<T: Real> Cx<T> {
    /// Calculate sine, `(sin re · cosh im, cos re · sinh im)`
    pub fn sin(self) -> Self {
        let (sin, cos) = self.re.sin_cos();
        Cx::new(sin * self.im.cosh(), cos * self.im.sinh())
    }

    /// Calculate cosine, `(cos re · cosh im, -sin re · sinh im)`
    pub fn cos(self) -> Self {
        let (sin, cos) = self.re.sin_cos();
        Cx::new(cos * self.im.cosh(), -sin * self.im.sinh())
    }

    /// Calculate tangent as `sin / cos`, with the saturating [`Cx::div`]
    pub fn tan(self) -> Self {
        self.sin().div(self.cos())
    }

    /// Calculate hyperbolic sine, `(sinh re · cos im, cosh re · sin im)`
    pub fn sinh(self) -> Self {
        let (sin, cos) = self.im.sin_cos();
        Cx::new(self.re.sinh() * cos, self.re.cosh() * sin)
    }

    /// Calculate hyperbolic cosine, `(cosh re · cos im, sinh re · sin im)`
    pub fn cosh(self) -> Self {
        let (sin, cos) = self.im.sin_cos();
        Cx::new(self.re.cosh() * cos, self.re.sinh() * sin)
    }

    /// Calculate hyperbolic tangent as `sinh / cosh`, with the saturating
    /// [`Cx::div`]
    pub fn tanh(self) -> Self {
        self.sinh().div(self.cosh())
    }
}
