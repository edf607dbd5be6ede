//! Primitive complex arithmetic.
//!
//! `inv` and `div` saturate: an exact zero denominator yields `(0, 0)`
//! instead of diverging. This breaks `div(a, b) * b == a` at `b == 0` and is
//! the only place the kernel departs from plain IEEE-754 propagation.
//! `inv_unguarded`/`div_unguarded` keep the propagating behaviour, and
//! [`ZeroPolicy`] selects between the two at run time.

use crate::cx::Cx;
use crate::policy::ZeroPolicy;
use crate::scalar::Real;

impl<T: Real> Cx<T> {
    /// Complex conjugate `(re, -im)`
    pub fn conj(self) -> Self {
        Cx::new(self.re, -self.im)
    }

    /// Complex product. No special handling: overflow follows the real
    /// multiply/add rules.
    pub fn mul(self, rhs: Self) -> Self {
        Cx::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }

    /// `mul(self, self)` without the general product's cross terms.
    ///
    /// Bit-identical to `self.mul(self)` for finite input: the imaginary part
    /// is `t + t` with `t = re * im`, which is what `re*im + im*re` rounds to.
    pub fn square(self) -> Self {
        let t = self.re * self.im;
        Cx::new(self.re * self.re - self.im * self.im, t + t)
    }

    /// Reciprocal with a zero guard: `inv(0) == 0`.
    ///
    /// Any other input, however small, goes through `conj(z) / |z|²` and may
    /// overflow to non-finite components.
    pub fn inv(self) -> Self {
        if self.is_zero() {
            return Cx::ZERO;
        }
        self.inv_unguarded()
    }

    /// Reciprocal `conj(z) / |z|²` with no zero guard; `0` yields NaN
    /// components.
    pub fn inv_unguarded(self) -> Self {
        self.conj().unscale(self.norm_sqr())
    }

    /// Reciprocal under an explicit zero-division policy
    pub fn inv_with(self, policy: ZeroPolicy) -> Self {
        match policy {
            ZeroPolicy::Saturate => self.inv(),
            ZeroPolicy::Propagate => self.inv_unguarded(),
        }
    }

    /// `self * inv(rhs)`; dividing by an exact zero yields `(0, 0)`.
    pub fn div(self, rhs: Self) -> Self {
        self.mul(rhs.inv())
    }

    /// `self * inv_unguarded(rhs)`
    pub fn div_unguarded(self, rhs: Self) -> Self {
        self.mul(rhs.inv_unguarded())
    }

    /// Quotient under an explicit zero-division policy
    pub fn div_with(self, rhs: Self, policy: ZeroPolicy) -> Self {
        self.mul(rhs.inv_with(policy))
    }
}
