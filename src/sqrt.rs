//! Principal square root without cancellation.
//!
//! The textbook pair `x = sqrt((r + re) / 2)`, `y = sqrt((r - re) / 2)` loses
//! every significant digit of whichever component is small: `r - re` near the
//! positive real axis, `r + re` near the negative one. Only the component fed
//! by `r + |re|` is computed directly here; the other comes from the exact
//! identity `2·x·y = im`. No `exp`/`ln` round trip is involved.

use crate::cx::Cx;
use crate::scalar::Real;

impl<T: Real> Cx<T> {
    /// Principal square root.
    ///
    /// The real part of the result is never negative. On the imaginary axis of
    /// the result (negative real input) the imaginary part takes the sign of
    /// the input's imaginary part, with `-0.0` counted as non-negative.
    /// `sqrt(0) == 0`.
    pub fn sqrt(self) -> Self {
        let r = self.abs();
        let re_abs = self.re.abs();
        let sum = r + re_abs;
        let w = if sum.is_finite() {
            (T::C05 * sum).sqrt()
        } else {
            // r + |re| overflowed; halve first
            (T::C05 * r + T::C05 * re_abs).sqrt()
        };

        if w == T::C0 {
            return Cx::ZERO;
        }

        let half_inv_w = T::C05 / w;
        if self.re >= T::C0 {
            Cx::new(w, self.im * half_inv_w)
        } else {
            let im = if self.im >= T::C0 { w } else { -w };
            Cx::new(self.im.abs() * half_inv_w, im)
        }
    }
}
