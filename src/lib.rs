//! Closed-form complex arithmetic for per-sample numeric pipelines.
//!
//! Every operation is a pure function of its `Copy` arguments: no allocation,
//! no shared state, no error returns. Domain errors come back as NaN or
//! infinite components, with one deliberate exception: [`Cx::inv`] and
//! [`Cx::div`] return zero for an exact zero denominator (see [`ZeroPolicy`]).
//!
//! [`Cx::inv`]: crate::cx::Cx::inv
//! [`Cx::div`]: crate::cx::Cx::div
//! [`ZeroPolicy`]: crate::policy::ZeroPolicy
pub mod arc;
pub mod arith;
pub mod consts;
pub mod cx;
pub mod error;
pub mod parse;
pub mod polar;
pub mod policy;
pub mod pow;
pub mod prelude;
pub mod scalar;
pub mod sqrt;
pub mod transcendental;
pub mod trig;
pub mod util;

/// Create a **[`Cx`](crate::cx::Cx)** from real and imaginary parts.
///
/// ```
/// use cxkit::cx;
/// use cxkit::cx::Cx64;
///
/// let z: Cx64 = cx!(3.0, 4.0);
/// assert_eq!(z.abs(), 5.0);
///
/// let r: Cx64 = cx!(2.0);
/// assert_eq!(r, Cx64::new(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! cx {
    ($re:expr, $im:expr $(,)?) => {
        $crate::cx::Cx::new($re, $im)
    };
    ($re:expr $(,)?) => {
        $crate::cx::Cx::from_real($re)
    };
}
