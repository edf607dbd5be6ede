use crate::consts::MathConst;
use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed:
        Copy + Clone + Default + Send + Sync + PartialOrd + std::fmt::Debug + std::fmt::Display
    {
    }

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point component type of a [`Cx`](crate::cx::Cx).
///
/// Sealed: only `f32` and `f64` implement it.
pub trait Real: sealed::Sealed + Float + FloatConst + MathConst + Debug + Display + 'static {
    /// Convert from f64, rounding when `Self` is narrower
    fn from_f64(val: f64) -> Self;
}

impl Real for f32 {
    fn from_f64(val: f64) -> f32 {
        val as f32
    }
}

impl Real for f64 {
    fn from_f64(val: f64) -> f64 {
        val
    }
}
