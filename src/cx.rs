use crate::consts::MathConst;
use crate::scalar::Real;
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A complex number `re + i·im` as a plain two-component value.
///
/// Laid out like a `vec2`, so slices of `Cx<f32>` can be handed to a GPU
/// buffer unchanged. Every operation takes `self` by value and returns a new
/// value; nothing is mutated in place apart from the `*Assign` operators.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cx<T> {
    /// Real part
    pub re: T,
    /// Imaginary part
    pub im: T,
}

pub type Cx32 = Cx<f32>;
pub type Cx64 = Cx<f64>;

impl<T: MathConst> Cx<T> {
    /// A constant `Cx` 0.
    pub const ZERO: Self = Cx {
        re: T::C0,
        im: T::C0,
    };

    /// A constant `Cx` 1.
    pub const ONE: Self = Cx {
        re: T::C1,
        im: T::C0,
    };

    /// A constant `Cx` _i_, the imaginary unit.
    pub const I: Self = Cx {
        re: T::C0,
        im: T::C1,
    };
}

impl<T: Real> Cx<T> {
    /// Create a new complex number from real and imaginary parts
    pub const fn new(re: T, im: T) -> Self {
        Cx { re, im }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub fn from_real(re: T) -> Self {
        Cx::new(re, T::C0)
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub fn from_imag(im: T) -> Self {
        Cx::new(T::C0, im)
    }

    /// Create a new complex number from real and imaginary parts given as f64
    pub fn from_f64(re: f64, im: f64) -> Self {
        Cx::new(T::from_f64(re), T::from_f64(im))
    }

    /// Create a new complex number from a `(re, im)` tuple
    pub fn from_tuple(num: (T, T)) -> Self {
        Cx::new(num.0, num.1)
    }

    /// Split into a `(re, im)` tuple
    pub fn to_tuple(self) -> (T, T) {
        (self.re, self.im)
    }

    /// Magnitude, computed with `hypot` so it neither overflows nor underflows
    /// for representable results
    pub fn abs(self) -> T {
        self.re.hypot(self.im)
    }

    /// Argument in `(-pi, pi]`
    pub fn arg(self) -> T {
        self.im.atan2(self.re)
    }

    /// Dot product of the two components viewed as 2-vectors
    pub fn dot(self, other: Self) -> T {
        self.re * other.re + self.im * other.im
    }

    /// Squared magnitude `re² + im²`
    pub fn norm_sqr(self) -> T {
        self.dot(self)
    }

    /// Component-wise floor
    pub fn floor(self) -> Self {
        Cx::new(self.re.floor(), self.im.floor())
    }

    /// Component-wise fractional part, `x - floor(x)`
    pub fn fract(self) -> Self {
        self - self.floor()
    }

    /// Multiply both components by a real scalar
    pub fn scale(self, t: T) -> Self {
        Cx::new(self.re * t, self.im * t)
    }

    /// Divide both components by a real scalar. No zero guard.
    pub fn unscale(self, t: T) -> Self {
        Cx::new(self.re / t, self.im / t)
    }

    /// Check if the complex number contains NaN
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Check if the complex number is infinite
    pub fn is_infinite(self) -> bool {
        !self.is_nan() && (self.re.is_infinite() || self.im.is_infinite())
    }

    /// Check if the complex number is finite
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Exact zero test; `-0.0` counts as zero
    pub fn is_zero(self) -> bool {
        self.re == T::C0 && self.im == T::C0
    }
}

impl<T: Real> From<T> for Cx<T> {
    fn from(re: T) -> Self {
        Cx::from_real(re)
    }
}

impl<T: Real> From<(T, T)> for Cx<T> {
    fn from(num: (T, T)) -> Self {
        Cx::from_tuple(num)
    }
}

impl<T: Real> From<Complex<T>> for Cx<T> {
    fn from(num: Complex<T>) -> Self {
        Cx::new(num.re, num.im)
    }
}

impl<T: Real> From<Cx<T>> for Complex<T> {
    fn from(num: Cx<T>) -> Self {
        Complex::new(num.re, num.im)
    }
}

impl<T: Real> fmt::Display for Cx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (real, imag) = (self.re, self.im);

        if imag == T::C0 {
            write!(f, "{}", real)
        } else if real == T::C0 {
            if imag == T::C1 {
                write!(f, "i")
            } else if imag == T::CN1 {
                write!(f, "-i")
            } else {
                write!(f, "{}i", imag)
            }
        } else if imag == T::C1 {
            write!(f, "{} + i", real)
        } else if imag == T::CN1 {
            write!(f, "{} - i", real)
        } else if imag > T::C0 {
            write!(f, "{} + {}i", real, imag)
        } else if imag < T::C0 {
            write!(f, "{} - {}i", real, -imag)
        } else {
            // NaN imaginary part
            write!(f, "{} + {}i", real, imag)
        }
    }
}

impl<T: Real> Neg for Cx<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Cx::new(-self.re, -self.im)
    }
}

impl<T: Real> Add for Cx<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Cx::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Real> Sub for Cx<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Cx::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Real> Mul for Cx<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Cx::mul(self, rhs)
    }
}

/// Saturating division: a zero denominator yields zero, see [`Cx::div`].
impl<T: Real> Div for Cx<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Cx::div(self, rhs)
    }
}

impl<T: Real> Add<T> for Cx<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        Cx::new(self.re + rhs, self.im)
    }
}

impl<T: Real> Sub<T> for Cx<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        Cx::new(self.re - rhs, self.im)
    }
}

impl<T: Real> Mul<T> for Cx<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

/// Plain component division, no zero guard.
impl<T: Real> Div<T> for Cx<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.unscale(rhs)
    }
}

macro_rules! impl_assign_op(
    ($trt:ident, $mth:ident, $operator:tt) => (
        impl<T: Real> $trt for Cx<T> {
            fn $mth(&mut self, rhs: Self) {
                *self = *self $operator rhs;
            }
        }

        impl<T: Real> $trt<T> for Cx<T> {
            fn $mth(&mut self, rhs: T) {
                *self = *self $operator rhs;
            }
        }
    );
);

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);

macro_rules! impl_real_lhs_op(
    ($real:ty) => (
        impl Add<Cx<$real>> for $real {
            type Output = Cx<$real>;

            fn add(self, rhs: Cx<$real>) -> Cx<$real> {
                Cx::new(self + rhs.re, rhs.im)
            }
        }

        impl Sub<Cx<$real>> for $real {
            type Output = Cx<$real>;

            fn sub(self, rhs: Cx<$real>) -> Cx<$real> {
                Cx::new(self - rhs.re, -rhs.im)
            }
        }

        impl Mul<Cx<$real>> for $real {
            type Output = Cx<$real>;

            fn mul(self, rhs: Cx<$real>) -> Cx<$real> {
                rhs.scale(self)
            }
        }

        impl Div<Cx<$real>> for $real {
            type Output = Cx<$real>;

            fn div(self, rhs: Cx<$real>) -> Cx<$real> {
                Cx::from_real(self).div(rhs)
            }
        }
    );
);

impl_real_lhs_op!(f32);
impl_real_lhs_op!(f64);
