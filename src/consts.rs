use crate::cx::Cx;

/// Mathematical constants that work interchangeably across `f32`, `f64`,
/// `Cx<f32>`, and `Cx<f64>`.
///
/// For real types, the constants are the standard mathematical values.
/// For complex types, the constants are real-valued (imaginary part = 0).
///
/// ```
/// use cxkit::consts::MathConst;
/// use cxkit::cx::Cx64;
///
/// // Works the same regardless of type:
/// let pi_f32: f32 = f32::PI_C;
/// let pi_f64: f64 = f64::PI_C;
/// let pi_cx: Cx64 = Cx64::PI_C;
/// assert_eq!(pi_cx.re, pi_f64);
/// ```
pub trait MathConst {
    // =========================================================================
    // Small integer constants
    // =========================================================================

    /// -1
    const CN1: Self;
    /// 0
    const C0: Self;
    /// 0.5
    const C05: Self;
    /// 1
    const C1: Self;
    /// 180
    const C180: Self;

    // =========================================================================
    // Mathematical constants
    // =========================================================================

    /// Archimedes' constant (pi)
    const PI_C: Self;

    /// ln(2)
    const LN_2_C: Self;

    /// ln(10)
    const LN_10_C: Self;
}

// =============================================================================
// f32
// =============================================================================

impl MathConst for f32 {
    const CN1: Self = -1.0;
    const C0: Self = 0.0;
    const C05: Self = 0.5;
    const C1: Self = 1.0;
    const C180: Self = 180.0;
    const PI_C: Self = core::f32::consts::PI;
    const LN_2_C: Self = core::f32::consts::LN_2;
    const LN_10_C: Self = core::f32::consts::LN_10;
}

// =============================================================================
// f64
// =============================================================================

impl MathConst for f64 {
    const CN1: Self = -1.0;
    const C0: Self = 0.0;
    const C05: Self = 0.5;
    const C1: Self = 1.0;
    const C180: Self = 180.0;
    const PI_C: Self = core::f64::consts::PI;
    const LN_2_C: Self = core::f64::consts::LN_2;
    const LN_10_C: Self = core::f64::consts::LN_10;
}

// =============================================================================
// Cx<T>: real-valued constants (im = 0)
// =============================================================================

impl<T: MathConst> MathConst for Cx<T> {
    const CN1: Self = Cx {
        re: T::CN1,
        im: T::C0,
    };
    const C0: Self = Cx {
        re: T::C0,
        im: T::C0,
    };
    const C05: Self = Cx {
        re: T::C05,
        im: T::C0,
    };
    const C1: Self = Cx {
        re: T::C1,
        im: T::C0,
    };
    const C180: Self = Cx {
        re: T::C180,
        im: T::C0,
    };
    const PI_C: Self = Cx {
        re: T::PI_C,
        im: T::C0,
    };
    const LN_2_C: Self = Cx {
        re: T::LN_2_C,
        im: T::C0,
    };
    const LN_10_C: Self = Cx {
        re: T::LN_10_C,
        im: T::C0,
    };
}
