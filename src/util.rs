use crate::cx::{Cx, Cx32, Cx64};
use crate::scalar::Real;
use float_cmp::{approx_eq, ApproxEq, F32Margin, F64Margin};

impl<T: Real> Cx<T> {
    /// `|self - other| <= tol`
    pub fn approx_eq_abs(self, other: Self, tol: T) -> bool {
        (self - other).abs() <= tol
    }

    /// `|self - other| <= tol · |other|`; `other` is the reference value
    pub fn approx_eq_rel(self, other: Self, tol: T) -> bool {
        (self - other).abs() <= tol * other.abs()
    }
}

impl ApproxEq for Cx64 {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.re.approx_eq(other.re, margin) && self.im.approx_eq(other.im, margin)
    }
}

impl ApproxEq for Cx32 {
    type Margin = F32Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.re.approx_eq(other.re, margin) && self.im.approx_eq(other.im, margin)
    }
}

pub fn comp_cx64(exemplar: &Cx64, calc: &Cx64, precision: F64Margin, test: &str, idx: &str) {
    comp_f64(
        &(exemplar.re),
        &(calc.re),
        precision,
        test,
        &(idx.to_owned() + ".re"),
    );
    comp_f64(
        &(exemplar.im),
        &(calc.im),
        precision,
        test,
        &(idx.to_owned() + ".im"),
    );
}

pub fn comp_vec_cx64(exemplar: &[Cx64], calc: &[Cx64], precision: F64Margin, test: &str) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        "test {} length does not match",
        test
    );
    for k in 0..calc.len() {
        comp_cx64(
            &exemplar[k],
            &calc[k],
            precision,
            test,
            &format!("({})", k),
        );
    }
}

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}
