use crate::cx::Cx;
use crate::scalar::Real;
use num_traits::Pow;

impl<T: Real> Cx<T> {
    /// Principal value of `self^exp`, `exp(exp * ln(self))`.
    ///
    /// A zero base is not special-cased: `ln(0)` has a `-inf` real part and
    /// the result follows from floating-point propagation.
    pub fn pow(self, exp: Self) -> Self {
        exp.mul(self.ln()).exp()
    }

    /// Raise to a real power
    pub fn powf(self, exp: T) -> Self {
        self.pow(Cx::from_real(exp))
    }

    /// Raise to an integer power by repeated multiplication.
    ///
    /// Multiplies `|n|` times starting from one, then takes [`Cx::inv`] when
    /// `n < 0`, so `powi(0, -n)` saturates to zero. `powi(z, 0) == 1` for every
    /// `z`. The cost is linear in `|n|`.
    pub fn powi(self, n: i32) -> Self {
        let mut acc = Self::ONE;
        for _ in 0..n.unsigned_abs() {
            acc = acc.mul(self);
        }
        if n < 0 {
            acc.inv()
        } else {
            acc
        }
    }
}

// Implement Pow trait
impl<T: Real> Pow<Cx<T>> for Cx<T> {
    type Output = Cx<T>;

    fn pow(self, exp: Cx<T>) -> Cx<T> {
        Cx::pow(self, exp)
    }
}

impl<T: Real> Pow<&Cx<T>> for Cx<T> {
    type Output = Cx<T>;

    fn pow(self, exp: &Cx<T>) -> Cx<T> {
        Cx::pow(self, *exp)
    }
}

impl<T: Real> Pow<T> for Cx<T> {
    type Output = Cx<T>;

    fn pow(self, exp: T) -> Cx<T> {
        self.powf(exp)
    }
}

impl<T: Real> Pow<i32> for Cx<T> {
    type Output = Cx<T>;

    fn pow(self, exp: i32) -> Cx<T> {
        self.powi(exp)
    }
}

#[cfg(test)]
mod tests {
    use crate::cx::Cx64;
    use num_traits::Pow;
    use std::f64::consts::{E, FRAC_PI_2, PI};

    #[test]
    fn test_powi() {
        let z = Cx64::new(1.0, 2.0);
        assert_eq!(z.powi(0), Cx64::ONE);
        assert_eq!(z.powi(1), z);
        assert_eq!(z.powi(2), z.square());
        assert_eq!(z.powi(3), Cx64::new(-11.0, -2.0));
        assert_eq!(Cx64::I.powi(4), Cx64::ONE);
        assert_eq!(Cx64::ZERO.powi(0), Cx64::ONE);
    }

    #[test]
    fn test_powi_negative() {
        let z = Cx64::new(1.0, 2.0);
        assert_eq!(z.powi(-3), z.powi(3).inv());
        assert_eq!(Cx64::new(2.0, 0.0).powi(-2), Cx64::new(0.25, -0.0));
        assert_eq!(Cx64::ZERO.powi(-2), Cx64::ZERO);
    }

    #[test]
    fn test_pow() {
        // i^i = e^(-pi/2)
        let z = Cx64::I.pow(Cx64::I);
        assert!((z.re - (-FRAC_PI_2).exp()).abs() < 1e-15);
        assert!(z.im.abs() < 1e-15);

        let z = Cx64::new(-1.0, 0.0).powf(0.5);
        assert!(z.re.abs() < 1e-15);
        assert!((z.im - 1.0).abs() < 1e-15);

        let z = Cx64::new(E, 0.0).pow(Cx64::new(0.0, PI));
        assert!((z.re + 1.0).abs() < 1e-15);
        assert!(z.im.abs() < 1e-15);
    }

    #[test]
    fn test_pow_matches_powi() {
        let z = Cx64::new(0.7, -1.3);
        let a = z.pow(Cx64::new(5.0, 0.0));
        let b = z.powi(5);
        assert!((a - b).abs() < 1e-13 * b.abs());
    }

    #[test]
    fn test_pow_zero_base() {
        // 0 * -inf inside the product poisons the result; powi has no log
        assert!(Cx64::ZERO.powf(2.0).is_nan());
        assert!(Cx64::ZERO.powf(0.0).is_nan());
        assert_eq!(Cx64::ZERO.powi(2), Cx64::ZERO);
    }

    #[test]
    fn test_pow_trait() {
        let z = Cx64::new(1.0, 1.0);
        assert_eq!(Pow::pow(z, 2i32), z.powi(2));
        assert_eq!(Pow::pow(z, 2.0f64), z.powf(2.0));
        assert_eq!(Pow::pow(z, Cx64::I), z.pow(Cx64::I));
        assert_eq!(Pow::pow(z, &Cx64::I), z.pow(Cx64::I));
    }
}
