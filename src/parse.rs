//! Reading complex numbers from text.
//!
//! Accepts everything `Display` writes (`3`, `-2.5i`, `i`, `3 - i`, `3 + 4i`,
//! and non-finite components such as `inf`, `NaN + i`, `1 - infi`) plus `j`
//! for the imaginary unit, an optional `*` before it, scientific notation,
//! and the tuple form `(3, 4)`.

use crate::cx::Cx;
use crate::error::ParseComplexError;
use crate::scalar::Real;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::str::FromStr;

const NUM: &str = r"(?:(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?|(?i:inf(?:inity)?|nan))";

struct Patterns {
    tuple: Regex,
    real: Regex,
    imag: Regex,
    full: Regex,
}

static PATTERNS: Lazy<Patterns> = Lazy::new(|| Patterns {
    tuple: Regex::new(&format!(
        r"^\(\s*(?<re>[+-]?{NUM})\s*,\s*(?<im>[+-]?{NUM})\s*\)$"
    ))
    .expect("Invalid regex!"),
    real: Regex::new(&format!(r"^(?<re>[+-]?{NUM})$")).expect("Invalid regex!"),
    imag: Regex::new(&format!(r"^(?<sign>[+-])?\s*(?<im>{NUM})?\s*\*?\s*[ij]$"))
        .expect("Invalid regex!"),
    full: Regex::new(&format!(
        r"^(?<re>[+-]?{NUM})\s*(?<sign>[+-])\s*(?<im>{NUM})?\s*\*?\s*[ij]$"
    ))
    .expect("Invalid regex!"),
});

fn number<T: Real>(text: &str) -> Result<T, ParseComplexError> {
    text.parse::<f64>()
        .map(T::from_f64)
        .map_err(|_| ParseComplexError::Malformed(text.to_string()))
}

fn component<T: Real>(caps: &Captures, name: &str) -> Result<T, ParseComplexError> {
    match caps.name(name) {
        Some(m) => number(m.as_str()),
        None => Ok(T::C0),
    }
}

/// Imaginary part written as `[sign] [magnitude] i`; a bare `i` means 1
fn signed_imag<T: Real>(caps: &Captures) -> Result<T, ParseComplexError> {
    let magnitude = match caps.name("im") {
        Some(m) => number(m.as_str())?,
        None => T::C1,
    };
    match caps.name("sign").map(|m| m.as_str()) {
        Some("-") => Ok(-magnitude),
        _ => Ok(magnitude),
    }
}

fn parse_complex<T: Real>(s: &str) -> Result<Cx<T>, ParseComplexError> {
    let text = s.trim();
    if text.is_empty() {
        return Err(ParseComplexError::Empty);
    }

    let patterns = &*PATTERNS;
    if let Some(caps) = patterns.tuple.captures(text) {
        Ok(Cx::new(component(&caps, "re")?, component(&caps, "im")?))
    } else if let Some(caps) = patterns.real.captures(text) {
        Ok(Cx::from_real(component(&caps, "re")?))
    } else if let Some(caps) = patterns.imag.captures(text) {
        Ok(Cx::from_imag(signed_imag(&caps)?))
    } else if let Some(caps) = patterns.full.captures(text) {
        Ok(Cx::new(component(&caps, "re")?, signed_imag(&caps)?))
    } else {
        Err(ParseComplexError::Malformed(text.to_string()))
    }
}

impl<T: Real> FromStr for Cx<T> {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_complex(s) {
            Ok(z) => {
                log::trace!("parsed {:?} as {}", s, z);
                Ok(z)
            }
            Err(err) => {
                log::debug!("rejected complex literal {:?}: {}", s, err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cx::{Cx32, Cx64};

    #[test]
    fn test_parse_display_forms() {
        for z in [
            Cx64::new(3.0, 0.0),
            Cx64::new(0.0, 1.0),
            Cx64::new(0.0, -1.0),
            Cx64::new(0.0, 2.5),
            Cx64::new(3.0, 1.0),
            Cx64::new(3.0, -1.0),
            Cx64::new(3.0, 4.0),
            Cx64::new(-3.0, -4.5),
            Cx64::new(1e-7, 6.02e23),
        ] {
            let text = z.to_string();
            assert_eq!(text.parse::<Cx64>().unwrap(), z, "{}", text);
        }
    }

    fn same(a: f64, b: f64) -> bool {
        a == b || (a.is_nan() && b.is_nan())
    }

    #[test]
    fn test_parse_display_forms_non_finite() {
        let inf = f64::INFINITY;
        let nan = f64::NAN;
        for z in [
            Cx64::new(inf, 0.0),
            Cx64::new(-inf, 0.0),
            Cx64::new(nan, 0.0),
            Cx64::new(0.0, inf),
            Cx64::new(0.0, -inf),
            Cx64::new(0.0, nan),
            Cx64::new(nan, 1.0),
            Cx64::new(1.0, inf),
            Cx64::new(1.0, -inf),
            Cx64::new(-inf, 2.0),
            Cx64::new(nan, nan),
            Cx64::ZERO.inv_unguarded(),
        ] {
            let text = z.to_string();
            let back = text.parse::<Cx64>().unwrap();
            assert!(same(back.re, z.re) && same(back.im, z.im), "{} -> {:?}", text, back);
        }
    }

    #[test]
    fn test_parse_non_finite_spellings() {
        assert_eq!("inf".parse::<Cx64>().unwrap(), Cx64::new(f64::INFINITY, 0.0));
        assert_eq!("-Infinity".parse::<Cx64>().unwrap(), Cx64::new(f64::NEG_INFINITY, 0.0));
        assert_eq!("1 + infi".parse::<Cx64>().unwrap(), Cx64::new(1.0, f64::INFINITY));
        assert_eq!("(INF, -inf)".parse::<Cx32>().unwrap(), Cx32::new(f32::INFINITY, f32::NEG_INFINITY));
        let z = "NaN + i".parse::<Cx64>().unwrap();
        assert!(z.re.is_nan());
        assert_eq!(z.im, 1.0);
        assert!(matches!(
            "infx".parse::<Cx64>(),
            Err(ParseComplexError::Malformed(_))
        ));
    }

    #[test]
    fn test_patterns_shared_across_threads() {
        let first: &'static Patterns = &PATTERNS;
        std::thread::scope(|s| {
            for k in 0..4 {
                s.spawn(move || {
                    let text = format!("{} - {}i", k, k + 1);
                    let z = text.parse::<Cx64>().unwrap();
                    assert_eq!(z, Cx64::new(k as f64, -(k as f64 + 1.0)));
                    assert!(std::ptr::eq(first, &*PATTERNS));
                });
            }
        });
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("1+2j".parse::<Cx64>().unwrap(), Cx64::new(1.0, 2.0));
        assert_eq!("  -1.5e2 - .5*i ".parse::<Cx64>().unwrap(), Cx64::new(-150.0, -0.5));
        assert_eq!("(3, -4)".parse::<Cx64>().unwrap(), Cx64::new(3.0, -4.0));
        assert_eq!("+i".parse::<Cx64>().unwrap(), Cx64::I);
        assert_eq!("-j".parse::<Cx64>().unwrap(), Cx64::new(0.0, -1.0));
        assert_eq!("3e+2i".parse::<Cx64>().unwrap(), Cx64::new(0.0, 300.0));
        assert_eq!("5.".parse::<Cx32>().unwrap(), Cx32::new(5.0, 0.0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Cx64>().unwrap_err(), ParseComplexError::Empty);
        assert_eq!("   ".parse::<Cx64>().unwrap_err(), ParseComplexError::Empty);
        assert!(matches!(
            "3 + 4".parse::<Cx64>(),
            Err(ParseComplexError::Malformed(_))
        ));
        assert!(matches!(
            "abc".parse::<Cx64>(),
            Err(ParseComplexError::Malformed(_))
        ));
        assert!(matches!(
            "1 + 2i + 3".parse::<Cx64>(),
            Err(ParseComplexError::Malformed(_))
        ));
        assert_eq!(
            "x".parse::<Cx64>().unwrap_err().to_string(),
            "Not a complex number literal: x"
        );
    }
}
