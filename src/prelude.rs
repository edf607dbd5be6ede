//! cxkit prelude.
//!
//! This module contains the most used types, type aliases, and traits that
//! you can import easily as a group.
//!
//! ```
//! use cxkit::prelude::*;
//!
//! let z = Cx64::new(-4.0, 0.0);
//! assert_eq!(z.sqrt(), Cx64::new(0.0, 2.0));
//! ```

#[doc(no_inline)]
pub use crate::consts::MathConst;

#[doc(no_inline)]
pub use crate::cx::{Cx, Cx32, Cx64};

#[doc(no_inline)]
pub use crate::error::ParseComplexError;

#[doc(no_inline)]
pub use crate::policy::ZeroPolicy;

#[doc(no_inline)]
pub use crate::scalar::Real;

#[doc(no_inline)]
pub use num_traits::Pow;
