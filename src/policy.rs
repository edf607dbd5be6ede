use core::fmt;
use serde::{Deserialize, Serialize};
use simple_error::SimpleError;
use std::str::FromStr;

/// What `inv`/`div` return for an exact zero denominator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroPolicy {
    /// Return `(0, 0)`. Keeps downstream shading finite.
    #[default]
    Saturate,
    /// Compute `conj(z) / |z|²` regardless and let the non-finite result
    /// propagate.
    Propagate,
}

impl ZeroPolicy {
    /// Convert text into a ZeroPolicy
    pub fn from_str(val: &str) -> Result<ZeroPolicy, SimpleError> {
        match val.trim().to_lowercase().as_str() {
            "saturate" | "zero" | "guarded" => Ok(ZeroPolicy::Saturate),
            "propagate" | "ieee" | "unguarded" => Ok(ZeroPolicy::Propagate),
            other => {
                log::debug!("rejected zero policy {:?}", other);
                Err(SimpleError::new(format!(
                    "string not a valid zero policy: {}",
                    val
                )))
            }
        }
    }

    /// Convert ZeroPolicy to &str
    pub fn to_str(&self) -> &str {
        match self {
            ZeroPolicy::Saturate => "saturate",
            ZeroPolicy::Propagate => "propagate",
        }
    }
}

impl FromStr for ZeroPolicy {
    type Err = SimpleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZeroPolicy::from_str(s)
    }
}

impl fmt::Display for ZeroPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
