//! Threshold rule: the terminal pass/fail decision of a run.
//!
//! A run passes when the observed instruction count is at least the
//! configured minimum. Equal counts pass.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::inspect::count::parse_decimal;

/// Minimum acceptable instruction count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Threshold(pub u64);

impl FromStr for Threshold {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s)
            .map(Threshold)
            .ok_or_else(|| CheckError::InvalidThreshold(s.trim().to_string()))
    }
}

/// Outcome of the threshold rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub mnemonic: String,
    pub observed: u64,
    pub minimum: u64,
    /// Process exit code for CI: 0 pass, 1 fail.
    pub exit_code: i32,
}

impl Verdict {
    /// Turn a failed verdict into the error reported to the caller.
    pub fn ensure(&self) -> Result<(), CheckError> {
        if self.passed {
            Ok(())
        } else {
            Err(CheckError::BelowThreshold {
                mnemonic: self.mnemonic.clone(),
                observed: self.observed,
                minimum: self.minimum,
            })
        }
    }
}

pub fn evaluate(mnemonic: &str, observed: u64, minimum: Threshold) -> Verdict {
    let passed = observed >= minimum.0;

    Verdict {
        passed,
        mnemonic: mnemonic.to_string(),
        observed,
        minimum: minimum.0,
        exit_code: if passed { 0 } else { 1 },
    }
}
