use crate::error::CheckError;

/// Parse an instruction count from inspector output.
///
/// Surrounding whitespace is ignored. Anything else that is not a plain
/// decimal integer is rejected instead of being compared.
pub fn parse_count(raw: &str) -> Result<u64, CheckError> {
    parse_decimal(raw).ok_or_else(|| CheckError::InvalidCount(raw.trim().to_string()))
}

pub(crate) fn parse_decimal(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wc_output() {
        assert_eq!(parse_count("5\n").unwrap(), 5);
        assert_eq!(parse_count("      42\n").unwrap(), 42);
        assert_eq!(parse_count("0").unwrap(), 0);
    }

    #[test]
    fn rejects_non_numeric() {
        for raw in ["", "\n", "five", "5 lines", "-1", "+5", "3.0", "1\n2\n"] {
            assert!(
                matches!(parse_count(raw), Err(CheckError::InvalidCount(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(parse_count("99999999999999999999999").is_err());
    }
}
