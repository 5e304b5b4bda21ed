use std::num::ParseFloatError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FloatParseError {
    #[error("invalid float literal: {0}")]
    Invalid(#[from] ParseFloatError),
    #[error("float literal out of range")]
    OutOfRange,
}

/// Parses a decimal or exponent literal, or `inf`/`infinity`/`nan` in any case.
///
/// A finite literal too large for `f64` is an error rather than infinity.
pub fn parse_f64(raw: &str) -> Result<f64, FloatParseError> {
    let value: f64 = raw.parse()?;
    if value.is_infinite() && !is_infinity_literal(raw) {
        return Err(FloatParseError::OutOfRange);
    }
    Ok(value)
}

/// Parses at `f64` precision, then narrows.
pub fn parse_f32(raw: &str) -> Result<f32, FloatParseError> {
    parse_f64(raw).map(|value| value as f32)
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
