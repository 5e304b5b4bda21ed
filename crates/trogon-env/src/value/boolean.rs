/// Raw value is not one of the recognised boolean spellings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False")]
pub struct BoolParseError;

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
///
/// Matching is exact: no trimming and no other casings.
pub fn parse_bool(raw: &str) -> Result<bool, BoolParseError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(BoolParseError),
    }
}
