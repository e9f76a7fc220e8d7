use std::{error::Error, fmt};

/// Problems with the input stream that are reported in strict mode.
///
/// In the default best-effort mode none of these are raised: malformed numbers fall back to zero
/// and a glyph cut short by the end of the input is dropped. They reach callers wrapped in an
/// [`anyhow::Error`], and can be recovered with `downcast_ref`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscodeError {
    /// The input ended while looking for `marker` in the body of a glyph.
    UnexpectedEof { code_point: i64, marker: &'static str },
    /// A numeric field could not be parsed.
    MalformedField { field: &'static str, line: String },
}
impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::UnexpectedEof { code_point, marker } => write!(
                f,
                "unexpected end of input looking for `{marker}` in glyph {code_point:04X}"
            ),
            TranscodeError::MalformedField { field, line } => {
                write!(f, "malformed `{field}` field: {line:?}")
            }
        }
    }
}
impl Error for TranscodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_marker() {
        let err = TranscodeError::UnexpectedEof { code_point: 0x4E00, marker: "BITMAP" };
        assert_eq!(err.to_string(), "unexpected end of input looking for `BITMAP` in glyph 4E00");

        let err = TranscodeError::MalformedField { field: "BBX", line: "BBX x".into() };
        assert_eq!(err.to_string(), "malformed `BBX` field: \"BBX x\"");
    }

    #[test]
    fn survives_anyhow_roundtrip() {
        let err: anyhow::Error =
            TranscodeError::UnexpectedEof { code_point: 65, marker: "END" }.into();
        assert!(matches!(
            err.downcast_ref::<TranscodeError>(),
            Some(TranscodeError::UnexpectedEof { marker: "END", .. })
        ));
    }
}
