//! Content-mixing extension point for volume transfers.

use crate::error::ComponentError;

/// What a volume-holding component contains.
///
/// The discriminator selects which mixing collaborator handles a transfer
/// (blood gets blood mixing, gas gets gas mixing). New content kinds come
/// with their own mixer implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Blood,
    Gas,
}

impl ContentKind {
    pub fn parse(s: &str) -> Result<Self, ComponentError> {
        match s {
            "blood" => Ok(ContentKind::Blood),
            "gas" => Ok(ContentKind::Gas),
            other => Err(ComponentError::InvalidParam {
                key: "content".to_string(),
                reason: format!("unknown content kind '{other}'"),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Blood => "blood",
            ContentKind::Gas => "gas",
        }
    }
}

/// Hook invoked whenever volume enters a component from a named source.
///
/// Mixing semantics (gas fractions, oxygen content, ...) live entirely in
/// the implementor, keyed by the component names it is told about; the
/// reservoir itself only reports the transfer. No mixer installed means the
/// transfer is volume-only.
pub trait ContentMixer: Send {
    fn mix(&mut self, content: ContentKind, target: &str, source: &str, dvol_l: f64, vol_l: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_kinds() {
        assert_eq!(ContentKind::parse("blood").unwrap(), ContentKind::Blood);
        assert_eq!(ContentKind::parse("gas").unwrap(), ContentKind::Gas);
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let err = ContentKind::parse("lymph").unwrap_err();
        assert!(err.to_string().contains("lymph"));
    }

    #[test]
    fn as_str_round_trips() {
        for kind in [ContentKind::Blood, ContentKind::Gas] {
            assert_eq!(ContentKind::parse(kind.as_str()).unwrap(), kind);
        }
    }
}
