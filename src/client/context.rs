//! Routing context attached to host calls.
//!
//! Zellij hands the context map of a `web_request` or `run_command` back with
//! its result event. Tagging each call with a kind and id lets the shim route
//! settlements and lets the application drop answers it no longer waits for.

use std::collections::BTreeMap;

const KIND_KEY: &str = "biztone_kind";
const ID_KEY: &str = "biztone_id";

/// Which component issued a host call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Conversion,
    Clipboard,
}

impl CallKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Conversion => "conversion",
            Self::Clipboard => "clipboard",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "conversion" => Some(Self::Conversion),
            "clipboard" => Some(Self::Clipboard),
            _ => None,
        }
    }
}

/// Kind and id of an outstanding host call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    pub kind: CallKind,
    pub id: u64,
}

impl CallContext {
    #[must_use]
    pub const fn conversion(id: u64) -> Self {
        Self {
            kind: CallKind::Conversion,
            id,
        }
    }

    #[must_use]
    pub const fn clipboard(id: u64) -> Self {
        Self {
            kind: CallKind::Clipboard,
            id,
        }
    }

    /// Encodes the context as the string map Zellij carries along.
    #[must_use]
    pub fn to_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (KIND_KEY.to_string(), self.kind.as_str().to_string()),
            (ID_KEY.to_string(), self.id.to_string()),
        ])
    }

    /// Decodes a context map; `None` if it was not produced by [`Self::to_map`].
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        let kind = map.get(KIND_KEY).and_then(|k| CallKind::parse(k))?;
        let id = map.get(ID_KEY)?.parse().ok()?;
        Some(Self { kind, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_survives_the_host_map() {
        let ctx = CallContext::clipboard(42);
        assert_eq!(CallContext::from_map(&ctx.to_map()), Some(ctx));
    }

    #[test]
    fn foreign_maps_are_not_ours() {
        assert_eq!(CallContext::from_map(&BTreeMap::new()), None);

        let mut map = CallContext::conversion(1).to_map();
        map.insert(ID_KEY.to_string(), "not-a-number".to_string());
        assert_eq!(CallContext::from_map(&map), None);

        let mut map = CallContext::conversion(1).to_map();
        map.insert(KIND_KEY.to_string(), "scan".to_string());
        assert_eq!(CallContext::from_map(&map), None);
    }
}
