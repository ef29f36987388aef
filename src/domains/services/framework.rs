//! Framework mode resolution shared by every domain service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Rendering flavor a response is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkMode {
    /// `@trussworks/react-uswds` components.
    React,
    /// Plain USWDS HTML markup.
    Vanilla,
    /// USWDS markup with Tailwind-USWDS utilities.
    Tailwind,
}

impl FrameworkMode {
    /// Default mode for a constructor flag.
    pub fn from_react_default(use_react_default: bool) -> Self {
        if use_react_default {
            Self::React
        } else {
            Self::Vanilla
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vanilla => "vanilla",
            Self::Tailwind => "tailwind",
        }
    }

    /// Mode label used by most services (`react-uswds`, `vanilla-uswds`, `tailwind-uswds`).
    pub fn uswds_label(&self) -> &'static str {
        match self {
            Self::React => "react-uswds",
            Self::Vanilla => "vanilla-uswds",
            Self::Tailwind => "tailwind-uswds",
        }
    }
}

impl std::fmt::Display for FrameworkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call framework resolution.
///
/// Implementors only expose their constructor flag; the resolution rule is
/// provided here so it is identical for every service: an explicit per-call
/// mode wins, otherwise the constructor default applies.
pub trait FrameworkAware {
    /// The `use_react_default` flag given at construction.
    fn use_react_default(&self) -> bool;

    fn default_mode(&self) -> FrameworkMode {
        FrameworkMode::from_react_default(self.use_react_default())
    }

    fn resolve_mode(&self, requested: Option<FrameworkMode>) -> FrameworkMode {
        requested.unwrap_or_else(|| self.default_mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe(bool);

    impl FrameworkAware for Probe {
        fn use_react_default(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_override_wins() {
        let vanilla_default = Probe(false);
        assert_eq!(vanilla_default.resolve_mode(Some(FrameworkMode::React)), FrameworkMode::React);
        assert_eq!(vanilla_default.resolve_mode(Some(FrameworkMode::Tailwind)), FrameworkMode::Tailwind);

        let react_default = Probe(true);
        assert_eq!(react_default.resolve_mode(Some(FrameworkMode::Vanilla)), FrameworkMode::Vanilla);
    }

    #[test]
    fn test_default_applies_without_override() {
        assert_eq!(Probe(true).resolve_mode(None), FrameworkMode::React);
        assert_eq!(Probe(false).resolve_mode(None), FrameworkMode::Vanilla);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let mode: FrameworkMode = serde_json::from_str("\"tailwind\"").unwrap();
        assert_eq!(mode, FrameworkMode::Tailwind);
        assert!(serde_json::from_str::<FrameworkMode>("\"angular\"").is_err());
    }
}
