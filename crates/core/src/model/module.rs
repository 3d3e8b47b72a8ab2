use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier for one of the three fixed curriculum modules.
///
/// The set is closed: every dispatch on it is an exhaustive `match`, and the
/// persisted progress blob always carries exactly one entry per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModuleId {
    #[serde(rename = "HTML_CSS")]
    HtmlCss,
    #[serde(rename = "PYTHON")]
    Python,
    #[serde(rename = "JAVASCRIPT")]
    Javascript,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown module: {raw}")]
pub struct ParseModuleIdError {
    raw: String,
}

impl ModuleId {
    /// Every module, in syllabus order.
    pub const ALL: [ModuleId; 3] = [ModuleId::HtmlCss, ModuleId::Python, ModuleId::Javascript];

    /// The key used for this module in the persisted progress blob.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            ModuleId::HtmlCss => "HTML_CSS",
            ModuleId::Python => "PYTHON",
            ModuleId::Javascript => "JAVASCRIPT",
        }
    }

    /// URL-safe slug, used as a route segment.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            ModuleId::HtmlCss => "html-css",
            ModuleId::Python => "python",
            ModuleId::Javascript => "javascript",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ModuleId {
    type Err = ParseModuleIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ModuleId::ALL
            .into_iter()
            .find(|module| module.slug() == raw)
            .ok_or_else(|| ParseModuleIdError {
                raw: raw.to_string(),
            })
    }
}
