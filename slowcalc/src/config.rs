//! Calculator configuration
//!
//! The classic and ledger calculators share one engine. They differ in two
//! switches, captured by [`EngineConfig`]. [`CalcConfig`] is the persisted
//! app preference that selects a variant and a palette.

use serde::{Deserialize, Serialize};
use slowcore::storage::{self, config_dir};
use slowcore::Palette;
use std::path::PathBuf;

/// How the display looks right after an operator press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// Leave the typed operand on screen.
    Raw,
    /// Show the accumulator with the pending operator, e.g. `"12 + "`.
    Annotated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub display: DisplayStyle,
    pub record_history: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Variant::default().engine()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Raw display, no history.
    Classic,
    /// Inline operator annotation and a calculation log.
    #[default]
    Ledger,
}

impl Variant {
    pub fn engine(self) -> EngineConfig {
        match self {
            Variant::Classic => EngineConfig {
                display: DisplayStyle::Raw,
                record_history: false,
            },
            Variant::Ledger => EngineConfig {
                display: DisplayStyle::Annotated,
                record_history: true,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Ledger => "ledger",
        }
    }
}

/// Preferences saved to `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub variant: Variant,
    pub palette: Palette,
    /// Overrides the variant's display style when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_operator: Option<bool>,
    /// Overrides the variant's history switch when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_history: Option<bool>,
}

impl CalcConfig {
    fn config_path() -> PathBuf {
        config_dir("slowcalc").join("config.json")
    }

    pub fn load() -> Self {
        storage::load_or_default(&Self::config_path())
    }

    pub fn save(&self) -> storage::Result<()> {
        storage::save_json(&Self::config_path(), self)
    }

    /// Resolve the variant and any overrides into engine switches.
    pub fn engine(&self) -> EngineConfig {
        let mut engine = self.variant.engine();
        if let Some(inline) = self.inline_operator {
            engine.display = if inline { DisplayStyle::Annotated } else { DisplayStyle::Raw };
        }
        if let Some(record) = self.record_history {
            engine.record_history = record;
        }
        engine
    }
}
