// ============================================================================
// Notation Tables
// Immutable suffix/illion lookup data, built once and shared by reference
// ============================================================================

use super::config::NotationConfig;
use crate::numeric::ConfigResult;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

/// Process-wide tables for the short-scale preset.
static STANDARD: Lazy<NotationTables> =
    Lazy::new(|| NotationTables::build(NotationConfig::short_scale()));

/// Scale exponent of a group: `3 × index`.
#[inline]
pub const fn exponent_of(index: usize) -> usize {
    3 * index
}

/// Suffix and illion lookup tables.
///
/// The only place that defines what a suffix token means numerically and
/// what a group is called. Read-only after construction, so a single
/// instance can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct NotationTables {
    suffixes: Vec<String>,
    illion_names: Vec<String>,
    exponents: HashMap<String, usize>,
}

impl NotationTables {
    /// Build tables from a configuration.
    ///
    /// # Errors
    /// Returns the first problem `NotationConfig::validate` finds.
    pub fn from_config(config: NotationConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Tables for the short-scale preset, built on first use.
    pub fn standard() -> &'static NotationTables {
        &STANDARD
    }

    fn build(config: NotationConfig) -> Self {
        let NotationConfig {
            suffixes,
            illion_names,
        } = config;

        let exponents = suffixes
            .iter()
            .enumerate()
            .map(|(index, token)| (token.clone(), exponent_of(index)))
            .collect();

        if illion_names.len() > suffixes.len() {
            tracing::warn!(
                suffixes = suffixes.len(),
                illion_names = illion_names.len(),
                "suffix table is shorter than the illion table; consider extending the suffixes"
            );
        }

        Self {
            suffixes,
            illion_names,
            exponents,
        }
    }

    /// Ordered suffix tokens; index 0 is the empty suffix.
    #[inline]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Ordered illion names.
    #[inline]
    pub fn illion_names(&self) -> &[String] {
        &self.illion_names
    }

    /// Index of the largest tabulated suffix.
    #[inline]
    pub fn last_suffix_index(&self) -> usize {
        self.suffixes.len() - 1
    }

    /// Suffix token for a group, if tabulated.
    #[inline]
    pub fn suffix(&self, index: usize) -> Option<&str> {
        self.suffixes.get(index).map(String::as_str)
    }

    /// Exponent a registered suffix token stands for.
    #[inline]
    pub fn suffix_to_exponent(&self, token: &str) -> Option<usize> {
        self.exponents.get(token).copied()
    }

    /// Name of a group, or `10^N` when the group is past the illion table.
    pub fn illion_name(&self, index: usize) -> Cow<'_, str> {
        match self.illion_names.get(index) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("10^{}", exponent_of(index))),
        }
    }
}

impl Default for NotationTables {
    fn default() -> Self {
        Self::build(NotationConfig::short_scale())
    }
}
