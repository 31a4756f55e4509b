//! Read-only view over the configured stat codes

use super::rules::GameRules;

#[derive(Clone, Copy, Debug)]
pub struct StatCatalog<'a> {
    codes: &'a [String],
}

impl<'a> StatCatalog<'a> {
    pub fn new(rules: &'a GameRules) -> Self {
        Self {
            codes: &rules.statistics.statistics,
        }
    }

    /// Configured codes in declaration order.
    pub fn codes(&self) -> &'a [String] {
        self.codes
    }

    pub fn is_valid(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
