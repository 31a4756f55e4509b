//! Rule document defaults

// ============================================================================
// Attribute keys
// ============================================================================

pub const DEFAULT_SELECTED_STAT_KEY: &str = "selected_stat";  // player-level declaration key
pub const DEFAULT_ENRICHED_KEY: &str = "mmr";                  // ticket-level score key

// ============================================================================
// Fallback values
// ============================================================================

pub const UNSET_DEFAULT_VALUE: f64 = 0.0;  // also the legacy "no default configured" marker
pub const EMPTY_TICKET_SCORE: f64 = 0.0;   // mean of a ticket with no players
