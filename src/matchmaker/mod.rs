//! Matchmaking core
//!
//! - `constants`: default attribute keys
//! - `value`: tagged attribute values and numeric coercion
//! - `ticket`: tickets, players, and match hand-off types
//! - `rules`: rule document decoding
//! - `catalog`: configured stat codes
//! - `selection`: selected-stat lookup shared by validation and enrichment
//! - `validate`: ticket eligibility
//! - `enrich`: ticket score enrichment
//! - `logic`: the match function contract exposed to the host
//! - `provider`: channel-backed ticket source for match making

pub mod constants;
pub mod value;
pub mod ticket;
pub mod rules;
pub mod catalog;
pub mod selection;
pub mod validate;
pub mod enrich;
pub mod logic;
pub mod provider;

pub use constants::*;
pub use value::AttributeValue;
pub use ticket::{Attributes, BackfillProposal, BackfillTicket, Match, Player, Team, Ticket};
pub use rules::{GameRules, StatisticsConfig};
pub use catalog::StatCatalog;
pub use selection::{resolve_selection, Selection};
pub use validate::{validate_ticket, Rejection};
pub use enrich::{enrich_ticket, mean, resolve_stat_value};
pub use logic::{
    MatchLogic, MatchMaker, Scope, TicketProvider,
    BACKFILL_MATCHES_UNIMPLEMENTED, MAKE_MATCHES_UNIMPLEMENTED,
};
pub use provider::ChannelTicketProvider;
