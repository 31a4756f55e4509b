//! Ticket and match hand-off types

use std::collections::{BTreeMap, HashMap};

use prost_types::Timestamp;

use super::value::AttributeValue;

/// Open attribute mapping; absent maps on the wire decode to an empty map.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// A player inside a ticket
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Player {
    pub player_id: String,
    pub attributes: Attributes,
}

impl Player {
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A matchmaking request for one or more players
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ticket {
    pub ticket_id: String,
    pub match_pool: String,
    pub created_at: Option<Timestamp>,
    pub players: Vec<Player>,
    pub ticket_attributes: Attributes,
    pub latencies: HashMap<String, i64>,
    pub party_session_id: String,
    pub namespace: String,
}

impl Ticket {
    pub fn new(ticket_id: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            ..Default::default()
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.ticket_attributes.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Match / backfill hand-off (produced by the host engine, never by this crate)
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Team {
    pub user_ids: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Match {
    pub tickets: Vec<Ticket>,
    pub teams: Vec<Team>,
    pub region_preferences: Vec<String>,
    pub match_attributes: Attributes,
    pub backfill: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackfillTicket {
    pub ticket_id: String,
    pub match_pool: String,
    pub created_at: Option<Timestamp>,
    pub partial_match: Match,
    pub match_session_id: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackfillProposal {
    pub backfill_ticket_id: String,
    pub created_at: Option<Timestamp>,
    pub added_tickets: Vec<Ticket>,
    pub proposed_teams: Vec<Team>,
    pub proposal_id: String,
    pub match_pool: String,
    pub match_session_id: String,
}
