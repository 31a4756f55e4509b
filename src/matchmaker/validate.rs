//! Ticket eligibility checks

use derive_more::{Display, Error};
use tracing::{error, info, info_span};

use super::catalog::StatCatalog;
use super::rules::GameRules;
use super::selection::{resolve_selection, Selection};
use super::ticket::Ticket;

/// Why a ticket may not enter the pool. Always names the failing player.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Rejection {
    #[display("player {player_id} missing required stat mapping")]
    MissingStatMapping { player_id: String },

    #[display("player {player_id}: selected stat must be a string")]
    SelectedStatNotString { player_id: String },

    #[display("player {player_id}: invalid stat '{stat}' (allowed: {allowed:?})")]
    InvalidStat {
        player_id: String,
        stat: String,
        allowed: Vec<String>,
    },

    #[display("player {player_id}: missing stat value for '{stat}'")]
    MissingStatValue { player_id: String, stat: String },
}

impl Rejection {
    pub fn player_id(&self) -> &str {
        match self {
            Rejection::MissingStatMapping { player_id }
            | Rejection::SelectedStatNotString { player_id }
            | Rejection::InvalidStat { player_id, .. }
            | Rejection::MissingStatValue { player_id, .. } => player_id,
        }
    }
}

/// Checks every player in order, stopping at the first failure.
pub fn validate_ticket(rules: &GameRules, ticket: &Ticket) -> Result<(), Rejection> {
    let config = &rules.statistics;
    let catalog = StatCatalog::new(rules);

    if catalog.is_empty() {
        info!("no statistics config, skipping validation");
        return Ok(());
    }

    for player in &ticket.players {
        let _player_span = info_span!("player", player_id = %player.player_id).entered();

        let stat = match resolve_selection(config, ticket, player) {
            Selection::Code(code) => code,
            Selection::Missing => {
                error!("player missing selected stat mapping");
                return Err(Rejection::MissingStatMapping {
                    player_id: player.player_id.clone(),
                });
            }
            Selection::NotString(value) => {
                error!(kind = value.kind(), "selected stat is not a string");
                return Err(Rejection::SelectedStatNotString {
                    player_id: player.player_id.clone(),
                });
            }
        };

        if !catalog.is_valid(stat) {
            error!(stat, allowed = ?catalog.codes(), "invalid stat selected");
            return Err(Rejection::InvalidStat {
                player_id: player.player_id.clone(),
                stat: stat.to_string(),
                allowed: catalog.codes().to_vec(),
            });
        }

        if !player.attributes.contains_key(stat) && !config.has_default() {
            error!(stat, "player missing selected stat value");
            return Err(Rejection::MissingStatValue {
                player_id: player.player_id.clone(),
                stat: stat.to_string(),
            });
        }

        info!(selected_stat = stat, "player validation passed");
    }

    info!("ticket validation successful");
    Ok(())
}
