//! Selected-stat resolution shared by validation and enrichment
//!
//! A player's declaration is read from `ticket_attributes[<player_id>]` first,
//! then from the player's own `attributes[<selected_stat_key>]`.

use super::rules::StatisticsConfig;
use super::ticket::{Player, Ticket};
use super::value::AttributeValue;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selection<'a> {
    Missing,
    NotString(&'a AttributeValue),
    Code(&'a str),
}

pub fn resolve_selection<'a>(
    config: &StatisticsConfig,
    ticket: &'a Ticket,
    player: &'a Player,
) -> Selection<'a> {
    let declared = ticket
        .ticket_attributes
        .get(&player.player_id)
        .or_else(|| player.attributes.get(config.selected_stat_key()));

    match declared {
        None => Selection::Missing,
        Some(value) => match value.as_str() {
            Some(code) => Selection::Code(code),
            None => Selection::NotString(value),
        },
    }
}
