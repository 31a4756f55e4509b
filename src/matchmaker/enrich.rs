//! Ticket enrichment
//!
//! Collapses each player's selected stat into one ticket-level score written
//! under the enriched key (the mean across players). Raw stat attributes and
//! the consumed selection declarations are stripped so only the score travels
//! onward.

use tracing::{debug, info, info_span, warn};

use super::constants::EMPTY_TICKET_SCORE;
use super::rules::{GameRules, StatisticsConfig};
use super::selection::{resolve_selection, Selection};
use super::ticket::{Player, Ticket};
use super::value::AttributeValue;

/// Numeric value of the player's selected stat, falling back to `default_value`.
pub fn resolve_stat_value(config: &StatisticsConfig, ticket: &Ticket, player: &Player) -> f64 {
    let stat = match resolve_selection(config, ticket, player) {
        Selection::Code(code) => code,
        Selection::Missing => {
            warn!("no selected stat, using default");
            return config.default_value;
        }
        Selection::NotString(value) => {
            warn!(kind = value.kind(), "selected stat is not a string, using default");
            return config.default_value;
        }
    };

    let value = match player.attributes.get(stat) {
        Some(raw) => raw.as_stat_value().unwrap_or_else(|| {
            warn!(stat, kind = raw.kind(), "unexpected stat value type, using default");
            config.default_value
        }),
        None => config.default_value,
    };

    info!(stat, value, "extracted stat value");
    value
}

/// Arithmetic mean, `0` for no values.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return EMPTY_TICKET_SCORE;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Enriches a ticket; never fails, per-player anomalies are substituted.
pub fn enrich_ticket(rules: &GameRules, mut ticket: Ticket) -> Ticket {
    let config = &rules.statistics;

    if !config.is_enabled() {
        info!("no statistics config, skipping enrichment");
        return ticket;
    }

    let values: Vec<f64> = ticket
        .players
        .iter()
        .map(|player| {
            let _player_span = info_span!("player", player_id = %player.player_id).entered();
            resolve_stat_value(config, &ticket, player)
        })
        .collect();

    let selected_stat_key = config.selected_stat_key();
    for player in &mut ticket.players {
        for stat in &config.statistics {
            player.attributes.remove(stat);
        }
        player.attributes.remove(selected_stat_key);
        ticket.ticket_attributes.remove(&player.player_id);
    }

    let score = mean(&values);
    let enriched_key = config.enriched_key();
    ticket
        .ticket_attributes
        .insert(enriched_key.to_string(), AttributeValue::Float(score));

    info!(enriched_key, score, players = values.len(), "ticket enriched");
    debug!(?ticket, "enriched ticket snapshot");
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchmaker::ticket::Player;
    use proptest::prelude::*;

    fn fighter_rules(extra: &str) -> GameRules {
        GameRules::from_json(&format!(
            r#"{{"statistics_config": {{"statistics": ["mmr_ryu", "mmr_ken"]{extra}}}}}"#
        ))
        .unwrap()
    }

    fn score(ticket: &Ticket, key: &str) -> f64 {
        ticket.ticket_attributes[key].as_stat_value().unwrap()
    }

    #[test]
    fn test_duo_average() {
        let ticket = Ticket::new("t1")
            .with_player(Player::new("p1").with_attribute("mmr_ryu", 1000i64))
            .with_player(Player::new("p2").with_attribute("mmr_ken", 1200i64))
            .with_attribute("p1", "mmr_ryu")
            .with_attribute("p2", "mmr_ken");

        let enriched = enrich_ticket(&fighter_rules(r#", "default_value": 0"#), ticket);
        assert_eq!(score(&enriched, "mmr"), 1100.0);
    }

    #[test]
    fn test_stats_and_declarations_removed() {
        let ticket = Ticket::new("t1")
            .with_player(
                Player::new("p1")
                    .with_attribute("mmr_ryu", 1000i64)
                    .with_attribute("mmr_ken", 800i64)
                    .with_attribute("region", "eu"),
            )
            .with_attribute("p1", "mmr_ryu")
            .with_attribute("mode", "ranked");

        let enriched = enrich_ticket(&fighter_rules(""), ticket);
        let player = &enriched.players[0];
        assert!(!player.attributes.contains_key("mmr_ryu"));
        assert!(!player.attributes.contains_key("mmr_ken"));
        assert_eq!(player.attributes["region"].as_str(), Some("eu"));
        assert!(!enriched.ticket_attributes.contains_key("p1"));
        assert_eq!(enriched.ticket_attributes["mode"].as_str(), Some("ranked"));
        assert_eq!(score(&enriched, "mmr"), 1000.0);
    }

    #[test]
    fn test_custom_enriched_key() {
        let ticket = Ticket::new("t1")
            .with_player(Player::new("p1").with_attribute("mmr_ken", 1500.5))
            .with_attribute("p1", "mmr_ken");
        let enriched = enrich_ticket(&fighter_rules(r#", "enriched_key": "skill""#), ticket);
        assert_eq!(score(&enriched, "skill"), 1500.5);
        assert!(!enriched.ticket_attributes.contains_key("mmr"));
    }

    #[test]
    fn test_missing_value_uses_default() {
        let ticket = Ticket::new("t1")
            .with_player(Player::new("p1"))
            .with_player(Player::new("p2").with_attribute("mmr_ryu", 1400i64))
            .with_attribute("p1", "mmr_ryu")
            .with_attribute("p2", "mmr_ryu");
        let enriched = enrich_ticket(&fighter_rules(r#", "default_value": 1000"#), ticket);
        assert_eq!(score(&enriched, "mmr"), 1200.0);
    }

    #[test]
    fn test_unrecognized_value_type_uses_default() {
        let ticket = Ticket::new("t1")
            .with_player(Player::new("p1").with_attribute("mmr_ryu", "1700"))
            .with_attribute("p1", "mmr_ryu");
        let enriched = enrich_ticket(&fighter_rules(r#", "default_value": 900"#), ticket);
        assert_eq!(score(&enriched, "mmr"), 900.0);
        assert!(!enriched.players[0].attributes.contains_key("mmr_ryu"));
    }

    #[test]
    fn test_player_level_declaration_consumed() {
        let ticket = Ticket::new("t1").with_player(
            Player::new("p1")
                .with_attribute("selected_stat", "mmr_ken")
                .with_attribute("mmr_ken", 1300i64),
        );
        let enriched = enrich_ticket(&fighter_rules(""), ticket);
        assert!(enriched.players[0].attributes.is_empty());
        assert_eq!(score(&enriched, "mmr"), 1300.0);
    }

    #[test]
    fn test_unresolvable_selection_uses_default() {
        let ticket = Ticket::new("t1")
            .with_player(Player::new("p1").with_attribute("mmr_ryu", 1500i64))
            .with_player(Player::new("p2").with_attribute("mmr_ken", 2000i64))
            .with_player(Player::new("p3").with_attribute("mmr_ryu", 1700i64))
            .with_attribute("p2", 7i64)
            .with_attribute("p3", "mmr_ryu");

        let enriched = enrich_ticket(&fighter_rules(r#", "default_value": 800"#), ticket);
        // p1 has no declaration, p2 a non-string one: both fall back to 800
        assert_eq!(score(&enriched, "mmr"), (800.0 + 800.0 + 1700.0) / 3.0);
        for player in &enriched.players {
            assert!(!player.attributes.contains_key("mmr_ryu"));
            assert!(!player.attributes.contains_key("mmr_ken"));
        }
        assert!(!enriched.ticket_attributes.contains_key("p2"));
        assert!(!enriched.ticket_attributes.contains_key("p3"));
    }

    #[test]
    fn test_no_players_scores_zero() {
        let enriched = enrich_ticket(&fighter_rules(""), Ticket::new("t1"));
        assert_eq!(score(&enriched, "mmr"), 0.0);
    }

    #[test]
    fn test_disabled_rules_leave_ticket_untouched() {
        let ticket = Ticket::new("t1")
            .with_player(Player::new("p1").with_attribute("mmr_ryu", 1000i64))
            .with_attribute("p1", "mmr_ryu");
        let enriched = enrich_ticket(&GameRules::default(), ticket.clone());
        assert_eq!(enriched, ticket);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[3.0]), 3.0);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    }

    proptest! {
        #[test]
        fn prop_score_is_mean_of_player_values(values in prop::collection::vec(0i64..5000, 1..8)) {
            let mut ticket = Ticket::new("prop");
            for (idx, value) in values.iter().enumerate() {
                let id = format!("p{idx}");
                let stat = if idx % 2 == 0 { "mmr_ryu" } else { "mmr_ken" };
                ticket = ticket
                    .with_player(Player::new(id.clone()).with_attribute(stat, *value))
                    .with_attribute(id, stat);
            }

            let enriched = enrich_ticket(&fighter_rules(""), ticket);
            let expected = values.iter().map(|v| *v as f64).sum::<f64>() / values.len() as f64;
            prop_assert!((score(&enriched, "mmr") - expected).abs() < 1e-9);
            for player in &enriched.players {
                prop_assert!(!player.attributes.contains_key("mmr_ryu"));
                prop_assert!(!player.attributes.contains_key("mmr_ken"));
            }
        }

        #[test]
        fn prop_disabled_rules_are_identity(value in any::<i64>(), stat in "[a-z_]{1,12}") {
            let ticket = Ticket::new("prop")
                .with_player(Player::new("p1").with_attribute(stat.clone(), value))
                .with_attribute("p1", stat);
            prop_assert_eq!(enrich_ticket(&GameRules::default(), ticket.clone()), ticket);
        }
    }
}
