//! Match function contract
//!
//! The host engine looks up a [`MatchLogic`] and the rule document for a pool,
//! asks the logic to decode the document, then calls it per ticket to validate
//! and enrich. Match making and backfill are left to the host's default
//! algorithm: both return [`MatchError::NotImplemented`].

use tokio::sync::mpsc;
use tracing::{debug, info, info_span, Span};

use super::catalog::StatCatalog;
use super::enrich::enrich_ticket;
use super::rules::GameRules;
use super::ticket::{BackfillProposal, BackfillTicket, Match, Ticket};
use super::validate::validate_ticket;
use crate::error::MatchError;

pub const MAKE_MATCHES_UNIMPLEMENTED: &str =
    "MakeMatches not implemented - using host default matching";
pub const BACKFILL_MATCHES_UNIMPLEMENTED: &str =
    "BackfillMatches not implemented - using host default backfill";

/// Logging context handed explicitly to every operation.
#[derive(Clone, Debug)]
pub struct Scope {
    span: Span,
}

impl Scope {
    pub fn new(name: &'static str) -> Self {
        Self {
            span: info_span!("scope", name),
        }
    }

    pub fn child(&self, name: &'static str) -> Self {
        Self {
            span: info_span!(parent: &self.span, "scope", name),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// Source of pool tickets for match making. Each stream can be taken once.
pub trait TicketProvider: Send {
    fn tickets(&mut self) -> Option<mpsc::Receiver<Ticket>>;
    fn backfill_tickets(&mut self) -> Option<mpsc::Receiver<BackfillTicket>>;
}

pub trait MatchLogic: Send + Sync + 'static {
    fn rules_from_json(&self, scope: &Scope, json: &str) -> Result<GameRules, MatchError>;

    fn stat_codes(&self, scope: &Scope, rules: &GameRules) -> Vec<String>;

    /// `Ok(true)` when the ticket may be queued; a rejection otherwise.
    fn validate_ticket(
        &self,
        scope: &Scope,
        ticket: &Ticket,
        rules: &GameRules,
    ) -> Result<bool, MatchError>;

    fn enrich_ticket(
        &self,
        scope: &Scope,
        ticket: Ticket,
        rules: &GameRules,
    ) -> Result<Ticket, MatchError>;

    fn make_matches(
        &self,
        scope: &Scope,
        provider: &mut dyn TicketProvider,
        rules: &GameRules,
    ) -> Result<mpsc::Receiver<Match>, MatchError>;

    fn backfill_matches(
        &self,
        scope: &Scope,
        provider: &mut dyn TicketProvider,
        rules: &GameRules,
    ) -> Result<mpsc::Receiver<BackfillProposal>, MatchError>;
}

/// Stat-driven ticket gate and enricher
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchMaker;

impl MatchLogic for MatchMaker {
    fn rules_from_json(&self, scope: &Scope, json: &str) -> Result<GameRules, MatchError> {
        let _guard = scope.span().enter();
        let rules = GameRules::from_json(json)?;
        debug!(?rules, "decoded rules");
        Ok(rules)
    }

    fn stat_codes(&self, scope: &Scope, rules: &GameRules) -> Vec<String> {
        let _guard = scope.span().enter();
        let catalog = StatCatalog::new(rules);
        if catalog.is_empty() {
            info!("no statistics configured, returning empty stat codes");
        } else {
            info!(codes = ?catalog.codes(), "returning stat codes");
        }
        catalog.codes().to_vec()
    }

    fn validate_ticket(
        &self,
        scope: &Scope,
        ticket: &Ticket,
        rules: &GameRules,
    ) -> Result<bool, MatchError> {
        let _guard =
            info_span!(parent: scope.span(), "validate_ticket", ticket_id = %ticket.ticket_id)
                .entered();
        info!("validating ticket");
        debug!(?ticket, ?rules, "ticket/rules snapshot");

        validate_ticket(rules, ticket)?;
        Ok(true)
    }

    fn enrich_ticket(
        &self,
        scope: &Scope,
        ticket: Ticket,
        rules: &GameRules,
    ) -> Result<Ticket, MatchError> {
        let _guard =
            info_span!(parent: scope.span(), "enrich_ticket", ticket_id = %ticket.ticket_id)
                .entered();
        info!("enriching ticket");
        debug!(?ticket, ?rules, "ticket/rules snapshot");

        Ok(enrich_ticket(rules, ticket))
    }

    fn make_matches(
        &self,
        scope: &Scope,
        _provider: &mut dyn TicketProvider,
        _rules: &GameRules,
    ) -> Result<mpsc::Receiver<Match>, MatchError> {
        let _guard = scope.span().enter();
        info!("MakeMatches not implemented, delegating to host default matching");
        Err(MatchError::NotImplemented(MAKE_MATCHES_UNIMPLEMENTED))
    }

    fn backfill_matches(
        &self,
        scope: &Scope,
        _provider: &mut dyn TicketProvider,
        _rules: &GameRules,
    ) -> Result<mpsc::Receiver<BackfillProposal>, MatchError> {
        let _guard = scope.span().enter();
        info!("BackfillMatches not implemented, delegating to host default backfill");
        Err(MatchError::NotImplemented(BACKFILL_MATCHES_UNIMPLEMENTED))
    }
}
