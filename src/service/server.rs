//! gRPC handlers

use std::sync::Arc;

use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status, Streaming};
use tracing::{error, info};

use crate::error::MatchError;
use crate::matchmaker::{
    GameRules, MatchLogic, MatchMaker, Scope, BACKFILL_MATCHES_UNIMPLEMENTED,
    MAKE_MATCHES_UNIMPLEMENTED,
};
use crate::proto::match_function_server::MatchFunction;
use crate::proto::{
    BackfillMakeMatchesRequest, BackfillResponse, EnrichTicketRequest, EnrichTicketResponse,
    GetStatCodesRequest, MakeMatchesRequest, MatchResponse, Rules, StatCodesResponse,
    ValidateTicketRequest, ValidateTicketResponse,
};
use crate::service::convert::{ticket_from_proto, ticket_to_proto};
use crate::service::rule_cache::RuleCache;

/// Handler layer over a [`MatchLogic`]
pub struct MatchFunctionService<L = MatchMaker> {
    logic: Arc<L>,
    rules: RuleCache,
    scope: Scope,
}

impl<L: MatchLogic> MatchFunctionService<L> {
    pub fn new(logic: L, rule_cache_capacity: usize) -> Self {
        Self {
            logic: Arc::new(logic),
            rules: RuleCache::new(rule_cache_capacity),
            scope: Scope::new("match_function"),
        }
    }

    fn decode_rules(&self, scope: &Scope, rules: Option<Rules>) -> Result<Arc<GameRules>, Status> {
        let rules = rules.ok_or(MatchError::MissingField("rules"))?;
        self.rules
            .get_or_decode(&rules.json, |json| self.logic.rules_from_json(scope, json))
            .map_err(|err| {
                let _guard = scope.span().enter();
                error!(%err, "could not get rules from json");
                Status::from(err)
            })
    }
}

impl Default for MatchFunctionService<MatchMaker> {
    fn default() -> Self {
        Self::new(MatchMaker, 0)
    }
}

#[tonic::async_trait]
impl<L: MatchLogic> MatchFunction for MatchFunctionService<L> {
    async fn get_stat_codes(
        &self,
        request: Request<GetStatCodesRequest>,
    ) -> Result<Response<StatCodesResponse>, Status> {
        let scope = self.scope.child("MatchFunctionService.GetStatCodes");
        let GetStatCodesRequest { rules } = request.into_inner();

        let rules = self.decode_rules(&scope, rules)?;
        let codes = self.logic.stat_codes(&scope, &rules);

        Ok(Response::new(StatCodesResponse { codes }))
    }

    async fn validate_ticket(
        &self,
        request: Request<ValidateTicketRequest>,
    ) -> Result<Response<ValidateTicketResponse>, Status> {
        let scope = self.scope.child("MatchFunctionService.ValidateTicket");
        let ValidateTicketRequest { ticket, rules } = request.into_inner();
        scope.span().in_scope(|| info!("validating ticket"));

        let rules = self.decode_rules(&scope, rules)?;
        let ticket = ticket.ok_or(MatchError::MissingField("ticket"))?;
        let valid_ticket = self
            .logic
            .validate_ticket(&scope, &ticket_from_proto(ticket), &rules)?;

        Ok(Response::new(ValidateTicketResponse { valid_ticket }))
    }

    async fn enrich_ticket(
        &self,
        request: Request<EnrichTicketRequest>,
    ) -> Result<Response<EnrichTicketResponse>, Status> {
        let scope = self.scope.child("MatchFunctionService.EnrichTicket");
        let EnrichTicketRequest { ticket, rules } = request.into_inner();
        scope.span().in_scope(|| info!("enriching ticket"));

        let rules = self.decode_rules(&scope, rules)?;
        let ticket = ticket.ok_or(MatchError::MissingField("ticket"))?;
        let enriched = self
            .logic
            .enrich_ticket(&scope, ticket_from_proto(ticket), &rules)?;

        scope.span().in_scope(|| info!("ticket enriched successfully"));
        Ok(Response::new(EnrichTicketResponse {
            ticket: Some(ticket_to_proto(enriched)),
        }))
    }

    type MakeMatchesStream = ReceiverStream<Result<MatchResponse, Status>>;

    /// Always UNIMPLEMENTED so the host falls back to its default matching.
    async fn make_matches(
        &self,
        _request: Request<Streaming<MakeMatchesRequest>>,
    ) -> Result<Response<Self::MakeMatchesStream>, Status> {
        let scope = self.scope.child("MatchFunctionService.MakeMatches");
        scope.span().in_scope(|| {
            info!("MakeMatches returning UNIMPLEMENTED - using host default matching")
        });

        Err(MatchError::NotImplemented(MAKE_MATCHES_UNIMPLEMENTED).into())
    }

    type BackfillMatchesStream = ReceiverStream<Result<BackfillResponse, Status>>;

    /// Always UNIMPLEMENTED so the host falls back to its default backfill.
    async fn backfill_matches(
        &self,
        _request: Request<Streaming<BackfillMakeMatchesRequest>>,
    ) -> Result<Response<Self::BackfillMatchesStream>, Status> {
        let scope = self.scope.child("MatchFunctionService.BackfillMatches");
        scope.span().in_scope(|| {
            info!("BackfillMatches returning UNIMPLEMENTED - using host default backfill")
        });

        Err(MatchError::NotImplemented(BACKFILL_MATCHES_UNIMPLEMENTED).into())
    }
}
