//! Stat-driven ticket validation and enrichment for a matchmaking host.
//!
//! - `matchmaker`: rule decoding, validation, enrichment, and the match function contract
//! - `service`: the gRPC surface over a [`matchmaker::MatchLogic`]
//! - `proto`: generated wire types

pub mod proto {
    tonic::include_proto!("accelbyte.matchmaking.matchfunction");
}

pub mod config;
pub mod error;
pub mod matchmaker;
pub mod service;

pub use error::MatchError;
