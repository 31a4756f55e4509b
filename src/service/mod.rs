//! Service layer
//!
//! Wire conversion, rule caching, and the gRPC handlers.

pub mod convert;
pub mod rule_cache;
pub mod server;

pub use rule_cache::RuleCache;
pub use server::MatchFunctionService;
