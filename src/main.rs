use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use match_function::config::ServerConfig;
use match_function::matchmaker::MatchMaker;
use match_function::proto::match_function_server::MatchFunctionServer;
use match_function::service::MatchFunctionService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    let addr = config.addr();
    let service = MatchFunctionService::new(MatchMaker, config.rule_cache_capacity);

    info!(
        %addr,
        rule_cache_capacity = config.rule_cache_capacity,
        "match function gRPC server listening"
    );

    tonic::transport::Server::builder()
        .add_service(MatchFunctionServer::new(service))
        .serve_with_shutdown(addr, async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
