//! Mock acquirer authorization service
//!
//! Stands in for a real acquirer during development: accepts authorization
//! requests on `POST /authorize` and randomly approves about 70% of them.

use std::net::SocketAddr;

use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use clap::Parser;
use emv_transaction::{mask_pan, AuthorizationRequest, AuthorizationResponse};
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Share of requests the mock approves, in percent.
const APPROVAL_RATE: u32 = 70;

#[derive(Parser)]
#[command(name = "emv-acquirer")]
#[command(about = "Mock acquirer - randomly approves or declines authorization requests")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let app = Router::new().route("/authorize", post(authorize));
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("Mock acquirer running on port {}", args.port);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Decide an authorization request.
async fn authorize(Json(request): Json<AuthorizationRequest>) -> Json<AuthorizationResponse> {
    let approved = rand::thread_rng().gen_range(0..100) < APPROVAL_RATE;

    info!(
        "authorization request: pan={}, approved={}",
        mask_pan(&request.pan),
        approved
    );

    Json(AuthorizationResponse {
        approved,
        message: decision_message(approved).to_string(),
        timestamp: Utc::now(),
    })
}

fn decision_message(approved: bool) -> &'static str {
    if approved {
        "Transaction approved by acquirer"
    } else {
        "Transaction declined by acquirer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_messages() {
        assert_eq!(decision_message(true), "Transaction approved by acquirer");
        assert_eq!(decision_message(false), "Transaction declined by acquirer");
    }
}
