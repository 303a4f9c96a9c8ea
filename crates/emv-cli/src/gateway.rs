//! HTTP gateway client for the acquirer authorization service

use std::time::Duration;

use emv_transaction::{Acquirer, AuthorizationRequest, AuthorizationResponse, GatewayError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

/// Acquirer client speaking the JSON `POST /authorize` protocol.
pub struct HttpGateway {
    base_url: String,
    client: Client,
}

impl HttpGateway {
    /// Create a gateway client for `base_url` with a 10 second timeout.
    pub fn new(base_url: String) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        Ok(Self { base_url, client })
    }
}

impl Acquirer for HttpGateway {
    fn authorize(&self, request: &AuthorizationRequest) -> Result<bool, GatewayError> {
        let url = format!("{}/authorize", self.base_url);
        debug!("sending authorization request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(GatewayError::Status(response.status().as_u16()));
        }

        let decision: AuthorizationResponse = response
            .json()
            .map_err(|err| GatewayError::Decode(err.to_string()))?;

        Ok(decision.approved)
    }
}
