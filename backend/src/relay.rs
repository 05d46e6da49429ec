use std::time::Duration;

use channers_shared::{relay::{Relay, RelayReply, RelayResponse}, SubmissionPayload};
use reqwest::{header::ACCEPT, Client};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum RelayError {
	#[error("HTTP request to the relay failed: {0}")]
	Request(#[from] reqwest::Error),
}

/// Posts enquiries to a web3forms-style relay, which forwards them on to the hosts' inbox
#[derive(Debug, Clone)]
pub struct Web3FormsRelay {
	client: Client,
	endpoint: String,
}

impl Web3FormsRelay {
	pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
		Ok(Self {
			client: Client::builder().timeout(timeout).build()?,
			endpoint: endpoint.into(),
		})
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

impl Relay for Web3FormsRelay {
	type Error = RelayError;

	async fn post(&self, payload: &SubmissionPayload) -> Result<RelayReply, RelayError> {
		let response = self.client
			.post(&self.endpoint)
			.header(ACCEPT, "application/json")
			.json(payload)
			.send()
			.await?;

		let status = response.status().as_u16();
		let text = response.text().await?;

		// If it answered but we can't make sense of the answer, the relay is what's broken, not
		// the connection, so this counts as it saying no
		let body = serde_json::from_str::<RelayResponse>(&text)
			.unwrap_or_else(|e| {
				warn!("Relay answered {status} with a body we couldn't parse ({e}): {text}");
				RelayResponse::failed(format!("unreadable relay response: {e}"))
			});

		Ok(RelayReply { status, body })
	}
}
