use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enquiry::{EnquiryRequest, SubmissionPayload};

pub const BUSY_MESSAGE: &str = "System is busy or Key is missing.";

/// The body the relay answers with, and the one we pass back to the browser
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct RelayResponse {
	pub success: bool,
	#[serde(default)]
	pub message: String
}

impl RelayResponse {
	#[must_use]
	pub fn ok(message: impl Into<String>) -> Self {
		Self { success: true, message: message.into() }
	}

	#[must_use]
	pub fn failed(message: impl Into<String>) -> Self {
		Self { success: false, message: message.into() }
	}
}

/// A reply that made it back to us, whether or not the relay liked what we sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
	pub status: u16,
	pub body: RelayResponse
}

impl RelayReply {
	/// Both the transport and the relay itself have to agree that it worked
	#[must_use]
	pub fn succeeded(&self) -> bool {
		(200..300).contains(&self.status) && self.body.success
	}
}

/// Something that can carry one submission to the form relay
pub trait Relay {
	type Error: std::error::Error + Send + Sync + 'static;

	fn post(&self, payload: &SubmissionPayload) -> impl Future<Output = Result<RelayReply, Self::Error>> + Send;
}

#[derive(Debug, Error)]
pub enum SubmitError<E: std::error::Error + 'static> {
	#[error("no relay access key is configured")]
	ConfigurationMissing,
	#[error("couldn't reach the relay: {0}")]
	Transport(#[source] E),
	#[error("relay rejected the enquiry ({status}): {message}")]
	Logical {
		status: u16,
		message: String
	}
}

/// Sends one enquiry. There's exactly one call to the relay if there's an access key and none at
/// all if there isn't; nothing is retried.
pub async fn submit_enquiry<R: Relay>(
	relay: &R,
	access_key: Option<&str>,
	request: &EnquiryRequest
) -> Result<(), SubmitError<R::Error>> {
	let Some(key) = access_key.filter(|k| !k.is_empty()) else {
		return Err(SubmitError::ConfigurationMissing);
	};

	let payload = SubmissionPayload::new(key, request);
	let reply = relay.post(&payload).await.map_err(SubmitError::Transport)?;

	if reply.succeeded() {
		Ok(())
	} else {
		Err(SubmitError::Logical {
			status: reply.status,
			message: reply.body.message
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{calendar::DateRange, enquiry::EnquiryFormData};
	use std::sync::{Mutex, atomic::{AtomicUsize, Ordering}};

	#[derive(Debug, Error)]
	#[error("connection refused")]
	struct Refused;

	struct FakeRelay {
		calls: AtomicUsize,
		sent: Mutex<Vec<String>>,
		reply: Result<RelayReply, ()>
	}

	impl FakeRelay {
		fn replying(status: u16, success: bool) -> Self {
			Self {
				calls: AtomicUsize::new(0),
				sent: Mutex::default(),
				reply: Ok(RelayReply {
					status,
					body: RelayResponse { success, message: "from relay".into() }
				})
			}
		}

		fn unreachable() -> Self {
			Self { reply: Err(()), ..Self::replying(0, false) }
		}

		fn calls(&self) -> usize {
			self.calls.load(Ordering::SeqCst)
		}
	}

	impl Relay for FakeRelay {
		type Error = Refused;

		async fn post(&self, payload: &SubmissionPayload) -> Result<RelayReply, Refused> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			self.sent.lock().unwrap().push(payload.dates.clone());
			self.reply.clone().map_err(|()| Refused)
		}
	}

	fn jane() -> EnquiryRequest {
		EnquiryRequest {
			form: EnquiryFormData {
				first_name: "Jane".into(),
				last_name: "Doe".into(),
				email: "jane@example.com".into(),
				..EnquiryFormData::default()
			},
			dates: DateRange::empty()
		}
	}

	#[tokio::test]
	async fn missing_key_never_calls_relay() {
		let relay = FakeRelay::replying(200, true);

		let res = submit_enquiry(&relay, None, &jane()).await;
		assert!(matches!(res, Err(SubmitError::ConfigurationMissing)));

		let res = submit_enquiry(&relay, Some(""), &jane()).await;
		assert!(matches!(res, Err(SubmitError::ConfigurationMissing)));

		assert_eq!(relay.calls(), 0);
	}

	#[tokio::test]
	async fn success_needs_ok_status_and_flag() {
		let relay = FakeRelay::replying(200, true);
		assert!(submit_enquiry(&relay, Some("key"), &jane()).await.is_ok());
		assert_eq!(relay.calls(), 1);
		assert_eq!(relay.sent.lock().unwrap().as_slice(), ["Dates not selected"]);
	}

	#[tokio::test]
	async fn success_false_is_logical_failure() {
		let relay = FakeRelay::replying(200, false);
		let res = submit_enquiry(&relay, Some("key"), &jane()).await;
		assert!(matches!(
			res,
			Err(SubmitError::Logical { status: 200, ref message }) if message == "from relay"
		));
	}

	#[tokio::test]
	async fn error_status_with_success_flag_still_fails() {
		let relay = FakeRelay::replying(429, true);
		let res = submit_enquiry(&relay, Some("key"), &jane()).await;
		assert!(matches!(res, Err(SubmitError::Logical { status: 429, .. })));
	}

	#[tokio::test]
	async fn transport_failure_is_reported_once() {
		let relay = FakeRelay::unreachable();
		let res = submit_enquiry(&relay, Some("key"), &jane()).await;
		assert!(matches!(res, Err(SubmitError::Transport(Refused))));
		assert_eq!(relay.calls(), 1);
	}

	#[test]
	fn relay_message_is_optional() {
		let body: RelayResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
		assert_eq!(body, RelayResponse::ok(""));
	}
}
