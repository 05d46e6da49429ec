use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use channers_shared::{
	relay::{submit_enquiry, RelayResponse, SubmitError, BUSY_MESSAGE},
	EnquiryRequest,
};
use tracing::{error, info, warn};

use crate::{config::ACCESS_KEY_VAR, relay::Web3FormsRelay};

#[derive(Clone)]
pub struct AppState {
	pub relay: Arc<Web3FormsRelay>,
	// which env var holds the relay's access key. Only not ACCESS_KEY_VAR in tests
	pub access_key_var: &'static str,
}

impl AppState {
	#[must_use]
	pub fn new(relay: Web3FormsRelay) -> Self {
		Self { relay: Arc::new(relay), access_key_var: ACCESS_KEY_VAR }
	}
}

// all three kinds of failure look the same to the guest; only the log knows the difference
macro_rules! busy{
	($status:expr, $level:ident, $($log:tt)+) => {{
		$level!($($log)+);
		return ($status, Json(RelayResponse::failed(BUSY_MESSAGE)));
	}};
}

pub async fn post_enquiry(
	State(state): State<AppState>,
	Json(request): Json<EnquiryRequest>
) -> (StatusCode, Json<RelayResponse>) {
	// Looked up every time so a key added to the environment (or .env) is picked up without
	// anyone having to notice
	let access_key = dotenv::var(state.access_key_var).ok();

	match submit_enquiry(&*state.relay, access_key.as_deref(), &request).await {
		Ok(()) => {
			info!("Forwarded enquiry from {} to the relay", request.form.email);
			(StatusCode::OK, Json(RelayResponse::ok("Enquiry sent")))
		},
		Err(SubmitError::ConfigurationMissing) => busy!(
			StatusCode::SERVICE_UNAVAILABLE,
			error,
			"{} is missing from the environment; couldn't forward enquiry from {}",
			state.access_key_var,
			request.form.email
		),
		Err(SubmitError::Transport(e)) => busy!(
			StatusCode::BAD_GATEWAY,
			warn,
			"Network error sending enquiry from {} to {}: {e}",
			request.form.email,
			state.relay.endpoint()
		),
		Err(SubmitError::Logical { status, message }) => busy!(
			StatusCode::BAD_GATEWAY,
			warn,
			"Relay refused enquiry from {} with status {status}: {message}",
			request.form.email
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_util::{fake_relay, unused_url};
	use axum::{body::{to_bytes, Body}, http::{header::CONTENT_TYPE, Request}, Router};
	use std::time::Duration;
	use tower::ServiceExt;

	const JANE: &str = r#"{
		"form": {
			"firstName": "Jane",
			"lastName": "Doe",
			"email": "jane@example.com",
			"message": "",
			"packageInterest": false
		},
		"dates": { "start": null, "end": null }
	}"#;

	fn router(url: String, access_key_var: &'static str) -> Router {
		let relay = Web3FormsRelay::new(url, Duration::from_secs(5)).unwrap();
		crate::api_router(AppState { relay: Arc::new(relay), access_key_var })
	}

	async fn send(app: Router, body: &'static str) -> (StatusCode, RelayResponse) {
		let res = app
			.oneshot(
				Request::post("/api/enquiry")
					.header(CONTENT_TYPE, "application/json")
					.body(Body::from(body))
					.unwrap()
			)
			.await
			.unwrap();

		let status = res.status();
		let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
		(status, serde_json::from_slice(&bytes).unwrap())
	}

	#[tokio::test]
	async fn forwards_and_reports_success() {
		std::env::set_var("CHANNERS_TEST_KEY_SUCCESS", "test-key");
		let fake = fake_relay(StatusCode::OK, r#"{"success":true}"#).await;

		let (status, body) = send(router(fake.url.clone(), "CHANNERS_TEST_KEY_SUCCESS"), JANE).await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.success);

		let received = fake.received();
		assert_eq!(received.len(), 1);
		assert_eq!(received[0]["access_key"], "test-key");
		assert_eq!(received[0]["subject"], "New Enquiry from Jane Doe");
	}

	#[tokio::test]
	async fn missing_key_skips_relay() {
		let fake = fake_relay(StatusCode::OK, r#"{"success":true}"#).await;

		let (status, body) = send(router(fake.url.clone(), "CHANNERS_TEST_KEY_NEVER_SET"), JANE).await;
		assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
		assert!(!body.success);
		assert_eq!(body.message, BUSY_MESSAGE);
		assert!(fake.received().is_empty());
	}

	#[tokio::test]
	async fn relay_refusal_is_a_bad_gateway() {
		std::env::set_var("CHANNERS_TEST_KEY_REFUSED", "test-key");
		let fake = fake_relay(StatusCode::OK, r#"{"success":false,"message":"quota"}"#).await;

		let (status, body) = send(router(fake.url.clone(), "CHANNERS_TEST_KEY_REFUSED"), JANE).await;
		assert_eq!(status, StatusCode::BAD_GATEWAY);
		assert!(!body.success);
		// the relay's own reason stays in the logs
		assert_eq!(body.message, BUSY_MESSAGE);
	}

	#[tokio::test]
	async fn unreachable_relay_is_a_bad_gateway() {
		std::env::set_var("CHANNERS_TEST_KEY_UNREACHABLE", "test-key");
		let url = unused_url().await;

		let (status, body) = send(router(url, "CHANNERS_TEST_KEY_UNREACHABLE"), JANE).await;
		assert_eq!(status, StatusCode::BAD_GATEWAY);
		assert!(!body.success);
	}

	#[tokio::test]
	async fn rejects_end_without_start() {
		let url = unused_url().await;
		let res = router(url, "CHANNERS_TEST_KEY_NEVER_SET")
			.oneshot(
				Request::post("/api/enquiry")
					.header(CONTENT_TYPE, "application/json")
					.body(Body::from(JANE.replace(
						r#""start": null, "end": null"#,
						r#""start": null, "end": "2026-05-01""#
					)))
					.unwrap()
			)
			.await
			.unwrap();

		assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
	}
}
