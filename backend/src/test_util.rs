use std::sync::{Arc, Mutex};

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

/// A throwaway relay on localhost that records what it was sent and always gives the same answer
pub struct FakeRelay {
	pub url: String,
	received: Arc<Mutex<Vec<Value>>>,
}

impl FakeRelay {
	pub fn received(&self) -> Vec<Value> {
		self.received.lock().unwrap().clone()
	}
}

pub async fn fake_relay(status: StatusCode, body: &'static str) -> FakeRelay {
	let received = Arc::new(Mutex::new(Vec::new()));
	let recorder = Arc::clone(&received);

	let app = Router::new().route("/submit", post(move |Json(payload): Json<Value>| {
		recorder.lock().unwrap().push(payload);
		async move { (status, body) }
	}));

	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

	FakeRelay { url: format!("http://{addr}/submit"), received }
}

/// A url that nothing is listening on
pub async fn unused_url() -> String {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);
	format!("http://{addr}/submit")
}
