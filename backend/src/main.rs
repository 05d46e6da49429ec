use channers_backend::{
	app,
	config::{Config, ACCESS_KEY_VAR},
	enquiry_api::AppState,
	relay::Web3FormsRelay
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt::init();

	let config = Config::from_env();
	info!("Read .env...");

	// The key is read again for every enquiry, so this is only a heads up; the site still works
	// and guests get the email fallback until it's set
	if dotenv::var(ACCESS_KEY_VAR).map_or(true, |k| k.is_empty()) {
		warn!("{ACCESS_KEY_VAR} is not set; enquiries can't be forwarded until it is");
	}

	let relay = Web3FormsRelay::new(config.relay_url.clone(), config.relay_timeout)?;
	info!("Forwarding enquiries to {} (timeout {:?})", relay.endpoint(), config.relay_timeout);
	info!("Serving frontend from {:?} and assets from {:?}", config.dist_dir, config.asset_dir);

	let router = app(AppState::new(relay), &config);
	let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;

	info!("Serving axum on {}...", listener.local_addr()?);

	axum::serve(listener, router).await?;

	Ok(())
}
