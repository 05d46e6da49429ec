use axum::{
	routing::{get, post},
	Router
};
use tower_http::services::ServeDir;

pub mod config;
pub mod enquiry_api;
pub mod relay;
pub mod shell;

#[cfg(test)]
mod test_util;

use config::Config;
use enquiry_api::{post_enquiry, AppState};

/// Just the JSON api; split out so it can be driven without any files on disk
pub fn api_router(state: AppState) -> Router {
	Router::new()
		.route("/api/enquiry", post(post_enquiry))
		.with_state(state)
}

pub fn app(state: AppState, config: &Config) -> Router {
	Router::new()
		.route("/", get(shell::site_shell))
		.nest_service(shell::PKG_PATH, ServeDir::new(&config.dist_dir))
		.nest_service("/assets", ServeDir::new(&config.asset_dir))
		.merge(api_router(state))
}
