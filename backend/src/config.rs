use std::{path::PathBuf, time::Duration};

pub const ACCESS_KEY_VAR: &str = "WEB3FORMS_ACCESS_KEY";
pub const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";

macro_rules! dotenv_num{
	($key:expr, $default:expr, $type:ident) => {
		dotenv::var($key).ok()
			.and_then(|v| v.parse::<$type>().ok())
			.unwrap_or($default)
	}
}

#[derive(Debug, Clone)]
pub struct Config {
	pub host: String,
	pub port: u16,
	pub dist_dir: PathBuf,
	pub asset_dir: PathBuf,
	pub relay_url: String,
	pub relay_timeout: Duration,
}

impl Config {
	/// Everything here has a default; the relay access key is deliberately not part of this
	/// since it's looked up again for every enquiry
	#[must_use]
	pub fn from_env() -> Self {
		let string_or = |key: &str, default: &str| dotenv::var(key)
			.ok()
			.filter(|v| !v.is_empty())
			.unwrap_or_else(|| default.into());

		Self {
			host: string_or("BACKEND_HOST", "127.0.0.1"),
			port: dotenv_num!("BACKEND_PORT", 8080, u16),
			dist_dir: string_or("SITE_DIST_DIR", "dist").into(),
			asset_dir: string_or("SITE_ASSET_DIR", "assets").into(),
			relay_url: string_or("RELAY_URL", DEFAULT_RELAY_URL),
			relay_timeout: Duration::from_secs(dotenv_num!("RELAY_TIMEOUT_SECS", 30, u64)),
		}
	}
}
