use std::sync::OnceLock;

use axum::response::Html;
use channers_shared::{enquiry::ENQUIRY_ADDRESS, BASE_STYLE, SITE_NAME};
use const_format::concatcp;
use horrorshow::{helper::doctype, html, Raw};

pub const PKG_PATH: &str = "/pkg";

// wasm-bindgen's `--target web` output for the frontend crate
const BOOT_SCRIPT: &str = concatcp!(
	"import init from '", PKG_PATH, "/channers_frontend.js';\n",
	"init('", PKG_PATH, "/channers_frontend_bg.wasm');"
);

const DESCRIPTION: &str = "Heritage bed & breakfast accommodation on Norfolk Island, hosted on-site by Steve & Kim.";

/// The page everything is rendered into. The yew app takes over `<body>` once the wasm loads.
pub async fn site_shell() -> Html<&'static str> {
	static SHELL: OnceLock<String> = OnceLock::new();
	Html(SHELL.get_or_init(render_shell).as_str())
}

fn render_shell() -> String {
	html! {
		: doctype::HTML;
		html(lang = "en") {
			head {
				meta(charset = "utf-8");
				meta(name = "viewport", content = "width=device-width, initial-scale=1");
				meta(name = "description", content = DESCRIPTION);
				title : SITE_NAME;
				style : Raw(BASE_STYLE);
				script(type = "module") : Raw(BOOT_SCRIPT);
			}
			body {
				noscript {
					section(class = "centered") {
						h1 : SITE_NAME;
						p : DESCRIPTION;
						p {
							: "Our booking calendar needs JavaScript, but you can always email us at ";
							a(href = format_args!("mailto:{ENQUIRY_ADDRESS}")) : ENQUIRY_ADDRESS;
							: " and we'll personally confirm availability.";
						}
					}
				}
			}
		}
	}.to_string()
}
