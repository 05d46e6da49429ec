use channers_shared::{enquiry::ENQUIRY_ADDRESS, view::Section, View, SITE_NAME};
use yew::prelude::*;

use crate::enquiry::Enquiry;

#[derive(Properties, PartialEq)]
pub struct NavProps {
	pub current: View,
	pub on_navigate: Callback<View>
}

#[function_component(Header)]
pub fn header(props: &NavProps) -> Html {
	let links = View::ALL.iter().map(|view| {
		let view = *view;
		let on_navigate = props.on_navigate.clone();
		let active = (view == props.current).then_some("active");
		html! {
			<button type="button" class={ classes!("nav-link", active) } onclick={ move |_| on_navigate.emit(view) }>
				{ view.nav_label() }
			</button>
		}
	})
	.collect::<Html>();

	html! {
		<header class="site-header">
			<span class="serif site-name">{ SITE_NAME }</span>
			<nav>
				{ links }
				<a class="button" href="#enquiry">{ "Enquire" }</a>
			</nav>
		</header>
	}
}

/// Renders one of the page's sections. The enquiry form is the only one with any state.
pub fn render_section(section: Section, on_navigate: &Callback<View>) -> Html {
	match section {
		Section::Hero => html! { <Hero /> },
		Section::WhyStay => html! { <WhyStay /> },
		Section::PackagePromo => html! { <PackagePromo on_navigate={ on_navigate.clone() } /> },
		Section::Accommodation => html! { <Accommodation /> },
		Section::Experiences => html! { <Experiences /> },
		Section::Heritage => html! { <Heritage /> },
		Section::Gallery => html! { <Gallery /> },
		Section::Reviews => html! { <Reviews /> },
		Section::Location => html! { <Location /> },
		Section::TrustIndicators => html! { <TrustIndicators /> },
		Section::Packages => html! { <Packages /> },
		Section::Enquiry => html! { <Enquiry /> },
	}
}

#[function_component(Hero)]
fn hero() -> Html {
	html! {
		<section class="hero" style="background-image: url('/assets/hero.webp');">
			<div class="hero-overlay centered">
				<h1>{ "Your home on Norfolk Island" }</h1>
				<p>{ "A heritage homestead, two hosts who live on site, and a whole island to explore." }</p>
				<a class="button" href="#enquiry">{ "Check availability" }</a>
			</div>
		</section>
	}
}

const REASONS: [(&str, &str); 4] = [
	("Hosted on site", "Steve and Kim live next door and are around for whatever you need."),
	("Self-contained", "Full kitchen, laundry and a private deck in every cottage."),
	("Quiet & green", "Set on two acres of gardens, a short drive from Burnt Pine."),
	("Car included", "Ask about our stay-and-drive rates so you can see the whole island."),
];

#[function_component(WhyStay)]
fn why_stay() -> Html {
	html! {
		<section class="why-stay">
			<div class="container">
				<h2 class="centered">{ "Why stay with us" }</h2>
				<div class="card-grid">
					{ for REASONS.iter().map(|(title, blurb)| html! {
						<div class="card">
							<h3>{ *title }</h3>
							<p>{ *blurb }</p>
						</div>
					}) }
				</div>
			</div>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct PromoProps {
	pub on_navigate: Callback<View>
}

#[function_component(PackagePromo)]
fn package_promo(props: &PromoProps) -> Html {
	let on_navigate = props.on_navigate.clone();
	html! {
		<section class="package-promo">
			<div class="container centered">
				<h2>{ "2026 Holiday Packages" }</h2>
				<p>{ "Flights, car hire, accommodation and tours, all organised in one go." }</p>
				<button type="button" onclick={ move |_| on_navigate.emit(View::Packages) }>
					{ "See the packages" }
				</button>
			</div>
		</section>
	}
}

const COTTAGES: [(&str, &str, &str); 3] = [
	("The Homestead Suite", "Sleeps 2", "Queen bed, claw-foot bath and a deck looking over the gardens."),
	("Garden Cottage", "Sleeps 4", "Two bedrooms and a full kitchen. Good for families or friends travelling together."),
	("The Loft", "Sleeps 2", "Up in the pines with views out to the ocean on a clear day."),
];

#[function_component(Accommodation)]
fn accommodation() -> Html {
	html! {
		<section class="accommodation">
			<div class="container">
				<h2 class="centered">{ "Accommodation" }</h2>
				<div class="card-grid">
					{ for COTTAGES.iter().map(|(name, sleeps, blurb)| html! {
						<div class="card">
							<h3>{ *name }</h3>
							<strong class="small">{ *sleeps }</strong>
							<p>{ *blurb }</p>
						</div>
					}) }
				</div>
			</div>
		</section>
	}
}

const EXPERIENCES: [&str; 5] = [
	"Snorkelling in Emily Bay",
	"Walking the Norfolk Island National Park",
	"The Kingston and Arthur's Vale historic area",
	"Fish fry at Puppy's Point",
	"Sunset over Anson Bay",
];

#[function_component(Experiences)]
fn experiences() -> Html {
	html! {
		<section class="experiences">
			<div class="container">
				<h2 class="centered">{ "Island experiences" }</h2>
				<ul class="pill-list">
					{ for EXPERIENCES.iter().map(|e| html! { <li>{ *e }</li> }) }
				</ul>
			</div>
		</section>
	}
}

#[function_component(Heritage)]
fn heritage() -> Html {
	html! {
		<section class="heritage">
			<div class="container">
				<h2>{ "Our heritage" }</h2>
				<p>
					{ "Channers has been in the family for generations. The original homestead still stands at \
					the heart of the property, and the cottages around it were built with timber milled from \
					the island's own pines." }
				</p>
			</div>
		</section>
	}
}

const GALLERY: [(&str, &str); 4] = [
	("gallery-homestead.webp", "The homestead at dusk"),
	("gallery-deck.webp", "Breakfast on the deck"),
	("gallery-pines.webp", "Norfolk pines along the drive"),
	("gallery-bay.webp", "Emily Bay"),
];

#[function_component(Gallery)]
fn gallery() -> Html {
	html! {
		<section class="gallery">
			<div class="container gallery-grid">
				{ for GALLERY.iter().map(|(file, alt)| html! {
					<img src={ format!("/assets/{file}") } alt={ *alt } loading="lazy" />
				}) }
			</div>
		</section>
	}
}

const REVIEWS: [(&str, &str); 3] = [
	("Margaret, Brisbane", "Steve and Kim made us feel like family. We've already booked for next year."),
	("Tom & Ana, Auckland", "Spotless cottage, beautiful garden and the best local tips on the island."),
	("The Fletchers, Sydney", "The package took all the stress out of planning. Everything just worked."),
];

#[function_component(Reviews)]
fn reviews() -> Html {
	html! {
		<section class="reviews">
			<div class="container">
				<h2 class="centered">{ "What our guests say" }</h2>
				<div class="card-grid">
					{ for REVIEWS.iter().map(|(who, quote)| html! {
						<blockquote class="card">
							<p>{ format!("\u{201c}{quote}\u{201d}") }</p>
							<cite>{ *who }</cite>
						</blockquote>
					}) }
				</div>
			</div>
		</section>
	}
}

#[function_component(Location)]
fn location() -> Html {
	html! {
		<section class="location">
			<div class="container">
				<h2>{ "Finding us" }</h2>
				<p>{ "Five minutes from Norfolk Island Airport and Burnt Pine. We're happy to meet your flight." }</p>
			</div>
		</section>
	}
}

const TRUST: [&str; 4] = [
	"Family owned & operated",
	"No payment until we confirm",
	"Local hosts, local knowledge",
	"Guests return year after year",
];

#[function_component(TrustIndicators)]
fn trust_indicators() -> Html {
	html! {
		<section class="trust">
			<div class="container trust-row">
				{ for TRUST.iter().map(|t| html! { <span>{ "✓ " }{ *t }</span> }) }
			</div>
		</section>
	}
}

const PACKAGES: [(&str, &str, &[&str]); 2] = [
	("Island Escape", "7 nights", &["Return flights from Brisbane or Sydney", "Car hire for your stay", "Garden Cottage accommodation", "Half-day island tour"]),
	("Heritage Explorer", "10 nights", &["Return flights from Brisbane or Sydney", "Car hire for your stay", "Homestead Suite accommodation", "Kingston heritage walk and fish fry"]),
];

#[function_component(Packages)]
fn packages() -> Html {
	html! {
		<section class="packages">
			<div class="container">
				<h2 class="centered">{ "2026 Holiday Packages" }</h2>
				<p class="centered">{ "Tell us which package you're interested in below and we'll put together a quote." }</p>
				<div class="card-grid">
					{ for PACKAGES.iter().map(|(name, length, includes)| html! {
						<div class="card">
							<h3>{ *name }</h3>
							<strong class="small">{ *length }</strong>
							<ul>
								{ for includes.iter().map(|i| html! { <li>{ *i }</li> }) }
							</ul>
						</div>
					}) }
				</div>
			</div>
		</section>
	}
}

#[function_component(Footer)]
pub fn footer() -> Html {
	html! {
		<footer class="site-footer centered">
			<span class="serif">{ SITE_NAME }</span>
			<br />
			<a href={ format!("mailto:{ENQUIRY_ADDRESS}") }>{ ENQUIRY_ADDRESS }</a>
		</footer>
	}
}
