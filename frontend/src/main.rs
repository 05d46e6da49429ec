use channers_shared::View;
use yew::prelude::*;

use sections::{render_section, Footer, Header};
use style::SharedStyle;

mod calendar;
mod enquiry;
mod sections;
mod style;

#[function_component(Frontend)]
pub fn frontend() -> Html {
	// the only routing this site has; nothing goes into the url
	let view = use_state(View::default);

	let navigate = {
		let view = view.clone();
		Callback::from(move |next: View| view.set(next))
	};

	let content = view.sections()
		.iter()
		.map(|section| render_section(*section, &navigate))
		.collect::<Html>();

	html! {
		<>
			<SharedStyle />
			<Header current={ *view } on_navigate={ navigate.clone() } />
			<main>
				{ content }
			</main>
			<Footer />
		</>
	}
}

fn main() {
	console_error_panic_hook::set_once();
	yew::Renderer::<Frontend>::new().render();
}
