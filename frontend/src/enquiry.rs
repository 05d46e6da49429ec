use std::rc::Rc;

use channers_shared::{
	enquiry::FormField,
	relay::{RelayReply, RelayResponse, BUSY_MESSAGE},
	EnquiryAction,
	EnquiryRequest,
	EnquiryState,
	InFlight,
	SubmissionEvent,
	SubmissionStatus
};
use gloo_console::log;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::calendar::DateRangePicker;

const ENQUIRY_ENDPOINT: &str = "/api/enquiry";

#[derive(PartialEq, Default)]
struct EnquiryModel(EnquiryState);

impl Reducible for EnquiryModel {
	type Action = EnquiryAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut state = self.0.clone();
		state.apply(action);
		Self(state).into()
	}
}

// One request, one answer. It only counts as sent if the status is fine AND the body says so.
async fn send_enquiry(request: &EnquiryRequest) -> SubmissionEvent {
	let req = match Request::post(ENQUIRY_ENDPOINT)
		.header("Accept", "application/json")
		.json(request) {
		Ok(req) => req,
		Err(e) => {
			log!(format!("Couldn't serialize enquiry: {e:?}"));
			return SubmissionEvent::RelayFailed;
		}
	};

	let res = match req.send().await {
		Ok(res) => res,
		Err(e) => {
			log!(format!("Network error sending enquiry: {e:?}"));
			return SubmissionEvent::RelayFailed;
		}
	};

	let status = res.status();
	match res.json::<RelayResponse>().await {
		Ok(body) => {
			let reply = RelayReply { status, body };
			if reply.succeeded() {
				SubmissionEvent::RelaySucceeded
			} else {
				log!(format!("Enquiry wasn't accepted: {reply:?}"));
				SubmissionEvent::RelayFailed
			}
		},
		Err(e) => {
			log!(format!("Couldn't decode enquiry response ({status}): {e:?}"));
			SubmissionEvent::RelayFailed
		}
	}
}

fn text_input(model: &UseReducerHandle<EnquiryModel>, field: FormField) -> Callback<InputEvent> {
	let model = model.clone();
	Callback::from(move |e: InputEvent|
		if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
				model.dispatch(EnquiryAction::SetField(field, input.value()));
			}
	)
}

#[function_component(Enquiry)]
pub fn enquiry() -> Html {
	let model = use_reducer(EnquiryModel::default);
	let in_flight = use_mut_ref(InFlight::default);
	let state = &model.0;

	let on_dates = {
		let model = model.clone();
		Callback::from(move |range| model.dispatch(EnquiryAction::SelectDates(range)))
	};

	let on_message = {
		let model = model.clone();
		Callback::from(move |e: InputEvent|
			if let Some(area) = e.target()
				.and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
					model.dispatch(EnquiryAction::SetField(FormField::Message, area.value()));
				}
		)
	};

	let on_package = {
		let model = model.clone();
		Callback::from(move |e: Event|
			if let Some(input) = e.target()
				.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
					model.dispatch(EnquiryAction::SetPackageInterest(input.checked()));
				}
		)
	};

	let on_submit = {
		let model = model.clone();
		let in_flight = in_flight.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			// `model` may be a render behind, so the latch decides whether anything gets sent
			let Some(request) = in_flight.borrow_mut().begin(&model.0) else {
				return;
			};

			model.dispatch(EnquiryAction::Status(SubmissionEvent::Submit));

			let model = model.clone();
			let in_flight = in_flight.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let outcome = send_enquiry(&request).await;
				in_flight.borrow_mut().finish();
				model.dispatch(EnquiryAction::Status(outcome));
			});
		})
	};

	let send_another = {
		let model = model.clone();
		Callback::from(move |_: MouseEvent| model.dispatch(EnquiryAction::Status(SubmissionEvent::SendAnother)))
	};

	let submitting = state.status.is_submitting();
	let mailto = state.mailto();

	let form_side = match state.confirmation() {
		Some((first_name, email)) => html! {
			<div class="confirmation centered">
				<div class="tick">{ "✓" }</div>
				<h3>{ "Enquiry Sent!" }</h3>
				<p>{ "Thank you, " }<strong>{ first_name }</strong>{ ". We have received your details." }</p>
				<p class="small">
					{ "Steve or Kim will check the calendar and get back to you at " }
					<strong>{ email }</strong>
					{ " shortly." }
				</p>
				<button type="button" class="link-button" onclick={ send_another }>{ "Send another enquiry" }</button>
			</div>
		},
		None => html! {
			<form class="enquiry-form" onsubmit={ on_submit }>
				// honeypot for the relay's spam protection; people never see it
				<input type="checkbox" name="botcheck" style="display: none;" />

				<div class="name-row">
					<label>
						{ "First Name" }
						<input
							type="text"
							name={ FormField::FirstName.input_name() }
							required=true
							value={ state.form.first_name.clone() }
							oninput={ text_input(&model, FormField::FirstName) }
						/>
					</label>
					<label>
						{ "Last Name" }
						<input
							type="text"
							name={ FormField::LastName.input_name() }
							required=true
							value={ state.form.last_name.clone() }
							oninput={ text_input(&model, FormField::LastName) }
						/>
					</label>
				</div>

				<label>
					{ "Email Address" }
					<input
						type="email"
						name={ FormField::Email.input_name() }
						required=true
						value={ state.form.email.clone() }
						oninput={ text_input(&model, FormField::Email) }
					/>
				</label>

				<label>
					{ "Selected Dates" }
					<input type="text" class="readonly" readonly=true value={ state.dates.summary() } />
				</label>

				<div class="package-interest">
					<input
						type="checkbox"
						id="package-interest"
						name="packageInterest"
						checked={ state.form.package_interest }
						onchange={ on_package }
					/>
					<label for="package-interest">
						<strong>{ "I am interested in a 2026 Holiday Package" }</strong>
						<br />
						<span class="small">{ "Includes Flights, Car Hire, Accommodation & Tours." }</span>
					</label>
				</div>

				<label>
					{ "Anything else we should know?" }
					<textarea
						rows="4"
						name={ FormField::Message.input_name() }
						value={ state.form.message.clone() }
						oninput={ on_message }
						placeholder="Specific room preference, dietary requirements, or flight details..."
					/>
				</label>

				<button type="submit" class="submit" disabled={ submitting }>
					{ if submitting { "Sending..." } else { "Send Enquiry" } }
				</button>

				<a class="email-directly" href={ mailto.clone() }>{ "✉ Prefer to email us directly?" }</a>

				if state.status == SubmissionStatus::Error {
					<div class="enquiry-error">
						<div>{ "⚠ " }{ BUSY_MESSAGE }</div>
						<a href={ mailto }><strong>{ "Click here to send email manually" }</strong></a>
					</div>
				}

				<p class="small centered">{ "No payment required now. We will contact you to finalize details." }</p>
			</form>
		}
	};

	html! {
		<section id="enquiry" class="enquiry">
			<div class="container">
				<div class="centered intro">
					<h2>{ "A stay built on genuine hospitality" }</h2>
					<p>
						{ "Comfortable accommodation, beautiful surroundings and attentive, on-site hosting. \
						This is what keeps guests coming back to Channers. \
						Select your dates below and we'll personally confirm availability." }
					</p>
				</div>
				<div class="two-column">
					<div>
						<h3>{ "📅 Preferred Dates" }</h3>
						<DateRangePicker on_select={ on_dates } />
					</div>
					<div class="form-side">
						{ form_side }
					</div>
				</div>
			</div>
		</section>
	}
}
