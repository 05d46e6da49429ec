use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::calendar::DateRange;

pub const ENQUIRY_ADDRESS: &str = "ask@channersonnorfolk.com";
pub const FROM_NAME: &str = "Channers Website";

const PAYLOAD_NO_DATES: &str = "Dates not selected";
const MAILTO_NO_DATES: &str = "Dates not yet decided";

// Everything encodeURIComponent would leave alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryFormData {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub message: String,
	pub package_interest: bool
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
	FirstName,
	LastName,
	Email,
	Message
}

impl FormField {
	/// The `name` attribute this field has in the form
	#[must_use]
	pub const fn input_name(self) -> &'static str {
		match self {
			Self::FirstName => "firstName",
			Self::LastName => "lastName",
			Self::Email => "email",
			Self::Message => "message",
		}
	}
}

impl EnquiryFormData {
	pub fn set(&mut self, field: FormField, value: String) {
		let slot = match field {
			FormField::FirstName => &mut self.first_name,
			FormField::LastName => &mut self.last_name,
			FormField::Email => &mut self.email,
			FormField::Message => &mut self.message,
		};
		*slot = value;
	}

	#[must_use]
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}

	#[must_use]
	pub const fn package_answer(&self) -> &'static str {
		if self.package_interest { "Yes" } else { "No" }
	}
}

/// What the browser sends us when someone hits "Send Enquiry"
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EnquiryRequest {
	pub form: EnquiryFormData,
	pub dates: DateRange
}

/// The body we post to the form relay. This is only ever built right before it's sent.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct SubmissionPayload {
	pub access_key: String,
	pub subject: String,
	pub from_name: &'static str,
	// honeypot; the relay drops anything where this isn't empty
	pub botcheck: &'static str,
	pub name: String,
	pub email: String,
	pub message: String,
	pub dates: String,
	#[serde(rename = "interestedInPackage")]
	pub interested_in_package: &'static str
}

impl SubmissionPayload {
	#[must_use]
	pub fn new(access_key: &str, request: &EnquiryRequest) -> Self {
		let EnquiryRequest { form, dates } = request;
		Self {
			access_key: access_key.to_string(),
			subject: format!("New Enquiry from {}", form.full_name()),
			from_name: FROM_NAME,
			botcheck: "",
			name: form.full_name(),
			email: form.email.clone(),
			message: form.message.clone(),
			dates: dates.describe(PAYLOAD_NO_DATES),
			interested_in_package: form.package_answer()
		}
	}
}

/// A ready-to-send email for people whose enquiry couldn't go through the relay (or who'd just
/// rather email)
#[derive(Debug, PartialEq, Eq)]
pub struct MailtoDraft {
	pub subject: String,
	pub body: String
}

impl MailtoDraft {
	#[must_use]
	pub fn new(form: &EnquiryFormData, dates: &DateRange) -> Self {
		let message: &str = if form.message.is_empty() {
			"No additional details."
		} else {
			&form.message
		};

		Self {
			subject: format!("Booking Enquiry: {}", form.full_name()),
			body: format!(
				"Hi Steve & Kim,\n\n\
				I would like to enquire about availability.\n\n\
				Name: {}\n\
				Dates: {}\n\
				Interested in Package: {}\n\n\
				Message:\n{message}\n\n\
				My Email: {}",
				form.full_name(),
				dates.describe(MAILTO_NO_DATES),
				form.package_answer(),
				form.email
			)
		}
	}

	#[must_use]
	pub fn to_uri(&self) -> String {
		format!(
			"mailto:{ENQUIRY_ADDRESS}?subject={}&body={}",
			utf8_percent_encode(&self.subject, URI_COMPONENT),
			utf8_percent_encode(&self.body, URI_COMPONENT)
		)
	}
}

#[must_use]
pub fn mailto_link(form: &EnquiryFormData, dates: &DateRange) -> String {
	MailtoDraft::new(form, dates).to_uri()
}
