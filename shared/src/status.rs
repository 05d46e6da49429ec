use crate::{
	calendar::DateRange,
	enquiry::{mailto_link, EnquiryFormData, EnquiryRequest, FormField}
};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
	#[default]
	Idle,
	Submitting,
	Success,
	Error
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionEvent {
	Submit,
	RelaySucceeded,
	RelayFailed,
	// the "send another enquiry" button on the confirmation
	SendAnother
}

impl SubmissionStatus {
	/// Anything not listed here leaves the status where it was
	#[must_use]
	pub const fn transition(self, event: SubmissionEvent) -> Self {
		match (self, event) {
			(Self::Idle | Self::Error, SubmissionEvent::Submit) => Self::Submitting,
			(Self::Submitting, SubmissionEvent::RelaySucceeded) => Self::Success,
			(Self::Submitting, SubmissionEvent::RelayFailed) => Self::Error,
			(Self::Success, SubmissionEvent::SendAnother) => Self::Idle,
			(status, _) => status
		}
	}

	#[must_use]
	pub fn accepts(self, event: SubmissionEvent) -> bool {
		self.transition(event) != self
	}

	#[must_use]
	pub const fn is_submitting(self) -> bool {
		matches!(self, Self::Submitting)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnquiryAction {
	SetField(FormField, String),
	SetPackageInterest(bool),
	SelectDates(DateRange),
	Status(SubmissionEvent)
}

/// Everything the enquiry form holds while it's mounted
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct EnquiryState {
	pub form: EnquiryFormData,
	pub dates: DateRange,
	pub status: SubmissionStatus
}

impl EnquiryState {
	pub fn apply(&mut self, action: EnquiryAction) {
		match action {
			EnquiryAction::SetField(field, value) => self.form.set(field, value),
			EnquiryAction::SetPackageInterest(interested) => self.form.package_interest = interested,
			EnquiryAction::SelectDates(dates) => self.dates = dates,
			// Going back to idle from a success deliberately keeps what they typed, so someone
			// enquiring about a second stay only has to change the dates
			EnquiryAction::Status(event) => self.status = self.status.transition(event),
		}
	}

	/// If a submit would be accepted right now, moves to `Submitting` and returns the request to
	/// send. Returns `None` (and changes nothing) otherwise, e.g. while one is already in flight.
	pub fn begin_submit(&mut self) -> Option<EnquiryRequest> {
		if !self.status.accepts(SubmissionEvent::Submit) {
			return None;
		}

		self.apply(EnquiryAction::Status(SubmissionEvent::Submit));
		Some(self.request())
	}

	#[must_use]
	pub fn request(&self) -> EnquiryRequest {
		EnquiryRequest {
			form: self.form.clone(),
			dates: self.dates
		}
	}

	#[must_use]
	pub fn mailto(&self) -> String {
		mailto_link(&self.form, &self.dates)
	}

	/// Only meaningful once the enquiry went through; thanks them by first name and says where
	/// we'll reply
	#[must_use]
	pub fn confirmation(&self) -> Option<(&str, &str)> {
		(self.status == SubmissionStatus::Success)
			.then_some((self.form.first_name.as_str(), self.form.email.as_str()))
	}
}

/// Whether a request is actually out on the wire. A callback can hold a copy of
/// [`EnquiryState`] that's older than the reducer's, so this lives outside of it and is the only
/// thing allowed to start a send.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct InFlight(bool);

impl InFlight {
	/// Hands back the request to send if nothing is pending and `state` would accept a submit
	pub fn begin(&mut self, state: &EnquiryState) -> Option<EnquiryRequest> {
		if self.0 {
			return None;
		}

		let request = state.clone().begin_submit()?;
		self.0 = true;
		Some(request)
	}

	/// Call once the relay's answer (or the lack of one) has come back
	pub fn finish(&mut self) {
		self.0 = false;
	}
}
