use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How dates are shown anywhere a guest or the hosts will read them
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub const WEEKDAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

#[must_use]
pub fn display_date(date: NaiveDate) -> String {
	date.format(DATE_FORMAT).to_string()
}

/// A (possibly partial) stay. `end` can only exist alongside a `start` that it comes strictly
/// after, and deserializing something that breaks that rule fails.
#[derive(Serialize, Deserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
#[serde(try_from = "RawRange")]
pub struct DateRange {
	start: Option<NaiveDate>,
	end: Option<NaiveDate>
}

#[derive(Deserialize)]
struct RawRange {
	start: Option<NaiveDate>,
	end: Option<NaiveDate>
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("the end of a date range must come strictly after its start")]
pub struct InvalidRange;

impl TryFrom<RawRange> for DateRange {
	type Error = InvalidRange;
	fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
		match (raw.start, raw.end) {
			(None, None) => Ok(Self::empty()),
			(Some(start), None) => Ok(Self::starting(start)),
			(Some(start), Some(end)) => Self::spanning(start, end).ok_or(InvalidRange),
			(None, Some(_)) => Err(InvalidRange)
		}
	}
}

impl DateRange {
	#[must_use]
	pub const fn empty() -> Self {
		Self { start: None, end: None }
	}

	#[must_use]
	pub const fn starting(start: NaiveDate) -> Self {
		Self { start: Some(start), end: None }
	}

	#[must_use]
	pub fn spanning(start: NaiveDate, end: NaiveDate) -> Option<Self> {
		(end > start).then_some(Self { start: Some(start), end: Some(end) })
	}

	#[must_use]
	pub const fn start(&self) -> Option<NaiveDate> {
		self.start
	}

	#[must_use]
	pub const fn end(&self) -> Option<NaiveDate> {
		self.end
	}

	#[cfg(test)]
	const fn is_complete(&self) -> bool {
		self.start.is_some() && self.end.is_some()
	}

	/// `"<start> to <end>"`, with `?` standing in for a missing end and `unselected` used when
	/// there's no start at all
	#[must_use]
	pub fn describe(&self, unselected: &str) -> String {
		match (self.start, self.end) {
			(None, _) => unselected.to_string(),
			(Some(start), None) => format!("{} to ?", display_date(start)),
			(Some(start), Some(end)) => format!("{} to {}", display_date(start), display_date(end)),
		}
	}

	/// What goes in the read-only "Selected Dates" box next to the calendar
	#[must_use]
	pub fn summary(&self) -> String {
		match (self.start, self.end) {
			(None, _) => "Please select dates from calendar".into(),
			(Some(start), None) => format!("{} ", display_date(start)),
			(Some(start), Some(end)) => format!("{} - {}", display_date(start), display_date(end)),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthGrid {
	/// empty cells before the 1st, with weeks starting on sunday
	pub leading_blanks: u32,
	pub days: u32
}

/// The month-grid date picker. Two clicks make a range; month navigation only ever moves the
/// view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangePicker {
	// always the 1st of the displayed month
	shown: NaiveDate,
	range: DateRange
}

impl RangePicker {
	#[must_use]
	pub fn new(today: NaiveDate) -> Self {
		Self {
			shown: first_of_month(today),
			range: DateRange::empty()
		}
	}

	#[cfg(test)]
	const fn shown_month(&self) -> NaiveDate {
		self.shown
	}

	#[must_use]
	pub const fn range(&self) -> DateRange {
		self.range
	}

	#[must_use]
	pub fn title(&self) -> String {
		self.shown.format("%B %Y").to_string()
	}

	#[must_use]
	pub fn grid(&self) -> MonthGrid {
		MonthGrid {
			leading_blanks: self.shown.weekday().num_days_from_sunday(),
			days: days_in_month(self.shown)
		}
	}

	/// Applies a click on `date` and returns the range that should be reported upwards
	pub fn click(&mut self, date: NaiveDate) -> DateRange {
		self.range = match (self.range.start, self.range.end) {
			(Some(start), None) => DateRange::spanning(start, date)
				.unwrap_or(DateRange::starting(date)),
			// nothing picked yet, or a full range that we're now starting over
			_ => DateRange::starting(date),
		};

		self.range
	}

	/// Same as [`Self::click`] but for a day number in the displayed month. Returns `None` if
	/// that day doesn't exist in this month.
	pub fn click_day(&mut self, day: u32) -> Option<DateRange> {
		self.date_of(day).map(|date| self.click(date))
	}

	#[must_use]
	pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
		self.shown.with_day(day)
	}

	pub fn prev_month(&mut self) {
		// there's no month before the earliest representable date, so just stay put
		if let Some(prev) = self.shown.checked_sub_months(Months::new(1)) {
			self.shown = prev;
		}
	}

	pub fn next_month(&mut self) {
		if let Some(next) = self.shown.checked_add_months(Months::new(1)) {
			self.shown = next;
		}
	}

	/// Endpoints match exactly, anything strictly in between is painted as part of the span
	#[must_use]
	pub fn is_selected(&self, date: NaiveDate) -> bool {
		match (self.range.start, self.range.end) {
			(Some(start), Some(end)) => start <= date && date <= end,
			(Some(start), None) => date == start,
			(None, _) => false
		}
	}
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
	date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
	first.checked_add_months(Months::new(1))
		.and_then(|next| next.pred_opt())
		.map_or(31, |last| last.day())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	fn picker() -> RangePicker {
		RangePicker::new(date(2026, 10, 18))
	}

	#[test]
	fn first_click_reports_start_only() {
		let mut p = picker();
		let range = p.click(date(2026, 10, 20));
		assert_eq!(range.start(), Some(date(2026, 10, 20)));
		assert_eq!(range.end(), None);
	}

	#[test]
	fn later_second_click_completes_range() {
		let mut p = picker();
		p.click(date(2026, 10, 20));
		let range = p.click(date(2026, 10, 24));
		assert_eq!(range.start(), Some(date(2026, 10, 20)));
		assert_eq!(range.end(), Some(date(2026, 10, 24)));
	}

	#[test]
	fn earlier_or_same_second_click_restarts() {
		let mut p = picker();
		p.click(date(2026, 10, 20));
		let range = p.click(date(2026, 10, 12));
		assert_eq!(range, DateRange::starting(date(2026, 10, 12)));

		let range = p.click(date(2026, 10, 12));
		assert_eq!(range, DateRange::starting(date(2026, 10, 12)));
	}

	#[test]
	fn click_after_complete_range_starts_over() {
		let mut p = picker();
		p.click(date(2026, 10, 20));
		p.click(date(2026, 10, 24));
		let range = p.click(date(2026, 10, 30));
		assert_eq!(range, DateRange::starting(date(2026, 10, 30)));
	}

	#[test]
	fn reselecting_same_pair_is_stable() {
		let mut p = picker();
		p.click(date(2026, 11, 2));
		let first = p.click(date(2026, 11, 9));
		p.click(date(2026, 11, 2));
		let second = p.click(date(2026, 11, 9));
		assert_eq!(first, second);
	}

	#[test]
	fn navigation_leaves_selection_alone() {
		let mut p = picker();
		p.click(date(2026, 10, 20));
		p.next_month();
		p.next_month();
		assert_eq!(p.range(), DateRange::starting(date(2026, 10, 20)));

		// and a second click in another month still completes it
		let range = p.click_day(3).unwrap();
		assert_eq!(range.end(), Some(date(2026, 12, 3)));

		p.prev_month();
		p.prev_month();
		p.prev_month();
		assert_eq!(p.shown_month(), date(2026, 9, 1));
		assert_eq!(p.range(), range);
	}

	#[test]
	fn navigation_crosses_years() {
		let mut p = RangePicker::new(date(2026, 12, 31));
		p.next_month();
		assert_eq!(p.title(), "January 2027");
		p.prev_month();
		p.prev_month();
		assert_eq!(p.title(), "November 2026");
	}

	#[test]
	fn highlights_span_and_endpoints() {
		let mut p = picker();
		p.click(date(2026, 10, 20));
		assert!(p.is_selected(date(2026, 10, 20)));
		assert!(!p.is_selected(date(2026, 10, 21)));

		p.click(date(2026, 10, 23));
		assert!(!p.is_selected(date(2026, 10, 19)));
		assert!(p.is_selected(date(2026, 10, 20)));
		assert!(p.is_selected(date(2026, 10, 22)));
		assert!(p.is_selected(date(2026, 10, 23)));
		assert!(!p.is_selected(date(2026, 10, 24)));
	}

	#[test]
	fn grid_matches_month_layout() {
		// october 2026 starts on a thursday
		assert_eq!(picker().grid(), MonthGrid { leading_blanks: 4, days: 31 });

		let feb_leap = RangePicker::new(date(2028, 2, 10));
		assert_eq!(feb_leap.grid().days, 29);
		let feb = RangePicker::new(date(2026, 2, 10));
		assert_eq!(feb.grid(), MonthGrid { leading_blanks: 0, days: 28 });
	}

	#[test]
	fn click_day_outside_month_is_ignored() {
		let mut p = RangePicker::new(date(2026, 11, 5));
		assert_eq!(p.click_day(31), None);
		assert_eq!(p.click_day(0), None);
		assert_eq!(p.range(), DateRange::empty());
	}

	#[test]
	fn describes_ranges() {
		assert_eq!(DateRange::empty().describe("Dates not selected"), "Dates not selected");
		assert_eq!(DateRange::starting(date(2026, 3, 5)).describe("x"), "05/03/2026 to ?");
		assert_eq!(
			DateRange::spanning(date(2026, 3, 5), date(2026, 3, 12)).unwrap().describe("x"),
			"05/03/2026 to 12/03/2026"
		);
		assert_eq!(DateRange::empty().summary(), "Please select dates from calendar");
		assert_eq!(DateRange::starting(date(2026, 3, 5)).summary(), "05/03/2026 ");
	}

	#[test]
	fn deserializing_rejects_broken_ranges() {
		let ok: DateRange = serde_json::from_str(r#"{"start":"2026-03-05","end":"2026-03-09"}"#).unwrap();
		assert!(ok.is_complete());

		let empty: DateRange = serde_json::from_str(r#"{"start":null,"end":null}"#).unwrap();
		assert_eq!(empty, DateRange::empty());

		assert!(serde_json::from_str::<DateRange>(r#"{"start":null,"end":"2026-03-09"}"#).is_err());
		assert!(serde_json::from_str::<DateRange>(r#"{"start":"2026-03-09","end":"2026-03-09"}"#).is_err());
	}

	#[test]
	fn broken_range_error_is_a_real_error() {
		fn as_error(e: &(dyn std::error::Error + Send + Sync + 'static)) -> String {
			e.to_string()
		}

		let raw = RawRange { start: Some(date(2026, 3, 9)), end: Some(date(2026, 3, 1)) };
		let err = DateRange::try_from(raw).unwrap_err();
		assert_eq!(err, InvalidRange);
		assert_eq!(as_error(&err), "the end of a date range must come strictly after its start");

		let decode = serde_json::from_str::<DateRange>(r#"{"start":null,"end":"2026-03-09"}"#).unwrap_err();
		assert!(decode.to_string().contains("strictly after its start"));
	}
}
