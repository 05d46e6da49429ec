use channers_shared::{calendar::WEEKDAY_INITIALS, DateRange, RangePicker};
use chrono::NaiveDate;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
	pub on_select: Callback<DateRange>
}

fn today() -> NaiveDate {
	let now = js_sys::Date::new_0();
	NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
		.unwrap_or_default()
}

#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &CalendarProps) -> Html {
	let picker = use_state(|| RangePicker::new(today()));

	let change_month = |forward: bool| {
		let picker = picker.clone();
		Callback::from(move |_: MouseEvent| {
			let mut moved = *picker;
			if forward {
				moved.next_month();
			} else {
				moved.prev_month();
			}
			picker.set(moved);
		})
	};

	let grid = picker.grid();
	let blanks = (0..grid.leading_blanks)
		.map(|_| html! { <div /> })
		.collect::<Html>();

	let days = (1..=grid.days).map(|day| {
		let selected = picker.date_of(day).is_some_and(|date| picker.is_selected(date));

		let onclick = {
			let picker = picker.clone();
			let on_select = props.on_select.clone();
			Callback::from(move |_: MouseEvent| {
				let mut clicked = *picker;
				if let Some(range) = clicked.click_day(day) {
					picker.set(clicked);
					on_select.emit(range);
				}
			})
		};

		html! {
			<button type="button" class={ classes!("day", selected.then_some("selected")) } { onclick }>
				{ day }
			</button>
		}
	})
	.collect::<Html>();

	html! {
		<div class="calendar">
			<div class="calendar-header">
				<button type="button" class="month-nav" onclick={ change_month(false) }>{ "‹" }</button>
				<span class="serif month-title">{ picker.title() }</span>
				<button type="button" class="month-nav" onclick={ change_month(true) }>{ "›" }</button>
			</div>
			<div class="calendar-grid weekdays">
				{ for WEEKDAY_INITIALS.iter().map(|d| html! { <span>{ *d }</span> }) }
			</div>
			<div class="calendar-grid">
				{ blanks }
				{ days }
			</div>
			<div class="calendar-hint">{ "Select your arrival and departure dates" }</div>
		</div>
	}
}
