use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! {
		<>
			<style>{ channers_shared::BASE_STYLE }</style>
			<style>{ PAGE_STYLE }</style>
		</>
	}
}

const PAGE_STYLE: &str = r"
.site-header {
	position: sticky;
	top: 0;
	z-index: 10;
	display: flex;
	justify-content: space-between;
	align-items: center;
	padding: 12px 24px;
	background-color: var(--white);
	border-bottom: 1px solid #e5e5e5;
}
.site-name {
	font-size: 24px;
	color: var(--norfolk-green);
}
.nav-link {
	background: none;
	color: var(--text);
	margin-right: 8px;
}
.nav-link.active {
	color: var(--norfolk-clay);
	border-bottom: 2px solid var(--norfolk-clay);
}
.hero {
	min-height: 70vh;
	background-size: cover;
	background-position: center;
	display: flex;
	align-items: center;
	justify-content: center;
}
.hero-overlay {
	background-color: rgba(0, 0, 0, 0.35);
	padding: 32px;
	border-radius: 4px;
}
.hero-overlay * {
	color: var(--white);
}
.card-grid {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
	gap: 24px;
}
.card {
	background-color: var(--norfolk-sand);
	padding: 24px;
	border-radius: 4px;
	margin: 0;
}
.package-promo, .trust {
	background-color: var(--norfolk-green);
}
.package-promo *, .trust * {
	color: var(--white);
}
.package-promo button {
	background-color: var(--norfolk-clay);
}
.pill-list {
	display: flex;
	flex-wrap: wrap;
	gap: 12px;
	list-style: none;
	padding: 0;
	justify-content: center;
}
.pill-list li {
	border: 1px solid var(--norfolk-clay);
	border-radius: 20px;
	padding: 8px 16px;
}
.gallery-grid {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
	gap: 8px;
}
.gallery-grid img {
	width: 100%;
	height: 220px;
	object-fit: cover;
}
.trust-row {
	display: flex;
	flex-wrap: wrap;
	justify-content: space-around;
	gap: 16px;
}
.small {
	font-size: 13px;
	color: var(--muted);
}
.enquiry {
	border-top: 1px solid #e5e5e5;
}
.intro p {
	max-width: 640px;
	margin: 0 auto 48px auto;
	line-height: 1.6;
	color: var(--muted);
}
.two-column {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
	gap: 48px;
}
.calendar {
	padding: 24px;
	border: 1px solid #eeeeee;
	border-radius: 8px;
}
.calendar-header {
	display: flex;
	justify-content: space-between;
	align-items: center;
	margin-bottom: 16px;
}
.month-nav {
	background: none;
	color: var(--text);
	font-size: 20px;
	padding: 4px 10px;
}
.month-title {
	font-size: 18px;
}
.calendar-grid {
	display: grid;
	grid-template-columns: repeat(7, 1fr);
	gap: 4px;
	text-align: center;
}
.weekdays span {
	font-size: 12px;
	color: var(--muted);
	margin-bottom: 8px;
}
.day {
	height: 40px;
	padding: 0;
	background: none;
	color: var(--text);
	font-size: 14px;
}
.day:hover {
	background-color: var(--norfolk-sand);
}
.day.selected, .day.selected:hover {
	background-color: var(--norfolk-green);
	color: var(--white);
}
.calendar-hint {
	margin-top: 16px;
	font-size: 12px;
	color: var(--muted);
	text-align: center;
}
.form-side {
	background-color: rgba(239, 230, 216, 0.3);
	padding: 32px;
	border-radius: 8px;
	min-height: 500px;
	display: flex;
	flex-direction: column;
	justify-content: center;
}
.enquiry-form label {
	display: block;
	font-size: 14px;
	margin-bottom: 20px;
}
.name-row {
	display: grid;
	grid-template-columns: 1fr 1fr;
	gap: 20px;
}
.readonly {
	background-color: #f7f7f7;
	color: var(--muted);
}
.package-interest {
	display: flex;
	gap: 12px;
	align-items: flex-start;
	background-color: var(--white);
	padding: 16px;
	margin-bottom: 20px;
	border: 1px solid #e5e5e5;
}
.package-interest input {
	width: auto;
}
.submit {
	width: 100%;
	font-size: 18px;
}
.email-directly {
	display: block;
	text-align: center;
	padding: 12px;
	font-size: 14px;
}
.enquiry-error {
	background-color: #fdecec;
	padding: 12px;
	text-align: center;
	font-size: 14px;
}
.enquiry-error * {
	color: #c62828;
}
.link-button {
	background: none;
	color: var(--norfolk-green);
	font-weight: bold;
	font-size: 14px;
}
.tick {
	font-size: 32px;
	color: #2e7d32;
}
.site-footer {
	padding: 32px;
	background-color: var(--norfolk-sand);
}
";
