pub mod calendar;
pub mod enquiry;
pub mod relay;
pub mod status;
pub mod view;

pub use calendar::{DateRange, RangePicker};
pub use enquiry::{EnquiryFormData, EnquiryRequest, SubmissionPayload};
pub use status::{EnquiryAction, EnquiryState, InFlight, SubmissionEvent, SubmissionStatus};
pub use view::View;

pub const SITE_NAME: &str = "Channers on Norfolk";

pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;500&family=Lato:wght@400;700&display=swap');
* {
	--norfolk-green: #2f4a3a;
	--norfolk-clay: #a8643c;
	--norfolk-sand: #efe6d8;
	--text: #2d2d2d;
	--muted: #6b6b6b;
	--white: #ffffff;
	box-sizing: border-box;
	color: var(--text);
	font-family: Lato, Arial, sans-serif;
}
body {
	margin: 0;
	background-color: var(--white);
}
h1, h2, h3, .serif {
	font-family: "Playfair Display", Georgia, serif;
	font-weight: 400;
}
h2 {
	color: var(--norfolk-green);
	font-size: 36px;
}
section {
	padding: 72px 16px;
}
.container {
	max-width: 1080px;
	margin: 0 auto;
}
.centered {
	text-align: center;
}
a {
	color: var(--norfolk-clay);
}
button, .button {
	background-color: var(--norfolk-green);
	color: var(--white);
	border: none;
	border-radius: 2px;
	padding: 12px 20px;
	font-size: 16px;
	cursor: pointer;
}
button:disabled {
	opacity: 0.6;
	cursor: wait;
}
input, textarea {
	width: 100%;
	padding: 12px;
	border: 1px solid #c9c9c9;
	border-radius: 2px;
	background-color: var(--white);
	font-size: 16px;
}
"#;
