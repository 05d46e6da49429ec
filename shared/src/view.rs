/// Which page composition is on screen. There's no URL behind this; it only lives in the top of
/// the component tree.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum View {
	#[default]
	Home,
	Packages
}

impl View {
	pub const ALL: [Self; 2] = [Self::Home, Self::Packages];

	#[must_use]
	pub const fn nav_label(self) -> &'static str {
		match self {
			Self::Home => "The Homestead",
			Self::Packages => "2026 Holiday Packages",
		}
	}

	/// Sections in the order they're rendered, not counting the header and footer
	#[must_use]
	pub const fn sections(self) -> &'static [Section] {
		match self {
			Self::Home => &[
				Section::Hero,
				Section::WhyStay,
				Section::PackagePromo,
				Section::Accommodation,
				Section::Experiences,
				Section::Heritage,
				Section::Gallery,
				Section::Reviews,
				Section::Location,
				Section::TrustIndicators,
				Section::Enquiry,
			],
			Self::Packages => &[Section::Packages, Section::Enquiry],
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
	Hero,
	WhyStay,
	PackagePromo,
	Accommodation,
	Experiences,
	Heritage,
	Gallery,
	Reviews,
	Location,
	TrustIndicators,
	Packages,
	Enquiry
}
