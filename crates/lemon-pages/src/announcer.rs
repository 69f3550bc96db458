//! Accessibility announcement region
//!
//! Holds the message screen readers should hear after a submission attempt,
//! and whether focus was moved to the region.

use serde::{Deserialize, Serialize};

/// `aria-live` politeness of the region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Politeness {
	#[default]
	Polite,
	Assertive,
}

impl Politeness {
	pub fn as_str(&self) -> &'static str {
		match self {
			Politeness::Polite => "polite",
			Politeness::Assertive => "assertive",
		}
	}
}

/// What the announcement region currently says
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
	pub text: Option<String>,
	pub politeness: Politeness,
	pub focused: bool,
}

/// Announcement region state
///
/// # Examples
///
/// ```
/// use lemon_pages::Announcer;
///
/// let mut announcer = Announcer::new();
/// announcer.announce_errors(2);
/// assert_eq!(announcer.text(), Some("Please correct the 2 highlighted fields."));
/// assert!(announcer.is_focused());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Announcer {
	current: Announcement,
}

impl Announcer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Announce that `count` fields need attention and take focus
	pub fn announce_errors(&mut self, count: usize) {
		let text = if count == 1 {
			"Please correct the 1 highlighted field.".to_string()
		} else {
			format!("Please correct the {} highlighted fields.", count)
		};
		self.current = Announcement {
			text: Some(text),
			politeness: Politeness::Assertive,
			focused: true,
		};
	}

	/// Announce a submission failure
	pub fn announce_failure(&mut self, message: impl Into<String>) {
		self.current = Announcement {
			text: Some(message.into()),
			politeness: Politeness::Assertive,
			focused: false,
		};
	}

	pub fn clear(&mut self) {
		self.current = Announcement::default();
	}

	pub fn text(&self) -> Option<&str> {
		self.current.text.as_deref()
	}

	pub fn politeness(&self) -> Politeness {
		self.current.politeness
	}

	pub fn is_focused(&self) -> bool {
		self.current.focused
	}

	pub fn snapshot(&self) -> Announcement {
		self.current.clone()
	}
}
