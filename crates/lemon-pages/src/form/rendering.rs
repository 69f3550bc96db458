//! Server-side HTML rendering for the reservation form
//!
//! Every interpolated value goes through [`html_escape`].

use super::component::ReservationForm;
use lemon_forms::{BoundField, FormField, ReservationFormSpec, Widget};

/// Escape text for use in HTML content and attribute values
///
/// # Examples
///
/// ```
/// use lemon_pages::form::html_escape;
///
/// assert_eq!(html_escape("<b>\"Tom's\" & Co</b>"), "&lt;b&gt;&quot;Tom&#x27;s&quot; &amp; Co&lt;/b&gt;");
/// ```
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Render the reservation form with its current draft, errors and
/// announcement
pub fn render_form(form: &ReservationForm) -> String {
	let spec = ReservationFormSpec::build(form.today(), form.settings(), form.time_slots());
	let data = form.draft().to_form_data();
	let errors = form.errors();
	let announcement = form.announcement();

	let mut html = String::from(r#"<form class="booking-form" novalidate>"#);
	html.push_str("<h1>Reserve a Table</h1>");

	for field in spec.fields() {
		let bound = BoundField::new(
			field.as_ref(),
			data.get(field.name()),
			errors.get(field.name()),
			spec.prefix(),
		);
		html.push_str(&render_field(&bound));
	}

	html.push_str(r#"<div id="book-announcement" role="status""#);
	html.push_str(&format!(
		r#" aria-live="{}" tabindex="-1" data-focused="{}">"#,
		announcement.politeness.as_str(),
		announcement.focused
	));
	if let Some(text) = &announcement.text {
		html.push_str(&html_escape(text));
	}
	html.push_str("</div>");

	html.push_str(r#"<button type="submit""#);
	if !form.is_submit_enabled() {
		html.push_str(" disabled");
	}
	html.push_str(">Make Your Reservation</button>");
	html.push_str("</form>");

	html
}

fn render_field(bound: &BoundField<'_>) -> String {
	let id = bound.id_for_label();
	let mut html = String::from(r#"<div class="form-field">"#);

	html.push_str(&format!(
		r#"<label for="{}">{}</label>"#,
		html_escape(&id),
		html_escape(bound.label().unwrap_or(bound.name()))
	));

	let mut attrs = format!(
		r#" id="{}" name="{}""#,
		html_escape(&id),
		html_escape(bound.html_name())
	);
	for (key, value) in bound.constraint_attrs() {
		attrs.push_str(&format!(r#" {}="{}""#, key, html_escape(&value)));
	}
	if bound.is_required() {
		attrs.push_str(" required");
	}
	if bound.is_invalid() {
		attrs.push_str(&format!(
			r#" aria-invalid="true" aria-describedby="{}""#,
			html_escape(&bound.error_id())
		));
	}

	let value = bound.value_str();
	match bound.widget() {
		Widget::Select => {
			html.push_str(&format!("<select{}>", attrs));
			if let Some(placeholder) = bound.empty_label() {
				html.push_str(r#"<option value="""#);
				if value.is_empty() {
					html.push_str(" selected");
				}
				html.push_str(&format!(" disabled>{}</option>", html_escape(placeholder)));
			}
			for (choice_value, choice_label) in bound.choices() {
				html.push_str(&format!(r#"<option value="{}""#, html_escape(choice_value)));
				if *choice_value == value {
					html.push_str(" selected");
				}
				html.push_str(&format!(">{}</option>", html_escape(choice_label)));
			}
			html.push_str("</select>");
		}
		widget => {
			html.push_str(&format!(
				r#"<input type="{}"{} value="{}">"#,
				widget.input_type().unwrap_or("text"),
				attrs,
				html_escape(&value)
			));
		}
	}

	if let Some(error) = bound.error() {
		html.push_str(&format!(
			r#"<span id="{}" class="field-error">{}</span>"#,
			html_escape(&bound.error_id()),
			html_escape(error)
		));
	}

	html.push_str("</div>");
	html
}
