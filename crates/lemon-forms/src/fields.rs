pub mod choice_field;
pub mod date_field;
pub mod integer_field;

pub use choice_field::ChoiceField;
pub use date_field::DateField;
pub use integer_field::IntegerField;
