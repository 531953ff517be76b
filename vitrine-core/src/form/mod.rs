mod controller;
mod messages;
/// Review dialog markup
pub mod review;
/// Field validation rules
pub mod rules;

pub use controller::{FieldValidity, FormController};
pub use messages::FormMessage;
pub use review::ReviewDialog;
pub use rules::{ValidationError, validate_birth_date, validate_name};
