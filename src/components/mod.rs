mod form_input;
pub use form_input::*;

mod icon;
pub use icon::*;

mod radio_button;
pub use radio_button::*;

mod sort_carets;
pub use sort_carets::*;
