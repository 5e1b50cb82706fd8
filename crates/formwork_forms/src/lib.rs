//! Types bridging form widgets to an external form-state controller.
//!
//! Widgets never own form state. They describe the fields they need with
//! [`Field`] descriptors and talk to whatever implements [`FormContext`].

mod context;
pub use context::*;

mod error;
pub use error::*;

mod field;
pub use field::*;

mod state;
pub use state::*;

mod value;
pub use value::*;
