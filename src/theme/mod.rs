//! Theme system providing the spacing unit, color palettes and text sizes
//! every style sheet is derived from.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;
