//! Theme-derived style maps and the class composer that resolves them.
//!
//! A widget picks its classes with a [`ClassList`], then resolves them
//! against the [`StyleMap`] of its [`StyleSheet`]. Maps are rebuilt only
//! when the installed theme changes, see [`StyleCache`].

mod cache;
pub use cache::*;

mod class;
pub use class::*;

mod compose;
pub use compose::*;

mod map;
pub use map::*;

mod rule;
pub use rule::*;

mod sheets;
pub use sheets::*;
