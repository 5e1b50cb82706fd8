//! Styled, accessible form widgets for GPUI.
//!
//! Widgets read the installed [`theme::Theme`], resolve their classes against
//! a cached style map and forward change events to callbacks. The
//! [`forms`] crate describes the external form-state controller those
//! callbacks usually feed.

pub mod bindings;

pub mod components;

pub mod primitives;

pub mod styles;

pub mod theme;

mod utils;
pub use utils::ElementIdExt;

mod assets;
pub use assets::*;

mod init;
pub use init::*;

pub use formwork_forms as forms;
