//! Stateless terminal widgets for picking things.
//!
//! Every widget here is a pure function of the props handed to it: the
//! caller owns what is selected, open or focused, rebuilds the widgets each
//! frame, and hears back through activation callbacks or the
//! [`EventResult`] returned from `handle_mouse`.

pub mod config;
pub mod event;
pub mod style;
pub mod theme;
pub mod widget;

pub use event::EventResult;
pub use style::{OptionState, TagState};
pub use theme::Theme;
pub use widget::{
    Dropdown, DropdownEvent, DropdownLayout, OnActivate, OptionDescriptor, SelectList,
    SelectListOption, TagBar, TagButton,
};
