mod dropdown;
mod select_list;
mod tag_button;

use crossterm::event::MouseEvent;

pub use dropdown::{Dropdown, DropdownEvent, DropdownLayout};
pub use select_list::{OptionDescriptor, SelectList, SelectListOption};
pub use tag_button::{TagBar, TagButton};

/// Callback fired when an option or tag is activated.
///
/// Receives the triggering pointer event untouched.
pub type OnActivate<'a> = Box<dyn FnMut(MouseEvent) + 'a>;
