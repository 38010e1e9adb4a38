//! Selectable list and its option rows.
//!
//! [`SelectList`] is the container and [`SelectListOption`] the leaf. Both
//! are rebuilt from caller-owned props every frame: the list keeps no
//! selection of its own and enforces no single-select rule. Several options
//! may be marked selected at once if that is what the caller passes in.

use std::fmt;

use crossterm::event::MouseEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Widget};
use tracing::trace;

use super::OnActivate;
use crate::Theme;
use crate::event::{self, EventResult};
use crate::style::OptionState;

/// Render-time description of one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor<'a> {
    pub label: Line<'a>,
    pub is_selected: bool,
}

impl<'a> OptionDescriptor<'a> {
    pub fn new(label: impl Into<Line<'a>>, is_selected: bool) -> Self {
        Self {
            label: label.into(),
            is_selected,
        }
    }
}

/// One selectable row.
pub struct SelectListOption<'a> {
    content: Line<'a>,
    is_selected: bool,
    on_activate: Option<OnActivate<'a>>,
    theme: Theme,
}

impl<'a> SelectListOption<'a> {
    pub fn new(content: impl Into<Line<'a>>) -> Self {
        Self {
            content: content.into(),
            is_selected: false,
            on_activate: None,
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    #[must_use]
    pub fn on_activate(mut self, callback: impl FnMut(MouseEvent) + 'a) -> Self {
        self.on_activate = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn content(&self) -> &Line<'a> {
        &self.content
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.is_selected
    }

    #[must_use]
    pub const fn state(&self) -> OptionState {
        OptionState::from_flags(self.is_selected, false)
    }

    /// Fire the activation callback with `event`. No-op without a callback.
    pub fn activate(&mut self, event: MouseEvent) {
        trace!(content = %self.content, "option activated");
        if let Some(callback) = self.on_activate.as_mut() {
            callback(event);
        }
    }

    pub(crate) const fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Paint the row in an explicit state instead of the one its props imply.
    pub(crate) fn render_as(&self, state: OptionState, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, state.style(&self.theme));
        let text_area = area.inner(Margin::new(1, 0));
        (&self.content).render(text_area, buf);
    }
}

impl<'a> From<&'a str> for SelectListOption<'a> {
    fn from(content: &'a str) -> Self {
        Self::new(content)
    }
}

impl From<String> for SelectListOption<'_> {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl<'a> From<Span<'a>> for SelectListOption<'a> {
    fn from(content: Span<'a>) -> Self {
        Self::new(content)
    }
}

impl<'a> From<Line<'a>> for SelectListOption<'a> {
    fn from(content: Line<'a>) -> Self {
        Self::new(content)
    }
}

impl<'a> From<OptionDescriptor<'a>> for SelectListOption<'a> {
    fn from(descriptor: OptionDescriptor<'a>) -> Self {
        Self::new(descriptor.label).selected(descriptor.is_selected)
    }
}

impl fmt::Debug for SelectListOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectListOption")
            .field("content", &self.content)
            .field("is_selected", &self.is_selected)
            .field("on_activate", &self.on_activate.is_some())
            .finish_non_exhaustive()
    }
}

impl Widget for &SelectListOption<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_as(self.state(), area, buf);
    }
}

impl Widget for SelectListOption<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

/// Container grouping options one per row, in the order given.
#[derive(Debug, Default)]
pub struct SelectList<'a> {
    options: Vec<SelectListOption<'a>>,
    block: Option<Block<'a>>,
    theme: Theme,
}

impl<'a> SelectList<'a> {
    pub fn new<T>(options: T) -> Self
    where
        T: IntoIterator,
        T::Item: Into<SelectListOption<'a>>,
    {
        let theme = Theme::default();
        let options = options
            .into_iter()
            .map(|option| {
                let mut option: SelectListOption<'a> = option.into();
                option.set_theme(theme);
                option
            })
            .collect();
        Self {
            options,
            block: None,
            theme,
        }
    }

    pub fn from_descriptors(descriptors: impl IntoIterator<Item = OptionDescriptor<'a>>) -> Self {
        Self::new(descriptors)
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Apply `theme` to the container and every option in it.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        for option in &mut self.options {
            option.set_theme(theme);
        }
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    #[must_use]
    pub fn options(&self) -> &[SelectListOption<'a>] {
        &self.options
    }

    /// Rows the options occupy when the list is rendered into `area`.
    ///
    /// Options that do not fit below the bottom edge get no row.
    #[must_use]
    pub fn option_areas(&self, area: Rect) -> Vec<Rect> {
        let inner = self.block.as_ref().map_or(area, |block| block.inner(area));
        inner.rows().take(self.options.len()).collect()
    }

    /// Activate the option under a left-button press.
    ///
    /// `area` must be the area the list was last rendered into.
    pub fn handle_mouse(&mut self, area: Rect, event: MouseEvent) -> EventResult<usize> {
        if !event::is_left_press(&event) || !area.contains(event::position(&event)) {
            return EventResult::Ignored;
        }
        match event::hit(&self.option_areas(area), &event) {
            Some(index) => {
                self.options[index].activate(event);
                EventResult::Event(index)
            }
            None => EventResult::Consumed,
        }
    }
}

impl Widget for &SelectList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.container());
        if let Some(block) = &self.block {
            block.render(area, buf);
        }
        for (option, row) in self.options.iter().zip(self.option_areas(area)) {
            option.render(row, buf);
        }
    }
}

impl Widget for SelectList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}
