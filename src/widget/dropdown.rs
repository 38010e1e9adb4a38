//! Dropdown: a button showing the current choice, with an option list
//! hanging below it while open.
//!
//! Whether the list is open and which option the pointer is over both belong
//! to the caller. The dropdown only reports what the pointer did.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Widget};
use tracing::debug;

use super::SelectListOption;
use crate::Theme;
use crate::event::{self, EventResult};
use crate::style::OptionState;

const DEFAULT_WIDTH: u16 = 20;
const BUTTON_HEIGHT: u16 = 3;
const CHEVRON_CLOSED: &str = "▾";
const CHEVRON_OPEN: &str = "▴";

/// What a pointer event did to the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The button was pressed; the caller should flip its open flag.
    Toggled,
    /// Option `n` was pressed and its callback has run.
    Activated(usize),
    /// The pointer moved onto another option, or off the list.
    Hovered(Option<usize>),
    /// A press landed outside an open dropdown.
    Dismissed,
}

/// Where the dropdown's parts land inside a given area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownLayout {
    pub button: Rect,
    /// `None` while closed, or when there is no room below the button.
    pub list: Option<Rect>,
}

#[derive(Debug)]
pub struct Dropdown<'a> {
    label: Line<'a>,
    options: Vec<SelectListOption<'a>>,
    is_open: bool,
    hovered: Option<usize>,
    width: u16,
    theme: Theme,
}

impl<'a> Dropdown<'a> {
    pub fn new<T>(label: impl Into<Line<'a>>, options: T) -> Self
    where
        T: IntoIterator,
        T::Item: Into<SelectListOption<'a>>,
    {
        Self {
            label: label.into(),
            options: options.into_iter().map(Into::into).collect(),
            is_open: false,
            hovered: None,
            width: DEFAULT_WIDTH,
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    #[must_use]
    pub fn hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    #[must_use]
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        for option in &mut self.options {
            option.set_theme(theme);
        }
        self
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn layout(&self, area: Rect) -> DropdownLayout {
        let button = Rect {
            width: self.width.min(area.width),
            height: BUTTON_HEIGHT.min(area.height),
            ..area
        };
        let list = self.is_open.then(|| {
            let wanted = u16::try_from(self.options.len())
                .unwrap_or(u16::MAX)
                .saturating_add(2);
            Rect {
                y: button.bottom(),
                height: wanted.min(area.bottom().saturating_sub(button.bottom())),
                ..button
            }
        });
        DropdownLayout {
            button,
            list: list.filter(|list| !list.is_empty()),
        }
    }

    fn option_areas(&self, list: Rect) -> Vec<Rect> {
        list.inner(Margin::new(1, 1))
            .rows()
            .take(self.options.len())
            .collect()
    }

    /// Offer a pointer event. `area` must match the last render.
    pub fn handle_mouse(&mut self, area: Rect, event: MouseEvent) -> EventResult<DropdownEvent> {
        let layout = self.layout(area);
        let position = event::position(&event);
        let on_list = layout.list.filter(|list| list.contains(position));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.button.contains(position) {
                    debug!(open = !self.is_open, "dropdown toggled");
                    return DropdownEvent::Toggled.into();
                }
                let Some(list) = on_list else {
                    return if self.is_open {
                        DropdownEvent::Dismissed.into()
                    } else {
                        EventResult::Ignored
                    };
                };
                match event::hit(&self.option_areas(list), &event) {
                    Some(index) => {
                        self.options[index].activate(event);
                        DropdownEvent::Activated(index).into()
                    }
                    None => EventResult::Consumed,
                }
            }
            MouseEventKind::Moved => {
                let hovered = on_list.and_then(|list| event::hit(&self.option_areas(list), &event));
                if hovered != self.hovered {
                    DropdownEvent::Hovered(hovered).into()
                } else if on_list.is_some() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            _ => EventResult::Ignored,
        }
    }

    fn frame(&self) -> Block<'static> {
        Block::bordered()
            .border_type(self.theme.border_type)
            .border_style(Style::default().fg(self.theme.border()))
            .style(self.theme.container())
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        let block = self.frame();
        let inner = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);

        let [label_area, chevron_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)])
                .spacing(1)
                .areas(inner);
        (&self.label).render(label_area, buf);
        let chevron = if self.is_open { CHEVRON_OPEN } else { CHEVRON_CLOSED };
        Span::styled(chevron, Style::default().fg(self.theme.chevron())).render(chevron_area, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        self.frame().render(area, buf);
        for (index, (option, row)) in self.options.iter().zip(self.option_areas(area)).enumerate() {
            let state = if self.hovered == Some(index) {
                OptionState::Hovered
            } else {
                option.state()
            };
            option.render_as(state, row, buf);
        }
    }
}

impl Widget for &Dropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        self.render_button(layout.button, buf);
        if let Some(list) = layout.list {
            self.render_list(list, buf);
        }
    }
}

impl Widget for Dropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::event::tests::{click, hover};

    fn sorts() -> Dropdown<'static> {
        Dropdown::new("Newest", ["Newest", "Oldest", "Name"])
    }

    fn text(buf: &Buffer, y: u16, from: u16, to: u16) -> String {
        (from..to).map(|x| buf[(x, y)].symbol()).collect::<String>().trim().to_string()
    }

    #[test]
    fn test_closed_layout() {
        let layout = sorts().layout(Rect::new(0, 0, 40, 10));
        assert_eq!(layout.button, Rect::new(0, 0, 20, 3));
        assert_eq!(layout.list, None);
    }

    #[test]
    fn test_open_layout_clipped() {
        let dropdown = sorts().open(true);
        assert_eq!(
            dropdown.layout(Rect::new(0, 0, 40, 10)).list,
            Some(Rect::new(0, 3, 20, 5))
        );
        assert_eq!(
            dropdown.layout(Rect::new(0, 0, 40, 6)).list,
            Some(Rect::new(0, 3, 20, 3))
        );
        assert_eq!(dropdown.layout(Rect::new(0, 0, 40, 3)).list, None);
    }

    #[test]
    fn test_render_closed() {
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        sorts().render(area, &mut buf);

        assert_eq!(text(&buf, 1, 1, 16), "Newest");
        assert_eq!(buf[(17, 1)].symbol(), CHEVRON_CLOSED);
        assert_eq!(text(&buf, 4, 0, 20), "");
    }

    #[test]
    fn test_render_open_with_hover() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        sorts().open(true).hovered(Some(1)).render(area, &mut buf);

        assert_eq!(buf[(17, 1)].symbol(), CHEVRON_OPEN);
        assert_eq!(text(&buf, 4, 1, 19), "Newest");
        assert_eq!(text(&buf, 5, 1, 19), "Oldest");
        assert_eq!(text(&buf, 6, 1, 19), "Name");
        assert_eq!(buf[(2, 5)].bg, theme.primary());
        assert_eq!(buf[(2, 5)].fg, theme.on_primary());
        assert_eq!(buf[(2, 4)].bg, theme.base);
    }

    #[test]
    fn test_click_button_toggles() {
        let area = Rect::new(0, 0, 20, 8);
        assert_eq!(
            sorts().handle_mouse(area, click(3, 1)),
            EventResult::Event(DropdownEvent::Toggled)
        );
        assert_eq!(sorts().handle_mouse(area, click(3, 5)), EventResult::Ignored);
    }

    #[test]
    fn test_click_option_activates() {
        let cell = Cell::new(None);
        let picked = &cell;
        let options = ["Newest", "Oldest"]
            .into_iter()
            .enumerate()
            .map(|(i, label)| SelectListOption::new(label).on_activate(move |_| picked.set(Some(i))));
        let mut dropdown = Dropdown::new("Newest", options).open(true);
        let area = Rect::new(0, 0, 20, 8);

        assert_eq!(
            dropdown.handle_mouse(area, click(4, 5)),
            EventResult::Event(DropdownEvent::Activated(1))
        );
        assert_eq!(cell.get(), Some(1));
        assert_eq!(
            dropdown.handle_mouse(Rect::new(0, 0, 40, 8), click(30, 7)),
            EventResult::Event(DropdownEvent::Dismissed)
        );
    }

    #[test]
    fn test_hover_reports_changes_only() {
        let area = Rect::new(0, 0, 20, 8);
        let mut dropdown = sorts().open(true).hovered(Some(0));

        assert_eq!(dropdown.handle_mouse(area, hover(4, 4)), EventResult::Consumed);
        assert_eq!(
            dropdown.handle_mouse(area, hover(4, 6)),
            EventResult::Event(DropdownEvent::Hovered(Some(2)))
        );
        assert_eq!(
            dropdown.handle_mouse(area, hover(4, 1)),
            EventResult::Event(DropdownEvent::Hovered(None))
        );

        let mut closed = sorts();
        assert_eq!(closed.handle_mouse(area, hover(4, 4)), EventResult::Ignored);
    }
}
