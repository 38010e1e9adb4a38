//! Pill-shaped tag buttons.

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
use crate::style::TagState;

const TAG_HEIGHT: u16 = 3;
/// Border plus one column of padding on each side.
const TAG_CHROME: u16 = 4;
const DEFAULT_SPACING: u16 = 1;

pub struct TagButton<'a> {
    content: Line<'a>,
    is_focused: bool,
    on_activate: Option<OnActivate<'a>>,
    theme: Theme,
}

impl<'a> TagButton<'a> {
    pub fn new(content: impl Into<Line<'a>>) -> Self {
        Self {
            content: content.into(),
            is_focused: false,
            on_activate: None,
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn focused(mut self, is_focused: bool) -> Self {
        self.is_focused = is_focused;
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
    pub const fn is_focused(&self) -> bool {
        self.is_focused
    }

    #[must_use]
    pub const fn state(&self) -> TagState {
        TagState::from_focus(self.is_focused)
    }

    /// Columns needed to show the whole tag.
    #[must_use]
    pub fn width(&self) -> u16 {
        u16::try_from(self.content.width())
            .unwrap_or(u16::MAX)
            .saturating_add(TAG_CHROME)
    }

    #[must_use]
    pub const fn height() -> u16 {
        TAG_HEIGHT
    }

    pub fn activate(&mut self, event: MouseEvent) {
        trace!(content = %self.content, "tag activated");
        if let Some(callback) = self.on_activate.as_mut() {
            callback(event);
        }
    }

    pub fn handle_mouse(&mut self, area: Rect, event: MouseEvent) -> EventResult<()> {
        if event::is_left_press(&event) && area.contains(event::position(&event)) {
            self.activate(event);
            EventResult::Event(())
        } else {
            EventResult::Ignored
        }
    }
}

impl<'a> From<&'a str> for TagButton<'a> {
    fn from(content: &'a str) -> Self {
        Self::new(content)
    }
}

impl From<String> for TagButton<'_> {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl<'a> From<Span<'a>> for TagButton<'a> {
    fn from(content: Span<'a>) -> Self {
        Self::new(content)
    }
}

impl fmt::Debug for TagButton<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagButton")
            .field("content", &self.content)
            .field("is_focused", &self.is_focused)
            .field("on_activate", &self.on_activate.is_some())
            .finish_non_exhaustive()
    }
}

impl Widget for &TagButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state();
        let block = Block::bordered()
            .border_type(state.border_type(&self.theme))
            .border_style(state.border_style(&self.theme))
            .style(state.style(&self.theme));
        let inner = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);
        (&self.content).render(inner, buf);
    }
}

impl Widget for TagButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

/// A row of tags laid out left to right.
#[derive(Debug)]
pub struct TagBar<'a> {
    tags: Vec<TagButton<'a>>,
    spacing: u16,
}

impl<'a> TagBar<'a> {
    pub fn new<T>(tags: T) -> Self
    where
        T: IntoIterator,
        T::Item: Into<TagButton<'a>>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            spacing: DEFAULT_SPACING,
        }
    }

    #[must_use]
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.tags = self.tags.into_iter().map(|tag| tag.theme(theme)).collect();
        self
    }

    #[must_use]
    pub fn tags(&self) -> &[TagButton<'a>] {
        &self.tags
    }

    /// Where each tag lands. Tags starting past the right edge are dropped,
    /// the last visible one may be cut short.
    #[must_use]
    pub fn tag_areas(&self, area: Rect) -> Vec<Rect> {
        let mut areas = Vec::with_capacity(self.tags.len());
        let mut x = area.x;
        for tag in &self.tags {
            if x >= area.right() {
                break;
            }
            areas.push(Rect::new(
                x,
                area.y,
                tag.width().min(area.right() - x),
                TAG_HEIGHT.min(area.height),
            ));
            x = x.saturating_add(tag.width()).saturating_add(self.spacing);
        }
        areas
    }

    pub fn handle_mouse(&mut self, area: Rect, event: MouseEvent) -> EventResult<usize> {
        if !event::is_left_press(&event) {
            return EventResult::Ignored;
        }
        match event::hit(&self.tag_areas(area), &event) {
            Some(index) => {
                self.tags[index].activate(event);
                EventResult::Event(index)
            }
            None => EventResult::Ignored,
        }
    }
}

impl Widget for &TagBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (tag, tag_area) in self.tags.iter().zip(self.tag_areas(area)) {
            tag.render(tag_area, buf);
        }
    }
}

impl Widget for TagBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use ratatui::style::Modifier;

    use super::*;
    use crate::event::tests::{click, hover};

    #[test]
    fn test_width_includes_chrome() {
        assert_eq!(TagButton::new("rust").width(), 8);
        assert_eq!(TagButton::new("").width(), 4);
    }

    #[test]
    fn test_focused_tag_style() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 8, 3);

        let mut buf = Buffer::empty(area);
        TagButton::new("rust").focused(true).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "┏");
        assert_eq!(buf[(0, 0)].fg, theme.primary_strong());
        assert_eq!(buf[(2, 1)].symbol(), "r");
        assert_eq!(buf[(2, 1)].bg, theme.primary());
        assert!(buf[(2, 1)].modifier.contains(Modifier::BOLD));

        let mut buf = Buffer::empty(area);
        TagButton::new("rust").render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "╭");
        assert_eq!(buf[(0, 0)].fg, theme.tag_border());
        assert_eq!(buf[(2, 1)].bg, theme.tag_bg());
        assert!(!buf[(2, 1)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_tag_click_forwards_event() {
        let seen = Cell::new(None);
        let mut tag = TagButton::new("go").on_activate(|event| seen.set(Some(event)));
        let area = Rect::new(5, 5, 6, 3);

        assert_eq!(tag.handle_mouse(area, hover(6, 6)), EventResult::Ignored);
        assert_eq!(seen.get(), None);

        let event = click(6, 6);
        assert_eq!(tag.handle_mouse(area, event), EventResult::Event(()));
        assert_eq!(seen.get(), Some(event));
    }

    #[test]
    fn test_tag_areas() {
        let bar = TagBar::new(["ab", "cdef", "g"]);
        let areas = bar.tag_areas(Rect::new(0, 0, 30, 3));
        assert_eq!(
            areas,
            vec![
                Rect::new(0, 0, 6, 3),
                Rect::new(7, 0, 8, 3),
                Rect::new(16, 0, 5, 3),
            ]
        );

        let clipped = bar.tag_areas(Rect::new(0, 0, 10, 3));
        assert_eq!(clipped, vec![Rect::new(0, 0, 6, 3), Rect::new(7, 0, 3, 3)]);
    }

    #[test]
    fn test_bar_click_hits_tag() {
        let hits = Cell::new(0);
        let mut bar = TagBar::new([
            TagButton::new("ab"),
            TagButton::new("cd").on_activate(|_| hits.set(hits.get() + 1)),
        ]);
        let area = Rect::new(0, 0, 30, 3);

        assert_eq!(bar.handle_mouse(area, click(8, 1)), EventResult::Event(1));
        assert_eq!(bar.handle_mouse(area, click(6, 1)), EventResult::Ignored);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_bar_renders_in_order() {
        let bar = TagBar::new(["x", "y"]).spacing(0);
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        assert_eq!(buf[(2, 1)].symbol(), "x");
        assert_eq!(buf[(7, 1)].symbol(), "y");
    }
}
