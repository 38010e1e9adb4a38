//! Enumerated visual states.
//!
//! Widgets never branch on loose booleans when styling. They resolve their
//! props into one of these states first and ask the state for its style,
//! so every visual variant is listed in exactly one place.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::BorderType;

use crate::Theme;

/// Visual state of a single option row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionState {
    #[default]
    Normal,
    Selected,
    /// Pointer is over the option. Only dropdown lists track this.
    Hovered,
}

impl OptionState {
    /// Hover wins over selection, the way a pointer highlight does.
    #[must_use]
    pub const fn from_flags(is_selected: bool, is_hovered: bool) -> Self {
        match (is_selected, is_hovered) {
            (_, true) => Self::Hovered,
            (true, false) => Self::Selected,
            (false, false) => Self::Normal,
        }
    }

    #[must_use]
    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Selected)
    }

    #[must_use]
    pub fn style(self, theme: &Theme) -> Style {
        match self {
            Self::Normal => Style::default().bg(theme.base).fg(theme.option_fg()),
            Self::Selected => Style::default()
                .bg(theme.option_selected_bg())
                .fg(theme.option_selected_fg())
                .add_modifier(Modifier::BOLD),
            Self::Hovered => Style::default().bg(theme.primary()).fg(theme.on_primary()),
        }
    }
}

/// Visual state of a tag button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagState {
    #[default]
    Idle,
    Focused,
}

impl TagState {
    #[must_use]
    pub const fn from_focus(is_focused: bool) -> Self {
        if is_focused { Self::Focused } else { Self::Idle }
    }

    #[must_use]
    pub fn style(self, theme: &Theme) -> Style {
        match self {
            Self::Idle => Style::default().bg(theme.tag_bg()).fg(theme.text),
            Self::Focused => Style::default()
                .bg(theme.primary())
                .fg(theme.on_primary())
                .add_modifier(Modifier::BOLD),
        }
    }

    #[must_use]
    pub fn border_style(self, theme: &Theme) -> Style {
        match self {
            Self::Idle => Style::default().fg(theme.tag_border()),
            Self::Focused => Style::default().fg(theme.primary_strong()),
        }
    }

    /// Focused tags get the heavier outline.
    #[must_use]
    pub const fn border_type(self, theme: &Theme) -> BorderType {
        match self {
            Self::Idle => theme.border_type,
            Self::Focused => BorderType::Thick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_state_from_flags() {
        assert_eq!(OptionState::from_flags(false, false), OptionState::Normal);
        assert_eq!(OptionState::from_flags(true, false), OptionState::Selected);
        assert_eq!(OptionState::from_flags(false, true), OptionState::Hovered);
        assert_eq!(OptionState::from_flags(true, true), OptionState::Hovered);
    }

    #[test]
    fn test_selected_style_is_distinct() {
        let theme = Theme::default();
        let normal = OptionState::Normal.style(&theme);
        let selected = OptionState::Selected.style(&theme);

        assert_ne!(normal, selected);
        assert!(selected.add_modifier.contains(Modifier::BOLD));
        assert!(!normal.add_modifier.contains(Modifier::BOLD));
        assert_eq!(selected.bg, Some(theme.option_selected_bg()));
    }

    #[test]
    fn test_tag_state() {
        let theme = Theme::default();
        assert_eq!(TagState::from_focus(true), TagState::Focused);
        assert_eq!(TagState::from_focus(false), TagState::Idle);
        assert_eq!(TagState::Focused.border_type(&theme), BorderType::Thick);
        assert_eq!(TagState::Idle.border_type(&theme), BorderType::Rounded);
        assert_eq!(TagState::Focused.style(&theme).bg, Some(theme.primary()));
    }
}
