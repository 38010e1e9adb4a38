use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Result of offering a pointer event to a widget.
///
/// - `Ignored` - The event did not land on the widget
/// - `Consumed` - The widget swallowed the event but nothing was activated
/// - `Event(E)` - The event activated something inside the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult<E> {
    /// Event was not handled, parent should process it.
    Ignored,
    /// Event was consumed but produced no output.
    Consumed,
    /// Event was consumed and produced an output.
    Event(E),
}

impl<E> EventResult<E> {
    /// Returns true if the event was consumed (either with or without an output).
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub fn map<F, T>(self, f: F) -> EventResult<T>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ignored => EventResult::Ignored,
            Self::Consumed => EventResult::Consumed,
            Self::Event(event) => EventResult::Event(f(event)),
        }
    }

    pub fn into_event(self) -> Option<E> {
        match self {
            Self::Event(event) => Some(event),
            Self::Ignored | Self::Consumed => None,
        }
    }
}

impl<E> From<E> for EventResult<E> {
    fn from(event: E) -> Self {
        Self::Event(event)
    }
}

/// A left-button press, the only pointer gesture that activates anything.
pub(crate) const fn is_left_press(event: &MouseEvent) -> bool {
    matches!(event.kind, MouseEventKind::Down(MouseButton::Left))
}

pub(crate) const fn position(event: &MouseEvent) -> Position {
    Position::new(event.column, event.row)
}

/// Index of the first area containing the pointer.
pub(crate) fn hit(areas: &[Rect], event: &MouseEvent) -> Option<usize> {
    let position = position(event);
    areas.iter().position(|area| area.contains(position))
}

#[cfg(test)]
pub(crate) mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    pub fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn hover(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_event_result_consumed() {
        assert!(!EventResult::<()>::Ignored.is_consumed());
        assert!(EventResult::<()>::Consumed.is_consumed());
        assert!(EventResult::from(3).is_consumed());
    }

    #[test]
    fn test_event_result_map() {
        assert_eq!(EventResult::Event(2).map(|n| n * 2), EventResult::Event(4));
        assert_eq!(EventResult::<i32>::Consumed.map(|n| n * 2), EventResult::Consumed);
        assert_eq!(EventResult::Event("a").into_event(), Some("a"));
        assert_eq!(EventResult::<&str>::Ignored.into_event(), None);
    }

    #[test]
    fn test_hit() {
        let areas = [Rect::new(0, 0, 4, 1), Rect::new(0, 1, 4, 1)];
        assert_eq!(hit(&areas, &click(2, 1)), Some(1));
        assert_eq!(hit(&areas, &click(5, 0)), None);
        assert!(is_left_press(&click(0, 0)));
        assert!(!is_left_press(&hover(0, 0)));
    }
}
