use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use picklist::config;
use picklist::theme::{ThemeInfo, available_themes};
use picklist::{
    Dropdown, DropdownEvent, EventResult, SelectList, SelectListOption, TagBar, TagButton, Theme,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::tui::{Event, Tui};

const FRAME_RATE: f64 = 30.0;
const LANGUAGES: [&str; 6] = ["Rust", "Go", "Kotlin", "TypeScript", "Java", "Zig"];
const SORT_ORDERS: [&str; 3] = ["Newest", "Oldest", "Name"];
const TAGS: [&str; 5] = ["backend", "frontend", "infra", "docs", "tests"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    ToggleLanguage(usize),
    ToggleSortMenu,
    CloseSortMenu,
    HoverSort(Option<usize>),
    PickSort(usize),
    ToggleTag(usize),
    CycleTheme,
    Suspend,
    Quit,
}

struct GalleryLayout {
    tags: Rect,
    languages: Rect,
    sort: Rect,
    help: Rect,
}

/// Owns every piece of state the widgets display.
pub struct App {
    themes: Vec<ThemeInfo>,
    theme_index: usize,
    selected_languages: Vec<bool>,
    sort_index: usize,
    sort_open: bool,
    sort_hovered: Option<usize>,
    focused_tags: Vec<bool>,
    area: Rect,
    should_quit: bool,
    should_suspend: bool,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(theme_name: &str) -> Self {
        let themes = available_themes();
        let theme_index = themes
            .iter()
            .position(|info| info.name == theme_name)
            .unwrap_or_else(|| {
                warn!(theme_name, "Unknown theme, using default");
                0
            });
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            themes,
            theme_index,
            selected_languages: vec![false; LANGUAGES.len()],
            sort_index: 0,
            sort_open: false,
            sort_hovered: None,
            focused_tags: vec![false; TAGS.len()],
            area: Rect::default(),
            should_quit: false,
            should_suspend: false,
            action_tx,
            action_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new(FRAME_RATE)?;
        tui.enter()?;

        loop {
            if let Some(event) = tui.next_event().await {
                self.handle_event(&mut tui, event)?;
            }
            self.handle_actions();
            if self.should_suspend {
                tui.suspend()?;
                self.should_suspend = false;
                tui.enter()?;
                tui.clear()?;
            } else if self.should_quit {
                break;
            }
        }

        tui.exit()
    }

    fn theme(&self) -> Theme {
        self.themes
            .get(self.theme_index)
            .map(|info| info.theme)
            .unwrap_or_default()
    }

    fn layout(area: Rect) -> GalleryLayout {
        let [body, help] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        let [tags, main] =
            Layout::vertical([Constraint::Length(TagButton::height()), Constraint::Fill(1)])
                .spacing(1)
                .areas(body);
        let [languages, sort] = Layout::horizontal([Constraint::Length(28), Constraint::Fill(1)])
            .spacing(2)
            .areas(main);
        GalleryLayout {
            tags,
            languages,
            sort,
            help,
        }
    }

    fn language_list(&self) -> SelectList<'static> {
        let theme = self.theme();
        let options = LANGUAGES
            .into_iter()
            .zip(self.selected_languages.iter().copied())
            .enumerate()
            .map(|(index, (label, is_selected))| {
                let action_tx = self.action_tx.clone();
                SelectListOption::new(label)
                    .selected(is_selected)
                    .on_activate(move |_| {
                        let _ = action_tx.send(Action::ToggleLanguage(index));
                    })
            });
        SelectList::new(options)
            .block(
                Block::bordered()
                    .title(" Languages ")
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(theme.border())),
            )
            .theme(theme)
    }

    fn sort_dropdown(&self) -> Dropdown<'static> {
        let options = SORT_ORDERS.into_iter().enumerate().map(|(index, label)| {
            let action_tx = self.action_tx.clone();
            SelectListOption::new(label).on_activate(move |_| {
                let _ = action_tx.send(Action::PickSort(index));
            })
        });
        Dropdown::new(SORT_ORDERS[self.sort_index], options)
            .open(self.sort_open)
            .hovered(self.sort_hovered)
            .theme(self.theme())
    }

    fn tag_bar(&self) -> TagBar<'static> {
        let tags = TAGS
            .into_iter()
            .zip(self.focused_tags.iter().copied())
            .enumerate()
            .map(|(index, (label, is_focused))| {
                let action_tx = self.action_tx.clone();
                TagButton::new(label)
                    .focused(is_focused)
                    .on_activate(move |_| {
                        let _ = action_tx.send(Action::ToggleTag(index));
                    })
            });
        TagBar::new(tags).theme(self.theme())
    }

    fn help_line(&self) -> Line<'static> {
        let theme = self.theme();
        let key = Style::default().fg(theme.primary()).add_modifier(Modifier::BOLD);
        let text = Style::default().fg(theme.option_fg());
        Line::from(vec![
            Span::styled(" q", key),
            Span::styled(" quit  ", text),
            Span::styled("t", key),
            Span::styled(" theme  ", text),
            Span::styled("click", key),
            Span::styled(" select  ", text),
            Span::styled(format!("[{}]", self.themes[self.theme_index].name), text),
        ])
    }

    fn handle_event(&mut self, tui: &mut Tui, event: Event) -> Result<()> {
        match event {
            Event::Quit => self.send(Action::Quit)?,
            Event::Render => self.render(tui)?,
            Event::Resize(width, height) => {
                tui.resize(Rect::new(0, 0, width, height))?;
                self.render(tui)?;
            }
            Event::Key(key) => self.handle_key(key)?,
            Event::Mouse(mouse) => self.handle_mouse(mouse)?,
            Event::Error(error) => warn!(%error, "Terminal event error"),
        }
        Ok(())
    }

    fn handle_key(&self, key: KeyEvent) -> Result<()> {
        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('t') => Action::CycleTheme,
            KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Suspend,
            _ => return Ok(()),
        };
        self.send(action)
    }

    fn send(&self, action: Action) -> Result<()> {
        self.action_tx.send(action)?;
        Ok(())
    }

    /// Route a pointer event. The dropdown goes first since its list floats
    /// over whatever sits below it.
    fn handle_mouse(&self, mouse: MouseEvent) -> Result<()> {
        let layout = Self::layout(self.area);

        match self.sort_dropdown().handle_mouse(layout.sort, mouse) {
            EventResult::Event(DropdownEvent::Toggled) => return self.send(Action::ToggleSortMenu),
            EventResult::Event(DropdownEvent::Hovered(index)) => return self.send(Action::HoverSort(index)),
            EventResult::Event(DropdownEvent::Activated(_)) | EventResult::Consumed => return Ok(()),
            EventResult::Event(DropdownEvent::Dismissed) => self.send(Action::CloseSortMenu)?,
            EventResult::Ignored => {}
        }

        if self.language_list().handle_mouse(layout.languages, mouse).is_consumed() {
            return Ok(());
        }
        let _ = self.tag_bar().handle_mouse(layout.tags, mouse);
        Ok(())
    }

    fn handle_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            debug!(?action, "Handling action");
            match action {
                Action::ToggleLanguage(index) => toggle(&mut self.selected_languages, index),
                Action::ToggleSortMenu => {
                    self.sort_open = !self.sort_open;
                    self.sort_hovered = None;
                }
                Action::CloseSortMenu => {
                    self.sort_open = false;
                    self.sort_hovered = None;
                }
                Action::HoverSort(index) => self.sort_hovered = index,
                Action::PickSort(index) => {
                    self.sort_index = index.min(SORT_ORDERS.len() - 1);
                    self.sort_open = false;
                    self.sort_hovered = None;
                }
                Action::ToggleTag(index) => toggle(&mut self.focused_tags, index),
                Action::CycleTheme => self.cycle_theme(),
                Action::Suspend => self.should_suspend = true,
                Action::Quit => self.should_quit = true,
            }
        }
    }

    fn cycle_theme(&mut self) {
        self.theme_index = (self.theme_index + 1) % self.themes.len();
        let name = self.themes[self.theme_index].name;
        info!(theme = name, "Switched theme");
        if let Err(error) = config::save_theme(name) {
            warn!(%error, "Failed to save theme");
        }
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        tui.draw(|frame| {
            self.area = frame.area();
            let layout = Self::layout(self.area);
            frame.render_widget(Block::default().style(self.theme().container()), self.area);
            frame.render_widget(self.tag_bar(), layout.tags);
            frame.render_widget(self.language_list(), layout.languages);
            frame.render_widget(self.help_line(), layout.help);
            frame.render_widget(self.sort_dropdown(), layout.sort);
        })?;
        Ok(())
    }
}

fn toggle(flags: &mut [bool], index: usize) {
    if let Some(flag) = flags.get_mut(index) {
        *flag = !*flag;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{MouseButton, MouseEventKind};

    use super::*;

    fn click(rect: Rect) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app() -> App {
        let mut app = App::new("Catppuccin Mocha");
        app.area = Rect::new(0, 0, 80, 24);
        app
    }

    #[test]
    fn test_unknown_theme_uses_first() {
        let app = App::new("nope");
        assert_eq!(app.theme_index, 0);
    }

    #[test]
    fn test_click_toggles_languages_independently() {
        let mut app = app();
        let layout = App::layout(app.area);
        let rows = app.language_list().option_areas(layout.languages);

        app.handle_mouse(click(rows[1])).unwrap();
        app.handle_mouse(click(rows[3])).unwrap();
        app.handle_actions();
        assert_eq!(app.selected_languages, vec![false, true, false, true, false, false]);

        app.handle_mouse(click(rows[1])).unwrap();
        app.handle_actions();
        assert_eq!(app.selected_languages, vec![false, false, false, true, false, false]);
    }

    #[test]
    fn test_dropdown_open_and_pick() {
        let mut app = app();
        let layout = App::layout(app.area);

        let button = app.sort_dropdown().layout(layout.sort).button;
        app.handle_mouse(click(Rect { y: button.y + 1, ..button })).unwrap();
        app.handle_actions();
        assert!(app.sort_open);

        let list = app.sort_dropdown().layout(layout.sort).list.unwrap();
        app.handle_mouse(click(Rect { y: list.y + 3, ..list })).unwrap();
        app.handle_actions();
        assert!(!app.sort_open);
        assert_eq!(app.sort_index, 2);
    }

    #[test]
    fn test_click_outside_closes_dropdown() {
        let mut app = app();
        app.sort_open = true;
        let layout = App::layout(app.area);
        let rows = app.language_list().option_areas(layout.languages);

        app.handle_mouse(click(rows[0])).unwrap();
        app.handle_actions();
        assert!(!app.sort_open);
        assert!(app.selected_languages[0]);
    }

    #[test]
    fn test_click_focuses_tag() {
        let mut app = app();
        let layout = App::layout(app.area);
        let areas = app.tag_bar().tag_areas(layout.tags);

        app.handle_mouse(click(Rect { y: areas[2].y + 1, ..areas[2] })).unwrap();
        app.handle_actions();
        assert_eq!(app.focused_tags, vec![false, false, true, false, false]);
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)).unwrap();
        app.handle_actions();
        assert!(app.should_quit);
    }
}
