use catppuccin::PALETTE;
use ratatui::style::{Color, Style};
use ratatui::widgets::BorderType;

/// Convert a catppuccin color to a ratatui color.
const fn catppuccin_to_color(c: &catppuccin::Color) -> Color {
    Color::Rgb(c.rgb.r, c.rgb.g, c.rgb.b)
}

/// Design tokens consumed by the widgets.
///
/// The widgets never pick colors on their own; every color they paint comes
/// from one of the semantic accessors below. Build one from a palette with
/// the factory functions like `catppuccin_mocha()`, or set the fields
/// directly for a custom look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Base colors
    pub base: Color,
    pub mantle: Color,

    // Surface colors
    pub surface0: Color,
    pub surface1: Color,
    pub surface2: Color,

    pub overlay0: Color,

    // Text colors
    pub text: Color,
    pub subtext0: Color,

    // Accent colors
    pub blue: Color,
    pub sapphire: Color,
    pub lavender: Color,

    pub border_type: BorderType,
}

impl Theme {
    /// Create a theme from a Catppuccin flavor.
    const fn from_catppuccin(flavor: &catppuccin::Flavor) -> Self {
        let c = &flavor.colors;
        Self {
            base: catppuccin_to_color(&c.base),
            mantle: catppuccin_to_color(&c.mantle),
            surface0: catppuccin_to_color(&c.surface0),
            surface1: catppuccin_to_color(&c.surface1),
            surface2: catppuccin_to_color(&c.surface2),
            overlay0: catppuccin_to_color(&c.overlay0),
            text: catppuccin_to_color(&c.text),
            subtext0: catppuccin_to_color(&c.subtext0),
            blue: catppuccin_to_color(&c.blue),
            sapphire: catppuccin_to_color(&c.sapphire),
            lavender: catppuccin_to_color(&c.lavender),
            border_type: BorderType::Rounded,
        }
    }

    /// Catppuccin Mocha theme (dark).
    #[must_use]
    pub fn catppuccin_mocha() -> Self {
        Self::from_catppuccin(&PALETTE.mocha)
    }

    /// Catppuccin Latte theme (light).
    #[must_use]
    pub fn catppuccin_latte() -> Self {
        Self::from_catppuccin(&PALETTE.latte)
    }

    /// Catppuccin Frappé theme (dark).
    #[must_use]
    pub fn catppuccin_frappe() -> Self {
        Self::from_catppuccin(&PALETTE.frappe)
    }

    /// Catppuccin Macchiato theme (dark).
    #[must_use]
    pub fn catppuccin_macchiato() -> Self {
        Self::from_catppuccin(&PALETTE.macchiato)
    }

    // Containers

    /// Background and text of every widget container.
    #[must_use]
    pub fn container(&self) -> Style {
        Style::default().bg(self.base).fg(self.text)
    }

    #[must_use]
    pub const fn border(&self) -> Color {
        self.overlay0
    }

    // Options

    #[must_use]
    pub const fn option_fg(&self) -> Color {
        self.subtext0
    }

    #[must_use]
    pub const fn option_selected_fg(&self) -> Color {
        self.text
    }

    #[must_use]
    pub const fn option_selected_bg(&self) -> Color {
        self.surface0
    }

    /// Accent used behind hovered options and focused tags.
    #[must_use]
    pub const fn primary(&self) -> Color {
        self.blue
    }

    #[must_use]
    pub const fn primary_strong(&self) -> Color {
        self.lavender
    }

    /// Text drawn on top of [`Theme::primary`].
    #[must_use]
    pub const fn on_primary(&self) -> Color {
        self.base
    }

    // Tags

    #[must_use]
    pub const fn tag_bg(&self) -> Color {
        self.mantle
    }

    #[must_use]
    pub const fn tag_border(&self) -> Color {
        self.surface2
    }

    #[must_use]
    pub const fn chevron(&self) -> Color {
        self.sapphire
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}

/// Information about a theme for display in selectors.
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Display name for the theme
    pub name: &'static str,
    /// The theme instance
    pub theme: Theme,
}

impl ThemeInfo {
    const fn new(name: &'static str, theme: Theme) -> Self {
        Self { name, theme }
    }
}

impl std::fmt::Display for ThemeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Returns a list of all available built-in themes.
#[must_use]
pub fn available_themes() -> Vec<ThemeInfo> {
    vec![
        ThemeInfo::new("Catppuccin Mocha", Theme::catppuccin_mocha()),
        ThemeInfo::new("Catppuccin Macchiato", Theme::catppuccin_macchiato()),
        ThemeInfo::new("Catppuccin Frappé", Theme::catppuccin_frappe()),
        ThemeInfo::new("Catppuccin Latte", Theme::catppuccin_latte()),
    ]
}

/// Look up a theme by name. Returns the default theme if not found.
#[must_use]
pub fn theme_from_name(name: &str) -> Theme {
    available_themes()
        .into_iter()
        .find(|t| t.name == name)
        .map(|t| t.theme)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_lookup() {
        assert_eq!(theme_from_name("Catppuccin Latte"), Theme::catppuccin_latte());
        assert_eq!(theme_from_name("Catppuccin Frappé"), Theme::catppuccin_frappe());
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        assert_eq!(theme_from_name("Solarized"), Theme::default());
        assert_eq!(theme_from_name(""), Theme::catppuccin_mocha());
    }

    #[test]
    fn test_selected_tokens_differ_from_plain() {
        for info in available_themes() {
            let theme = info.theme;
            assert_ne!(theme.option_fg(), theme.option_selected_fg(), "{info}");
            assert_ne!(theme.container().bg, Some(theme.option_selected_bg()), "{info}");
        }
    }
}
