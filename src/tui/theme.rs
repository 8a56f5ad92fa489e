//! Style configuration: one `(focused, neutral)` color pair per role.
//!
//! Focus only ever changes border color, but every role carries both colors
//! so a theme can tint pane text too. Resolved once per frame from
//! `App::active_pane` via [`Theme::style`].

use crate::core::config::ThemeConfig;
use log::warn;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Border,
    Heading,
    Cursor,
    Title,
    Category,
    Meta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleColors {
    pub focused: Color,
    pub neutral: Color,
}

impl RoleColors {
    const fn same(color: Color) -> Self {
        Self {
            focused: color,
            neutral: color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub border: RoleColors,
    pub heading: RoleColors,
    pub cursor: RoleColors,
    pub title: RoleColors,
    pub category: RoleColors,
    pub meta: RoleColors,
}

const PINK: Color = Color::Indexed(205);
const SLATE: Color = Color::Indexed(63);

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: RoleColors {
                focused: PINK,
                neutral: SLATE,
            },
            heading: RoleColors::same(PINK),
            cursor: RoleColors::same(PINK),
            title: RoleColors::same(Color::Indexed(86)),
            category: RoleColors::same(Color::Indexed(33)),
            meta: RoleColors::same(Color::Indexed(241)),
        }
    }
}

impl Theme {
    /// Overlay configured colors onto the default palette.
    ///
    /// `focused`/`neutral` set the border pair; every other key sets both
    /// halves of its role. Unparseable colors keep the default.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Theme::default();

        if let Some(color) = parse_color("focused", config.focused.as_deref()) {
            theme.border.focused = color;
        }
        if let Some(color) = parse_color("neutral", config.neutral.as_deref()) {
            theme.border.neutral = color;
        }

        let roles = [
            ("heading", &config.heading, &mut theme.heading),
            ("cursor", &config.cursor, &mut theme.cursor),
            ("title", &config.title, &mut theme.title),
            ("category", &config.category, &mut theme.category),
            ("meta", &config.meta, &mut theme.meta),
        ];
        for (key, value, slot) in roles {
            if let Some(color) = parse_color(key, value.as_deref()) {
                *slot = RoleColors::same(color);
            }
        }

        theme
    }

    fn colors(&self, role: Role) -> RoleColors {
        match role {
            Role::Border => self.border,
            Role::Heading => self.heading,
            Role::Cursor => self.cursor,
            Role::Title => self.title,
            Role::Category => self.category,
            Role::Meta => self.meta,
        }
    }

    pub fn style(&self, role: Role, focused: bool) -> Style {
        let colors = self.colors(role);
        let fg = if focused { colors.focused } else { colors.neutral };
        let style = Style::default().fg(fg);
        match role {
            Role::Heading | Role::Cursor | Role::Title => style.add_modifier(Modifier::BOLD),
            _ => style,
        }
    }
}

fn parse_color(key: &str, value: Option<&str>) -> Option<Color> {
    let value = value?;
    match Color::from_str(value) {
        Ok(color) => Some(color),
        Err(_) => {
            warn!("Ignoring invalid theme color {key} = '{value}'");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_depends_on_focus() {
        let theme = Theme::default();
        assert_eq!(theme.style(Role::Border, true).fg, Some(PINK));
        assert_eq!(theme.style(Role::Border, false).fg, Some(SLATE));
    }

    #[test]
    fn test_title_is_bold() {
        let style = Theme::default().style(Role::Title, false);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(style.fg, Some(Color::Indexed(86)));
    }

    #[test]
    fn test_from_config_overrides() {
        let config = ThemeConfig {
            focused: Some("magenta".to_string()),
            neutral: Some("#102030".to_string()),
            meta: Some("8".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.border.focused, Color::Magenta);
        assert_eq!(theme.border.neutral, Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(theme.meta, RoleColors::same(Color::Indexed(8)));
        assert_eq!(theme.title, Theme::default().title);
    }

    #[test]
    fn test_invalid_color_keeps_default() {
        let config = ThemeConfig {
            focused: Some("not-a-color".to_string()),
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&config), Theme::default());
    }
}
