//! Two fixed color profiles shared by the editor surface and the terminal.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Theme id registered with the editor engine.
    pub fn editor_theme_id(self) -> &'static str {
        match self {
            Self::Dark => "zbench-dark",
            Self::Light => "zbench-light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(v: u32) -> Self {
        Self((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeProfile {
    pub name: ThemeName,
    pub editor_bg: Rgb,
    pub editor_fg: Rgb,
    pub line_number_fg: Rgb,
    pub selection_bg: Rgb,
    pub cursor_fg: Rgb,
    pub accent_fg: Rgb,
    pub terminal_bg: Rgb,
    pub terminal_fg: Rgb,
}

pub const DARK: ThemeProfile = ThemeProfile {
    name: ThemeName::Dark,
    editor_bg: Rgb::hex(0x1e1e1e),
    editor_fg: Rgb::hex(0xd4d4d4),
    line_number_fg: Rgb::hex(0x858585),
    selection_bg: Rgb::hex(0x264f78),
    cursor_fg: Rgb::hex(0xaeafad),
    accent_fg: Rgb::hex(0x4fc1ff),
    terminal_bg: Rgb::hex(0x1e1e1e),
    terminal_fg: Rgb::hex(0xcccccc),
};

pub const LIGHT: ThemeProfile = ThemeProfile {
    name: ThemeName::Light,
    editor_bg: Rgb::hex(0xffffff),
    editor_fg: Rgb::hex(0x1f1f1f),
    line_number_fg: Rgb::hex(0x6e7681),
    selection_bg: Rgb::hex(0xadd6ff),
    cursor_fg: Rgb::hex(0x000000),
    accent_fg: Rgb::hex(0x005fb8),
    terminal_bg: Rgb::hex(0xffffff),
    terminal_fg: Rgb::hex(0x333333),
};

pub fn profile(name: ThemeName) -> &'static ThemeProfile {
    match name {
        ThemeName::Dark => &DARK,
        ThemeName::Light => &LIGHT,
    }
}

/// Engine-level theme definition, keyed by editor color token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorThemeDefinition {
    pub id: &'static str,
    pub base: &'static str,
    pub colors: Vec<(&'static str, Rgb)>,
}

impl EditorThemeDefinition {
    pub fn color(&self, token: &str) -> Option<Rgb> {
        self.colors
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, c)| *c)
    }
}

pub fn editor_theme(name: ThemeName) -> EditorThemeDefinition {
    let p = profile(name);
    EditorThemeDefinition {
        id: name.editor_theme_id(),
        base: match name {
            ThemeName::Dark => "vs-dark",
            ThemeName::Light => "vs",
        },
        colors: vec![
            ("editor.background", p.editor_bg),
            ("editor.foreground", p.editor_fg),
            ("editorLineNumber.foreground", p.line_number_fg),
            ("editor.selectionBackground", p.selection_bg),
            ("editorCursor.foreground", p.cursor_fg),
            ("focusBorder", p.accent_fg),
        ],
    }
}

pub fn all_editor_themes() -> [EditorThemeDefinition; 2] {
    [editor_theme(ThemeName::Dark), editor_theme(ThemeName::Light)]
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/theme.rs"]
mod tests;
