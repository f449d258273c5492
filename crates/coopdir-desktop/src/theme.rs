//! Colors used by the desktop app

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub label: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub link: &'static str,
}

pub const PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    text_primary: "#1a1a1a",
    text_muted: "#5f6368",
    label: "#124E54",
    border: "#dadce0",
    border_light: "#e8eaed",
    accent: "#2295A2",
    accent_text: "#F6FBFB",
    link: "royalblue",
};
