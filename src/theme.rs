//! Colour palettes shared by every screen.
//!
//! Screens hold only a [`Theme`] value; the concrete colours always come
//! from [`palette_for`].

use ratatui::style::{Color, Modifier, Style};

use crate::models::{SocialProvider, Theme};

/// Colours used to draw one screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub card_background: Color,
    /// Buttons and links
    pub primary_accent: Color,
    /// Header band behind the illustration
    pub secondary_accent: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub input_border: Color,
    pub placeholder: Color,
    pub button_text: Color,
    pub error_text: Color,
    pub success_text: Color,
    pub logo: Color,
}

const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

const LIGHT: Palette = Palette {
    background: hex(0xF0F2F5),
    card_background: hex(0xFFFFFF),
    primary_accent: hex(0x2A47F9),
    secondary_accent: hex(0x1A32D6),
    text_primary: hex(0x1E1E1E),
    text_secondary: hex(0x6A6A6A),
    input_border: hex(0xE0E0E0),
    placeholder: hex(0x999999),
    button_text: hex(0xFFFFFF),
    error_text: hex(0xDC3545),
    success_text: hex(0x28A745),
    logo: hex(0xFFFFFF),
};

const DARK: Palette = Palette {
    background: hex(0x121212),
    card_background: hex(0x1E1E1E),
    primary_accent: hex(0x7CA8FF),
    secondary_accent: hex(0x1A32D6),
    text_primary: hex(0xFFFFFF),
    text_secondary: hex(0xBBBBBB),
    input_border: hex(0x333333),
    placeholder: hex(0xAAAAAA),
    button_text: hex(0x121212),
    error_text: hex(0xCF6679),
    success_text: hex(0x03DAC5),
    logo: hex(0xFFFFFF),
};

/// The OTP screen has a single fixed purple scheme and no theme toggle.
pub const OTP_PALETTE: Palette = Palette {
    background: hex(0x5D3FD3),
    card_background: hex(0x7F52FF),
    primary_accent: hex(0xFFFFFF),
    secondary_accent: hex(0x5D3FD3),
    text_primary: hex(0xFFFFFF),
    text_secondary: hex(0xCCCCCC),
    input_border: hex(0xB9A5FF),
    placeholder: hex(0xCCCCCC),
    button_text: hex(0x5D3FD3),
    error_text: hex(0xFFB4C0),
    success_text: hex(0xB9F6CA),
    logo: hex(0xFFFFFF),
};

pub fn palette_for(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

pub fn brand_color(provider: SocialProvider) -> Color {
    match provider {
        SocialProvider::GitHub => hex(0x181717),
        SocialProvider::Google => hex(0xDB4437),
        SocialProvider::Facebook => hex(0x4267B2),
    }
}

impl Palette {
    pub fn card_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.card_background)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.primary_accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary_accent)
        } else {
            Style::default().fg(self.input_border)
        }
    }

    pub fn button_style(&self, focused: bool, disabled: bool) -> Style {
        let style = Style::default()
            .fg(self.button_text)
            .bg(self.primary_accent)
            .add_modifier(Modifier::BOLD);
        if disabled {
            style.add_modifier(Modifier::DIM)
        } else if focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    pub fn message_style(&self, success: bool) -> Style {
        Style::default().fg(if success {
            self.success_text
        } else {
            self.error_text
        })
    }
}
