//! Form widgets shared by the screens

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthChar;

use crate::app::text_field::TextField;
use crate::icons::{Icon, Icons};
use crate::models::{ApiMessage, SocialProvider};
use crate::theme::{brand_color, Palette};

const MASK: char = '•';

/// A bordered single-line text input
pub struct Input<'a> {
    pub icon: Icon,
    pub placeholder: &'a str,
    pub field: &'a TextField,
    pub secret: bool,
    pub focused: bool,
    pub disabled: bool,
}

impl Input<'_> {
    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette, icons: &Icons) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border_style(self.focused));

        let prefix = Span::styled(format!(" {} ", icons.glyph(self.icon)), palette.muted_style());
        let prefix_width = prefix.width();
        let text_width = usize::from(area.width.saturating_sub(2)).saturating_sub(prefix_width);

        let shown = if self.secret {
            self.field.masked(MASK)
        } else {
            self.field.value().to_string()
        };
        let (visible, cursor_col) = scroll_to_cursor(&shown, self.field.cursor_index(), text_width);

        let body = if self.field.is_empty() {
            Span::styled(self.placeholder.to_string(), Style::default().fg(palette.placeholder))
        } else {
            Span::styled(visible.to_string(), Style::default().fg(palette.text_primary))
        };

        let mut style = palette.card_style();
        if self.disabled {
            style = style.add_modifier(Modifier::DIM);
        }
        f.render_widget(
            Paragraph::new(Line::from(vec![prefix, body])).style(style).block(block),
            area,
        );

        if self.focused && !self.disabled && text_width > 0 {
            let max_x = area.x.saturating_add(area.width.saturating_sub(2));
            let offset = u16::try_from(prefix_width + cursor_col).unwrap_or(u16::MAX);
            let cursor_x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, area.y.saturating_add(1)));
        }
    }
}

/// The tail of `text` that keeps the cursor (before char `cursor`) inside
/// `width` cells, plus the cursor's cell offset within it
fn scroll_to_cursor(text: &str, cursor: usize, width: usize) -> (&str, usize) {
    let before: usize = text.chars().take(cursor).map(|c| c.width().unwrap_or(0)).sum();
    let need = (before + 1).saturating_sub(width);

    let mut skipped = 0;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if skipped >= need {
            start = i;
            break;
        }
        skipped += c.width().unwrap_or(0);
        start = i + c.len_utf8();
    }
    (&text[start..], before.saturating_sub(skipped))
}

/// Rows needed for a header of `lines` illustration lines plus the title
pub fn header_height(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

/// Marker drawn before the focused control
pub fn focus_marker(focused: bool) -> &'static str {
    if focused {
        "▸ "
    } else {
        "  "
    }
}

pub fn button(label: &str, loading: bool, focused: bool, palette: &Palette) -> Paragraph<'static> {
    let text = if loading {
        " ... ".to_string()
    } else {
        format!(" {} ", label)
    };
    Paragraph::new(Line::from(text))
        .alignment(Alignment::Center)
        .style(palette.button_style(focused, loading))
}

pub fn checkbox<'a>(
    label: &'a str,
    checked: bool,
    focused: bool,
    palette: &Palette,
    icons: &Icons,
) -> Vec<Span<'a>> {
    let style = if focused {
        palette.link_style()
    } else {
        palette.muted_style()
    };
    vec![
        Span::styled(focus_marker(focused), style),
        Span::styled(format!("{} ", icons.glyph(Icon::checkbox(checked))), style),
        Span::styled(label, style),
    ]
}

/// A visibility toggle rendered next to a password field
pub fn visibility_toggle(visible: bool, focused: bool, palette: &Palette, icons: &Icons) -> Vec<Span<'static>> {
    let style = if focused {
        palette.link_style()
    } else {
        palette.muted_style()
    };
    let label = if visible { "Hide" } else { "Show" };
    vec![
        Span::styled(focus_marker(focused), style),
        Span::styled(format!("{} {}", icons.glyph(Icon::visibility(visible)), label), style),
    ]
}

pub fn link<'a>(label: &'a str, focused: bool, palette: &Palette) -> Vec<Span<'a>> {
    let mut style = palette.link_style();
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    vec![Span::styled(focus_marker(focused), style), Span::styled(label, style)]
}

/// The outcome of the last call, or an empty line
pub fn message_line<'a>(message: Option<&'a ApiMessage>, palette: &Palette) -> Line<'a> {
    match message {
        Some(message) => Line::from(Span::styled(
            message.text.as_str(),
            palette.message_style(message.is_success()),
        ))
        .alignment(Alignment::Center),
        None => Line::default(),
    }
}

/// The three social buttons in one centred row
pub fn social_row(
    focused: Option<SocialProvider>,
    disabled: bool,
    palette: &Palette,
    icons: &Icons,
) -> Line<'static> {
    let mut spans = Vec::new();
    for provider in SocialProvider::ALL {
        let mut style = Style::default()
            .fg(brand_color(provider))
            .bg(palette.card_background)
            .add_modifier(Modifier::BOLD);
        if disabled {
            style = style.add_modifier(Modifier::DIM);
        } else if focused == Some(provider) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(
            format!(" {} {} ", icons.glyph(Icon::Brand(provider)), provider),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    spans.pop();
    Line::from(spans).alignment(Alignment::Center)
}

/// Theme switch in the top-right corner
pub fn theme_toggle(theme: crate::models::Theme, focused: bool, palette: &Palette, icons: &Icons) -> Line<'static> {
    let mut style = Style::default().fg(palette.logo).add_modifier(Modifier::BOLD);
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Line::from(Span::styled(
        format!(" {} ", icons.glyph(Icon::theme_toggle(theme))),
        style,
    ))
    .alignment(Alignment::Right)
}

/// Illustration lines over the accent band
pub fn header<'a>(title: &'a str, art: &'a [String], palette: &Palette) -> Paragraph<'a> {
    let mut lines: Vec<Line> = art
        .iter()
        .map(|l| Line::from(Span::styled(l.as_str(), Style::default().fg(palette.logo))))
        .collect();
    lines.push(Line::from(Span::styled(
        title,
        Style::default().fg(palette.logo).add_modifier(Modifier::BOLD),
    )));
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(palette.secondary_accent))
}
