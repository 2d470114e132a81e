use ratatui::{prelude::*, widgets::*};

use super::widgets;
use super::centered_fixed;
use crate::app::screens::{OtpControl, OtpScreen};
use crate::constants::OTP_LENGTH;
use crate::theme::Palette;

const SLOT_WIDTH: u16 = 5;
const SLOT_GAP: u16 = 2;

pub fn draw(f: &mut Frame, area: Rect, s: &OtpScreen, palette: &Palette) {
    let card = centered_fixed(48, 17, area);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.input_border))
            .style(palette.card_style()),
        card,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(2), // subtitle
            Constraint::Length(3), // slots
            Constraint::Length(1),
            Constraint::Length(1), // message
            Constraint::Length(1), // verify
            Constraint::Length(1),
            Constraint::Length(1), // resend
            Constraint::Min(0),
        ])
        .split(card);

    f.render_widget(
        Paragraph::new("OTP Verification").style(palette.title_style()).alignment(Alignment::Center),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(format!("Verify your account\nEnter the {}-digit code sent to your email", OTP_LENGTH))
            .style(palette.muted_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    draw_slots(f, rows[2], s, palette);

    f.render_widget(Paragraph::new(widgets::message_line(s.message.as_ref(), palette)), rows[4]);
    f.render_widget(
        widgets::button("Verify", false, s.focus == OtpControl::Verify, palette),
        rows[5],
    );

    let mut resend = vec![Span::styled("Didn't receive code? ", palette.muted_style())];
    if s.is_loading {
        resend.push(Span::styled("Sending...", palette.muted_style()));
    } else {
        resend.extend(widgets::link("Resend", s.focus == OtpControl::Resend, palette));
    }
    f.render_widget(Paragraph::new(Line::from(resend)).alignment(Alignment::Center), rows[7]);
}

fn draw_slots(f: &mut Frame, area: Rect, s: &OtpScreen, palette: &Palette) {
    let total = SLOT_WIDTH * OTP_LENGTH as u16 + SLOT_GAP * (OTP_LENGTH as u16 - 1);
    let row = centered_fixed(total, 3, area);
    let editing = s.focus == OtpControl::Code;

    for index in 0..OTP_LENGTH {
        let x = row.x + index as u16 * (SLOT_WIDTH + SLOT_GAP);
        let slot = Rect::new(x, row.y, SLOT_WIDTH, 3).intersection(area);
        let focused = editing && s.input.focus() == index;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if focused { BorderType::Thick } else { BorderType::Rounded })
            .border_style(palette.border_style(focused));
        let digit = s.input.slot(index).map(String::from).unwrap_or_default();
        f.render_widget(
            Paragraph::new(digit)
                .style(palette.title_style())
                .alignment(Alignment::Center)
                .block(block),
            slot,
        );

        if focused {
            f.set_cursor_position(Position::new(slot.x + SLOT_WIDTH / 2, slot.y + 1));
        }
    }
}
