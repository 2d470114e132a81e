use ratatui::{prelude::*, widgets::*};

use super::widgets::{self, Input};
use super::{centered_fixed, Resources};
use crate::app::screens::{SignUpControl, SignUpScreen};
use crate::icons::Icon;
use crate::theme::Palette;

const CARD_WIDTH: u16 = 60;

pub fn draw(f: &mut Frame, area: Rect, s: &SignUpScreen, palette: &Palette, res: &Resources) {
    let icons = &res.icons;
    let header_height = widgets::header_height(res.assets.sign_up.len());

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_height), Constraint::Min(0)])
        .split(area);

    f.render_widget(widgets::header("skillarc", &res.assets.sign_up, palette), outer[0]);
    f.render_widget(
        Paragraph::new(widgets::theme_toggle(
            s.theme,
            s.focus == SignUpControl::ThemeToggle,
            palette,
            icons,
        )),
        Rect::new(outer[0].x, outer[0].y, outer[0].width, 1),
    );

    let card = centered_fixed(CARD_WIDTH, outer[1].height, outer[1]);
    f.render_widget(Block::default().style(palette.card_style()), card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(3), // full name
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(3), // confirm
            Constraint::Length(1), // visibility toggles
            Constraint::Length(1), // terms
            Constraint::Length(1), // message
            Constraint::Length(1), // create account
            Constraint::Length(1), // divider
            Constraint::Length(1), // social
            Constraint::Length(1), // sign in link
            Constraint::Min(0),
        ])
        .split(card);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Create Account 🚀", palette.title_style())),
            Line::from(Span::styled("Join our community today!", palette.muted_style())),
        ])
        .alignment(Alignment::Center),
        rows[0],
    );

    let busy = s.is_loading;
    let inputs = [
        (Icon::User, "Full Name", &s.full_name, false, SignUpControl::FullName),
        (Icon::Envelope, "Email Address", &s.email, false, SignUpControl::Email),
        (Icon::Lock, "Password", &s.password, !s.password_visible, SignUpControl::Password),
        (
            Icon::Lock,
            "Confirm Password",
            &s.confirm_password,
            !s.confirm_password_visible,
            SignUpControl::ConfirmPassword,
        ),
    ];
    for (row, (icon, placeholder, field, secret, control)) in rows[1..5].iter().zip(inputs) {
        Input {
            icon,
            placeholder,
            field,
            secret,
            focused: s.focus == control,
            disabled: busy,
        }
        .render(f, *row, palette, icons);
    }

    let mut toggles = widgets::visibility_toggle(
        s.password_visible,
        s.focus == SignUpControl::ShowPassword,
        palette,
        icons,
    );
    toggles.push(Span::styled(" password   ", palette.muted_style()));
    toggles.extend(widgets::visibility_toggle(
        s.confirm_password_visible,
        s.focus == SignUpControl::ShowConfirmPassword,
        palette,
        icons,
    ));
    toggles.push(Span::styled(" confirm", palette.muted_style()));
    f.render_widget(Paragraph::new(Line::from(toggles)), rows[5]);

    f.render_widget(
        Paragraph::new(Line::from(widgets::checkbox(
            "I agree to the Terms & Conditions",
            s.agreed_to_terms,
            s.focus == SignUpControl::AgreeToTerms,
            palette,
            icons,
        ))),
        rows[6],
    );

    f.render_widget(Paragraph::new(widgets::message_line(s.message.as_ref(), palette)), rows[7]);
    f.render_widget(
        widgets::button("Sign Up", busy, s.focus == SignUpControl::CreateAccount, palette),
        rows[8],
    );

    f.render_widget(
        Paragraph::new("─── or ───")
            .style(palette.muted_style())
            .alignment(Alignment::Center),
        rows[9],
    );
    let social_focus = match s.focus {
        SignUpControl::Social(provider) => Some(provider),
        _ => None,
    };
    f.render_widget(
        Paragraph::new(widgets::social_row(social_focus, busy, palette, icons)),
        rows[10],
    );

    let mut sign_in = vec![Span::styled("Already have an account? ", palette.muted_style())];
    sign_in.extend(widgets::link("Sign In", s.focus == SignUpControl::SignInLink, palette));
    f.render_widget(
        Paragraph::new(Line::from(sign_in)).alignment(Alignment::Center),
        rows[11],
    );
}
