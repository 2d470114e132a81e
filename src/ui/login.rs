use ratatui::{prelude::*, widgets::*};

use super::widgets::{self, Input};
use super::{centered_fixed, Resources};
use crate::app::screens::{ForgotPassword, LoginControl, LoginScreen, ResetControl};
use crate::icons::Icon;
use crate::theme::Palette;

const CARD_WIDTH: u16 = 60;

pub fn draw(f: &mut Frame, area: Rect, s: &LoginScreen, palette: &Palette, res: &Resources) {
    let icons = &res.icons;
    let header_height = widgets::header_height(res.assets.login.len());

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_height), Constraint::Min(0)])
        .split(area);

    f.render_widget(widgets::header("skillarc", &res.assets.login, palette), outer[0]);
    f.render_widget(
        Paragraph::new(widgets::theme_toggle(
            s.theme,
            s.focus == LoginControl::ThemeToggle,
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
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1), // options
            Constraint::Length(1), // forgot password
            Constraint::Length(1), // message
            Constraint::Length(1), // sign in
            Constraint::Length(1),
            Constraint::Length(1), // divider
            Constraint::Length(1), // social
            Constraint::Length(1),
            Constraint::Length(1), // sign up link
            Constraint::Min(0),
        ])
        .split(card);

    f.render_widget(
        Paragraph::new("Hello 👋").style(palette.title_style()).alignment(Alignment::Center),
        rows[0],
    );
    f.render_widget(
        Paragraph::new("Welcome back!")
            .style(palette.muted_style())
            .alignment(Alignment::Center),
        rows[1],
    );

    let busy = s.is_loading;
    Input {
        icon: Icon::Envelope,
        placeholder: "Email Address",
        field: &s.email,
        secret: false,
        focused: s.focus == LoginControl::Email && !s.reset.visible,
        disabled: busy,
    }
    .render(f, rows[2], palette, icons);
    Input {
        icon: Icon::Lock,
        placeholder: "Password",
        field: &s.password,
        secret: !s.password_visible,
        focused: s.focus == LoginControl::Password && !s.reset.visible,
        disabled: busy,
    }
    .render(f, rows[3], palette, icons);

    let mut options = widgets::visibility_toggle(
        s.password_visible,
        s.focus == LoginControl::ShowPassword,
        palette,
        icons,
    );
    options.push(Span::raw("   "));
    options.extend(widgets::checkbox(
        "Remember Me",
        s.remember_me,
        s.focus == LoginControl::RememberMe,
        palette,
        icons,
    ));
    f.render_widget(Paragraph::new(Line::from(options)), rows[4]);
    f.render_widget(
        Paragraph::new(Line::from(widgets::link(
            "Forgot password?",
            s.focus == LoginControl::ForgotPassword,
            palette,
        )))
        .alignment(Alignment::Right),
        rows[5],
    );

    f.render_widget(Paragraph::new(widgets::message_line(s.message.as_ref(), palette)), rows[6]);
    f.render_widget(
        widgets::button("Sign In", busy, s.focus == LoginControl::SignIn, palette),
        rows[7],
    );

    f.render_widget(
        Paragraph::new("─── or ───")
            .style(palette.muted_style())
            .alignment(Alignment::Center),
        rows[9],
    );
    let social_focus = match s.focus {
        LoginControl::Social(provider) => Some(provider),
        _ => None,
    };
    f.render_widget(
        Paragraph::new(widgets::social_row(social_focus, busy, palette, icons)),
        rows[10],
    );

    let mut sign_up = vec![Span::styled("Don't have an account? ", palette.muted_style())];
    sign_up.extend(widgets::link("Sign Up", s.focus == LoginControl::SignUpLink, palette));
    f.render_widget(
        Paragraph::new(Line::from(sign_up)).alignment(Alignment::Center),
        rows[12],
    );

    if s.reset.visible {
        draw_reset_modal(f, area, &s.reset, palette, res);
    }
}

fn draw_reset_modal(f: &mut Frame, area: Rect, modal: &ForgotPassword, palette: &Palette, res: &Resources) {
    let popup = centered_fixed(CARD_WIDTH - 8, 13, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(true))
        .title(" Reset Password ")
        .title_style(palette.title_style())
        .style(palette.card_style());
    let inner = block.inner(popup);

    f.render_widget(Clear, popup);
    f.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // prompt
            Constraint::Length(3), // email
            Constraint::Length(2), // message
            Constraint::Length(1), // send
            Constraint::Length(1),
            Constraint::Length(1), // close
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new("Enter your email to receive a password reset link.")
            .style(palette.muted_style())
            .wrap(Wrap { trim: true }),
        rows[0],
    );
    Input {
        icon: Icon::Envelope,
        placeholder: "Email Address",
        field: &modal.email,
        secret: false,
        focused: modal.focus == ResetControl::Email,
        disabled: modal.is_loading,
    }
    .render(f, rows[1], palette, &res.icons);

    f.render_widget(
        Paragraph::new(widgets::message_line(modal.message.as_ref(), palette)).wrap(Wrap { trim: true }),
        rows[2],
    );
    f.render_widget(
        widgets::button(
            "Send Reset Link",
            modal.is_loading,
            modal.focus == ResetControl::SendLink,
            palette,
        ),
        rows[3],
    );
    f.render_widget(
        Paragraph::new(Line::from(widgets::link("Close", modal.focus == ResetControl::Close, palette)))
            .alignment(Alignment::Center),
        rows[5],
    );
}
