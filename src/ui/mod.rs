//! Terminal drawing: one module per screen plus shared widgets

mod login;
mod otp;
mod sign_up;
pub mod widgets;

use ratatui::{prelude::*, widgets::*};

use crate::app::screens::Screen;
use crate::assets::Assets;
use crate::icons::Icons;
use crate::messages::RenderState;
use crate::models::Route;
use crate::theme::{palette_for, Palette, OTP_PALETTE};

/// Resources the UI loop owns for the whole session
#[derive(Clone, Debug, Default)]
pub struct Resources {
    pub icons: Icons,
    pub assets: Assets,
}

pub fn draw(f: &mut Frame, state: &RenderState, res: &Resources) {
    let area = f.area();
    let palette = screen_palette(&state.screen);

    f.render_widget(Block::default().style(Style::default().bg(palette.background)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    match &state.screen {
        Screen::Login(screen) => login::draw(f, chunks[0], screen, &palette, res),
        Screen::SignUp(screen) => sign_up::draw(f, chunks[0], screen, &palette, res),
        Screen::Otp(screen) => otp::draw(f, chunks[0], screen, &palette),
    }

    draw_status_bar(f, state, &palette, chunks[1]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

pub fn screen_palette(screen: &Screen) -> Palette {
    screen.theme().map(palette_for).unwrap_or(OTP_PALETTE)
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let trail = state
        .routes
        .iter()
        .map(Route::as_str)
        .collect::<Vec<_>>()
        .join(" › ");

    let hints = if state.screen.is_loading() {
        " Loading... ".to_string()
    } else {
        " Tab:next | Enter:select | Esc:back | Ctrl+T:theme | F1:help | Ctrl+C:quit ".to_string()
    };

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", trail), palette.link_style()),
        Span::styled(hints, palette.muted_style()),
    ]));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 SKILLARC - Keyboard Shortcuts

 FOCUS
   Tab / ↓            Next control
   Shift+Tab / ↑      Previous control

 FORMS
   Enter              Press button / submit form
   Space              Toggle checkbox or visibility
   ← / →              Move cursor (OTP: move between slots)
   Backspace          Delete (OTP: step back on empty slot)

 SCREENS
   Esc                Close dialog / go back
   Ctrl+T             Toggle light / dark theme

 GENERAL
   F1                 Toggle this help
   Ctrl+C             Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black).fg(Color::White));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// A rectangle of the given percentage size centred in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A rectangle of fixed size centred in `r`, clipped to it
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState) -> String {
        let backend = TestBackend::new(100, 48);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw(f, state, &Resources::default()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_centered_fixed_clips() {
        let r = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_fixed(20, 2, r), Rect::new(0, 1, 10, 2));
    }

    #[test]
    fn test_login_renders_title_and_links() {
        let text = render(&RenderState::default());
        assert!(text.contains("Welcome back!"));
        assert!(text.contains("Sign Up"));
        assert!(text.contains("Login"));
    }

    #[test]
    fn test_otp_renders_slots() {
        let state = RenderState {
            screen: Screen::mount(Route::Otp, Default::default()),
            routes: vec![Route::Login, Route::Otp],
            show_help: false,
        };
        let text = render(&state);
        assert!(text.contains("OTP Verification"));
        assert!(text.contains("Login › OTP"));
    }

    #[test]
    fn test_long_email_keeps_cursor_on_screen() {
        use crate::app::screens::LoginScreen;
        use crate::app::text_field::TextField;
        use crate::models::Theme;

        let mut login = LoginScreen::new(Theme::Light);
        login.email = TextField::new("a".repeat(65_530));
        let state = RenderState {
            screen: Screen::Login(login),
            routes: vec![Route::Login],
            show_help: false,
        };

        let mut terminal = Terminal::new(TestBackend::new(100, 48)).unwrap();
        terminal.draw(|f| draw(f, &state, &Resources::default())).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 100 && cursor.y < 48);
    }

    #[test]
    fn test_huge_illustration_still_draws_status_bar() {
        let mut res = Resources::default();
        res.assets.login = vec!["*".to_string(); 70_000];

        let mut terminal = Terminal::new(TestBackend::new(100, 48)).unwrap();
        terminal
            .draw(|f| draw(f, &RenderState::default(), &res))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let last_row: String = (0..100u16).map(|x| buffer[(x, 47u16)].symbol()).collect();
        assert!(last_row.contains("Login"));
    }

    #[test]
    fn test_help_popup_drawn_on_top() {
        let state = RenderState {
            show_help: true,
            ..RenderState::default()
        };
        assert!(render(&state).contains("Keyboard Shortcuts"));
    }
}
