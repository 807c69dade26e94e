//! 视图层模块
//!
//! 标题栏、消息列表、输入区三段布局

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use components::{entry_lines, render_input_widget, render_send_button};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(3),    // 消息
            Constraint::Length(3), // 输入
        ])
        .split(frame.area());

    render_header(frame, &app.title, chunks[0]);
    render_messages(frame, app, chunks[1]);
    render_composer(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, title: &str, area: Rect) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_messages(frame: &mut Frame, app: &mut App, area: Rect) {
    let help = Line::from(" ↑/↓ PgUp/PgDn rolar · Esc sair ").style(Style::default().fg(Color::DarkGray));
    let block = Block::default().borders(Borders::ALL).title_bottom(help);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .log
        .entries()
        .iter()
        .flat_map(|entry| entry_lines(entry, inner.width as usize))
        .collect();

    let height = inner.height as usize;
    let list = &mut app.message_list;
    list.set_viewport(lines.len(), height);
    list.observe(app.log.stamp());

    // 从底部向上计算可见窗口
    let end = lines.len() - list.offset();
    let start = end.saturating_sub(height);
    let visible: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();

    frame.render_widget(Paragraph::new(visible), inner);
}

fn render_composer(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(area);

    render_input_widget(
        frame,
        chunks[0],
        "Mensagem",
        &app.pending_input,
        &app.placeholder,
        Color::Yellow,
    );
    render_send_button(frame, chunks[1], app.can_submit());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::{OPTION_ONE, OPTION_THREE, OPTION_TWO};
    use crate::config::{Config, DEFAULT_PLACEHOLDER, DEFAULT_TITLE};
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(120, 30);
        Terminal::new(backend).unwrap()
    }

    fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
        let mut result = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                let cell = buffer.cell((x, y)).unwrap();
                result.push_str(cell.symbol());
            }
            result.push('\n');
        }
        result
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
        terminal.draw(|f| render(f, app)).expect("Failed to draw");
        buffer_to_string(terminal.backend().buffer())
    }

    fn submit(app: &mut App, text: &str) {
        app.set_pending_input(text);
        app.dispatch(Action::Submit);
    }

    fn app_without_smooth_scroll() -> App {
        App::new(&Config {
            smooth_scroll: false,
            ..Config::default()
        })
    }

    #[test]
    fn test_draw_initial_screen() {
        let mut terminal = create_test_terminal();
        let mut app = App::new(&Config::default());
        let content = draw(&mut terminal, &mut app);

        assert!(content.contains(DEFAULT_TITLE));
        assert!(content.contains("Olá! Como posso ajudar"));
        assert!(content.contains(DEFAULT_PLACEHOLDER));
        assert!(content.contains("Enviar"));
    }

    #[test]
    fn test_draw_exchange() {
        let mut terminal = create_test_terminal();
        let mut app = App::new(&Config::default());
        submit(&mut app, "1");
        let content = draw(&mut terminal, &mut app);

        assert!(content.contains(OPTION_ONE));
        assert!(content.contains(DEFAULT_PLACEHOLDER));
    }

    #[test]
    fn test_draw_pending_input() {
        let mut terminal = create_test_terminal();
        let mut app = App::new(&Config::default());
        app.dispatch(Action::Input('2'));
        let content = draw(&mut terminal, &mut app);

        assert!(!content.contains(DEFAULT_PLACEHOLDER));
        assert!(app.can_submit());
    }

    #[test]
    fn test_wide_characters_render_completely() {
        let backend = TestBackend::new(24, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new(&Config::default());
        submit(&mut app, &"猫".repeat(12));
        let content = draw(&mut terminal, &mut app);

        assert_eq!(content.matches('猫').count(), 12);
    }

    #[test]
    fn test_long_conversation_shows_newest() {
        let mut terminal = create_test_terminal();
        let mut app = app_without_smooth_scroll();
        for _ in 0..10 {
            submit(&mut app, "1");
        }
        submit(&mut app, "2");
        let content = draw(&mut terminal, &mut app);

        assert!(content.contains(OPTION_TWO));
        assert!(!content.contains("Olá! Como posso ajudar"));
    }

    #[test]
    fn test_new_entry_scrolls_back_to_bottom() {
        let mut terminal = create_test_terminal();
        let mut app = app_without_smooth_scroll();
        for _ in 0..10 {
            submit(&mut app, "1");
        }
        draw(&mut terminal, &mut app);

        app.dispatch(Action::ScrollToTop);
        let content = draw(&mut terminal, &mut app);
        assert!(content.contains("Olá! Como posso ajudar"));

        submit(&mut app, "3");
        let content = draw(&mut terminal, &mut app);
        assert!(content.contains(OPTION_THREE));
        assert!(!content.contains("Olá! Como posso ajudar"));
    }

    #[test]
    fn test_smooth_scroll_reaches_bottom() {
        let mut terminal = create_test_terminal();
        let mut app = App::new(&Config::default());
        for _ in 0..10 {
            submit(&mut app, "1");
        }
        draw(&mut terminal, &mut app);
        app.dispatch(Action::ScrollToTop);
        draw(&mut terminal, &mut app);

        submit(&mut app, "3");
        draw(&mut terminal, &mut app);
        assert!(app.is_animating());

        let mut frames = 0;
        while app.is_animating() && frames < 60 {
            app.dispatch(Action::Tick);
            frames += 1;
        }
        let content = draw(&mut terminal, &mut app);
        assert_eq!(app.message_list.offset(), 0);
        assert!(content.contains(OPTION_THREE));
    }
}
