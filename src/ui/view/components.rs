//! 通用 UI 组件
//!
//! 消息气泡、输入框等

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{ChatEntry, Sender};

/// 气泡最大宽度占比（百分比）
const BUBBLE_WIDTH_PERCENT: usize = 75;

/// 按显示宽度折行，超长单词会被拆开
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// [组件] 单条消息气泡：时间行 + 折行后的正文 + 空行
pub fn entry_lines(entry: &ChatEntry, area_width: usize) -> Vec<Line<'static>> {
    let bubble_width = (area_width * BUBBLE_WIDTH_PERCENT / 100).max(3);
    let text_width = bubble_width - 2;

    let (alignment, bubble_style, label) = match entry.sender() {
        Sender::User => (
            Alignment::Right,
            Style::default().fg(Color::Black).bg(Color::LightGreen),
            "você",
        ),
        Sender::Bot => (
            Alignment::Left,
            Style::default().fg(Color::Black).bg(Color::White),
            "bot",
        ),
    };

    let mut lines = Vec::new();
    lines.push(
        Line::from(Span::styled(
            format!("{} {}", label, entry.sent_at().format("%H:%M")),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(alignment),
    );

    let wrapped = wrap_text(entry.text(), text_width);
    let inner = wrapped
        .iter()
        .map(|l| Span::raw(l.as_str()).width())
        .max()
        .unwrap_or(0);
    for text in wrapped {
        let pad = inner - Span::raw(text.as_str()).width();
        lines.push(
            Line::from(Span::styled(
                format!(" {}{} ", text, " ".repeat(pad)),
                bubble_style,
            ))
            .alignment(alignment),
        );
    }

    lines.push(Line::default());
    lines
}

/// [组件] 带有标题和样式的输入框，为空时显示占位文字
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    active_color: Color,
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let shown = visible_tail(value, inner_width.saturating_sub(1));
    let (text, style) = if value.is_empty() {
        (placeholder, Style::default().fg(Color::DarkGray))
    } else {
        (shown, Style::default().fg(active_color))
    };

    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);

    let typed = Span::raw(shown).width();
    frame.set_cursor_position((area.x + 1 + typed as u16, area.y + 1));
}

/// 输入过长时只保留末尾，留一列给光标
fn visible_tail(value: &str, width: usize) -> &str {
    let mut shown = value;
    while Span::raw(shown).width() > width {
        let mut chars = shown.chars();
        chars.next();
        shown = chars.as_str();
    }
    shown
}

/// [组件] 发送按钮，不可用时灰显
pub fn render_send_button(frame: &mut Frame, area: Rect, enabled: bool) {
    let style = if enabled {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new("Enviar")
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}
