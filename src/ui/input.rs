//! 终端事件映射 (Event -> Action)

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use super::actions::Action;
use super::state::App;

/// 鼠标滚轮每格滚动的行数
const WHEEL_LINES: usize = 3;

/// 按键到 Action 的映射
pub fn get_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    // 仅拦截单独的 Ctrl；Ctrl+Alt 即 AltGr，按普通字符处理
    if key.modifiers == KeyModifiers::CONTROL {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::Up => Some(Action::ScrollUp(1)),
        KeyCode::Down => Some(Action::ScrollDown(1)),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Home => Some(Action::ScrollToTop),
        KeyCode::End => Some(Action::ScrollToBottom),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

/// 终端事件到 Action 的映射
pub fn map_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => get_action(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp(WHEEL_LINES)),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown(WHEEL_LINES)),
            _ => None,
        },
        Event::Paste(text) => Some(Action::Paste(text)),
        _ => None,
    }
}

/// 处理终端事件，返回 true 表示退出
pub fn handle_event(app: &mut App, event: Event) -> bool {
    match map_event(event) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
