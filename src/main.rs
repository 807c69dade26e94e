mod bot;
mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::{Config, default_config_path, load_config};
use crate::error::Result;
use crate::logging::init_logging;
use crate::ui::{Action, App, render};

/// 平滑滚动时的帧间隔
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// 空闲时的轮询间隔
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    // 配置文件路径 (~/.config/gatobot/config.toml)
    let config = match default_config_path() {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };

    let log_path = init_logging(&config.log_filter)?;
    info!(log = %log_path.display(), "gatobot starting");

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    info!(entries = app.log.len(), "gatobot exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let timeout = if app.is_animating() {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };

        if crossterm::event::poll(timeout)? {
            if ui::handle_event(app, crossterm::event::read()?) {
                break;
            }
        }
        app.dispatch(Action::Tick);
    }
    Ok(())
}
