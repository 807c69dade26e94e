use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

/// 获取数据目录路径 (~/.local/share/gatobot/)
pub fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no user data directory"))?
        .join("gatobot");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 初始化日志，输出到文件（终端被 TUI 占用）。RUST_LOG 优先于配置
pub fn init_logging(default_filter: &str) -> Result<PathBuf> {
    let log_path = get_data_dir()?.join("gatobot.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(log_path)
}
