//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 输入框
    Input(char),   // 输入字符
    Paste(String), // 粘贴文本
    DeleteChar,    // Backspace
    Submit,        // Enter

    // 消息列表滚动
    ScrollUp(usize),
    ScrollDown(usize),
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // 帧定时，推进平滑滚动
    Tick,
}
