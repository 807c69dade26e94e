//! App 状态定义 (Model)
//!
//! 会话日志与待发送输入都归 App 所有，只通过 dispatch 修改

use crate::config::Config;
use crate::models::ConversationLog;

use super::scroll::MessageListState;

/// 应用状态
pub struct App {
    pub log: ConversationLog,
    pub pending_input: String,
    pub title: String,
    pub placeholder: String,
    pub message_list: MessageListState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &Config) -> Self {
        Self {
            log: ConversationLog::new(),
            pending_input: String::new(),
            title: config.title.clone(),
            placeholder: config.placeholder.clone(),
            message_list: MessageListState::new(config.smooth_scroll),
        }
    }

    /// 输入非空白时才允许发送
    pub fn can_submit(&self) -> bool {
        !self.pending_input.trim().is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.message_list.is_animating()
    }
}
