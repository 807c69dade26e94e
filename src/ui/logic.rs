//! 业务逻辑处理 (Update/Dispatch)

use tracing::{debug, info};

use super::actions::Action;
use super::state::App;
use crate::bot::lookup_response;
use crate::models::ChatEntry;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        if action != Action::Tick {
            debug!(?action, "dispatch");
        }
        match action {
            Action::Quit => return true,

            // 每次按键都以新的原始值替换输入
            Action::Input(c) => {
                let value = format!("{}{}", self.pending_input, c);
                self.set_pending_input(value);
            }
            Action::Paste(text) => {
                let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                let value = format!("{}{}", self.pending_input, text);
                self.set_pending_input(value);
            }
            Action::DeleteChar => {
                let mut chars = self.pending_input.chars();
                chars.next_back();
                let value = chars.as_str().to_string();
                self.set_pending_input(value);
            }
            Action::Submit => {
                self.submit();
            }

            Action::ScrollUp(n) => self.message_list.scroll_up(n),
            Action::ScrollDown(n) => self.message_list.scroll_down(n),
            Action::PageUp => {
                let n = self.message_list.half_page();
                self.message_list.scroll_up(n);
            }
            Action::PageDown => {
                let n = self.message_list.half_page();
                self.message_list.scroll_down(n);
            }
            Action::ScrollToTop => self.message_list.scroll_to_top(),
            Action::ScrollToBottom => self.message_list.scroll_to_bottom(),

            Action::Tick => self.message_list.tick(),
        }
        false
    }

    /// 替换待发送输入
    pub fn set_pending_input(&mut self, value: impl Into<String>) {
        self.pending_input = value.into();
    }

    /// 发送当前输入：追加用户消息和机器人回复，然后清空输入。
    /// 输入为空白时不做任何事，返回 false
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        let text = std::mem::take(&mut self.pending_input);
        let reply = lookup_response(&text);
        info!(input = %text, reply, "exchange");
        self.log
            .push_exchange(ChatEntry::user(text), ChatEntry::bot(reply));
        true
    }
}
