//! 消息列表滚动状态
//!
//! 偏移量以"距离底部的行数"计，0 表示最新消息可见。
//! 日志变化（条数或最后一条身份）时自动滚回底部。

use tracing::debug;

use crate::models::LogStamp;

#[derive(Debug, Clone, Default)]
pub struct MessageListState {
    offset: usize,
    max_offset: usize,
    page: usize,
    seen: LogStamp,
    smooth: bool,
    pending_bottom: bool,
}

impl MessageListState {
    pub fn new(smooth: bool) -> Self {
        Self {
            smooth,
            ..Self::default()
        }
    }

    /// 距离底部的行数
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.pending_bottom
    }

    /// 根据最新渲染结果更新可滚动范围
    pub fn set_viewport(&mut self, total_lines: usize, height: usize) {
        self.page = height;
        self.max_offset = total_lines.saturating_sub(height);
        self.offset = self.offset.min(self.max_offset);
    }

    /// 观察日志快照，变化时滚动到最新消息。返回是否发生变化
    pub fn observe(&mut self, stamp: LogStamp) -> bool {
        if stamp == self.seen {
            return false;
        }
        debug!(len = stamp.len, "conversation log changed, scrolling to newest entry");
        self.seen = stamp;
        self.scroll_to_bottom();
        true
    }

    pub fn scroll_to_bottom(&mut self) {
        if self.smooth && self.offset > 0 {
            self.pending_bottom = true;
        } else {
            self.offset = 0;
            self.pending_bottom = false;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.pending_bottom = false;
        self.offset = self.max_offset;
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.pending_bottom = false;
        self.offset = (self.offset + lines).min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.pending_bottom = false;
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn half_page(&self) -> usize {
        (self.page / 2).max(1)
    }

    /// 推进一帧平滑滚动：每帧至少一行，约为剩余距离的三分之一
    pub fn tick(&mut self) {
        if !self.pending_bottom {
            return;
        }
        let step = self.offset.div_ceil(3).max(1);
        self.offset = self.offset.saturating_sub(step);
        if self.offset == 0 {
            self.pending_bottom = false;
        }
    }
}
