use chrono::{DateTime, Local};
use uuid::Uuid;

/// 会话开场白
pub const GREETING: &str = "Olá! Como posso ajudar você hoje? Escolha: 1, 2 ou 3.";

/// 消息发送方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// 单条聊天消息，创建后不可修改
#[derive(Debug, Clone)]
pub struct ChatEntry {
    id: String,
    sender: Sender,
    text: String,
    sent_at: DateTime<Local>,
}

impl ChatEntry {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sent_at(&self) -> DateTime<Local> {
        self.sent_at
    }
}

/// 日志快照标记：条数或最后一条消息的身份变化即视为日志变化
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogStamp {
    pub len: usize,
    pub last_id: Option<String>,
}

/// 会话日志，只追加
#[derive(Debug, Clone)]
pub struct ConversationLog {
    entries: Vec<ChatEntry>,
}

impl ConversationLog {
    /// 以机器人问候语开始的新会话
    pub fn new() -> Self {
        Self {
            entries: vec![ChatEntry::bot(GREETING)],
        }
    }

    /// 追加一问一答。两条消息在同一次调用中写入，
    /// 任何渲染都不会看到没有回复的用户消息
    pub fn push_exchange(&mut self, question: ChatEntry, answer: ChatEntry) {
        debug_assert_eq!(question.sender(), Sender::User);
        debug_assert_eq!(answer.sender(), Sender::Bot);
        self.entries.reserve(2);
        self.entries.push(question);
        self.entries.push(answer);
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn stamp(&self) -> LogStamp {
        LogStamp {
            len: self.entries.len(),
            last_id: self.last().map(|e| e.id().to_string()),
        }
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}
