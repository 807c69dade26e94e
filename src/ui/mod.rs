//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体，持有会话日志和待发送输入
//! - View (view/): 将 State 映射为 UI，消息列表自身的滚动状态在渲染时同步
//! - Intent (actions.rs): 终端事件转化为明确的语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod scroll;
pub mod state;
pub mod view;

// Re-export for convenience
pub use actions::Action;
pub use input::handle_event;
pub use state::App;
pub use view::render;
