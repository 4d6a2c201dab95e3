//! 可视化事件记录（用于离线回放）
//!
//! 设计目标：
//! - **结构化**：用 JSON 事件而不是解析文本日志
//! - **轻量**：整个运行期间只存内存，结束时一次写出

mod types;

pub use types::{VizEvent, VizEventKind, VizLogger, VizRequest};
