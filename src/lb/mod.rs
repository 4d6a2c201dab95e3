//! 负载均衡调度模块
//!
//! 此模块包含逐 tick 调度协议、请求来源、事件与统计。

mod dispatcher;
mod event;
mod source;
mod stats;

pub use dispatcher::LoadBalancer;
pub use event::{LbEvent, TickReport};
pub use source::{RandomSource, RequestSource};
pub use stats::LbStats;
