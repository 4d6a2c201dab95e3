//! 调度事件
//!
//! 一个 tick 内按发生顺序记录的可观测事件。

use crate::net::Request;
use crate::sim::SimTime;
use serde::Serialize;
use std::fmt;

/// 负载均衡器事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LbEvent {
    /// 防火墙丢弃了服务器上的请求
    Dropped { server: String, request: Request },
    /// 请求被分配给服务器并开始处理
    Processed { server: String, request: Request },
    /// 服务器完成了请求
    Finished { server: String, request: Request },
    /// 空闲服务器在队列为空时被移出池
    Removed { server: String },
    /// 积压时向池中追加了服务器
    Added { server: String },
    /// 新请求到达并入队
    Arrived { request: Request },
}

impl fmt::Display for LbEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LbEvent::Dropped { server, request } => write!(
                f,
                "{server} deleted request from {} to {}",
                request.source(),
                request.dest()
            ),
            LbEvent::Processed { server, request } => write!(
                f,
                "{server} processed request from {} to {}",
                request.source(),
                request.dest()
            ),
            LbEvent::Finished { server, request } => write!(
                f,
                "{server} finished request from {} to {}",
                request.source(),
                request.dest()
            ),
            LbEvent::Removed { server } => write!(f, "{server} removed from pool"),
            LbEvent::Added { server } => write!(f, "{server} added to pool"),
            LbEvent::Arrived { request } => write!(
                f,
                "new request from {} to {} ({} ticks)",
                request.source(),
                request.dest(),
                request.processing_ticks()
            ),
        }
    }
}

/// 一个 tick 的结果：`at` 为执行该 tick 时的仿真时间。
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub at: SimTime,
    pub events: Vec<LbEvent>,
}
