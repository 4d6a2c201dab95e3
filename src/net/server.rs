//! 服务器类型
//!
//! 每台服务器同一时刻最多处理一个请求。

use super::request::Request;
use crate::sim::SimTime;

/// 池中的一台工作服务器
#[derive(Debug, Clone)]
pub struct Server {
    name: String,
    current: Option<Request>,
    start: SimTime,
}

impl Server {
    /// 创建空闲服务器
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: None,
            start: SimTime::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 当前占用的请求（空闲时为 `None`）
    pub fn current(&self) -> Option<&Request> {
        self.current.as_ref()
    }

    /// 当前请求被分配的时间
    pub fn start_time(&self) -> SimTime {
        self.start
    }

    /// 无条件覆盖当前请求与开始时间，不检查服务器是否空闲。
    pub fn assign(&mut self, request: Request, now: SimTime) {
        self.current = Some(request);
        self.start = now;
    }

    /// 清空当前请求并返回它。
    pub fn clear(&mut self) -> Option<Request> {
        self.current.take()
    }

    /// 空闲状态由是否持有请求推导，不单独保存。
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// `now > start + duration` 时完成（严格大于：恰好经过 duration 的那个 tick 尚未完成）。
    ///
    /// 空闲服务器没有未完成的工作，总是返回 `true`。
    pub fn is_request_done(&self, now: SimTime) -> bool {
        match &self.current {
            Some(r) => now > self.start.after(u64::from(r.processing_ticks())),
            None => true,
        }
    }
}
