//! 防火墙过滤
//!
//! 检查服务器当前请求的第三段 octet，命中禁止区间即丢弃。

use super::request::Request;
use super::server::Server;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// 参与判断的地址
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirewallMode {
    /// 只看目的地址
    #[default]
    DestinationOnly,
    /// 源地址或目的地址任一命中即丢弃
    SourceOrDestination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Firewall {
    mode: FirewallMode,
    threshold: u8,
}

impl Default for Firewall {
    fn default() -> Self {
        Self::new(FirewallMode::DestinationOnly, 200)
    }
}

impl Firewall {
    pub fn new(mode: FirewallMode, threshold: u8) -> Self {
        Self { mode, threshold }
    }

    pub fn mode(&self) -> FirewallMode {
        self.mode
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn should_drop(&self, request: &Request) -> bool {
        let dest_hit = request.dest().third_octet() >= self.threshold;
        match self.mode {
            FirewallMode::DestinationOnly => dest_hit,
            FirewallMode::SourceOrDestination => {
                dest_hit || request.source().third_octet() >= self.threshold
            }
        }
    }

    /// 对服务器当前请求执行过滤：命中则清空服务器并返回被丢弃的请求。
    ///
    /// 空闲服务器上是 no-op，重复调用不会重复丢弃。
    pub fn apply(&self, server: &mut Server) -> Option<Request> {
        let hit = server.current().is_some_and(|r| self.should_drop(r));
        if !hit {
            return None;
        }
        trace!(server = server.name(), "防火墙命中");
        server.clear()
    }
}
