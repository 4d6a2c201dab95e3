//! 统计信息
//!
//! 负载均衡器的累计计数器。

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LbStats {
    pub processed: u64,
    pub finished: u64,
    pub dropped: u64,
    pub removed: u64,
    pub added: u64,
    pub arrivals: u64,
}
