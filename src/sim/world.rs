//! 世界 trait
//!
//! 定义仿真世界接口。

use super::time::SimTime;

/// 仿真世界：由业务层实现（例如负载均衡器）。
///
/// 每次 `step` 推进且仅推进一个 tick，返回该 tick 的报告。
pub trait World {
    type Report;

    fn now(&self) -> SimTime;
    fn step(&mut self) -> Self::Report;
}
