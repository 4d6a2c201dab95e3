//! 仿真时间类型
//!
//! 离散时间仿真，一个单位即一个 tick。

use serde::{Deserialize, Serialize};

/// 仿真时间（tick）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// 下一个 tick
    pub fn next(self) -> SimTime {
        SimTime(self.0.saturating_add(1))
    }

    /// 经过 `ticks` 之后的时间
    pub fn after(self, ticks: u64) -> SimTime {
        SimTime(self.0.saturating_add(ticks))
    }
}

impl std::fmt::Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
