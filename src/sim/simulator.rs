//! 仿真器
//!
//! 外层驱动：反复调用 `World::step` 直到时间预算耗尽。

use super::time::SimTime;
use super::world::World;
use std::ops::ControlFlow;
use tracing::{debug, info};

/// 离散时间仿真器：只负责驱动循环与步数统计。
#[derive(Debug, Default)]
pub struct Simulator {
    steps: u64,
}

impl Simulator {
    /// 已执行的 tick 数
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// 运行直到 `world.now() >= until`，或回调返回 `Break`。
    ///
    /// 回调只在两个 tick 之间被调用，因此停止点总落在 tick 边界上。
    #[tracing::instrument(skip_all, fields(until = until.0))]
    pub fn run_until<W, F>(&mut self, until: SimTime, world: &mut W, mut on_step: F)
    where
        W: World,
        F: FnMut(&W, &W::Report) -> ControlFlow<()>,
    {
        info!(now = world.now().0, "▶️  开始运行仿真");

        while world.now() < until {
            let report = world.step();
            self.steps = self.steps.saturating_add(1);
            if on_step(&*world, &report).is_break() {
                debug!(now = world.now().0, "回调请求停止");
                break;
            }
        }

        info!(steps = self.steps, final_time = world.now().0, "✅ 仿真完成");
    }

    /// 运行直到 `until`，忽略每个 tick 的报告。
    pub fn run<W: World>(&mut self, until: SimTime, world: &mut W) {
        self.run_until(until, world, |_, _| ControlFlow::Continue(()));
    }
}
