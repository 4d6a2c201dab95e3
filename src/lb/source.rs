//! 请求来源
//!
//! 负载均衡器只依赖生成结果的形状，具体来源可替换（测试中使用脚本化来源）。

use crate::net::{Address, Request};
use crate::sim::{ArrivalRate, SimTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 请求来源接口
pub trait RequestSource {
    /// 生成一个请求（用于启动时预填充）
    fn generate(&mut self) -> Request;
    /// 每个 tick 调用一次：决定是否有新请求到达
    fn poll_arrival(&mut self, now: SimTime) -> Option<Request>;
}

/// 随机来源：`192.168.X.Y -> 10.0.X.Y`，时长均匀分布于 [1, 10]。
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    rate: ArrivalRate,
}

impl RandomSource {
    pub const MAX_PROCESSING_TICKS: u32 = 10;

    /// `rate` 需事先通过 `ArrivalRate::validate`
    pub fn new(seed: u64, rate: ArrivalRate) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            rate,
        }
    }
}

impl RequestSource for RandomSource {
    fn generate(&mut self) -> Request {
        let source = Address::internal(self.rng.random(), self.rng.random());
        let dest = Address::external(self.rng.random(), self.rng.random());
        let ticks = self.rng.random_range(1..=Self::MAX_PROCESSING_TICKS);
        Request::new(source, dest, ticks)
    }

    fn poll_arrival(&mut self, _now: SimTime) -> Option<Request> {
        if self
            .rng
            .random_ratio(self.rate.numerator, self.rate.denominator)
        {
            Some(self.generate())
        } else {
            None
        }
    }
}
