//! 仿真核心模块
//!
//! 此模块包含离散时间仿真的核心组件，如仿真时间、世界、驱动器和配置。

// 子模块声明
mod config;
mod simulator;
mod time;
mod world;

// 重新导出公共接口
pub use config::{ArrivalRate, FirewallConfig, SimConfig};
pub use simulator::Simulator;
pub use time::SimTime;
pub use world::World;
