//! 仿真配置
//!
//! 可从 JSON 文件加载，命令行参数在其上覆盖。

use crate::error::ConfigError;
use crate::net::FirewallMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 每 tick 新请求到达的概率：`numerator / denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalRate {
    pub numerator: u32,
    pub denominator: u32,
}

impl Default for ArrivalRate {
    fn default() -> Self {
        Self {
            numerator: 1,
            denominator: 5,
        }
    }
}

impl ArrivalRate {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.denominator == 0 || self.numerator > self.denominator {
            return Err(ConfigError::InvalidArrivalRate {
                numerator: self.numerator,
                denominator: self.denominator,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallConfig {
    pub mode: FirewallMode,
    /// 第三段 octet 大于等于该值即丢弃
    pub threshold: u8,
}

impl Default for FirewallConfig {
    fn default() -> Self {
        Self {
            mode: FirewallMode::DestinationOnly,
            threshold: 200,
        }
    }
}

/// 一次仿真运行的完整配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// 目标（也是初始）服务器数量
    pub num_servers: usize,
    /// tick 预算
    pub run_time: u64,
    /// 启动时按服务器数量预填充的请求数
    pub prefill_per_server: usize,
    pub arrival: ArrivalRate,
    pub firewall: FirewallConfig,
    /// 缺省时随机抽取并写入日志，便于复现
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_servers: 1,
            run_time: 100,
            prefill_per_server: 100,
            arrival: ArrivalRate::default(),
            firewall: FirewallConfig::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_servers == 0 {
            return Err(ConfigError::NoServers);
        }
        self.arrival.validate()
    }

    pub fn prefill_count(&self) -> usize {
        self.num_servers.saturating_mul(self.prefill_per_server)
    }
}
