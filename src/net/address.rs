//! 地址类型
//!
//! 仿真中只有两个固定地址族：内部 `192.168.X.Y` 与外部 `10.0.X.Y`。
//! 地址在生成时就以 `{ zone, octets }` 的形式保存，过滤时无需再解析字符串。

use crate::error::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INTERNAL_PREFIX: &str = "192.168.";
const EXTERNAL_PREFIX: &str = "10.0.";

/// 地址族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// `192.168.X.Y`（请求源）
    Internal,
    /// `10.0.X.Y`（请求目的）
    External,
}

impl Zone {
    fn prefix(self) -> &'static str {
        match self {
            Zone::Internal => INTERNAL_PREFIX,
            Zone::External => EXTERNAL_PREFIX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub zone: Zone,
    pub third: u8,
    pub fourth: u8,
}

impl Address {
    pub fn internal(third: u8, fourth: u8) -> Self {
        Self {
            zone: Zone::Internal,
            third,
            fourth,
        }
    }

    pub fn external(third: u8, fourth: u8) -> Self {
        Self {
            zone: Zone::External,
            third,
            fourth,
        }
    }

    /// 第三段 octet（防火墙判断依据）
    pub fn third_octet(&self) -> u8 {
        self.third
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{}", self.zone.prefix(), self.third, self.fourth)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (zone, rest) = if let Some(rest) = s.strip_prefix(INTERNAL_PREFIX) {
            (Zone::Internal, rest)
        } else if let Some(rest) = s.strip_prefix(EXTERNAL_PREFIX) {
            (Zone::External, rest)
        } else {
            return Err(AddressError::UnknownFamily(s.to_string()));
        };

        let malformed = || AddressError::MalformedOctet(s.to_string());
        let (third, fourth) = rest.split_once('.').ok_or_else(malformed)?;
        let third = third.parse::<u8>().map_err(|_| malformed())?;
        let fourth = fourth.parse::<u8>().map_err(|_| malformed())?;

        Ok(Self {
            zone,
            third,
            fourth,
        })
    }
}
