//! 错误类型
//!
//! 配置、地址解析与请求队列的错误定义。

use std::path::PathBuf;
use thiserror::Error;

/// 配置加载/校验错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("num_servers must be greater than 0")]
    NoServers,
    #[error("arrival rate {numerator}/{denominator} is not a valid probability")]
    InvalidArrivalRate { numerator: u32, denominator: u32 },
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 地址解析错误（仅支持 `192.168.` / `10.0.` 两个前缀族）
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address `{0}` is not in the 192.168.x.y or 10.0.x.y family")]
    UnknownFamily(String),
    #[error("address `{0}` has a malformed octet")]
    MalformedOctet(String),
}

/// 请求队列错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("dequeue from an empty request queue")]
    Empty,
}
