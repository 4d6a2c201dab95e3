//! 请求类型
//!
//! 一个请求即一份工作：源地址、目的地址与所需处理时长。

use super::address::Address;
use serde::{Deserialize, Serialize};

/// 网络请求（创建后不可变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    source: Address,
    dest: Address,
    processing_ticks: u32,
}

impl Request {
    /// 创建请求；`processing_ticks` 为 0 视为调用方缺陷，直接 panic。
    pub fn new(source: Address, dest: Address, processing_ticks: u32) -> Self {
        assert!(processing_ticks > 0, "request duration must be positive");
        Self {
            source,
            dest,
            processing_ticks,
        }
    }

    pub fn source(&self) -> Address {
        self.source
    }

    pub fn dest(&self) -> Address {
        self.dest
    }

    /// 所需处理时长（tick）
    pub fn processing_ticks(&self) -> u32 {
        self.processing_ticks
    }
}
