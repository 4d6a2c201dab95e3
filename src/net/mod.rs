//! 网络实体模块
//!
//! 此模块包含请求、地址、服务器以及防火墙过滤策略。

// 子模块声明
mod address;
mod firewall;
mod request;
mod server;

// 重新导出公共接口
pub use address::{Address, Zone};
pub use firewall::{Firewall, FirewallMode};
pub use request::Request;
pub use server::Server;
