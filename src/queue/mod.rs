//! 请求队列
//!
//! 负载均衡器持有的全局积压队列。

mod fifo;

pub use fifo::RequestQueue;
