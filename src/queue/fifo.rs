//! FIFO 请求队列
//!
//! 无容量上限、无优先级：入队顺序即处理顺序。

use std::collections::VecDeque;

use crate::error::QueueError;
use crate::net::Request;

#[derive(Debug, Default, Clone)]
pub struct RequestQueue {
    q: VecDeque<Request>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入队到尾部，总是成功
    pub fn enqueue(&mut self, request: Request) {
        self.q.push_back(request);
    }

    /// 取出队首；空队列返回 `QueueError::Empty`
    pub fn dequeue_front(&mut self) -> Result<Request, QueueError> {
        self.q.pop_front().ok_or(QueueError::Empty)
    }

    pub fn front(&self) -> Option<&Request> {
        self.q.front()
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.q.iter()
    }
}

impl Extend<Request> for RequestQueue {
    fn extend<T: IntoIterator<Item = Request>>(&mut self, iter: T) {
        self.q.extend(iter);
    }
}
