use crate::error::QueueError;
use crate::net::{Address, Request};
use crate::queue::RequestQueue;

fn req(id: u8) -> Request {
    Request::new(Address::internal(id, 0), Address::external(0, id), 1)
}

#[test]
fn request_queue_preserves_fifo_order() {
    let mut q = RequestQueue::new();
    assert!(q.is_empty());

    for id in 1..=5 {
        q.enqueue(req(id));
    }
    assert_eq!(q.len(), 5);
    assert_eq!(q.front(), Some(&req(1)));

    let out: Vec<u8> = (0..5)
        .map(|_| q.dequeue_front().expect("req").source().third_octet())
        .collect();
    assert_eq!(out, vec![1, 2, 3, 4, 5]);
    assert!(q.is_empty());
}

#[test]
fn request_queue_interleaved_enqueue_dequeue() {
    let mut q = RequestQueue::new();
    q.enqueue(req(1));
    q.enqueue(req(2));
    assert_eq!(q.dequeue_front(), Ok(req(1)));
    q.enqueue(req(3));
    assert_eq!(q.dequeue_front(), Ok(req(2)));
    assert_eq!(q.dequeue_front(), Ok(req(3)));
}

#[test]
fn dequeue_from_empty_queue_errors() {
    let mut q = RequestQueue::new();
    assert_eq!(q.dequeue_front(), Err(QueueError::Empty));
    q.extend([req(9)]);
    assert_eq!(q.iter().count(), 1);
    assert!(q.dequeue_front().is_ok());
    assert_eq!(q.dequeue_front(), Err(QueueError::Empty));
}
