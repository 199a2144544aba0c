use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::collections::element::Element;
use crate::collections::queue::{CapacityClass, Queue, QueueBase, QueueError};

#[derive(Debug)]
struct MpscConsumer<E> {
  receiver: mpsc::UnboundedReceiver<E>,
  peeked: Option<E>,
}

/// An unbounded queue any number of producers may feed concurrently, drained by one consumer.
#[derive(Debug)]
pub struct MpscLinkedQueue<E> {
  sender: mpsc::UnboundedSender<E>,
  consumer: Mutex<MpscConsumer<E>>,
  len: AtomicUsize,
}

impl<E> MpscLinkedQueue<E> {
  pub fn new() -> Self {
    let (sender, receiver) = mpsc::unbounded_channel();
    Self {
      sender,
      consumer: Mutex::new(MpscConsumer { receiver, peeked: None }),
      len: AtomicUsize::new(0),
    }
  }

  fn decrement_len(&self) {
    self
      .len
      .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
        Some(current.saturating_sub(1))
      })
      .ok();
  }
}

impl<E> Default for MpscLinkedQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E: Element> QueueBase<E> for MpscLinkedQueue<E> {
  fn len(&self) -> usize {
    self.len.load(Ordering::SeqCst)
  }

  fn capacity_class(&self) -> CapacityClass {
    CapacityClass::Unbounded
  }
}

impl<E: Element> Queue<E> for MpscLinkedQueue<E> {
  fn offer(&self, element: E) -> Result<(), QueueError<E>> {
    self.len.fetch_add(1, Ordering::SeqCst);
    // Sending only fails once the receiver is dropped, and the receiver lives in `self`.
    let _ = self.sender.send(element);
    Ok(())
  }

  fn poll(&self) -> Option<E> {
    let mut consumer = self.consumer.lock();
    let element = match consumer.peeked.take() {
      Some(element) => Some(element),
      None => match consumer.receiver.try_recv() {
        Ok(element) => Some(element),
        Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
      },
    };
    if element.is_some() {
      self.decrement_len();
    }
    element
  }

  fn peek(&self) -> Option<E>
  where
    E: Clone, {
    let mut consumer = self.consumer.lock();
    if consumer.peeked.is_none() {
      consumer.peeked = consumer.receiver.try_recv().ok();
    }
    consumer.peeked.clone()
  }

  fn clear(&self) {
    let mut consumer = self.consumer.lock();
    if consumer.peeked.take().is_some() {
      self.decrement_len();
    }
    while consumer.receiver.try_recv().is_ok() {
      self.decrement_len();
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use static_assertions::assert_impl_all;

  use super::*;

  assert_impl_all!(MpscLinkedQueue<String>: Send, Sync);

  #[test]
  fn offer_poll_in_order() {
    let queue = MpscLinkedQueue::new();
    queue.offer_all(vec![1, 2, 3]).unwrap();
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.poll(), Some(1));
    assert_eq!(queue.poll(), Some(2));
    assert_eq!(queue.poll(), Some(3));
    assert_eq!(queue.poll(), None);
    assert!(queue.is_empty());
  }

  #[test]
  fn peek_keeps_the_head() {
    let queue = MpscLinkedQueue::<i32>::new();
    assert_eq!(queue.peek(), None);
    queue.offer(1).unwrap();
    queue.offer(2).unwrap();
    assert_eq!(queue.peek(), Some(1));
    assert_eq!(queue.peek(), Some(1));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.poll(), Some(1));
    assert_eq!(queue.poll(), Some(2));
  }

  #[test]
  fn offer_always_succeeds() {
    let queue = MpscLinkedQueue::new();
    for round in 0..3 {
      assert_eq!(queue.offer_all((0..1_000).collect()), Ok(()));
      assert_eq!(queue.len(), 1_000, "round {}", round);
      queue.clear();
    }
    assert_eq!(queue.offer(1), Ok(()));
    assert_eq!(queue.poll(), Some(1));
  }

  #[test]
  fn clear_drops_peeked_and_pending() {
    let queue = MpscLinkedQueue::new();
    queue.offer_all(vec![1, 2, 3]).unwrap();
    queue.peek();
    queue.clear();
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.poll(), None);
  }

  #[tokio::test]
  async fn many_producers_one_consumer() {
    let queue = Arc::new(MpscLinkedQueue::new());
    let mut handles = vec![];

    for i in 0..10 {
      let q = Arc::clone(&queue);
      handles.push(tokio::spawn(async move {
        for j in 0..100 {
          q.offer(i * 100 + j).unwrap();
        }
      }));
    }
    for handle in handles {
      handle.await.unwrap();
    }

    let mut received = Vec::new();
    while let Some(value) = queue.poll() {
      received.push(value);
    }
    received.sort_unstable();
    assert_eq!(received, (0..1000).collect::<Vec<_>>());
  }
}
