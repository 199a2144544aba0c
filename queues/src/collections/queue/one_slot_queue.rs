use std::cell::UnsafeCell;
use std::fmt::{Debug, Formatter};
use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::collections::element::Element;
use crate::collections::queue::{CapacityClass, Queue, QueueBase, QueueError};

const EMPTY: usize = 0;
const WRITING: usize = 1;
const FULL: usize = 2;
const TAKING: usize = 3;
const PHASE_MASK: usize = 0b11;
const READER: usize = 0b100;

/// A single-slot queue for exactly one producer thread and one consumer thread.
///
/// The low two bits of `state` hold the phase: the slot moves `EMPTY -> WRITING -> FULL` on the
/// producer side and `FULL -> TAKING -> EMPTY` on the consumer side. Each side claims the slot with
/// a compare-and-swap and publishes the result with one release store.
///
/// The remaining bits count threads currently reading a `FULL` slot (`peek`, `element`,
/// `contains`). Reads never exclude each other. A `poll` that meets readers waits for them to
/// finish instead of reporting the slot empty.
///
/// More than one producer or consumer on the same instance is a caller error. Ordering is then
/// unspecified, but the slot is never read and written at the same time.
pub struct OneSlotQueue<E> {
  state: AtomicUsize,
  slot: UnsafeCell<MaybeUninit<E>>,
}

// The phase hands the slot to one writer at a time; shared reads need `E: Sync`.
unsafe impl<E: Send> Send for OneSlotQueue<E> {}
unsafe impl<E: Send + Sync> Sync for OneSlotQueue<E> {}

impl<E> OneSlotQueue<E> {
  pub const fn new() -> Self {
    Self {
      state: AtomicUsize::new(EMPTY),
      slot: UnsafeCell::new(MaybeUninit::uninit()),
    }
  }

  fn try_offer(&self, element: E) -> Result<(), E> {
    if self
      .state
      .compare_exchange(EMPTY, WRITING, Ordering::Acquire, Ordering::Relaxed)
      .is_err()
    {
      return Err(element);
    }
    unsafe {
      (*self.slot.get()).write(element);
    }
    self.state.store(FULL, Ordering::Release);
    Ok(())
  }

  fn take(&self) -> Option<E> {
    let mut current = self.state.load(Ordering::Acquire);
    loop {
      if current & PHASE_MASK != FULL {
        return None;
      }
      if current != FULL {
        thread::yield_now();
        current = self.state.load(Ordering::Acquire);
        continue;
      }
      match self
        .state
        .compare_exchange_weak(FULL, TAKING, Ordering::Acquire, Ordering::Acquire)
      {
        Ok(_) => break,
        Err(actual) => current = actual,
      }
    }
    let element = unsafe { (*self.slot.get()).assume_init_read() };
    self.state.store(EMPTY, Ordering::Release);
    Some(element)
  }

  fn inspect<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
    let mut current = self.state.load(Ordering::Acquire);
    loop {
      if current & PHASE_MASK != FULL {
        return None;
      }
      match self
        .state
        .compare_exchange_weak(current, current + READER, Ordering::Acquire, Ordering::Acquire)
      {
        Ok(_) => break,
        Err(actual) => current = actual,
      }
    }
    let _release = ReleaseReader(&self.state);
    Some(f(unsafe { (*self.slot.get()).assume_init_ref() }))
  }

  fn is_occupied(&self) -> bool {
    matches!(self.state.load(Ordering::Acquire) & PHASE_MASK, FULL | TAKING)
  }

  /// Inserts `element`, spinning until the consumer frees the slot.
  ///
  /// Never returns if nothing drains the queue. Use [`Queue::offer`] for a non-blocking insert or
  /// [`OneSlotQueue::put_timeout`] to bound the wait.
  pub fn put(&self, element: E) {
    let mut element = element;
    loop {
      match self.try_offer(element) {
        Ok(()) => return,
        Err(rejected) => {
          element = rejected;
          thread::yield_now();
        }
      }
    }
  }

  /// Inserts `element`, spinning for at most `timeout` until the slot is free.
  ///
  /// # Return Value / 戻り値
  /// - `Ok(())` - If the element was inserted.
  /// - `Err(QueueError::Timeout(element))` - If the slot stayed occupied.
  pub fn put_timeout(&self, element: E, timeout: Duration) -> Result<(), QueueError<E>> {
    let Some(deadline) = Instant::now().checked_add(timeout) else {
      self.put(element);
      return Ok(());
    };
    let mut element = element;
    loop {
      match self.try_offer(element) {
        Ok(()) => return Ok(()),
        Err(rejected) if Instant::now() >= deadline => {
          tracing::debug!("OneSlotQueue::put_timeout: gave up after {:?}", timeout);
          return Err(QueueError::Timeout(rejected));
        }
        Err(rejected) => {
          element = rejected;
          thread::yield_now();
        }
      }
    }
  }

  pub fn contains(&self, element: &E) -> bool
  where
    E: PartialEq, {
    self.inspect(|current| current == element).unwrap_or(false)
  }
}

struct ReleaseReader<'a>(&'a AtomicUsize);

impl Drop for ReleaseReader<'_> {
  fn drop(&mut self) {
    self.0.fetch_sub(READER, Ordering::Release);
  }
}

impl<E> Default for OneSlotQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> Drop for OneSlotQueue<E> {
  fn drop(&mut self) {
    if *self.state.get_mut() & PHASE_MASK == FULL {
      unsafe { self.slot.get_mut().assume_init_drop() };
    }
  }
}

impl<E> Debug for OneSlotQueue<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("OneSlotQueue")
      .field("occupied", &self.is_occupied())
      .finish()
  }
}

impl<E: Element> QueueBase<E> for OneSlotQueue<E> {
  fn len(&self) -> usize {
    usize::from(self.is_occupied())
  }

  fn capacity_class(&self) -> CapacityClass {
    CapacityClass::Exact(1)
  }
}

impl<E: Element> Queue<E> for OneSlotQueue<E> {
  fn offer(&self, element: E) -> Result<(), QueueError<E>> {
    self.try_offer(element).map_err(QueueError::Full)
  }

  fn offer_all(&self, elements: Vec<E>) -> Result<(), QueueError<E>> {
    Err(QueueError::Rejected(elements))
  }

  fn poll(&self) -> Option<E> {
    self.take()
  }

  fn peek(&self) -> Option<E>
  where
    E: Clone, {
    self.inspect(E::clone)
  }

  /// Returns the current value, or `Ok(None)` when the slot is empty. Unlike most queues this
  /// never fails.
  fn element(&self) -> Result<Option<E>, QueueError<E>>
  where
    E: Clone, {
    Ok(self.peek())
  }

  /// Empties the slot and returns what it held, or `Ok(None)`. Unlike most queues this never
  /// fails.
  fn remove(&self) -> Result<Option<E>, QueueError<E>> {
    Ok(self.take())
  }

  fn clear(&self) {
    drop(self.take());
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use std::sync::atomic::AtomicBool;

  use static_assertions::assert_impl_all;

  use super::*;
  use crate::collections::queue::QueueExt;

  assert_impl_all!(OneSlotQueue<String>: Send, Sync);

  #[test]
  fn offer_poll_cycle() {
    let queue = OneSlotQueue::new();
    assert_eq!(queue.offer("a"), Ok(()));
    assert_eq!(queue.offer("b"), Err(QueueError::Full("b")));
    assert_eq!(queue.poll(), Some("a"));
    assert_eq!(queue.poll(), None);
    assert_eq!(queue.offer("c"), Ok(()));
    assert_eq!(queue.len(), 1);
  }

  #[test]
  fn peek_does_not_clear() {
    let queue = OneSlotQueue::<String>::new();
    assert_eq!(queue.peek(), None);
    queue.offer(String::from("a")).unwrap();
    assert_eq!(queue.peek(), Some(String::from("a")));
    assert_eq!(queue.len(), 1);
    assert!(queue.contains(&String::from("a")));
    assert!(!queue.contains(&String::from("b")));
  }

  #[test]
  fn element_and_remove_do_not_fail_when_empty() {
    let queue = OneSlotQueue::<i32>::new();
    assert_eq!(queue.element(), Ok(None));
    assert_eq!(queue.remove(), Ok(None));

    queue.offer(7).unwrap();
    assert_eq!(queue.element(), Ok(Some(7)));
    assert_eq!(queue.remove(), Ok(Some(7)));
    assert!(queue.is_empty());
  }

  #[test]
  fn clear_empties_the_slot() {
    let queue = OneSlotQueue::new();
    queue.offer(1).unwrap();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.offer(2), Ok(()));
  }

  #[test]
  fn bulk_insert_is_rejected() {
    let queue = OneSlotQueue::new();
    assert_eq!(queue.offer_all(vec![1]), Err(QueueError::Rejected(vec![1])));
    assert!(queue.is_empty());
  }

  #[test]
  fn iteration_is_destructive() {
    let queue = OneSlotQueue::new();
    queue.offer(5).unwrap();
    assert_eq!(queue.poll_iter().collect::<Vec<_>>(), vec![5]);
    assert_eq!(queue.poll_iter().count(), 0);
  }

  #[test]
  fn put_timeout_hands_element_back() {
    let queue = OneSlotQueue::new();
    queue.put(1);
    assert_eq!(
      queue.put_timeout(2, Duration::from_millis(10)),
      Err(QueueError::Timeout(2))
    );
    assert_eq!(queue.poll(), Some(1));
    assert_eq!(queue.put_timeout(3, Duration::from_millis(10)), Ok(()));
  }

  #[test]
  fn dropping_an_occupied_queue_drops_the_element() {
    let marker = Arc::new(());
    let queue = OneSlotQueue::new();
    queue.offer(Arc::clone(&marker)).unwrap();
    assert_eq!(Arc::strong_count(&marker), 2);
    drop(queue);
    assert_eq!(Arc::strong_count(&marker), 1);
  }

  #[test]
  fn single_producer_single_consumer_transfers_everything_in_order() {
    const COUNT: usize = 10_000;
    let queue = Arc::new(OneSlotQueue::new());

    let producer = {
      let queue = Arc::clone(&queue);
      thread::spawn(move || {
        for i in 0..COUNT {
          queue.put(i);
        }
      })
    };

    let mut received = Vec::with_capacity(COUNT);
    while received.len() < COUNT {
      match queue.poll() {
        Some(value) => received.push(value),
        None => thread::yield_now(),
      }
    }
    producer.join().unwrap();

    assert_eq!(received, (0..COUNT).collect::<Vec<_>>());
    assert!(queue.is_empty());
  }

  #[derive(Debug)]
  struct SlowClone {
    value: i32,
    cloning: Arc<AtomicBool>,
  }

  impl Clone for SlowClone {
    fn clone(&self) -> Self {
      self.cloning.store(true, Ordering::SeqCst);
      thread::sleep(Duration::from_millis(100));
      Self {
        value: self.value,
        cloning: Arc::clone(&self.cloning),
      }
    }
  }

  #[test]
  fn poll_during_peek_returns_the_value() {
    let cloning = Arc::new(AtomicBool::new(false));
    let queue = Arc::new(OneSlotQueue::new());
    queue
      .offer(SlowClone {
        value: 7,
        cloning: Arc::clone(&cloning),
      })
      .unwrap();

    let reader = {
      let queue = Arc::clone(&queue);
      thread::spawn(move || queue.peek().map(|element| element.value))
    };
    while !cloning.load(Ordering::SeqCst) {
      thread::yield_now();
    }

    assert_eq!(queue.len(), 1);
    assert_eq!(queue.poll().map(|element| element.value), Some(7));
    assert_eq!(reader.join().unwrap(), Some(7));
    assert!(queue.is_empty());
  }

  #[test]
  fn concurrent_peeks_see_the_same_value() {
    let cloning = Arc::new(AtomicBool::new(false));
    let queue = Arc::new(OneSlotQueue::new());
    queue
      .offer(SlowClone {
        value: 3,
        cloning: Arc::clone(&cloning),
      })
      .unwrap();

    let reader = {
      let queue = Arc::clone(&queue);
      thread::spawn(move || queue.peek().map(|element| element.value))
    };
    while !cloning.load(Ordering::SeqCst) {
      thread::yield_now();
    }

    assert_eq!(queue.peek().map(|element| element.value), Some(3));
    assert_eq!(reader.join().unwrap(), Some(3));
    assert_eq!(queue.len(), 1);
  }
}
