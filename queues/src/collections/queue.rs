use std::fmt::Debug;
use std::sync::Arc;

mod array_queue;
mod blocking_array_queue;
mod capacity;
mod capacity_class;
mod empty_queue;
mod general_queue;
mod linked_array_queue;
mod mpsc_linked_queue;
mod one_slot_queue;
mod poll_iter;
mod queue_error;

pub use self::{
  array_queue::*, blocking_array_queue::*, capacity::*, capacity_class::*, empty_queue::*, linked_array_queue::*,
  mpsc_linked_queue::*, one_slot_queue::*, poll_iter::*, queue_error::*,
};

/// A queue shared between the producer and the consumer it was built for.
pub type QueueRef<E> = Arc<dyn Queue<E>>;

/// Size and capacity information every queue exposes.<br/>
/// キューが公開するサイズと容量の情報。
pub trait QueueBase<E>: Debug + Send + Sync {
  /// Returns the number of elements currently held.
  fn len(&self) -> usize;

  /// Returns whether this queue holds no element.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns whether this queue holds at least one element.
  fn non_empty(&self) -> bool {
    !self.is_empty()
  }

  /// Returns the storage bound this queue was built with.<br/>
  /// The value is fixed for the whole lifetime of the instance.
  fn capacity_class(&self) -> CapacityClass {
    CapacityClass::Unknown
  }

  /// Returns the number of elements that can still be inserted without blocking.<br/>
  /// Only blocking queues answer this; it is the free space, not the total capacity.
  fn remaining_capacity(&self) -> Option<usize> {
    None
  }
}

/// The non-blocking operations a pipeline stage performs on its buffer.<br/>
/// パイプラインのステージがバッファに対して行うノンブロッキング操作。
pub trait Queue<E>: QueueBase<E> {
  /// Inserts `element` if that is possible right now.
  ///
  /// # Return Value / 戻り値
  /// - `Ok(())` - If the element was inserted. / 要素が挿入された場合。
  /// - `Err(QueueError::Full(element))` - If the queue rejected it. / キューが要素を拒否した場合。
  fn offer(&self, element: E) -> Result<(), QueueError<E>>;

  /// Inserts `elements` in order, stopping at the first rejection.
  ///
  /// # Return Value / 戻り値
  /// - `Ok(())` - If every element was inserted.
  /// - `Err(QueueError::Rejected(rest))` - The rejected element followed by the ones never offered.
  fn offer_all(&self, elements: Vec<E>) -> Result<(), QueueError<E>> {
    let mut elements = elements.into_iter();
    while let Some(element) = elements.next() {
      if let Err(err) = self.offer(element) {
        let mut rest = match err {
          QueueError::Full(element) | QueueError::Timeout(element) => vec![element],
          QueueError::Rejected(rejected) => rejected,
          QueueError::NoSuchElement => Vec::new(),
        };
        rest.extend(elements);
        return Err(QueueError::Rejected(rest));
      }
    }
    Ok(())
  }

  /// Removes and returns the head, or `None` if the queue is empty.
  fn poll(&self) -> Option<E>;

  /// Returns a copy of the head without removing it, or `None` if the queue is empty.
  fn peek(&self) -> Option<E>
  where
    E: Clone;

  /// Returns a copy of the head.
  ///
  /// # Return Value / 戻り値
  /// - `Ok(Some(element))` - The head of the queue.
  /// - `Err(QueueError::NoSuchElement)` - If the queue is empty.
  fn element(&self) -> Result<Option<E>, QueueError<E>>
  where
    E: Clone, {
    self.peek().map(Some).ok_or(QueueError::NoSuchElement)
  }

  /// Removes and returns the head.
  ///
  /// # Return Value / 戻り値
  /// - `Ok(Some(element))` - The removed head.
  /// - `Err(QueueError::NoSuchElement)` - If the queue is empty.
  fn remove(&self) -> Result<Option<E>, QueueError<E>> {
    self.poll().map(Some).ok_or(QueueError::NoSuchElement)
  }

  /// Drops every element currently held.
  fn clear(&self) {
    while self.poll().is_some() {}
  }
}
