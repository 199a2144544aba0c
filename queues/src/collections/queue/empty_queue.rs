use std::fmt::{Debug, Formatter};
use std::iter;
use std::marker::PhantomData;

use crate::collections::element::Element;
use crate::collections::queue::{CapacityClass, Queue, QueueBase, QueueError};

/// An immutable queue that never holds anything.<br/>
/// Stands in wherever a queue is required but no buffering is ever needed.
pub struct EmptyQueue<E> {
  phantom_data: PhantomData<fn() -> E>,
}

impl<E> EmptyQueue<E> {
  pub const fn new() -> Self {
    Self {
      phantom_data: PhantomData,
    }
  }

  /// Returns an empty iterator. Unlike [`PollIter`](crate::PollIter) it can be restarted any
  /// number of times, as there is no state to exhaust.
  pub fn iter(&self) -> iter::Empty<E> {
    iter::empty()
  }

  pub fn contains(&self, _element: &E) -> bool {
    false
  }
}

impl<E> Debug for EmptyQueue<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EmptyQueue").finish()
  }
}

impl<E> Clone for EmptyQueue<E> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<E> Copy for EmptyQueue<E> {}

impl<E> Default for EmptyQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E: Element> QueueBase<E> for EmptyQueue<E> {
  fn len(&self) -> usize {
    0
  }

  fn is_empty(&self) -> bool {
    true
  }

  fn capacity_class(&self) -> CapacityClass {
    CapacityClass::Exact(0)
  }
}

impl<E: Element> Queue<E> for EmptyQueue<E> {
  fn offer(&self, element: E) -> Result<(), QueueError<E>> {
    Err(QueueError::Full(element))
  }

  fn offer_all(&self, elements: Vec<E>) -> Result<(), QueueError<E>> {
    Err(QueueError::Rejected(elements))
  }

  fn poll(&self) -> Option<E> {
    None
  }

  fn peek(&self) -> Option<E>
  where
    E: Clone, {
    None
  }

  fn element(&self) -> Result<Option<E>, QueueError<E>>
  where
    E: Clone, {
    Err(QueueError::NoSuchElement)
  }

  fn remove(&self) -> Result<Option<E>, QueueError<E>> {
    Err(QueueError::NoSuchElement)
  }

  fn clear(&self) {}
}
