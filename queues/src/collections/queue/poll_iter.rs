use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::queue::{Queue, QueueError};

/// A destructive iterator over a queue: every `next` polls the head.
///
/// The iterator ends once the queue is seen empty. Iterating consumes the shared queue, so it
/// cannot be restarted.
pub struct PollIter<'a, E, Q: ?Sized> {
  queue: &'a Q,
  phantom_data: PhantomData<fn() -> E>,
}

impl<'a, E, Q> PollIter<'a, E, Q>
where
  Q: Queue<E> + ?Sized,
{
  pub fn new(queue: &'a Q) -> Self {
    Self {
      queue,
      phantom_data: PhantomData,
    }
  }

  /// Calls [`Queue::remove`] on the underlying queue.
  ///
  /// This removes whatever is at the head *now*, which is not the element last returned by
  /// `next` (that one has already been polled). On a queue wider than one slot it drops the
  /// following element.
  pub fn remove(&mut self) -> Result<Option<E>, QueueError<E>> {
    self.queue.remove()
  }
}

impl<E, Q> Iterator for PollIter<'_, E, Q>
where
  Q: Queue<E> + ?Sized,
{
  type Item = E;

  fn next(&mut self) -> Option<E> {
    if self.queue.is_empty() {
      return None;
    }
    self.queue.poll()
  }
}

impl<E, Q> Debug for PollIter<'_, E, Q>
where
  Q: Debug + ?Sized,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PollIter").field("queue", &self.queue).finish()
  }
}

/// Adds [`PollIter`] to every queue, trait objects included.
pub trait QueueExt<E>: Queue<E> {
  fn poll_iter(&self) -> PollIter<'_, E, Self> {
    PollIter::new(self)
  }
}

impl<E, Q> QueueExt<E> for Q where Q: Queue<E> + ?Sized {}
