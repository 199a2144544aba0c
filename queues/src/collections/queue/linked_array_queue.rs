use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::bit_math::ceiling_next_power_of_two;
use crate::collections::element::Element;
use crate::collections::queue::{CapacityClass, Queue, QueueBase, QueueError};

pub const MIN_LINK_SIZE: usize = 8;
pub const MAX_LINK_SIZE: usize = 1 << 30;

#[derive(Debug)]
struct Links<E> {
  links: VecDeque<VecDeque<E>>,
  len: usize,
}

/// An unbounded FIFO that grows one fixed-size link at a time.
///
/// Only the front link is ever empty, and only while it is the sole link.
#[derive(Debug)]
pub struct LinkedArrayQueue<E> {
  link_size: usize,
  inner: Mutex<Links<E>>,
}

impl<E> LinkedArrayQueue<E> {
  /// Creates a queue whose links hold `link_size` elements, rounded up to a power of two and to
  /// at least [`MIN_LINK_SIZE`].
  pub fn new(link_size: usize) -> Self {
    Self {
      link_size: normalize_link_size(link_size),
      inner: Mutex::new(Links {
        links: VecDeque::new(),
        len: 0,
      }),
    }
  }

  pub fn link_size(&self) -> usize {
    self.link_size
  }

  /// Returns how many links are currently allocated.
  pub fn link_count(&self) -> usize {
    self.inner.lock().links.len()
  }
}

fn normalize_link_size(link_size: usize) -> usize {
  let clamped = link_size.clamp(1, MAX_LINK_SIZE) as isize;
  match ceiling_next_power_of_two(clamped) {
    Ok(size) => (size as usize).max(MIN_LINK_SIZE),
    Err(_) => MAX_LINK_SIZE,
  }
}

impl<E: Element> QueueBase<E> for LinkedArrayQueue<E> {
  fn len(&self) -> usize {
    self.inner.lock().len
  }

  fn capacity_class(&self) -> CapacityClass {
    CapacityClass::Unbounded
  }
}

impl<E: Element> Queue<E> for LinkedArrayQueue<E> {
  fn offer(&self, element: E) -> Result<(), QueueError<E>> {
    let mut inner = self.inner.lock();
    let needs_link = inner.links.back().map_or(true, |link| link.len() >= self.link_size);
    if needs_link {
      inner.links.push_back(VecDeque::new());
    }
    if let Some(link) = inner.links.back_mut() {
      link.push_back(element);
    }
    inner.len += 1;
    Ok(())
  }

  fn poll(&self) -> Option<E> {
    let mut inner = self.inner.lock();
    let element = inner.links.front_mut()?.pop_front()?;
    let front_drained = inner.links.front().is_some_and(VecDeque::is_empty);
    if front_drained && inner.links.len() > 1 {
      inner.links.pop_front();
    }
    inner.len -= 1;
    Some(element)
  }

  fn peek(&self) -> Option<E>
  where
    E: Clone, {
    self.inner.lock().links.front()?.front().cloned()
  }

  fn clear(&self) {
    let mut inner = self.inner.lock();
    inner.links.clear();
    inner.len = 0;
  }
}
