use std::sync::Arc;

use crate::collections::{ArrayQueue, Element, EmptyQueue, LinkedArrayQueue, MpscLinkedQueue, OneSlotQueue, QueueRef};
use crate::config::QueuesConfig;

/// Requests above this size fall back to [`SupplierKind::SmallUnbounded`] instead of allocating
/// a bounded buffer of that size.
pub const MAX_BOUNDED_SIZE: usize = 10_000_000;

/// Bounded requests below this size are raised to it.
pub const MIN_BOUNDED_SIZE: usize = 8;

/// Which queue a supplier builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplierKind {
  /// [`EmptyQueue`].
  Empty,
  /// [`OneSlotQueue`].
  One,
  /// [`ArrayQueue`] of the configured xs size.
  Xs,
  /// [`ArrayQueue`] of the configured small size.
  Small,
  /// [`LinkedArrayQueue`] linked by the configured xs size.
  XsUnbounded,
  /// [`LinkedArrayQueue`] linked by the configured small size.
  SmallUnbounded,
  /// [`ArrayQueue`] of exactly the given size.
  Bounded(usize),
  /// [`LinkedArrayQueue`] linked by the given size.
  UnboundedLinked(usize),
  /// [`MpscLinkedQueue`].
  UnboundedMultiProducer,
}

impl SupplierKind {
  pub(crate) fn build<E: Element>(self, config: &QueuesConfig) -> QueueRef<E> {
    match self {
      SupplierKind::Empty => Arc::new(EmptyQueue::new()),
      SupplierKind::One => Arc::new(OneSlotQueue::new()),
      SupplierKind::Xs => Arc::new(ArrayQueue::new(config.xs_buffer_size())),
      SupplierKind::Small => Arc::new(ArrayQueue::new(config.small_buffer_size())),
      SupplierKind::XsUnbounded => Arc::new(LinkedArrayQueue::new(config.xs_buffer_size())),
      SupplierKind::SmallUnbounded => Arc::new(LinkedArrayQueue::new(config.small_buffer_size())),
      SupplierKind::Bounded(size) => Arc::new(ArrayQueue::new(size)),
      SupplierKind::UnboundedLinked(link_size) => Arc::new(LinkedArrayQueue::new(link_size)),
      SupplierKind::UnboundedMultiProducer => Arc::new(MpscLinkedQueue::new()),
    }
  }
}

/// Maps request parameters to a [`SupplierKind`]. Built once per factory from its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplierTable {
  xs_buffer_size: usize,
  small_buffer_size: usize,
}

impl SupplierTable {
  pub fn new(config: &QueuesConfig) -> Self {
    Self {
      xs_buffer_size: config.xs_buffer_size(),
      small_buffer_size: config.small_buffer_size(),
    }
  }

  /// Resolves a bounded request. `usize::MAX` asks for an unbounded queue.
  pub fn resolve(&self, requested: usize) -> SupplierKind {
    if requested == usize::MAX {
      return SupplierKind::SmallUnbounded;
    }
    if requested == self.xs_buffer_size {
      return SupplierKind::Xs;
    }
    if requested == self.small_buffer_size {
      return SupplierKind::Small;
    }
    if requested == 1 {
      return SupplierKind::One;
    }
    if requested == 0 {
      return SupplierKind::Empty;
    }
    let adjusted = requested.max(MIN_BOUNDED_SIZE);
    if adjusted > MAX_BOUNDED_SIZE {
      tracing::debug!(
        "SupplierTable::resolve: {} exceeds {}, using an unbounded queue",
        requested,
        MAX_BOUNDED_SIZE
      );
      return SupplierKind::SmallUnbounded;
    }
    SupplierKind::Bounded(adjusted)
  }

  /// Resolves an unbounded request linked by `link_size`.
  pub fn resolve_linked(&self, link_size: usize) -> SupplierKind {
    if link_size == self.xs_buffer_size {
      SupplierKind::XsUnbounded
    } else if link_size == usize::MAX || link_size == self.small_buffer_size {
      SupplierKind::SmallUnbounded
    } else {
      SupplierKind::UnboundedLinked(link_size)
    }
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;

  #[rstest]
  #[case(usize::MAX, SupplierKind::SmallUnbounded)]
  #[case(32, SupplierKind::Xs)]
  #[case(256, SupplierKind::Small)]
  #[case(1, SupplierKind::One)]
  #[case(0, SupplierKind::Empty)]
  #[case(2, SupplierKind::Bounded(8))]
  #[case(7, SupplierKind::Bounded(8))]
  #[case(8, SupplierKind::Bounded(8))]
  #[case(100, SupplierKind::Bounded(100))]
  #[case(MAX_BOUNDED_SIZE, SupplierKind::Bounded(MAX_BOUNDED_SIZE))]
  #[case(MAX_BOUNDED_SIZE + 1, SupplierKind::SmallUnbounded)]
  fn resolve_follows_the_dispatch_order(#[case] requested: usize, #[case] expected: SupplierKind) {
    let table = SupplierTable::new(&QueuesConfig::default());
    assert_eq!(table.resolve(requested), expected);
  }

  #[rstest]
  #[case(32, SupplierKind::XsUnbounded)]
  #[case(256, SupplierKind::SmallUnbounded)]
  #[case(usize::MAX, SupplierKind::SmallUnbounded)]
  #[case(64, SupplierKind::UnboundedLinked(64))]
  fn resolve_linked_follows_the_dispatch_order(#[case] link_size: usize, #[case] expected: SupplierKind) {
    let table = SupplierTable::new(&QueuesConfig::default());
    assert_eq!(table.resolve_linked(link_size), expected);
  }

  #[test]
  fn configured_sizes_win_over_special_cases() {
    let table = SupplierTable::new(&QueuesConfig::new(8, 16));
    assert_eq!(table.resolve(8), SupplierKind::Xs);
    assert_eq!(table.resolve(16), SupplierKind::Small);
    assert_eq!(table.resolve(32), SupplierKind::Bounded(32));
  }
}
