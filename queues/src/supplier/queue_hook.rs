use std::fmt::Debug;

use crate::collections::{Element, QueueRef};

/// Sees every queue a [`QueueSupplier`](crate::QueueSupplier) builds, right before it is handed
/// out, and may wrap or replace it.
///
/// Suppliers call [`QueueHook::wrap_queue`] exactly once per construction. Nothing else on a
/// queue's access path (`offer`, `poll`, `peek`, ...) goes through the hook.
pub trait QueueHook: Debug + Clone + Send + Sync + 'static {
  fn wrap_queue<E: Element>(&self, queue: QueueRef<E>) -> QueueRef<E>;
}

/// Hands every queue out unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityHook;

impl QueueHook for IdentityHook {
  fn wrap_queue<E: Element>(&self, queue: QueueRef<E>) -> QueueRef<E> {
    queue
  }
}
