use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::{Element, QueueRef};
use crate::config::QueuesConfig;
use crate::supplier::{QueueHook, SupplierKind};

/// Builds a fresh, independent queue on every [`QueueSupplier::get`].<br/>
/// 呼び出しごとに新しいキューを生成するサプライヤ。
///
/// A supplier keeps no reference to the queues it produced, so it can be cloned and stored
/// freely by the stage that needs a buffer.
pub struct QueueSupplier<E, H> {
  kind: SupplierKind,
  config: QueuesConfig,
  hook: H,
  _marker: PhantomData<fn() -> E>,
}

impl<E: Element, H: QueueHook> QueueSupplier<E, H> {
  pub(crate) fn new(kind: SupplierKind, config: QueuesConfig, hook: H) -> Self {
    Self {
      kind,
      config,
      hook,
      _marker: PhantomData,
    }
  }

  pub fn kind(&self) -> SupplierKind {
    self.kind
  }

  /// Builds a new queue and passes it through the hook before handing it out.
  pub fn get(&self) -> QueueRef<E> {
    let queue = self.kind.build::<E>(&self.config);
    tracing::trace!("QueueSupplier::get: built {:?}", self.kind);
    self.hook.wrap_queue(queue)
  }
}

impl<E, H: Clone> Clone for QueueSupplier<E, H> {
  fn clone(&self) -> Self {
    Self {
      kind: self.kind,
      config: self.config,
      hook: self.hook.clone(),
      _marker: PhantomData,
    }
  }
}

impl<E, H: Debug> Debug for QueueSupplier<E, H> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("QueueSupplier")
      .field("kind", &self.kind)
      .field("hook", &self.hook)
      .finish()
  }
}
