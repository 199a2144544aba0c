use once_cell::sync::Lazy;

use crate::collections::Element;
use crate::config::QueuesConfig;
use crate::supplier::{IdentityHook, QueueHook, QueueSupplier, SupplierKind, SupplierTable};

static GLOBAL_QUEUES: Lazy<Queues> = Lazy::new(|| match QueuesConfig::from_env() {
  Ok(config) => Queues::new(config),
  Err(err) => {
    tracing::warn!("Queues::global: {}, falling back to the default configuration", err);
    Queues::new(QueuesConfig::default())
  }
});

/// Hands out queue suppliers sized for the buffers between pipeline stages.<br/>
/// パイプラインのステージ間バッファ用のキューサプライヤを提供するファクトリ。
///
/// The mapping from a requested size to a queue kind is fixed when the factory is built, so the
/// same request always yields the same [`SupplierKind`].
#[derive(Debug, Clone)]
pub struct Queues<H = IdentityHook> {
  config: QueuesConfig,
  table: SupplierTable,
  hook: H,
}

impl Queues<IdentityHook> {
  pub fn new(config: QueuesConfig) -> Self {
    Self::with_hook(config, IdentityHook)
  }

  /// The process-wide factory, configured once from the environment on first use.
  pub fn global() -> &'static Queues {
    &GLOBAL_QUEUES
  }
}

impl Default for Queues<IdentityHook> {
  fn default() -> Self {
    Self::new(QueuesConfig::default())
  }
}

impl<H: QueueHook> Queues<H> {
  pub fn with_hook(config: QueuesConfig, hook: H) -> Self {
    tracing::debug!(
      "Queues::with_hook: xs_buffer_size = {}, small_buffer_size = {}",
      config.xs_buffer_size(),
      config.small_buffer_size()
    );
    Self {
      config,
      table: SupplierTable::new(&config),
      hook,
    }
  }

  pub fn config(&self) -> &QueuesConfig {
    &self.config
  }

  pub fn hook(&self) -> &H {
    &self.hook
  }

  /// Returns a supplier of bounded queues holding about `requested` elements.
  ///
  /// `usize::MAX` and sizes above the bounded limit yield an unbounded supplier, 0 and 1 yield
  /// the empty and the one-slot queue, and anything else below 8 is raised to 8.
  pub fn supplier_for<E: Element>(&self, requested: usize) -> QueueSupplier<E, H> {
    self.supplier(self.table.resolve(requested))
  }

  /// Returns a supplier of unbounded queues linked by chunks of `link_size` elements.
  pub fn unbounded_linked<E: Element>(&self, link_size: usize) -> QueueSupplier<E, H> {
    self.supplier(self.table.resolve_linked(link_size))
  }

  /// Returns a supplier of unbounded queues safe for many concurrent producers.
  pub fn unbounded_multi_producer<E: Element>(&self) -> QueueSupplier<E, H> {
    self.supplier(SupplierKind::UnboundedMultiProducer)
  }

  pub fn empty<E: Element>(&self) -> QueueSupplier<E, H> {
    self.supplier(SupplierKind::Empty)
  }

  pub fn one<E: Element>(&self) -> QueueSupplier<E, H> {
    self.supplier(SupplierKind::One)
  }

  pub fn xs<E: Element>(&self) -> QueueSupplier<E, H> {
    self.supplier(SupplierKind::Xs)
  }

  pub fn small<E: Element>(&self) -> QueueSupplier<E, H> {
    self.supplier(SupplierKind::Small)
  }

  /// Returns the default unbounded supplier, linked by the small buffer size.
  pub fn unbounded<E: Element>(&self) -> QueueSupplier<E, H> {
    self.supplier(SupplierKind::SmallUnbounded)
  }

  /// Returns a supplier of the given kind, bypassing size resolution.
  pub fn supplier<E: Element>(&self, kind: SupplierKind) -> QueueSupplier<E, H> {
    QueueSupplier::new(kind, self.config, self.hook.clone())
  }
}
