use std::fmt::Debug;

/// Values a queue of this crate can buffer. Implemented for every qualifying type.
///
/// `Send` lets an element cross from the producer thread to the consumer thread. `Sync` is needed
/// because [`OneSlotQueue`](crate::OneSlotQueue) lets several threads read the occupied slot
/// through `&E` at once (`peek`, `element`, `contains`), and every supplier shares one bound.
/// `Debug` feeds the messages of [`QueueError`](crate::QueueError).
pub trait Element: Debug + Send + Sync + 'static {}

impl<T> Element for T where T: Debug + Send + Sync + 'static {}
