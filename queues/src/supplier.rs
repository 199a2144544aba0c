mod queue_hook;
mod queue_supplier;
mod queues;
mod supplier_kind;

pub use self::{queue_hook::*, queue_supplier::*, queues::*, supplier_kind::*};
