//! Intake orchestration for Trove.
//!
//! Ties the leaf crates together into the two customer-facing flows and
//! the admin mutation surface:
//!
//! - **Order**: validate → persist → notify. A notification failure
//!   never fails the flow; the order is already durably recorded, so
//!   the caller gets a degraded success with a warning instead.
//! - **Wish**: validate → notify. No durable persistence by design; a
//!   delivery failure still counts as acceptance, reported alongside.
//! - **Admin**: add/update/delete products, validate-then-delegate to
//!   the catalog. One orchestrator, one schema.
//!
//! Side effects per flow are confined to one write to the backing store
//! and one outbound network call.

mod admin;
mod error;
mod order;
mod wish;

pub use error::IntakeError;
pub use order::OrderOutcome;
pub use wish::WishOutcome;

use trove_notify::Dispatcher;
use trove_store::{Catalog, OrderRecordStore};

/// Stages of an intake pipeline. Within one request the stages run
/// strictly in sequence; a flow that exits early never reaches the
/// later stages' side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStage {
    Validating,
    Persisting,
    Notifying,
    Done,
}

impl IntakeStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeStage::Validating => "validating",
            IntakeStage::Persisting => "persisting",
            IntakeStage::Notifying => "notifying",
            IntakeStage::Done => "done",
        }
    }
}

/// The intake orchestrator.
pub struct Intake {
    catalog: Catalog,
    orders: Box<dyn OrderRecordStore>,
    dispatcher: Dispatcher,
}

impl Intake {
    pub fn new(
        catalog: Catalog,
        orders: impl OrderRecordStore + 'static,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            catalog,
            orders: Box::new(orders),
            dispatcher,
        }
    }

    /// The catalog, for the read paths the shop front uses directly.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn orders(&self) -> &dyn OrderRecordStore {
        self.orders.as_ref()
    }

    pub(crate) fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Intake, IntakeError, IntakeStage, OrderOutcome, WishOutcome};
}
