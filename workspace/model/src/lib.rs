//! Domain value types for the event forecast: cycles, per-day event counts
//! and the document that carries both.

pub mod cycle;
pub mod document;
pub mod error;
pub mod projection;

pub use cycle::{Cycle, CycleDay, Priority};
pub use document::ForecastDocument;
pub use error::ModelError;
pub use projection::{EventCounts, EventProjection};
