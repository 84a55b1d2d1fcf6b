//! HTTP middleware components.

pub mod logging;
pub mod metrics;
pub mod trace_id;

pub use logging::init_logging;
pub use metrics::{init_metrics, metrics_handler, metrics_middleware, record_registration};
pub use trace_id::{trace_id, REQUEST_ID_HEADER};
