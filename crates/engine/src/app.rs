//! Application state and composition.

use std::sync::Arc;

use crate::entities::{RecordService, Records};
use crate::infrastructure::ports::RecordRepo;
use crate::use_cases::{DataService, RecordUseCases};

/// Main application state.
///
/// Built once at startup and passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub records: Arc<dyn DataService>,
}

impl App {
    /// Wire repository -> entity -> use case for the given storage.
    pub fn new(record_repo: Arc<dyn RecordRepo>) -> Self {
        let records: Arc<dyn RecordService> = Arc::new(Records::new(record_repo));
        let data: Arc<dyn DataService> = Arc::new(RecordUseCases::new(records));
        Self::with_data_service(data)
    }

    /// Build around an already-assembled use case layer.
    pub fn with_data_service(records: Arc<dyn DataService>) -> Self {
        Self {
            use_cases: UseCases { records },
        }
    }
}
