use std::path::PathBuf;
use std::sync::Arc;
use boxoffice_catalog::SeatInventory;
use boxoffice_core::Toggles;
use boxoffice_order::OrderLog;
use tokio::sync::Mutex;

/// Seat map and order log for the running process.
///
/// Both live behind one lock so that picking seats, marking them sold and
/// recording the order happen as a single step.
#[derive(Default)]
pub struct BoxOffice {
    pub inventory: SeatInventory,
    pub orders: OrderLog,
}

#[derive(Clone)]
pub struct AppState {
    pub toggles: Toggles,
    pub box_office: Arc<Mutex<BoxOffice>>,
    pub pages_dir: PathBuf,
}

impl AppState {
    pub fn new(toggles: Toggles, pages_dir: impl Into<PathBuf>) -> Self {
        Self {
            toggles,
            box_office: Arc::new(Mutex::new(BoxOffice::default())),
            pages_dir: pages_dir.into(),
        }
    }
}
