pub mod models;
pub mod log;

pub use models::{CustomerRef, Order};
pub use log::OrderLog;
