pub mod app_config;
pub mod toggles;

pub use app_config::Config;
pub use toggles::load_toggles;
