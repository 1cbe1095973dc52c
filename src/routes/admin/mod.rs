mod handler;
mod model;

pub use handler::{get_config, login, stats, update_config};
