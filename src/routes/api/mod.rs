mod handler;
mod model;

pub use handler::{health, users};
