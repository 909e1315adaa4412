mod config;
mod seat_config;

pub use config::{Config, get_config_manager};
pub use seat_config::{Controller, MAX_NAME_LENGTH, SeatConfig};
