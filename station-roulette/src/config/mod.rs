mod roulette_config;

pub use roulette_config::{RouletteConfig, ENV_PREFIX};
