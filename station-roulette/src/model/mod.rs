pub mod network;
mod roulette_error;

pub use roulette_error::RouletteError;
