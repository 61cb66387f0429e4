mod roulette_engine;

pub use roulette_engine::{RouletteEngine, SpinHistogram};
