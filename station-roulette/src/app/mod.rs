mod operation;
mod roulette_app;

pub use operation::RouletteOperation;
pub use roulette_app::RouletteApp;
