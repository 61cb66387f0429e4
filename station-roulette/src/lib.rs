//! weighted destination selection for a station roulette game. given a
//! network of stations joined by timed edges, computes shortest travel
//! times from a team's station and draws a new destination, with farther
//! stations more likely to be drawn.
pub mod algorithm;
pub mod app;
pub mod config;
pub mod engine;
pub mod model;
