#![forbid(unsafe_code)]

pub mod footprint;
pub mod model;
pub mod share;
pub mod time;
pub mod tips;

pub use time::Clock;
