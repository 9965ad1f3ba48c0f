//! Data sources that feed the analytics core.
//!
//! - `sample`: deterministic synthetic history for the bundled universe

pub mod sample;

pub use sample::{CompanyProfile, SampleStock, UNIVERSE, generate_stock, generate_universe, trading_calendar};
