pub mod calculation_controller;

pub use calculation_controller::{configure, create_calculation, get_calculation_defaults};
