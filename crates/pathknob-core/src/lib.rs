pub mod math;
pub mod range;

pub use range::{RangeError, ValueRange};
