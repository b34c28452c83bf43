//! Value objects - validated-at-construction types used at the store boundary

mod names;

pub use names::{Name, Title};
