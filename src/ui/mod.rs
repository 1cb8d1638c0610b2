//! Terminal presentation

mod terminal;

pub use terminal::{Screen, Surface};
