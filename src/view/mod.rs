//! View module - card/chart view switching

mod container;
mod controller;

pub use container::{Container, Panel};
pub use controller::{View, ViewController, ViewError, DEFAULT_KIND};
