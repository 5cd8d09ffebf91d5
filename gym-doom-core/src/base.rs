//! Core functionalities.
mod env;
mod step;
pub use env::Env;
pub use step::Step;
use std::fmt::Debug;

/// An action of the environment.
pub trait Act: Clone + Debug {
    /// Returns the number of actions in the object.
    fn len(&self) -> usize;
}
