//! Built-in service implementations.
//!
//! Each service is a unit struct built through [`Default`], so the registry
//! can hand out a fresh instance per request at no cost.

mod echo;
mod sum;
mod time;

pub use echo::Echo;
pub use sum::Sum;
pub use time::Time;
