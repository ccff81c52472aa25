//! Pure data structures hosted by the [`SessionHost`](crate::framework::SessionHost).

pub mod mvp;
pub mod website;

pub use mvp::*;
pub use website::*;
