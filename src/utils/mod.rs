//! Project-specific utilities live here.

pub mod clock;
pub mod ids;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ids::{IdGenerator, SequentialIdGenerator, ShortIdGenerator};
