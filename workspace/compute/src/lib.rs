pub mod live;
pub mod lorenz;

pub use live::{LiveAction, LiveEvent, LivePhase, LiveUpdates};
pub use lorenz::{derive, LorenzPoint};
