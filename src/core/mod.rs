pub mod boot;
pub mod burst;
pub mod constants;
pub mod easing;
pub mod error;
pub mod follower;
pub mod network;
pub mod orbit;
pub mod particles;
pub mod pointer;
pub mod projects;
pub mod scheduler;
pub mod scramble;
pub mod scroll;
pub mod spy;
pub mod surface;
pub mod triggers;

pub use constants::*;
pub use particles::{FieldParams, ParticleField};
pub use pointer::PointerTracker;
pub use scheduler::{FrameScheduler, FrameTime, Tickable, TimeScale};
pub use scroll::{ScrollEngine, ScrollParams};
pub use surface::{Rgba, Surface};
