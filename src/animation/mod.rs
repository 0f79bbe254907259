//! Camera animation driven by elapsed time
//!
//! The orbit camera swings back and forth in front of the scene; every frame
//! is a pure function of the elapsed seconds handed in by the host.

mod orbit;
mod clock;

pub use orbit::{OrbitCamera, Frame, camera_angle, camera_position, MAX_SWING};
pub use clock::FrameClock;
