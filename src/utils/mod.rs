mod depth_counter;

pub use depth_counter::{DepthCounter, DepthGuard};
