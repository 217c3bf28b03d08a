//! ### English
//! What the normalizer needs from the windowing backend: the current framebuffer size and a
//! monotonic clock.
//!
//! ### 中文
//! normalizer 需要从窗口后端获得的信息：当前 framebuffer 尺寸与单调时钟。
mod clock;
mod size;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use size::{SharedWindowSize, SizeSource};
