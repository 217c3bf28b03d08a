//! ### English
//! Monotonic time sources (seconds as `f64`).
//!
//! ### 中文
//! 单调时间源（以 `f64` 秒表示）。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// ### English
/// Monotonic clock in seconds. Only differences between readings are meaningful.
///
/// ### 中文
/// 以秒为单位的单调时钟。只有读数之间的差值有意义。
pub trait Clock {
    fn now(&self) -> f64;
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// ### English
/// Wall-independent clock backed by `Instant`, counting from construction.
///
/// ### 中文
/// 基于 `Instant` 的单调时钟，从构造时刻开始计时。
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// ### English
/// Clock driven by the host (event replay, deterministic tests).
/// Clones share the same time.
///
/// ### 中文
/// 由宿主驱动的时钟（事件回放、确定性测试）。
/// 克隆体共享同一时间。
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    /// ### English
    /// Current time as `f64` bit pattern.
    ///
    /// ### 中文
    /// 当前时间（`f64` 的 bit pattern）。
    seconds_bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn set(&self, seconds: f64) {
        self.seconds_bits
            .store(seconds.to_bits(), Ordering::Release);
    }

    pub fn advance(&self, seconds: f64) {
        self.set(self.now() + seconds);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> f64 {
        f64::from_bits(self.seconds_bits.load(Ordering::Acquire))
    }
}
