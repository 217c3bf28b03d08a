//! ### English
//! Backend-reported window size (latest-wins).
//!
//! ### 中文
//! 后端上报的窗口尺寸（latest-wins）。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dpi::PhysicalSize;

/// ### English
/// Source of the backend's current framebuffer size, queried by the resize-poll heuristic.
///
/// ### 中文
/// 后端当前 framebuffer 尺寸的来源，供 resize 轮询启发式查询。
pub trait SizeSource {
    fn framebuffer_size(&self) -> PhysicalSize<u32>;
}

impl<T: SizeSource + ?Sized> SizeSource for Arc<T> {
    #[inline]
    fn framebuffer_size(&self) -> PhysicalSize<u32> {
        (**self).framebuffer_size()
    }
}

impl<T: SizeSource + ?Sized> SizeSource for &T {
    #[inline]
    fn framebuffer_size(&self) -> PhysicalSize<u32> {
        (**self).framebuffer_size()
    }
}

/// ### English
/// Size cell written by the backend (any thread) and read by the normalizer.
/// Keeps only the latest `(width, height)`.
///
/// ### 中文
/// 由后端（任意线程）写入、normalizer 读取的尺寸单元。
/// 只保留最新的 `(width, height)`。
#[repr(C, align(64))]
#[derive(Default)]
pub struct SharedWindowSize {
    /// ### English
    /// Packed `(width, height)` as two `u32` halves.
    ///
    /// ### 中文
    /// 将 `(width, height)` 以两个 `u32` 打包到一个 `u64` 中。
    packed_size: AtomicU64,
}

impl SharedWindowSize {
    pub fn new(size: PhysicalSize<u32>) -> Self {
        Self {
            packed_size: AtomicU64::new(pack_u32x2(size.width, size.height)),
        }
    }

    /// ### English
    /// Stores the latest size reported by the backend.
    ///
    /// ### 中文
    /// 写入后端上报的最新尺寸。
    pub fn set(&self, width: u32, height: u32) {
        self.packed_size
            .store(pack_u32x2(width, height), Ordering::Release);
    }

    pub fn get(&self) -> PhysicalSize<u32> {
        let (width, height) = unpack_u32x2(self.packed_size.load(Ordering::Acquire));
        PhysicalSize::new(width, height)
    }
}

impl SizeSource for SharedWindowSize {
    #[inline]
    fn framebuffer_size(&self) -> PhysicalSize<u32> {
        self.get()
    }
}

#[inline]
fn pack_u32x2(width: u32, height: u32) -> u64 {
    (width as u64) | ((height as u64) << 32)
}

#[inline]
fn unpack_u32x2(packed: u64) -> (u32, u32) {
    (packed as u32, (packed >> 32) as u32)
}
