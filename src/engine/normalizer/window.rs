//! ### English
//! Last known window size and focus.
//!
//! ### 中文
//! 最近一次已知的窗口尺寸与焦点状态。

use dpi::PhysicalSize;

/// ### English
/// Window state tracked by the normalizer. Starts at `0x0`, unfocused, so the first idle
/// poll reports the initial size.
///
/// ### 中文
/// normalizer 跟踪的窗口状态。初始为 `0x0` 且未获得焦点，因此首次空闲轮询会上报初始尺寸。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowState {
    pub last_size: PhysicalSize<u32>,
    pub has_focus: bool,
}

impl WindowState {
    /// ### English
    /// Records `size`; returns `true` if it differs from the previous one.
    ///
    /// ### 中文
    /// 记录 `size`；若与之前不同则返回 `true`。
    pub fn update_size(&mut self, size: PhysicalSize<u32>) -> bool {
        if self.last_size == size {
            return false;
        }
        self.last_size = size;
        true
    }
}
