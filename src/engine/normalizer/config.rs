//! ### English
//! Tunables for the event normalizer.
//!
//! ### 中文
//! 事件 normalizer 的可调参数。

use crate::engine::flags::AKI_INPUT_FLAG_NO_MODIFIER_CLEANUP;

/// ### English
/// Default multi-click window (seconds).
///
/// ### 中文
/// 默认多击时间窗口（秒）。
pub const DEFAULT_CLICK_INTERVAL: f64 = 0.3;

/// ### English
/// Default multi-click distance (pixels, per axis, exclusive).
///
/// ### 中文
/// 默认多击距离（像素，按轴计算，不含边界）。
pub const DEFAULT_CLICK_SLOP: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizerConfig {
    /// ### English
    /// Presses closer together than this (seconds) extend the click count.
    ///
    /// ### 中文
    /// 两次按下间隔小于该值（秒）时累加点击次数。
    pub click_interval: f64,
    /// ### English
    /// Presses must be closer than this on both axes (pixels) to extend the click count.
    ///
    /// ### 中文
    /// 两次按下在两个轴上的距离都小于该值（像素）时才累加点击次数。
    pub click_slop: f32,
    /// ### English
    /// Inject key-ups for alt/ctrl/shift when the window loses focus.
    ///
    /// ### 中文
    /// 窗口失焦时为 alt/ctrl/shift 注入 key-up。
    pub release_modifiers_on_unfocus: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            click_interval: DEFAULT_CLICK_INTERVAL,
            click_slop: DEFAULT_CLICK_SLOP,
            release_modifiers_on_unfocus: true,
        }
    }
}

impl NormalizerConfig {
    /// ### English
    /// Builds a config from `AKI_INPUT_FLAG_*` bits (unknown bits are ignored).
    ///
    /// ### 中文
    /// 由 `AKI_INPUT_FLAG_*` 位构建配置（未知位忽略）。
    pub fn from_flags(flags: u32) -> Self {
        Self {
            release_modifiers_on_unfocus: flags & AKI_INPUT_FLAG_NO_MODIFIER_CLEANUP == 0,
            ..Self::default()
        }
    }
}
