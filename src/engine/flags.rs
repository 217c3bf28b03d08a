//! ### English
//! Bitflags controlling optional pipeline behaviors.
//!
//! These are passed through the C ABI as a `u32` bitmask to `aki_input_create`.
//! Unknown bits are ignored.
//!
//! ### 中文
//! 控制事件管线可选行为的位标志。
//!
//! 通过 C ABI 以 `u32` 位掩码传给 `aki_input_create`，未知位会被忽略。

/// ### English
/// Disables the synthetic modifier key-up events injected when the window loses focus.
///
/// Only useful for backends that already deliver their own key-up events on focus loss;
/// otherwise alt/ctrl/shift may stay "stuck" in the editor after an alt-tab.
///
/// ### 中文
/// 关闭窗口失去焦点时注入的修饰键抬起（key-up）合成事件。
///
/// 仅适用于失焦时自己会投递 key-up 的后端；否则 alt-tab 之后编辑器里的 alt/ctrl/shift 可能一直处于按下状态。
pub const AKI_INPUT_FLAG_NO_MODIFIER_CLEANUP: u32 = 1 << 0;

/// ### English
/// All flag bits understood by this crate.
///
/// ### 中文
/// 本 crate 能识别的所有标志位。
pub const AKI_INPUT_FLAGS_ALL: u32 = AKI_INPUT_FLAG_NO_MODIFIER_CLEANUP;
