//! ### English
//! ABI version and kind-constant getters (so hosts need no C header).
//!
//! ### 中文
//! ABI 版本与类型常量获取函数（宿主无需依赖 C 头文件）。

use crate::engine::flags::AKI_INPUT_FLAG_NO_MODIFIER_CLEANUP;
use crate::engine::input::EVENT_QUEUE_CAPACITY;
use crate::engine::input_types::{
    AKI_RAW_KIND_CHAR, AKI_RAW_KIND_FOCUSED, AKI_RAW_KIND_KEY_DOWN, AKI_RAW_KIND_KEY_UP,
    AKI_RAW_KIND_MOUSE_DOWN, AKI_RAW_KIND_MOUSE_MOVE, AKI_RAW_KIND_MOUSE_SCROLL,
    AKI_RAW_KIND_MOUSE_UP, AKI_RAW_KIND_QUIT_REQUESTED, AKI_RAW_KIND_RESIZED,
    AKI_RAW_KIND_UNFOCUSED,
};

use super::event::{
    AKI_EVENT_KIND_FOCUSED, AKI_EVENT_KIND_KEY_PRESSED, AKI_EVENT_KIND_KEY_RELEASED,
    AKI_EVENT_KIND_MAXIMIZED, AKI_EVENT_KIND_MOUSE_MOVED, AKI_EVENT_KIND_MOUSE_PRESSED,
    AKI_EVENT_KIND_MOUSE_RELEASED, AKI_EVENT_KIND_MOUSE_WHEEL, AKI_EVENT_KIND_QUIT,
    AKI_EVENT_KIND_RESIZED, AKI_EVENT_KIND_TEXT_INPUT, AKI_EVENT_KIND_UNFOCUSED,
    AKI_EVENT_TEXT_CAPACITY,
};

#[unsafe(no_mangle)]
/// ### English
/// Returns the C ABI version.
///
/// ### 中文
/// 返回 C ABI 版本号。
pub extern "C" fn aki_input_abi_version() -> u32 {
    super::AKI_INPUT_ABI_VERSION
}

#[unsafe(no_mangle)]
/// ### English
/// Returns `AKI_INPUT_FLAG_NO_MODIFIER_CLEANUP`.
///
/// ### 中文
/// 返回 `AKI_INPUT_FLAG_NO_MODIFIER_CLEANUP`。
pub extern "C" fn aki_input_flag_no_modifier_cleanup() -> u32 {
    AKI_INPUT_FLAG_NO_MODIFIER_CLEANUP
}

#[unsafe(no_mangle)]
/// ### English
/// Returns the queue's slot count (at most `capacity - 1` events are held at once).
///
/// ### 中文
/// 返回队列槽位数（同一时刻最多容纳 `capacity - 1` 个事件）。
pub extern "C" fn aki_input_queue_capacity() -> u32 {
    EVENT_QUEUE_CAPACITY as u32
}

#[unsafe(no_mangle)]
/// ### English
/// Returns the size of `AkiSemanticEvent.text` in bytes.
///
/// ### 中文
/// 返回 `AkiSemanticEvent.text` 的字节数。
pub extern "C" fn aki_input_event_text_capacity() -> u32 {
    AKI_EVENT_TEXT_CAPACITY as u32
}

macro_rules! kind_getters {
    ($($name:ident => $value:expr),* $(,)?) => {
        $(
            #[unsafe(no_mangle)]
            #[doc = concat!("Returns `", stringify!($value), "`.")]
            pub extern "C" fn $name() -> u32 {
                $value
            }
        )*
    };
}

kind_getters! {
    aki_raw_kind_key_down => AKI_RAW_KIND_KEY_DOWN,
    aki_raw_kind_key_up => AKI_RAW_KIND_KEY_UP,
    aki_raw_kind_char => AKI_RAW_KIND_CHAR,
    aki_raw_kind_mouse_down => AKI_RAW_KIND_MOUSE_DOWN,
    aki_raw_kind_mouse_up => AKI_RAW_KIND_MOUSE_UP,
    aki_raw_kind_mouse_scroll => AKI_RAW_KIND_MOUSE_SCROLL,
    aki_raw_kind_mouse_move => AKI_RAW_KIND_MOUSE_MOVE,
    aki_raw_kind_resized => AKI_RAW_KIND_RESIZED,
    aki_raw_kind_focused => AKI_RAW_KIND_FOCUSED,
    aki_raw_kind_unfocused => AKI_RAW_KIND_UNFOCUSED,
    aki_raw_kind_quit_requested => AKI_RAW_KIND_QUIT_REQUESTED,
}

kind_getters! {
    aki_event_kind_quit => AKI_EVENT_KIND_QUIT,
    aki_event_kind_resized => AKI_EVENT_KIND_RESIZED,
    aki_event_kind_focused => AKI_EVENT_KIND_FOCUSED,
    aki_event_kind_unfocused => AKI_EVENT_KIND_UNFOCUSED,
    aki_event_kind_key_pressed => AKI_EVENT_KIND_KEY_PRESSED,
    aki_event_kind_key_released => AKI_EVENT_KIND_KEY_RELEASED,
    aki_event_kind_text_input => AKI_EVENT_KIND_TEXT_INPUT,
    aki_event_kind_mouse_pressed => AKI_EVENT_KIND_MOUSE_PRESSED,
    aki_event_kind_mouse_released => AKI_EVENT_KIND_MOUSE_RELEASED,
    aki_event_kind_mouse_moved => AKI_EVENT_KIND_MOUSE_MOVED,
    aki_event_kind_mouse_wheel => AKI_EVENT_KIND_MOUSE_WHEEL,
    aki_event_kind_maximized => AKI_EVENT_KIND_MAXIMIZED,
}
