//! ### English
//! Pipeline lifecycle and state queries.
//!
//! ### 中文
//! 管线生命周期与状态查询。

use std::sync::{Arc, Mutex};

use dpi::PhysicalSize;

use crate::engine::flags::AKI_INPUT_FLAGS_ALL;
use crate::engine::host::SharedWindowSize;
use crate::engine::normalizer::{EventNormalizer, NormalizerConfig};

use super::AkiInput;

#[unsafe(no_mangle)]
/// ### English
/// Creates an input pipeline.
///
/// Never returns NULL. Unknown `flags` bits are ignored.
///
/// #### Parameters
/// - `flags`: Bitmask of `AKI_INPUT_FLAG_*` values (0 for defaults).
///
/// ### 中文
/// 创建一条输入管线。
///
/// 不会返回 NULL。未知的 `flags` 位会被忽略。
///
/// #### 参数
/// - `flags`：`AKI_INPUT_FLAG_*` 的位掩码（0 表示默认配置）。
pub extern "C" fn aki_input_create(flags: u32) -> *mut AkiInput {
    let unknown = flags & !AKI_INPUT_FLAGS_ALL;
    if unknown != 0 {
        log::debug!("ignoring unknown input flags {unknown:#x}");
    }
    let size = Arc::new(SharedWindowSize::new(PhysicalSize::new(0, 0)));
    let config = NormalizerConfig::from_flags(flags);
    log::debug!("creating input pipeline (flags={flags:#x}, config={config:?})");
    let normalizer = EventNormalizer::with_shared_size(size.clone(), config);
    Box::into_raw(Box::new(AkiInput {
        queue: normalizer.queue().clone(),
        size,
        normalizer: Mutex::new(normalizer),
    }))
}

#[unsafe(no_mangle)]
/// ### English
/// Destroys a pipeline created by `aki_input_create`. Pending events are discarded.
///
/// #### Parameters
/// - `input`: Pipeline handle (NULL is ignored).
///
/// ### 中文
/// 销毁由 `aki_input_create` 创建的管线。未处理的事件会被丢弃。
///
/// #### 参数
/// - `input`：管线句柄（NULL 会被忽略）。
pub unsafe extern "C" fn aki_input_destroy(input: *mut AkiInput) {
    if input.is_null() {
        return;
    }
    unsafe { drop(Box::from_raw(input)) };
}

#[unsafe(no_mangle)]
/// ### English
/// Stores the backend's current framebuffer size. Safe to call from the backend thread;
/// the next idle poll reports a change as `maximized`.
///
/// #### Parameters
/// - `input`: Pipeline handle.
/// - `width`: Framebuffer width in pixels.
/// - `height`: Framebuffer height in pixels.
///
/// ### 中文
/// 保存后端当前的 framebuffer 尺寸。可在后端线程调用；下一次空闲轮询会把变化作为 `maximized` 上报。
///
/// #### 参数
/// - `input`：管线句柄。
/// - `width`：framebuffer 宽度（像素）。
/// - `height`：framebuffer 高度（像素）。
pub unsafe extern "C" fn aki_input_set_framebuffer_size(
    input: *mut AkiInput,
    width: u32,
    height: u32,
) {
    let Some(input) = (unsafe { input.as_ref() }) else {
        return;
    };
    input.size.set(width, height);
}

#[unsafe(no_mangle)]
/// ### English
/// Returns whether the window currently has focus, as seen by the normalizer.
///
/// ### 中文
/// 返回 normalizer 所见的窗口当前是否拥有焦点。
pub unsafe extern "C" fn aki_input_window_has_focus(input: *mut AkiInput) -> bool {
    let Some(input) = (unsafe { input.as_ref() }) else {
        return false;
    };
    match input.normalizer.lock() {
        Ok(normalizer) => normalizer.has_focus(),
        Err(_) => false,
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Returns monotonic seconds since the pipeline was created (0 for NULL).
///
/// ### 中文
/// 返回自管线创建以来的单调秒数（NULL 时返回 0）。
pub unsafe extern "C" fn aki_input_get_time(input: *mut AkiInput) -> f64 {
    let Some(input) = (unsafe { input.as_ref() }) else {
        return 0.0;
    };
    match input.normalizer.lock() {
        Ok(normalizer) => normalizer.now(),
        Err(_) => 0.0,
    }
}
