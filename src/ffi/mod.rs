//! ### English
//! C ABI surface for `aki_input`.
//!
//! All exported symbols are `extern "C"` functions; structs are `#[repr(C)]`.
//! Byte strings are passed as `(pointer, length)` pairs and need not be NUL-terminated or
//! valid UTF-8. NULL pointers are tolerated everywhere: functions return `0`/`false` or do
//! nothing.
//!
//! ### 中文
//! `aki_input` 的 C ABI 接口层。
//!
//! 所有导出符号均为 `extern "C"` 函数；结构体使用 `#[repr(C)]`。
//! 字节串以 `(指针, 长度)` 传入，不要求以 NUL 结尾，也不要求是合法 UTF-8。
//! 所有函数都容忍 NULL 指针：返回 `0`/`false` 或不做任何事。
mod abi;
mod event;
mod input;
mod pipeline;
mod text;

use std::sync::{Arc, Mutex};

use crate::engine::host::SharedWindowSize;
use crate::engine::input::EventQueue;
use crate::engine::normalizer::EventNormalizer;

pub use event::AkiSemanticEvent;

/// ### English
/// Opaque pipeline handle: one queue, one normalizer, one backend size cell.
///
/// Producer-side calls (`aki_input_push_events`, `aki_input_set_framebuffer_size`) may come
/// from the backend callback thread; `aki_input_poll_event` must stay on one consumer thread.
///
/// ### 中文
/// 不透明管线句柄：一个队列、一个 normalizer、一个后端尺寸单元。
///
/// 生产者侧调用（`aki_input_push_events`、`aki_input_set_framebuffer_size`）可以来自后端回调线程；
/// `aki_input_poll_event` 必须固定在单个消费者线程上。
pub struct AkiInput {
    /// ### English
    /// Producer side of the queue the normalizer drains.
    ///
    /// ### 中文
    /// normalizer 所 drain 队列的生产者端。
    queue: Arc<EventQueue>,
    /// ### English
    /// Latest framebuffer size reported by the backend.
    ///
    /// ### 中文
    /// 后端上报的最新 framebuffer 尺寸。
    size: Arc<SharedWindowSize>,
    /// ### English
    /// Normalizer (owns the consumer side of the queue). The mutex is uncontended in
    /// practice; it only keeps `&mut` access sound across the ABI.
    ///
    /// ### 中文
    /// normalizer（持有队列的消费端）。实际使用中该互斥锁无竞争，仅用于保证跨 ABI 的 `&mut` 访问是安全的。
    normalizer: Mutex<EventNormalizer>,
}

/// ### English
/// C ABI version for `aki_input`.
///
/// ### 中文
/// `aki_input` 的 C ABI 版本号。
const AKI_INPUT_ABI_VERSION: u32 = 1;

/// ### English
/// Borrows a `(pointer, length)` byte string.
///
/// Returns an empty slice for `(NULL, 0)` and `None` for a NULL pointer with a non-zero length.
///
/// # Safety
/// When non-NULL, `ptr` must point to `len` readable bytes for the duration of the call.
///
/// ### 中文
/// 借用一个 `(指针, 长度)` 字节串。
///
/// `(NULL, 0)` 返回空切片；NULL 指针且长度非 0 时返回 `None`。
///
/// # Safety
/// 非 NULL 时，`ptr` 在本次调用期间必须指向 `len` 个可读字节。
unsafe fn bytes_from_raw<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(unsafe { std::slice::from_raw_parts(ptr, len) })
}
