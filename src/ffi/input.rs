//! ### English
//! Raw event submission and semantic event polling.
//!
//! ### 中文
//! 原始事件提交与语义事件轮询。

use crate::engine::input_types::{AkiRawEvent, RawEvent};

use super::{AkiInput, AkiSemanticEvent};

#[unsafe(no_mangle)]
/// ### English
/// Pushes raw backend events into the pipeline's queue.
///
/// Each event that finds the queue full is dropped (and counted); the return value is the
/// number accepted. May be called from the backend callback thread.
///
/// #### Parameters
/// - `input`: Pipeline handle.
/// - `events`: Pointer to `count` raw events.
/// - `count`: Number of events.
///
/// ### 中文
/// 将后端原始事件推入管线队列。
///
/// 遇到队列已满的事件会被丢弃（并计数）；返回值为被接受的数量。可以在后端回调线程调用。
///
/// #### 参数
/// - `input`：管线句柄。
/// - `events`：指向 `count` 个原始事件的指针。
/// - `count`：事件数量。
pub unsafe extern "C" fn aki_input_push_events(
    input: *mut AkiInput,
    events: *const AkiRawEvent,
    count: u32,
) -> u32 {
    let Some(input) = (unsafe { input.as_ref() }) else {
        return 0;
    };
    if events.is_null() || count == 0 {
        return 0;
    }
    let raw = unsafe { std::slice::from_raw_parts(events, count as usize) };
    raw.iter()
        .filter(|&&event| input.queue.try_push(RawEvent::from(event)))
        .count() as u32
}

#[unsafe(no_mangle)]
/// ### English
/// Polls the next semantic event.
///
/// Call in a loop once per frame until it returns `false`. On `true`, `*out_event` holds
/// the event; on `false` it is left untouched.
///
/// #### Parameters
/// - `input`: Pipeline handle.
/// - `out_event`: Output event (required).
///
/// ### 中文
/// 轮询下一个语义事件。
///
/// 每帧循环调用，直到返回 `false`。返回 `true` 时 `*out_event` 为该事件；返回 `false` 时不会写入。
///
/// #### 参数
/// - `input`：管线句柄。
/// - `out_event`：输出事件（必填）。
pub unsafe extern "C" fn aki_input_poll_event(
    input: *mut AkiInput,
    out_event: *mut AkiSemanticEvent,
) -> bool {
    let Some(input) = (unsafe { input.as_ref() }) else {
        return false;
    };
    if out_event.is_null() {
        return false;
    }
    let Ok(mut normalizer) = input.normalizer.lock() else {
        return false;
    };
    let Some(event) = normalizer.poll() else {
        return false;
    };
    unsafe { out_event.write(AkiSemanticEvent::from(&event)) };
    true
}
