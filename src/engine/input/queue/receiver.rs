//! ### English
//! Consumer handle of an `EventQueue`.
//!
//! ### 中文
//! `EventQueue` 的消费者句柄。

use std::sync::Arc;

use crate::engine::input_types::RawEvent;

use super::EventQueue;

/// ### English
/// The single consumer of one queue, created together with it by [`EventQueue::channel`].
///
/// Not `Clone`, and `pop` takes `&mut self`, so at most one thread drains the queue at a
/// time. It may be moved to another thread.
///
/// ```compile_fail
/// let (_queue, receiver) = aki_input::EventQueue::channel();
/// let _second = receiver.clone();
/// ```
///
/// ### 中文
/// 某个队列的唯一消费者，由 [`EventQueue::channel`] 与队列一同创建。
///
/// 不可 `Clone`，且 `pop` 需要 `&mut self`，因此同一时刻至多一个线程在 drain 队列。可以移动到其它线程。
pub struct EventReceiver {
    queue: Arc<EventQueue>,
}

impl EventReceiver {
    pub(super) fn new(queue: Arc<EventQueue>) -> Self {
        Self { queue }
    }

    /// ### English
    /// Pops the oldest event, or `None` if the queue is empty.
    ///
    /// ### 中文
    /// 取出最早的事件；队列为空时返回 `None`。
    #[inline]
    pub fn pop(&mut self) -> Option<RawEvent> {
        // SAFETY: `&mut self` on the only receiver of this queue excludes a concurrent pop.
        unsafe { self.queue.pop() }
    }

    /// ### English
    /// Producer side of the same queue.
    ///
    /// ### 中文
    /// 同一队列的生产者端。
    #[inline]
    pub fn queue(&self) -> &Arc<EventQueue> {
        &self.queue
    }
}
