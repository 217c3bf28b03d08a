//! ### English
//! Push/pop implementation for `EventQueue` (multi-producer, single-consumer).
//!
//! ### 中文
//! `EventQueue` 的 push/pop 实现（多生产者、单消费者）。

use std::sync::atomic::Ordering;

use crate::engine::input_types::RawEvent;

use super::{EVENT_QUEUE_CAPACITY, EVENT_QUEUE_MASK, EVENT_QUEUE_USABLE, EventQueue};

impl EventQueue {
    /// ### English
    /// Tries to push one event; returns `false` (and drops the event) if the queue is full.
    /// Never blocks. Safe to call from several producers at once.
    ///
    /// #### Parameters
    /// - `event`: Raw event to push.
    ///
    /// ### 中文
    /// 尝试 push 一个事件；若队列已满则返回 `false` 并丢弃该事件。
    /// 从不阻塞，可被多个生产者同时调用。
    ///
    /// #### 参数
    /// - `event`：要 push 的原始事件。
    pub fn try_push(&self, event: RawEvent) -> bool {
        let mut pos = self.enqueue_pos.load(Ordering::Relaxed);
        loop {
            let dequeue = self.dequeue_pos.load(Ordering::Acquire);
            let used = pos.wrapping_sub(dequeue) as isize;
            if used < 0 {
                // Stale producer position; another producer advanced and the consumer caught up.
                pos = self.enqueue_pos.load(Ordering::Relaxed);
                continue;
            }
            if used as usize >= EVENT_QUEUE_USABLE {
                self.record_drop(&event);
                return false;
            }

            let slot = &self.slots[pos & EVENT_QUEUE_MASK];
            let seq = slot.seq.load(Ordering::Acquire);
            let diff = seq.wrapping_sub(pos) as isize;

            if diff == 0 {
                match self.enqueue_pos.compare_exchange_weak(
                    pos,
                    pos.wrapping_add(1),
                    Ordering::Relaxed,
                    Ordering::Relaxed,
                ) {
                    Ok(_) => {
                        unsafe {
                            (*slot.value.get()).write(event);
                        }
                        slot.seq.store(pos.wrapping_add(1), Ordering::Release);
                        return true;
                    }
                    Err(updated) => pos = updated,
                }
            } else if diff < 0 {
                self.record_drop(&event);
                return false;
            } else {
                pos = self.enqueue_pos.load(Ordering::Relaxed);
            }
        }
    }

    /// ### English
    /// Pops the oldest event, or `None` if the queue is empty.
    ///
    /// # Safety
    /// Must not run concurrently with another `pop` on the same queue. [`EventReceiver`]
    /// upholds this: it is the only caller and it is neither `Clone` nor shared.
    ///
    /// ### 中文
    /// 取出最早的事件；队列为空时返回 `None`。
    ///
    /// # Safety
    /// 不得与同一队列上的另一个 `pop` 并发执行。[`EventReceiver`] 保证了这一点：
    /// 它是唯一的调用方，且既不可 `Clone` 也不会被共享。
    ///
    /// [`EventReceiver`]: super::EventReceiver
    pub(super) unsafe fn pop(&self) -> Option<RawEvent> {
        let pos = self.dequeue_pos.load(Ordering::Relaxed);
        let slot = &self.slots[pos & EVENT_QUEUE_MASK];
        let seq = slot.seq.load(Ordering::Acquire);
        let diff = seq.wrapping_sub(pos.wrapping_add(1)) as isize;

        if diff != 0 {
            return None;
        }

        let event = unsafe { (*slot.value.get()).assume_init_read() };
        slot.seq
            .store(pos.wrapping_add(EVENT_QUEUE_CAPACITY), Ordering::Release);
        self.dequeue_pos
            .store(pos.wrapping_add(1), Ordering::Release);
        Some(event)
    }

    #[cold]
    fn record_drop(&self, event: &RawEvent) {
        let total = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
        log::trace!("event queue full; dropped {event:?} ({total} dropped so far)");
    }
}
