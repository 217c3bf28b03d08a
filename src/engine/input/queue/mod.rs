//! ### English
//! Bounded lock-free queue of raw input events.
//!
//! Producers are the backend callback and the normalizer itself (focus-loss cleanup re-injects
//! synthetic key-ups), so push is multi-producer safe. Pop is single-consumer: only the
//! per-frame poll loop drains the queue.
//!
//! ### 中文
//! 原始输入事件的有界无锁队列。
//!
//! 生产者包括后端回调以及 normalizer 自身（失焦清理会重新注入合成的 key-up），
//! 因此 push 支持多生产者。pop 为单消费者：只有每帧的 poll 循环会 drain 队列。

use std::cell::UnsafeCell;
use std::mem::MaybeUninit;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::engine::input_types::RawEvent;

mod receiver;
mod ring;

pub use receiver::EventReceiver;

/// ### English
/// Number of slots in the ring. One slot is always kept empty, so at most
/// `EVENT_QUEUE_CAPACITY - 1` events are stored at once.
///
/// ### 中文
/// 环形缓冲区的槽位数。始终保留一个空槽，因此同一时刻最多存放 `EVENT_QUEUE_CAPACITY - 1` 个事件。
pub const EVENT_QUEUE_CAPACITY: usize = 128;
const EVENT_QUEUE_MASK: usize = EVENT_QUEUE_CAPACITY - 1;
const EVENT_QUEUE_USABLE: usize = EVENT_QUEUE_CAPACITY - 1;

const _: () = assert!(EVENT_QUEUE_CAPACITY.is_power_of_two());

const CACHE_LINE_BYTES: usize = 64;

/// ### English
/// Padding that keeps each queue index on its own cache line.
///
/// ### 中文
/// 使每个队列索引独占一个 cache line 的 padding。
const INDEX_PAD: usize = CACHE_LINE_BYTES - std::mem::size_of::<AtomicUsize>();

struct EventSlot {
    /// ### English
    /// Sequence number used by the lock-free bounded queue algorithm.
    ///
    /// ### 中文
    /// 无锁有界队列算法使用的序号。
    seq: AtomicUsize,
    /// ### English
    /// Stored event payload (written by a producer, read by the single consumer).
    ///
    /// ### 中文
    /// 事件载荷（由生产者写入，单消费者读取）。
    value: UnsafeCell<MaybeUninit<RawEvent>>,
}

unsafe impl Send for EventSlot {}
unsafe impl Sync for EventSlot {}

/// ### English
/// Fixed-capacity FIFO of raw events with a silent drop-on-full policy.
///
/// ### 中文
/// 固定容量的原始事件 FIFO，队列满时静默丢弃新事件。
#[repr(C, align(64))]
pub struct EventQueue {
    /// ### English
    /// Producer position (next free slot, monotonically increasing; masked on use).
    ///
    /// ### 中文
    /// 生产者位置（下一个空闲槽；单调递增，使用时取掩码）。
    enqueue_pos: AtomicUsize,
    _pad_enqueue: [u8; INDEX_PAD],
    /// ### English
    /// Consumer position (next slot to consume).
    ///
    /// ### 中文
    /// 消费者位置（下一个待消费槽）。
    dequeue_pos: AtomicUsize,
    _pad_dequeue: [u8; INDEX_PAD],
    /// ### English
    /// Number of events dropped because the queue was full.
    ///
    /// ### 中文
    /// 因队列已满而被丢弃的事件数量。
    dropped: AtomicUsize,
    slots: [EventSlot; EVENT_QUEUE_CAPACITY],
}

unsafe impl Send for EventQueue {}
unsafe impl Sync for EventQueue {}

impl EventQueue {
    /// ### English
    /// Creates an empty queue and its only receiver.
    ///
    /// The `Arc` is the producer side and may be cloned freely. The receiver is the single
    /// consumer; it cannot be cloned, and `pop` needs `&mut` access to it.
    ///
    /// ### 中文
    /// 创建一个空队列及其唯一的接收端。
    ///
    /// `Arc` 是生产者端，可以随意克隆。接收端是唯一的消费者；它不能被克隆，且 `pop` 需要对它的 `&mut` 访问。
    pub fn channel() -> (Arc<EventQueue>, EventReceiver) {
        let queue = Arc::new(Self::new());
        let receiver = EventReceiver::new(queue.clone());
        (queue, receiver)
    }

    fn new() -> Self {
        Self {
            enqueue_pos: AtomicUsize::new(0),
            _pad_enqueue: [0; INDEX_PAD],
            dequeue_pos: AtomicUsize::new(0),
            _pad_dequeue: [0; INDEX_PAD],
            dropped: AtomicUsize::new(0),
            slots: std::array::from_fn(|i| EventSlot {
                seq: AtomicUsize::new(i),
                value: UnsafeCell::new(MaybeUninit::uninit()),
            }),
        }
    }

    /// ### English
    /// Number of slots in the ring (one more than the number of storable events).
    ///
    /// ### 中文
    /// 环形缓冲区槽位数（比可存放事件数多 1）。
    #[inline]
    pub const fn capacity(&self) -> usize {
        EVENT_QUEUE_CAPACITY
    }

    /// ### English
    /// Number of queued events. Exact when no producer/consumer is running concurrently.
    ///
    /// ### 中文
    /// 已入队事件数。在没有并发生产者/消费者时是精确值。
    pub fn len(&self) -> usize {
        let dequeue = self.dequeue_pos.load(Ordering::Acquire);
        let enqueue = self.enqueue_pos.load(Ordering::Acquire);
        enqueue.wrapping_sub(dequeue).min(EVENT_QUEUE_USABLE)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// ### English
    /// Total number of events dropped on overflow since creation.
    ///
    /// ### 中文
    /// 自创建以来因溢出而丢弃的事件总数。
    pub fn dropped_count(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}
