//! ### English
//! Raw event → semantic event state machine.
//!
//! The host calls [`EventNormalizer::poll`] in a loop once per frame until it returns `None`.
//! Each call drains at most the events needed to produce one semantic event; when the queue
//! is idle it falls back to polling the backend's size, which is how `maximized` is detected
//! on backends that never report it.
//!
//! ### 中文
//! 原始事件 → 语义事件的状态机。
//!
//! 宿主每帧循环调用 [`EventNormalizer::poll`]，直到返回 `None`。
//! 每次调用只 drain 产生一个语义事件所需的原始事件；队列空闲时改为轮询后端尺寸，
//! 以此在不上报 maximize 的后端上检测 `maximized`。
mod click;
mod config;
mod window;

use std::sync::Arc;

use dpi::PhysicalSize;

use crate::engine::host::{Clock, MonotonicClock, SharedWindowSize, SizeSource};
use crate::engine::input::{
    EventQueue, EventReceiver, FOCUS_LOSS_MODIFIERS, button_name, key_name,
};
use crate::engine::input_types::RawEvent;
use crate::engine::semantic::SemanticEvent;
use crate::engine::text::encode;

pub use click::ClickState;
pub use config::{DEFAULT_CLICK_INTERVAL, DEFAULT_CLICK_SLOP, NormalizerConfig};
pub use window::WindowState;

/// ### English
/// One independent event pipeline: the shared queue plus the click/window state that only
/// this normalizer mutates.
///
/// ### 中文
/// 一条独立的事件管线：共享队列，以及只由该 normalizer 修改的点击/窗口状态。
pub struct EventNormalizer<S = Arc<SharedWindowSize>, C = MonotonicClock> {
    receiver: EventReceiver,
    size_source: S,
    clock: C,
    config: NormalizerConfig,
    clicks: ClickState,
    window: WindowState,
}

impl<S: SizeSource, C: Clock> EventNormalizer<S, C> {
    pub fn new(
        receiver: EventReceiver,
        size_source: S,
        clock: C,
        config: NormalizerConfig,
    ) -> Self {
        Self {
            receiver,
            size_source,
            clock,
            config,
            clicks: ClickState::default(),
            window: WindowState::default(),
        }
    }

    /// ### English
    /// Queue shared with the backend producer.
    ///
    /// ### 中文
    /// 与后端生产者共享的队列。
    pub fn queue(&self) -> &Arc<EventQueue> {
        self.receiver.queue()
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn has_focus(&self) -> bool {
        self.window.has_focus
    }

    /// ### English
    /// Last size reported by a `resized` or `maximized` event (`0x0` before either).
    ///
    /// ### 中文
    /// 最近一次 `resized` 或 `maximized` 事件上报的尺寸（此前为 `0x0`）。
    pub fn window_size(&self) -> PhysicalSize<u32> {
        self.window.last_size
    }

    pub fn window_state(&self) -> WindowState {
        self.window
    }

    pub fn click_state(&self) -> ClickState {
        self.clicks
    }

    /// ### English
    /// Current reading of the normalizer's clock (seconds).
    ///
    /// ### 中文
    /// normalizer 时钟的当前读数（秒）。
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// ### English
    /// Returns the next semantic event, or `None` when nothing is left for this frame.
    ///
    /// Raw events that translate to nothing (ignored kinds, unencodable text) are skipped
    /// within the same call. The size poll only runs once the queue is observed empty.
    ///
    /// ### 中文
    /// 返回下一个语义事件；本帧没有更多事件时返回 `None`。
    ///
    /// 不产生语义事件的原始事件（被忽略的类型、无法编码的文本）会在同一次调用中被跳过。
    /// 只有在观察到队列为空时才会执行尺寸轮询。
    pub fn poll(&mut self) -> Option<SemanticEvent> {
        while let Some(raw) = self.receiver.pop() {
            if let Some(event) = self.translate(raw) {
                return Some(event);
            }
        }
        self.poll_size()
    }

    fn poll_size(&mut self) -> Option<SemanticEvent> {
        let size = self.size_source.framebuffer_size();
        if self.window.update_size(size) {
            return Some(SemanticEvent::Maximized(size));
        }
        None
    }

    fn translate(&mut self, raw: RawEvent) -> Option<SemanticEvent> {
        match raw {
            RawEvent::Quit => Some(SemanticEvent::Quit),
            RawEvent::Resize { framebuffer } => {
                self.window.update_size(framebuffer);
                Some(SemanticEvent::Resized(framebuffer))
            }
            RawEvent::Focused => {
                self.window.has_focus = true;
                Some(SemanticEvent::Focused)
            }
            RawEvent::Unfocused => {
                self.window.has_focus = false;
                if self.config.release_modifiers_on_unfocus {
                    self.release_modifiers();
                }
                Some(SemanticEvent::Unfocused)
            }
            RawEvent::KeyDown { key_code } => Some(SemanticEvent::KeyPressed(key_name(key_code))),
            RawEvent::KeyUp { key_code } => Some(SemanticEvent::KeyReleased(key_name(key_code))),
            RawEvent::CharInput { codepoint } => {
                let encoded = encode(codepoint);
                if encoded.is_empty() {
                    log::debug!("suppressed text input for out-of-range code point {codepoint:#x}");
                    return None;
                }
                Some(SemanticEvent::TextInput(encoded))
            }
            RawEvent::MouseDown { button, x, y } => {
                let now = self.clock.now();
                let clicks = self.clicks.register(button, x, y, now, &self.config);
                Some(SemanticEvent::MousePressed {
                    button: button_name(button),
                    x,
                    y,
                    clicks,
                })
            }
            RawEvent::MouseUp { button, x, y } => Some(SemanticEvent::MouseReleased {
                button: button_name(button),
                x,
                y,
            }),
            RawEvent::MouseMove { x, y, dx, dy } => {
                Some(SemanticEvent::MouseMoved { x, y, dx, dy })
            }
            RawEvent::MouseScroll { dy } => Some(SemanticEvent::MouseWheel { dy }),
            RawEvent::Other { kind } => {
                log::trace!("ignored raw event kind {kind}");
                None
            }
        }
    }

    /// ### English
    /// Re-injects key-ups for the six alt/ctrl/shift keys so none stays held after focus loss.
    /// Bounded: six pushes into a 128-slot queue; drops on a full queue are accepted.
    ///
    /// ### 中文
    /// 重新注入六个 alt/ctrl/shift 键的 key-up，避免失焦后修饰键一直处于按下状态。
    /// 数量有界：向 128 槽队列 push 六个事件；队列满时的丢弃可以接受。
    fn release_modifiers(&self) {
        let accepted = FOCUS_LOSS_MODIFIERS
            .iter()
            .filter(|&&key_code| self.queue().try_push(RawEvent::KeyUp { key_code }))
            .count();
        log::debug!(
            "focus lost; injected {accepted}/{} modifier key-ups",
            FOCUS_LOSS_MODIFIERS.len()
        );
    }
}

impl EventNormalizer {
    /// ### English
    /// Pipeline with a fresh queue, a shared size cell and the real monotonic clock.
    ///
    /// ### 中文
    /// 使用新队列、共享尺寸单元与真实单调时钟构建的管线。
    pub fn with_shared_size(size: Arc<SharedWindowSize>, config: NormalizerConfig) -> Self {
        let (_, receiver) = EventQueue::channel();
        Self::new(receiver, size, MonotonicClock::default(), config)
    }
}
