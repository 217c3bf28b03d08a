//! ### English
//! Raw input plumbing: the bounded event queue and the key/button naming tables.
//!
//! ### 中文
//! 原始输入相关：有界事件队列与按键/鼠标按键命名表。
pub mod keys;
mod queue;

pub use keys::{FOCUS_LOSS_MODIFIERS, button_name, key_name};
pub use queue::{EVENT_QUEUE_CAPACITY, EventQueue, EventReceiver};
