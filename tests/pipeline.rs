use std::borrow::Cow;
use std::sync::Arc;

use aki_input::engine::input::keys::{
    KEY_ESCAPE, KEY_F1, KEY_LEFT_ALT, KEY_LEFT_CONTROL, KEY_LEFT_SHIFT, KEY_RIGHT_ALT,
    KEY_RIGHT_CONTROL, KEY_RIGHT_SHIFT,
};
use aki_input::engine::text::{encode, fuzzy_match, is_valid, length_in_codepoints};
use aki_input::{
    EVENT_QUEUE_CAPACITY, EventNormalizer, EventQueue, ManualClock, NormalizerConfig, RawEvent,
    SemanticEvent, SharedWindowSize,
};
use dpi::PhysicalSize;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Pipeline {
    queue: Arc<EventQueue>,
    size: Arc<SharedWindowSize>,
    clock: ManualClock,
    normalizer: EventNormalizer<Arc<SharedWindowSize>, ManualClock>,
}

impl Pipeline {
    fn new(config: NormalizerConfig) -> Self {
        init_logger();
        let (queue, receiver) = EventQueue::channel();
        let size = Arc::new(SharedWindowSize::new(PhysicalSize::new(1280, 720)));
        let clock = ManualClock::default();
        let normalizer = EventNormalizer::new(receiver, size.clone(), clock.clone(), config);
        Self {
            queue,
            size,
            clock,
            normalizer,
        }
    }

    fn push(&self, event: RawEvent) {
        assert!(self.queue.try_push(event));
    }

    fn drain(&mut self) -> Vec<SemanticEvent> {
        std::iter::from_fn(|| self.normalizer.poll()).collect()
    }

    fn click_at(&mut self, t: f64, x: f32, y: f32) -> u32 {
        self.clock.set(t);
        self.push(RawEvent::MouseDown { button: 1, x, y });
        match self.normalizer.poll() {
            Some(SemanticEvent::MousePressed { clicks, .. }) => clicks,
            other => panic!("expected mousepressed, got {other:?}"),
        }
    }
}

#[test]
fn first_idle_poll_reports_initial_size_once() {
    let mut pipeline = Pipeline::new(NormalizerConfig::default());
    assert_eq!(
        pipeline.drain(),
        vec![SemanticEvent::Maximized(PhysicalSize::new(1280, 720))]
    );
    assert!(pipeline.drain().is_empty());

    pipeline.size.set(1920, 1080);
    assert_eq!(
        pipeline.drain(),
        vec![SemanticEvent::Maximized(PhysicalSize::new(1920, 1080))]
    );
    assert!(pipeline.drain().is_empty());
}

#[test]
fn events_come_out_in_push_order() {
    let mut pipeline = Pipeline::new(NormalizerConfig::default());
    pipeline.drain();

    pipeline.push(RawEvent::KeyDown { key_code: KEY_ESCAPE });
    pipeline.push(RawEvent::CharInput { codepoint: 0xE9 });
    pipeline.push(RawEvent::Other { kind: 99 });
    pipeline.push(RawEvent::KeyUp { key_code: KEY_F1 + 11 });
    pipeline.push(RawEvent::MouseScroll { dy: -2.0 });
    pipeline.push(RawEvent::Quit);

    assert_eq!(
        pipeline.drain(),
        vec![
            SemanticEvent::KeyPressed(Cow::Borrowed("escape")),
            SemanticEvent::TextInput(encode(0xE9)),
            SemanticEvent::KeyReleased(Cow::Borrowed("F12")),
            SemanticEvent::MouseWheel { dy: -2.0 },
            SemanticEvent::Quit,
        ]
    );
}

#[test]
fn resize_event_suppresses_duplicate_maximize() {
    let mut pipeline = Pipeline::new(NormalizerConfig::default());
    pipeline.drain();

    pipeline.size.set(800, 600);
    pipeline.push(RawEvent::Resize {
        framebuffer: PhysicalSize::new(800, 600),
    });
    assert_eq!(
        pipeline.drain(),
        vec![SemanticEvent::Resized(PhysicalSize::new(800, 600))]
    );
    assert_eq!(pipeline.normalizer.window_size(), PhysicalSize::new(800, 600));
}

#[test]
fn multi_click_counts_then_resets() {
    let mut pipeline = Pipeline::new(NormalizerConfig::default());
    pipeline.drain();

    assert_eq!(pipeline.click_at(1.0, 10.0, 10.0), 1);
    assert_eq!(pipeline.click_at(1.1, 11.0, 9.0), 2);
    assert_eq!(pipeline.click_at(1.2, 12.0, 10.0), 3);
    assert_eq!(pipeline.click_at(1.7, 12.0, 10.0), 1);
    assert_eq!(pipeline.click_at(1.8, 30.0, 10.0), 1);
}

#[test]
fn focus_loss_releases_modifiers() {
    let mut pipeline = Pipeline::new(NormalizerConfig::default());
    pipeline.drain();

    pipeline.push(RawEvent::Focused);
    pipeline.push(RawEvent::KeyDown {
        key_code: KEY_LEFT_SHIFT,
    });
    pipeline.push(RawEvent::Unfocused);

    let events = pipeline.drain();
    assert_eq!(events[0], SemanticEvent::Focused);
    assert_eq!(events[1], SemanticEvent::KeyPressed(Cow::Borrowed("left shift")));
    assert_eq!(events[2], SemanticEvent::Unfocused);

    let released: Vec<SemanticEvent> = [
        KEY_LEFT_ALT,
        KEY_RIGHT_ALT,
        KEY_LEFT_CONTROL,
        KEY_RIGHT_CONTROL,
        KEY_LEFT_SHIFT,
        KEY_RIGHT_SHIFT,
    ]
    .into_iter()
    .map(|code| SemanticEvent::KeyReleased(aki_input::engine::input::key_name(code)))
    .collect();
    assert_eq!(&events[3..], released.as_slice());
    assert!(!pipeline.normalizer.has_focus());
}

#[test]
fn modifier_cleanup_can_be_disabled() {
    let config = NormalizerConfig {
        release_modifiers_on_unfocus: false,
        ..NormalizerConfig::default()
    };
    let mut pipeline = Pipeline::new(config);
    pipeline.drain();

    pipeline.push(RawEvent::Unfocused);
    assert_eq!(pipeline.drain(), vec![SemanticEvent::Unfocused]);
}

#[test]
fn overflow_drops_newest_events() {
    let mut pipeline = Pipeline::new(NormalizerConfig::default());
    pipeline.drain();

    let accepted = (0..EVENT_QUEUE_CAPACITY + 10)
        .filter(|_| pipeline.queue.try_push(RawEvent::MouseScroll { dy: 1.0 }))
        .count();
    assert_eq!(accepted, EVENT_QUEUE_CAPACITY - 1);
    assert_eq!(pipeline.queue.dropped_count(), 11);
    assert_eq!(pipeline.drain().len(), EVENT_QUEUE_CAPACITY - 1);
}

#[test]
fn out_of_range_text_is_skipped() {
    let mut pipeline = Pipeline::new(NormalizerConfig::default());
    pipeline.drain();

    pipeline.push(RawEvent::CharInput { codepoint: 0x110000 });
    pipeline.push(RawEvent::CharInput { codepoint: 0x41 });
    assert_eq!(pipeline.drain(), vec![SemanticEvent::TextInput(encode(0x41))]);
}

#[test]
fn text_helpers() {
    assert!(is_valid("héllo".as_bytes()));
    assert!(!is_valid(b"\xC3"));
    assert_eq!(length_in_codepoints("héllo".as_bytes()), 5);
    assert!(fuzzy_match("hello world", "hw").is_some());
    assert_eq!(fuzzy_match("hello", "xyz"), None);
    assert!(fuzzy_match("Hello", "hello") < fuzzy_match("Hello", "Hello"));
}
