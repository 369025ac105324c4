#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Control-rate requests handed to the audio thread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TubaMessage {
    TriggerNote {
        pitch: i32,
        start_time: f64,
        duration: f64,
    },
    Reset,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<TubaMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<TubaMessage> {
    fn pop(&mut self) -> Option<TubaMessage> {
        Consumer::pop(self).ok()
    }
}
