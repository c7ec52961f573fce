//! Debug overlay measurements
//!
//! Tracks application tick and render frame rates for the development
//! overlay. `Instant`s can be injected through the messages so the
//! measurement windows are testable.

use std::time::Instant;

pub enum Message {
    TickRecorded { now: Option<Instant> },
    FrameRecorded { now: Option<Instant> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RateCounter {
    rate: Option<f64>,
    count: u32,
    last_update: Instant,
}

impl RateCounter {
    fn new() -> Self {
        Self {
            rate: None,
            count: 0,
            last_update: Instant::now(),
        }
    }

    fn record(&mut self, now: Option<Instant>) {
        self.count += 1;
        let now = now.unwrap_or_else(Instant::now);
        let elapsed = (now - self.last_update).as_secs_f64();

        if elapsed >= 1.0 {
            self.rate = Some(f64::from(self.count) / elapsed);
            self.last_update = now;
            self.count = 0;
        }
    }
}

/// Tick/render rate measurements shown by the debug overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugStats {
    ticks: RateCounter,
    frames: RateCounter,
}

impl DebugStats {
    pub fn new() -> Self {
        Self {
            ticks: RateCounter::new(),
            frames: RateCounter::new(),
        }
    }

    pub fn tick_rate(&self) -> Option<f64> {
        self.ticks.rate
    }

    pub fn frame_rate(&self) -> Option<f64> {
        self.frames.rate
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::TickRecorded { now } => self.ticks.record(now),
            Message::FrameRecorded { now } => self.frames.record(now),
        }
    }
}

impl Default for DebugStats {
    fn default() -> Self {
        Self::new()
    }
}
