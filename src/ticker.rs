//! Tick-source port for the Pomodoro engine
//!
//! The engine subscribes when it starts counting down and cancels whenever it
//! stops. A host drives the countdown by awaiting [`TickSource::next_tick`]
//! and feeding each tick to the engine; once the subscription is cancelled
//! `next_tick` returns `false` and no further ticks are scheduled.

use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// One-second tick delivery
#[allow(async_fn_in_trait)]
pub trait TickSource {
    /// Start delivering ticks, replacing any previous subscription
    fn subscribe(&mut self);

    /// Stop delivering ticks
    fn cancel(&mut self);

    fn is_subscribed(&self) -> bool;

    /// Wait for the next tick. `false` means there is no subscription.
    async fn next_tick(&mut self) -> bool;
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    fn subscribe(&mut self) {
        (**self).subscribe()
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }

    fn is_subscribed(&self) -> bool {
        (**self).is_subscribed()
    }

    async fn next_tick(&mut self) -> bool {
        (**self).next_tick().await
    }
}

/// Real-time ticks backed by a tokio interval.
///
/// The interval is created on the first `next_tick` after `subscribe`, so the
/// engine's synchronous operations work outside a runtime.
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    subscribed: bool,
    interval: Option<Interval>,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            subscribed: false,
            interval: None,
        }
    }
}

impl TickSource for IntervalTicker {
    fn subscribe(&mut self) {
        self.subscribed = true;
        self.interval = None;
    }

    fn cancel(&mut self) {
        self.subscribed = false;
        self.interval = None;
    }

    fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    async fn next_tick(&mut self) -> bool {
        if !self.subscribed {
            return false;
        }
        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
        interval.tick().await;
        true
    }
}

/// Deterministic ticks for tests: never sleeps.
///
/// With a budget, `next_tick` yields that many ticks and then reports no
/// subscription, so a driver loop terminates.
#[derive(Debug, Default)]
pub struct ManualTicker {
    subscribed: bool,
    budget: Option<u64>,
    delivered: u64,
    subscribes: u32,
    cancels: u32,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(ticks: u64) -> Self {
        Self {
            budget: Some(ticks),
            ..Self::default()
        }
    }

    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn subscribe_count(&self) -> u32 {
        self.subscribes
    }

    pub fn cancel_count(&self) -> u32 {
        self.cancels
    }
}

impl TickSource for ManualTicker {
    fn subscribe(&mut self) {
        self.subscribed = true;
        self.subscribes += 1;
    }

    fn cancel(&mut self) {
        if self.subscribed {
            self.cancels += 1;
        }
        self.subscribed = false;
    }

    fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    async fn next_tick(&mut self) -> bool {
        if !self.subscribed {
            return false;
        }
        if let Some(budget) = self.budget {
            if self.delivered >= budget {
                return false;
            }
        }
        self.delivered += 1;
        true
    }
}
