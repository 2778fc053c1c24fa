//! Tick sources that drive a session's countdown.

use std::future::Future;

use tokio::{
    sync::mpsc,
    time::{self, Duration, Instant, Interval, MissedTickBehavior},
};

/// Something that produces one tick per elapsed countdown second.
pub trait TickSource {
    /// Waits for the next tick. Must be cancel safe: the driver drops this
    /// future whenever a user input arrives first.
    fn next_tick(&mut self) -> impl Future<Output = ()> + Send;

    /// Restarts the schedule so the next tick is one full period away.
    /// Called whenever a countdown starts.
    fn reset(&mut self);
}

/// Wall-clock ticks from a tokio interval.
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    /// One tick per second, the countdown's unit.
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    fn schedule(period: Duration) -> Interval {
        // interval_at so the first tick is a full period out, not immediate
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::every_second()
    }
}

impl TickSource for IntervalTicker {
    async fn next_tick(&mut self) {
        let period = self.period;
        self.interval
            .get_or_insert_with(|| Self::schedule(period))
            .tick()
            .await;
    }

    fn reset(&mut self) {
        self.interval = Some(Self::schedule(self.period));
    }
}

/// Virtual clock: one tick per message sent on the paired sender.
///
/// Once every sender is gone the ticker never fires again.
#[derive(Debug)]
pub struct ChannelTicker {
    ticks: mpsc::UnboundedReceiver<()>,
}

impl ChannelTicker {
    /// Creates the ticker and the sender that advances it.
    pub fn new() -> (mpsc::UnboundedSender<()>, Self) {
        let (sender, ticks) = mpsc::unbounded_channel();
        (sender, Self { ticks })
    }
}

impl TickSource for ChannelTicker {
    async fn next_tick(&mut self) {
        if self.ticks.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }

    fn reset(&mut self) {
        // Ticks queued before a countdown started belong to no countdown.
        while self.ticks.try_recv().is_ok() {}
    }
}
