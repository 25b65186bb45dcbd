//! Playback scheduling
//!
//! Turns an algorithm's ordered step sequence into timed highlight events
//! delivered to the renderer's channel. Each run owns a generation number:
//! every scheduled action captures the generation at schedule time and is a
//! no-op if the counter has advanced by the time its timer fires, so a
//! cancellation (or a newly started run) invalidates all pending actions of
//! the prior run even when their timers are already in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::core::types::{HighlightEvent, Step};

pub struct PlaybackScheduler {
    events: UnboundedSender<HighlightEvent>,
    generation: Arc<AtomicU64>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl PlaybackScheduler {
    pub fn new(events: UnboundedSender<HighlightEvent>) -> Self {
        Self {
            events,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Scheduler plus the receiving end of its event channel.
    pub fn channel() -> (Self, UnboundedReceiver<HighlightEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Schedule one highlight action per step: vertex steps at
    /// `index * speed`, edge steps half a period later, plus a final reset
    /// after the last step. A run already in progress is invalidated before
    /// anything new is scheduled.
    pub fn start(&self, steps: &[Step], speed_ms: u64) {
        let generation = self.invalidate();
        if steps.is_empty() {
            debug!("playback: empty step sequence, nothing scheduled");
            return;
        }

        info!("playback: {} steps at {} ms/step", steps.len(), speed_ms);
        let mut pending = self.pending.lock();
        for (index, step) in steps.iter().enumerate() {
            let mut delay = index as u64 * speed_ms;
            if step.is_edge() {
                delay += speed_ms / 2;
            }
            pending.push(self.schedule(generation, delay, HighlightEvent::from(step)));
        }
        let end = steps.len() as u64 * speed_ms;
        pending.push(self.schedule(generation, end, HighlightEvent::Reset));
    }

    /// Invalidate the active run, discard all not-yet-fired actions and
    /// immediately clear highlights.
    pub fn cancel(&self) {
        self.invalidate();
        debug!("playback cancelled");
        let _ = self.events.send(HighlightEvent::Reset);
    }

    /// Advance the generation (orphaning every scheduled action) and drop
    /// the pending timers. Returns the new generation.
    fn invalidate(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut pending = self.pending.lock();
        for handle in pending.drain(..) {
            handle.abort();
        }
        generation
    }

    fn schedule(&self, generation: u64, delay_ms: u64, event: HighlightEvent) -> JoinHandle<()> {
        let current = Arc::clone(&self.generation);
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            // a timer that began before cancellation must become a no-op
            if current.load(Ordering::SeqCst) == generation {
                let _ = events.send(event);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_steps() -> Vec<Step> {
        vec![
            Step::vertex("A"),
            Step::edge("A", "B"),
            Step::vertex("B"),
        ]
    }

    async fn collect_until_reset(rx: &mut UnboundedReceiver<HighlightEvent>) -> Vec<HighlightEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            let reset = event == HighlightEvent::Reset;
            events.push(event);
            if reset {
                break;
            }
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_steps_fire_in_order_with_final_reset() {
        let (scheduler, mut rx) = PlaybackScheduler::channel();
        scheduler.start(&three_steps(), 100);

        let events = collect_until_reset(&mut rx).await;
        assert_eq!(
            events,
            vec![
                HighlightEvent::Vertex("A".to_string()),
                HighlightEvent::Edge {
                    source: "A".to_string(),
                    target: "B".to_string(),
                },
                HighlightEvent::Vertex("B".to_string()),
                HighlightEvent::Reset,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending_and_resets() {
        let (scheduler, mut rx) = PlaybackScheduler::channel();
        let steps: Vec<Step> = (0..5).map(|i| Step::vertex(format!("n{i}"))).collect();
        scheduler.start(&steps, 100);

        let first = rx.recv().await.expect("first step should fire");
        let second = rx.recv().await.expect("second step should fire");
        assert_eq!(first, HighlightEvent::Vertex("n0".to_string()));
        assert_eq!(second, HighlightEvent::Vertex("n1".to_string()));

        scheduler.cancel();
        let reset = rx.recv().await.expect("cancel should emit a reset");
        assert_eq!(reset, HighlightEvent::Reset);

        // nothing else fires even as time keeps advancing
        tokio::time::advance(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_run_invalidates_prior_run() {
        let (scheduler, mut rx) = PlaybackScheduler::channel();
        let first: Vec<Step> = (0..4).map(|i| Step::vertex(format!("a{i}"))).collect();
        scheduler.start(&first, 100);
        scheduler.start(&[Step::vertex("b0")], 100);

        let events = collect_until_reset(&mut rx).await;
        assert_eq!(
            events,
            vec![
                HighlightEvent::Vertex("b0".to_string()),
                HighlightEvent::Reset,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_steps_schedule_nothing() {
        let (scheduler, mut rx) = PlaybackScheduler::channel();
        scheduler.start(&[], 100);
        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }
}
