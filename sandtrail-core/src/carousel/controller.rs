use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::CarouselError;
use super::state::{CarouselState, TimerCommand};

/// Tokio driver for an automatically rotating [`CarouselState`].
///
/// Owns at most one timer task at a time. Every transition that returns
/// [`TimerCommand::Arm`] aborts the previous task before spawning the next,
/// so manual navigation restarts the cadence instead of stacking with it.
/// Dropping the controller cancels the timer.
///
/// Must be used from within a tokio runtime.
pub struct CarouselController<T> {
    state: Arc<Mutex<CarouselState<T>>>,
    index_tx: watch::Sender<usize>,
    timer: Option<JoinHandle<()>>,
}

impl<T> fmt::Debug for CarouselController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("CarouselController")
            .field("len", &state.len())
            .field("index", &state.index())
            .field("rotation", &state.rotation())
            .field(
                "timer_pending",
                &self.timer.as_ref().is_some_and(|t| !t.is_finished()),
            )
            .finish()
    }
}

impl<T: Clone + Send + 'static> CarouselController<T> {
    pub fn new(interval: Duration) -> Self {
        let (index_tx, _) = watch::channel(0);
        Self {
            state: Arc::new(Mutex::new(CarouselState::new(interval))),
            index_tx,
            timer: None,
        }
    }

    /// Observe index changes, both manual and automatic.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index_tx.subscribe()
    }

    pub fn index(&self) -> usize {
        self.state.lock().index()
    }

    pub fn current(&self) -> Option<T> {
        self.state.lock().current().cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().is_empty()
    }

    pub fn is_rotating(&self) -> bool {
        self.state.lock().is_rotating()
    }

    pub fn start(&mut self, items: Vec<T>) {
        let command = self.locked(|state| state.start(items));
        debug!(len = self.len(), ?command, "carousel started");
        self.apply(command);
    }

    pub fn next(&mut self) {
        let command = self.locked(CarouselState::next);
        self.apply(command);
    }

    pub fn previous(&mut self) {
        let command = self.locked(CarouselState::previous);
        self.apply(command);
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        let command = self.locked(|state| state.go_to(index))?;
        self.apply(command);
        Ok(())
    }

    /// Cancel the pending timer. Safe to call repeatedly.
    pub fn stop(&mut self) {
        let command = self.locked(CarouselState::stop);
        self.apply(command);
    }

    /// Run one transition and publish the resulting index under the same
    /// lock. A ticker from an older epoch then sees the new epoch and never
    /// publishes over it.
    fn locked<R>(&self, step: impl FnOnce(&mut CarouselState<T>) -> R) -> R {
        let mut state = self.state.lock();
        let outcome = step(&mut state);
        self.index_tx.send_replace(state.index());
        outcome
    }

    fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Arm { epoch, after } => {
                self.cancel_timer();
                self.timer = Some(spawn_ticker(
                    Arc::clone(&self.state),
                    self.index_tx.clone(),
                    epoch,
                    after,
                ));
            }
            TimerCommand::Disarm => self.cancel_timer(),
            TimerCommand::Keep => {}
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<T> Drop for CarouselController<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.state.lock().stop();
    }
}

fn spawn_ticker<T: Send + 'static>(
    state: Arc<Mutex<CarouselState<T>>>,
    index_tx: watch::Sender<usize>,
    epoch: u64,
    after: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut after = after;
        loop {
            tokio::time::sleep(after).await;
            after = {
                let mut guard = state.lock();
                match guard.tick(epoch) {
                    TimerCommand::Arm { after: next, .. } => {
                        index_tx.send_replace(guard.index());
                        next
                    }
                    TimerCommand::Disarm | TimerCommand::Keep => break,
                }
            };
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::DEFAULT_ROTATION_INTERVAL;
    use tokio::time::sleep;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn banners() -> Vec<&'static str> {
        vec!["dunes.jpg", "camp.jpg", "falcon.jpg"]
    }

    #[tokio::test(start_paused = true)]
    async fn advances_on_each_interval_and_wraps() {
        let mut carousel = CarouselController::new(DEFAULT_ROTATION_INTERVAL);
        carousel.start(banners());

        sleep(ms(5_100)).await;
        assert_eq!(carousel.index(), 1);
        sleep(ms(5_000)).await;
        assert_eq!(carousel.index(), 2);
        sleep(ms(5_000)).await;
        assert_eq!(carousel.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn single_item_arms_no_timer() {
        let mut carousel = CarouselController::new(DEFAULT_ROTATION_INTERVAL);
        carousel.start(vec!["only.jpg"]);
        assert!(!carousel.is_rotating());

        sleep(ms(12_000)).await;
        assert_eq!(carousel.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_next_resets_the_cadence() {
        let mut carousel = CarouselController::new(DEFAULT_ROTATION_INTERVAL);
        carousel.start(banners());

        sleep(ms(1_000)).await;
        carousel.next();
        assert_eq!(carousel.index(), 1);

        // The timer from start() would have fired at 5s.
        sleep(ms(4_500)).await;
        assert_eq!(carousel.index(), 1);

        // The fresh timer fires 5s after the manual step.
        sleep(ms(1_000)).await;
        assert_eq!(carousel.index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn next_immediately_after_start_does_not_double_advance() {
        let mut carousel = CarouselController::new(DEFAULT_ROTATION_INTERVAL);
        carousel.start(banners());
        carousel.next();

        sleep(ms(4_900)).await;
        assert_eq!(carousel.index(), 1);
        sleep(ms(200)).await;
        assert_eq!(carousel.index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn previous_and_go_to_reset_the_timer() {
        let mut carousel = CarouselController::new(DEFAULT_ROTATION_INTERVAL);
        carousel.start(banners());

        sleep(ms(3_000)).await;
        carousel.previous();
        assert_eq!(carousel.index(), 2);

        sleep(ms(3_000)).await;
        carousel.go_to(1).unwrap();

        sleep(ms(4_000)).await;
        assert_eq!(carousel.index(), 1);
        sleep(ms(1_500)).await;
        assert_eq!(carousel.index(), 2);

        assert!(carousel.go_to(7).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_rotation() {
        let mut carousel = CarouselController::new(DEFAULT_ROTATION_INTERVAL);
        carousel.start(banners());
        carousel.stop();
        carousel.stop();

        sleep(ms(20_000)).await;
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_rotating());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_controller_cancels_the_timer() {
        let mut carousel = CarouselController::new(DEFAULT_ROTATION_INTERVAL);
        let rx = carousel.subscribe();
        carousel.start(banners());
        drop(carousel);

        sleep(ms(20_000)).await;
        assert_eq!(*rx.borrow(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_automatic_advances() {
        let mut carousel = CarouselController::new(ms(1_000));
        let mut rx = carousel.subscribe();
        carousel.start(banners());
        rx.borrow_and_update();

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_step_at_tick_deadline_publishes_final_index() {
        let mut carousel = CarouselController::new(DEFAULT_ROTATION_INTERVAL);
        let rx = carousel.subscribe();
        carousel.start(banners());

        sleep(DEFAULT_ROTATION_INTERVAL).await;
        carousel.next();
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        assert_eq!(*rx.borrow(), carousel.index());
        sleep(ms(4_900)).await;
        assert_eq!(*rx.borrow(), carousel.index());
    }
}
