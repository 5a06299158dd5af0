/// Holds the handle of the most recently scheduled timer.
///
/// Every `schedule` starts a fresh timer and drops the previous handle, so
/// with handles that cancel on drop (`gloo_timers::callback::Timeout`) only
/// the last event in a burst gets through. Each call builds its own
/// callback, so the debouncer keeps firing for as long as events arrive.
pub struct Debouncer<H> {
    pending: Option<H>,
}

impl<H> Debouncer<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn schedule(&mut self, start: impl FnOnce() -> H) {
        self.pending = Some(start());
    }
}

impl<H> Default for Debouncer<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Timer stand-in: queues its callback and marks itself cancelled on drop.
    struct FakeTimer {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    type Queue = Rc<RefCell<Vec<(Rc<Cell<bool>>, Box<dyn FnOnce()>)>>>;

    fn start(queue: &Queue, callback: impl FnOnce() + 'static) -> FakeTimer {
        let cancelled = Rc::new(Cell::new(false));
        queue.borrow_mut().push((cancelled.clone(), Box::new(callback)));
        FakeTimer { cancelled }
    }

    /// Runs every queued callback whose timer was not cancelled.
    fn fire(queue: &Queue) {
        let due: Vec<_> = queue.borrow_mut().drain(..).collect();
        for (cancelled, callback) in due {
            if !cancelled.get() {
                callback();
            }
        }
    }

    #[test]
    fn burst_of_events_runs_callback_once() {
        let queue: Queue = Rc::default();
        let runs = Rc::new(Cell::new(0));
        let mut debouncer = Debouncer::new();

        for _ in 0..5 {
            let runs = runs.clone();
            debouncer.schedule(|| start(&queue, move || runs.set(runs.get() + 1)));
        }
        fire(&queue);

        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn keeps_firing_after_earlier_timers_ran() {
        let queue: Queue = Rc::default();
        let runs = Rc::new(Cell::new(0));
        let refresh = {
            let runs = runs.clone();
            move || runs.set(runs.get() + 1)
        };
        let mut debouncer = Debouncer::new();

        // first refresh on mount, then separate scroll bursts
        for _ in 0..3 {
            let refresh = refresh.clone();
            debouncer.schedule(|| start(&queue, refresh));
            fire(&queue);
        }

        assert_eq!(runs.get(), 3);
    }
}
