use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};

use crate::backend::domain::backend_error::BackendError;
use crate::screen::screen_state::Ticket;

/// A request running on a background thread.
///
/// Once cancelled (explicitly or by dropping the handle) its result is never
/// delivered, even if the request itself still completes in the background.
pub struct Submission<T> {
    ticket: Ticket,
    rx: Receiver<Result<T, BackendError>>,
    cancelled: Arc<AtomicBool>,
}

impl<T: Send + 'static> Submission<T> {
    pub fn spawn<J>(ticket: Ticket, job: J) -> Self
    where
        J: FnOnce() -> Result<T, BackendError> + Send + 'static,
    {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let cancelled = Arc::new(AtomicBool::new(false));
        let cancelled_clone = cancelled.clone();

        thread::spawn(move || {
            let result = job();
            if cancelled_clone.load(Ordering::Acquire) {
                log::debug!("Discarding result of cancelled {ticket:?}");
                return;
            }
            let _ = tx.send(result);
        });

        Self {
            ticket,
            rx,
            cancelled,
        }
    }
}

impl<T> Submission<T> {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Non-blocking check for the result.
    pub fn poll(&self) -> Option<Result<T, BackendError>> {
        if self.is_cancelled() {
            return None;
        }
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(BackendError::Interrupted)),
        }
    }

    /// Blocks until the result arrives or `timeout` elapses.
    pub fn wait(&self, timeout: Duration) -> Option<Result<T, BackendError>> {
        if self.is_cancelled() {
            return None;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(BackendError::Interrupted)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl<T> Drop for Submission<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::form::{Form, ValidationError};
    use crate::screen::outcome::{Banner, Summary, Tone};
    use crate::screen::screen_state::ScreenState;

    const WAIT: Duration = Duration::from_secs(5);

    struct Always;

    impl Summary for u32 {
        fn banner(&self) -> Banner {
            Banner::new(Tone::Success, self.to_string())
        }
    }

    impl Form for Always {
        type Request = ();
        type Success = u32;
        const BUSY_LABEL: &'static str = "Busy";
        const FAILURE_MESSAGE: &'static str = "Failed";

        fn validate(&self) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    fn ticket() -> Ticket {
        let mut state = ScreenState::new(Always);
        state.submit().unwrap().0
    }

    #[test]
    fn test_delivers_result() {
        let submission = Submission::spawn(ticket(), || Ok(7u32));

        let result = submission.wait(WAIT).unwrap();

        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_delivers_error() {
        let submission: Submission<u32> =
            Submission::spawn(ticket(), || Err(BackendError::Status { status: 503 }));

        let result = submission.wait(WAIT).unwrap();

        assert!(matches!(result, Err(BackendError::Status { status: 503 })));
    }

    #[test]
    fn test_cancelled_result_is_never_delivered() {
        let (release_tx, release_rx) = crossbeam_channel::bounded::<()>(1);
        let submission = Submission::spawn(ticket(), move || {
            let _ = release_rx.recv();
            Ok(1u32)
        });

        submission.cancel();
        release_tx.send(()).unwrap();

        assert!(submission.wait(Duration::from_millis(200)).is_none());
        assert!(submission.poll().is_none());
        // The worker exits without sending once it sees the flag.
        assert!(matches!(
            submission.rx.recv_timeout(WAIT),
            Err(RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn test_poll_is_empty_while_running() {
        let (release_tx, release_rx) = crossbeam_channel::bounded::<()>(1);
        let submission = Submission::spawn(ticket(), move || {
            let _ = release_rx.recv();
            Ok(2u32)
        });

        assert!(submission.poll().is_none());

        release_tx.send(()).unwrap();
        assert_eq!(submission.wait(WAIT).unwrap().unwrap(), 2);
    }

    #[test]
    fn test_panicking_worker_reports_interrupted() {
        let submission: Submission<u32> = Submission::spawn(ticket(), || panic!("boom"));

        let result = submission.wait(WAIT).unwrap();

        assert!(matches!(result, Err(BackendError::Interrupted)));
    }

    #[test]
    fn test_ticket_is_kept() {
        let t = ticket();
        let submission = Submission::spawn(t, || Ok(0u32));
        assert_eq!(submission.ticket(), t);
    }
}
