use crate::backend::domain::backend_error::BackendError;
use crate::screen::form::Form;
use crate::screen::outcome::{Banner, Outcome};

/// Identifies one submission within a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// View-state record of one screen: the form, the latest outcome and an
/// inline notice slot for local validation failures.
///
/// Transitions: `submit` validates and either sets the notice or moves to
/// in-flight; `resolve` applies a result only if its ticket is still the
/// pending one; `cancel` drops the pending ticket.
pub struct ScreenState<F: Form> {
    pub form: F,
    outcome: Outcome<F::Success>,
    notice: Option<String>,
    issued: u64,
    pending: Option<Ticket>,
}

impl<F: Form + Default> Default for ScreenState<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: Form> ScreenState<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            outcome: Outcome::NotSubmitted,
            notice: None,
            issued: 0,
            pending: None,
        }
    }

    /// Returns the request to send, or `None` if validation failed.
    ///
    /// Submitting while a request is pending supersedes it.
    pub fn submit(&mut self) -> Option<(Ticket, F::Request)> {
        match self.form.validate() {
            Err(e) => {
                log::debug!("Submission rejected locally: {e}");
                self.notice = Some(e.to_string());
                None
            }
            Ok(request) => {
                self.notice = None;
                self.issued += 1;
                let ticket = Ticket(self.issued);
                if let Some(stale) = self.pending.replace(ticket) {
                    log::debug!("{ticket:?} supersedes {stale:?}");
                }
                self.outcome = Outcome::InFlight;
                Some((ticket, request))
            }
        }
    }

    /// Applies a result. Returns `false` (and changes nothing) for stale tickets.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<F::Success, BackendError>) -> bool {
        if self.pending != Some(ticket) {
            log::debug!("Ignoring stale result for {ticket:?}");
            return false;
        }
        self.pending = None;
        self.outcome = match result {
            Ok(success) => Outcome::Succeeded(success),
            Err(e) => {
                log::warn!("{}: {e}", F::FAILURE_MESSAGE);
                Outcome::Failed(e.user_message(F::FAILURE_MESSAGE))
            }
        };
        true
    }

    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(ticket) => {
                log::info!("Cancelled {ticket:?}");
                self.outcome = Outcome::NotSubmitted;
                true
            }
            None => false,
        }
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_busy()
    }

    pub fn outcome(&self) -> &Outcome<F::Success> {
        &self.outcome
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn banner(&self) -> Option<Banner> {
        self.outcome.banner(F::BUSY_LABEL)
    }
}
