use crate::screen::outcome::{Banner, Summary, Tone};

/// The service's answer to "is this the registered user?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub accepted: bool,
    pub message: String,
}

impl Summary for Verdict {
    fn banner(&self) -> Banner {
        let tone = if self.accepted {
            Tone::Success
        } else {
            Tone::Failure
        };
        Banner::new(tone, self.message.clone())
    }
}
