#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Busy,
}

/// One line of rendered result text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub tone: Tone,
    pub text: String,
}

impl Banner {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

/// How a successful payload reads on screen.
pub trait Summary {
    fn banner(&self) -> Banner;
}

/// Result of the latest submission. A new submission discards the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    NotSubmitted,
    InFlight,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Outcome::NotSubmitted
    }
}

impl<T> Outcome<T> {
    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Outcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Outcome::InFlight)
    }
}

impl<T: Summary> Outcome<T> {
    pub fn banner(&self, busy_label: &str) -> Option<Banner> {
        match self {
            Outcome::NotSubmitted => None,
            Outcome::InFlight => Some(Banner::new(Tone::Busy, busy_label)),
            Outcome::Succeeded(value) => Some(value.banner()),
            Outcome::Failed(message) => Some(Banner::new(Tone::Failure, message.clone())),
        }
    }
}
