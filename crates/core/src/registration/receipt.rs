use crate::screen::outcome::{Banner, Summary, Tone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub message: String,
    /// Where the service stored the averaged embedding, if it said.
    pub embedding_path: Option<String>,
}

impl Summary for Registration {
    fn banner(&self) -> Banner {
        Banner::new(Tone::Success, self.message.clone())
    }
}
