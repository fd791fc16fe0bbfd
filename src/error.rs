use std::borrow::Cow;

use thiserror::Error;

/// Operation attempted on a queue with zero elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EmptyQueueError {
    message: Cow<'static, str>,
}

impl EmptyQueueError {
    pub const DEFAULT_MESSAGE: &'static str = "invalid operation on an empty queue";

    pub fn new() -> Self {
        Self {
            message: Cow::Borrowed(Self::DEFAULT_MESSAGE),
        }
    }

    pub fn with_message<M>(message: M) -> Self
        where M: Into<Cow<'static, str>>
    {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for EmptyQueueError {
    fn default() -> Self {
        Self::new()
    }
}
