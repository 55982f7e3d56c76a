use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

#[derive(Clone, Debug)]
enum Message {
    Static(&'static str),
    Dynamic(Box<str>),
}

/// Error wraps error kind with concrete message and cause.
#[derive(Clone, Debug)]
pub struct Error<K: Copy + Debug + Display> {
    kind: K,
    message: Message,
    cause: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
}

impl<K> Error<K>
where
    K: Copy + Debug + Display,
{
    pub(crate) fn with_description(kind: K, description: &'static str) -> Error<K> {
        Error { kind, message: Message::Static(description), cause: None }
    }

    pub(crate) fn with_message<S: Into<Box<str>>>(kind: K, message: S) -> Error<K> {
        Error { kind, message: Message::Dynamic(message.into()), cause: None }
    }

    pub(crate) fn cause_by<E: std::error::Error + Send + Sync + 'static>(self, e: E) -> Self {
        Error { cause: Some(Arc::new(e)), ..self }
    }

    /// Returns error kind.
    pub fn kind(&self) -> K {
        self.kind
    }

    /// Returns message attached to this error.
    pub fn message(&self) -> &str {
        match &self.message {
            Message::Static(message) => message,
            Message::Dynamic(message) => message.as_ref(),
        }
    }
}

impl<K> Display for Error<K>
where
    K: Copy + Debug + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), fmt::Error> {
        write!(f, "{}: {}", self.kind, self.message())
    }
}

impl<K> std::error::Error for Error<K>
where
    K: Copy + Debug + Display,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            None => None,
            Some(arced) => Some(arced.as_ref()),
        }
    }
}
