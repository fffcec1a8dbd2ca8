use crate::time::Timestamp;

/// Who did something and when.
///
/// The actor is the display name of the authenticated
/// user as provided by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub at: Timestamp,
    pub by: String,
}

impl Activity {
    pub fn now(by: impl Into<String>) -> Self {
        Self {
            at: Timestamp::now(),
            by: by.into(),
        }
    }
}
