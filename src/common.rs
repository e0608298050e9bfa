use secrecy::SecretString;
use thiserror::Error;

// every failure delivered through the hand-off queue carries this prefix so
// the transcript can tell an error apart from a normal answer
pub static ERROR_PREFIX: &str = "Error: ";

#[derive(Default, Clone)]
pub struct ApiKey {
    pub key: SecretString,
    pub is_set: bool,
}

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("API key missing. Set OPENROUTER_API_KEY in your environment.")]
    MissingCredential,
    // network, auth, quota and malformed-payload failures all flatten here
    #[error("remote model call failed: {0}")]
    Remote(String),
    #[error("empty reply from the remote model")]
    EmptyReply,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntryKind {
    User,
    Assistant,
    Error,
}

// one line of the visible transcript
#[derive(Clone)]
pub struct ChatEntry {
    pub kind: EntryKind,
    pub content: String,
}

impl ChatEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self { kind: EntryKind::User, content: content.into() }
    }

    // classify a drained sink message by its prefix
    pub fn from_response(content: String) -> Self {
        if content.starts_with(ERROR_PREFIX) {
            Self { kind: EntryKind::Error, content }
        } else {
            Self { kind: EntryKind::Assistant, content }
        }
    }
}

pub fn mask_key_secure(key: &str) -> String {
    let char_count = key.chars().count();

    // If too short, don't even return it. Just return placeholders.
    if char_count <= 4 {
        return "***".to_string();
    }

    // 1. Grab first 2 chars (only allocates space for 2 chars)
    let start: String = key.chars().take(2).collect();

    // 2. Grab last 2 chars (only allocates space for 2 chars)
    // We reverse, take 2, collect to vec to un-reverse them.
    let end: String = key.chars().rev().take(2).collect::<Vec<_>>()
    .into_iter().rev().collect();

    format!("{}..{}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_keys_are_fully_masked() {
        assert_eq!(mask_key_secure("abc"), "***");
        assert_eq!(mask_key_secure(""), "***");
    }

    #[test]
    fn long_keys_keep_only_edges() {
        assert_eq!(mask_key_secure("sk-or-v1-secret"), "sk..et");
    }

    #[test]
    fn error_prefix_selects_entry_kind() {
        let err = ChatEntry::from_response(format!("{}boom", ERROR_PREFIX));
        assert_eq!(err.kind, EntryKind::Error);

        let ok = ChatEntry::from_response("all good".to_string());
        assert_eq!(ok.kind, EntryKind::Assistant);
    }
}
