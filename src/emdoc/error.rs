//! Fatal error channel.
//!
//! Every failure in emdoc is fatal: the binary prints the diagnostic and
//! exits. The variants exist so messages can name the offending spec,
//! file, or value, not to support recovery.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmdocError {
    /// Malformed extractor or decorator spec.
    InvalidSpec(String),
    /// Template placeholder named a command outside the closed set.
    UnknownCommand(String),
    /// Template placeholder referenced a name absent from the store.
    UnknownValue(String),
    /// An annotation sentinel was found but its required tokens weren't.
    MalformedTerm(String),
    /// Emdocfile could not be parsed.
    Config(String),
    /// File read, write, or glob failure.
    Io(String),
}

impl std::error::Error for EmdocError {}

impl fmt::Display for EmdocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmdocError::InvalidSpec(spec) => write!(f, "invalid spec: {}", spec),
            EmdocError::UnknownCommand(command) => write!(f, "unknown command: {:?}", command),
            EmdocError::UnknownValue(name) => write!(f, "can't find value: {:?}", name),
            EmdocError::MalformedTerm(message) => write!(f, "malformed annotation: {}", message),
            EmdocError::Config(message) => write!(f, "config error: {}", message),
            EmdocError::Io(message) => write!(f, "{}", message),
        }
    }
}
