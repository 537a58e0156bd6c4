//! Session gate: the locked/unlocked state machine in front of the HUD.
//!
//! ```text
//!            submit(correct)
//!   Locked ───────────────────▶ Unlocked
//!     ▲  └─ submit(wrong): stay,    │
//!     │     show inline error       │
//!     └──────────── logout() ───────┘
//! ```
//!
//! The initial state comes from the persisted `auth` marker. There is no
//! expiry; an unlocked session stays unlocked until an explicit logout.
//!
//! This is a cosmetic gate, not a security boundary. The accepted
//! passphrase is a compile-time constant compared in plaintext, in full,
//! case-sensitively, without constant-time comparison or attempt limits.
//! Anything needing real authentication belongs in an external credential
//! service, not here.

use serde::Serialize;

use crate::storage::{AUTH_KEY, Storage};

/// Marker value persisted under `auth` while unlocked.
pub const AUTH_SENTINEL: &str = "1";

/// The accepted passphrase. Override at build time with `HUD_PASSPHRASE`.
pub const PASSPHRASE: &str = match option_env!("HUD_PASSPHRASE") {
    Some(passphrase) => passphrase,
    None => "IWThalassa4!",
};

/// Inline message shown after a rejected submission.
pub const REJECTED_MESSAGE: &str = "Incorrect passphrase.";

/// Gate state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Locked,
    Unlocked,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The passphrase matched; the gate is now unlocked.
    Unlocked,
    /// The passphrase did not match; the gate stays locked.
    Rejected,
    /// The gate was already unlocked; nothing happened.
    AlreadyUnlocked,
}

impl SubmitOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unlocked => "unlocked",
            Self::Rejected => "rejected",
            Self::AlreadyUnlocked => "already_unlocked",
        }
    }
}

/// Owns the authenticated flag plus the passphrase form it guards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionGate {
    state: SessionState,
    input: String,
    error: Option<String>,
}

impl SessionGate {
    /// Derive the initial state from the persisted marker. Only the exact
    /// sentinel unlocks; anything else, including read failure, is locked.
    pub fn initialize(storage: &Storage) -> Self {
        let state = match storage.get(AUTH_KEY).as_deref() {
            Some(AUTH_SENTINEL) => SessionState::Unlocked,
            _ => SessionState::Locked,
        };
        tracing::debug!(state = %state, "session initialized");
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == SessionState::Unlocked
    }

    /// Current contents of the passphrase field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Inline error from the last rejected submit, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Append a character to the passphrase field. Clears the error.
    pub fn input_char(&mut self, c: char) {
        if self.is_unlocked() {
            return;
        }
        self.input.push(c);
        self.error = None;
    }

    /// Delete the last character of the passphrase field. Clears the error.
    pub fn backspace(&mut self) {
        if self.is_unlocked() {
            return;
        }
        self.input.pop();
        self.error = None;
    }

    /// Empty the passphrase field. Clears the error.
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.error = None;
    }

    /// Submit whatever is in the passphrase field.
    pub fn submit(&mut self, storage: &mut Storage) -> SubmitOutcome {
        if self.is_unlocked() {
            return SubmitOutcome::AlreadyUnlocked;
        }

        if self.input == PASSPHRASE {
            storage.set(AUTH_KEY, AUTH_SENTINEL);
            self.state = SessionState::Unlocked;
            self.input.clear();
            self.error = None;
            tracing::info!("session unlocked");
            SubmitOutcome::Unlocked
        } else {
            // Input is kept so the user can correct it
            self.error = Some(REJECTED_MESSAGE.to_string());
            tracing::warn!(attempt_len = self.input.chars().count(), "passphrase rejected");
            SubmitOutcome::Rejected
        }
    }

    /// Replace the field with `passphrase` and submit it.
    pub fn submit_passphrase(&mut self, passphrase: &str, storage: &mut Storage) -> SubmitOutcome {
        if self.is_unlocked() {
            return SubmitOutcome::AlreadyUnlocked;
        }
        self.input = passphrase.to_string();
        self.submit(storage)
    }

    /// Lock the session and remove the persisted marker.
    ///
    /// The marker is removed even when already locked. Returns whether a
    /// transition happened.
    pub fn logout(&mut self, storage: &mut Storage) -> bool {
        storage.remove(AUTH_KEY);
        let was_unlocked = self.is_unlocked();
        self.state = SessionState::Locked;
        self.input.clear();
        self.error = None;
        if was_unlocked {
            tracing::info!("session locked");
        }
        was_unlocked
    }
}
