//! PIN gate in front of the admin surface.
//!
//! This is a UI gate, not a security boundary: the PIN is compared in plain
//! text, attempts are not rate limited, and nothing is enforced server-side.
//! Anyone who can reach the backend can issue the same writes directly.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The entered PIN did not match. Shown inline in the dialog.
    #[error("Incorrect PIN. Try again.")]
    IncorrectPin,

    #[error("The PIN dialog is not open")]
    DialogClosed,
}

/// Visibility of the PIN dialog and the admin surface, plus the dialog's input.
#[derive(Debug, Clone)]
pub struct AccessGate {
    pin: String,
    dialog_open: bool,
    input: String,
    error: Option<GateError>,
    admin_open: bool,
}

impl AccessGate {
    pub fn new(pin: impl Into<String>) -> Self {
        Self {
            pin: pin.into(),
            dialog_open: false,
            input: String::new(),
            error: None,
            admin_open: false,
        }
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn is_admin_open(&self) -> bool {
        self.admin_open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Inline error from the last failed attempt.
    pub fn error(&self) -> Option<&GateError> {
        self.error.as_ref()
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    /// Close the dialog, discarding the input and any inline error.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.input.clear();
        self.error = None;
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Check the current input against the PIN.
    ///
    /// On a match the dialog closes and the admin surface opens. On a
    /// mismatch the input is cleared and an inline error is recorded.
    pub fn submit(&mut self) -> Result<(), GateError> {
        if !self.dialog_open {
            return Err(GateError::DialogClosed);
        }

        if self.input == self.pin {
            self.close_dialog();
            self.admin_open = true;
            Ok(())
        } else {
            self.input.clear();
            self.error = Some(GateError::IncorrectPin);
            Err(GateError::IncorrectPin)
        }
    }

    /// Enter `pin` and submit it.
    pub fn submit_pin(&mut self, pin: impl Into<String>) -> Result<(), GateError> {
        self.set_input(pin);
        self.submit()
    }

    pub fn close_admin(&mut self) {
        self.admin_open = false;
    }
}
