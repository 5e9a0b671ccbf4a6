//! Pressed/released state tracking for keyboard keys and mouse buttons.
//!
//! Keys and buttons use independent numeric code spaces but share one lookup
//! table, keyed by the [`InputCode`] tagged union. Observers subscribed to a
//! code are notified synchronously, in subscription order, on every state
//! transition. Removal goes through the single [`InputRegistry::remove`] path;
//! the table itself is never exposed mutably.

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::geom::ScreenPoint;

/// Mouse buttons recognized by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Middle button or wheel click.
    Middle,
    /// Any other button, identified by its host code.
    Other(u16),
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "LMB"),
            Self::Right => write!(f, "RMB"),
            Self::Middle => write!(f, "MMB"),
            Self::Other(code) => write!(f, "MB{code}"),
        }
    }
}

/// Identifier for a registry entry.
///
/// The two code spaces are kept apart by the tag, so a key and a button with
/// the same numeric value never collide in the unified table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCode {
    /// Keyboard key, identified by its host key code.
    Key(u32),
    /// Mouse button.
    Button(MouseButton),
}

impl fmt::Display for InputCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(code) => match char::from_u32(*code).filter(|c| c.is_ascii_graphic()) {
                Some(c) => write!(f, "{c}"),
                None => write!(f, "key {code}"),
            },
            Self::Button(button) => write!(f, "{button}"),
        }
    }
}

/// Raw host event forwarded to observers on a state transition.
///
/// Transitions triggered without a host event ([`InputRegistry::toggle`])
/// notify observers with `None` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// A key press or release.
    Key {
        /// Host key code.
        code: u32,
    },
    /// A pointer button press or release.
    Pointer {
        /// Button that changed state.
        button: MouseButton,
        /// Pointer position at the time of the event.
        position: ScreenPoint,
    },
}

impl RawInput {
    fn matches_space(&self, code: InputCode) -> bool {
        matches!(
            (self, code),
            (Self::Key { .. }, InputCode::Key(_)) | (Self::Pointer { .. }, InputCode::Button(_))
        )
    }
}

/// Contract violations raised by registry operations.
///
/// All variants signal programmer error in wiring up the widget; none are
/// retried or recovered from.
#[derive(Debug, Error)]
pub enum InputError {
    /// The code is already present in the unified table.
    #[error("input code {0} is already registered")]
    DuplicateCode(InputCode),
    /// The code was never registered (or has been removed).
    #[error("input code {0} is not registered")]
    UnknownCode(InputCode),
    /// A raw event from one code space was dispatched to an entry of the
    /// other, e.g. a pointer payload delivered to a key entry.
    #[error("raw event payload does not match the code space of {0}")]
    PayloadMismatch(InputCode),
}

/// Observer invoked with the new pressed state and the raw event, if any.
pub type InputObserver = Box<dyn FnMut(bool, Option<&RawInput>)>;

/// One entry of the registry: a code, its label, and its pressed state.
pub struct RegisteredInput {
    code: InputCode,
    label: String,
    pressed: bool,
    observers: Vec<InputObserver>,
}

impl RegisteredInput {
    fn new(code: InputCode, label: String) -> Self {
        Self {
            code,
            label,
            pressed: false,
            observers: Vec::new(),
        }
    }

    /// The entry's code.
    pub fn code(&self) -> InputCode {
        self.code
    }

    /// Human-readable label, shown by diagnostics output.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current pressed state.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn set_pressed(&mut self, pressed: bool, raw: Option<&RawInput>) {
        self.pressed = pressed;
        for observer in &mut self.observers {
            observer(pressed, raw);
        }
    }
}

impl fmt::Debug for RegisteredInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredInput")
            .field("code", &self.code)
            .field("label", &self.label)
            .field("pressed", &self.pressed)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Unified pressed-state table for keys and mouse buttons.
///
/// Entries iterate in registration order, and [`InputRegistry::remove`]
/// preserves the indices of surviving entries, so observers may hold indices
/// derived from the iteration order.
#[derive(Debug, Default)]
pub struct InputRegistry {
    entries: IndexMap<InputCode, RegisteredInput>,
}

impl InputRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a code with a label, initially released.
    pub fn register(
        &mut self,
        code: InputCode,
        label: impl Into<String>,
    ) -> Result<(), InputError> {
        if self.entries.contains_key(&code) {
            return Err(InputError::DuplicateCode(code));
        }
        self.entries
            .insert(code, RegisteredInput::new(code, label.into()));
        Ok(())
    }

    /// Subscribe an observer to a code's state transitions.
    pub fn subscribe(
        &mut self,
        code: InputCode,
        observer: impl FnMut(bool, Option<&RawInput>) + 'static,
    ) -> Result<(), InputError> {
        let entry = self
            .entries
            .get_mut(&code)
            .ok_or(InputError::UnknownCode(code))?;
        entry.observers.push(Box::new(observer));
        Ok(())
    }

    /// Set the pressed state for a code and notify its observers.
    ///
    /// The raw payload must come from the same code space as the entry.
    pub fn set_pressed(
        &mut self,
        code: InputCode,
        pressed: bool,
        raw: &RawInput,
    ) -> Result<(), InputError> {
        if !raw.matches_space(code) {
            return Err(InputError::PayloadMismatch(code));
        }
        let entry = self
            .entries
            .get_mut(&code)
            .ok_or(InputError::UnknownCode(code))?;
        entry.set_pressed(pressed, Some(raw));
        Ok(())
    }

    /// Like [`set_pressed`](Self::set_pressed), but silently ignores codes
    /// that were never registered. Returns whether the event was routed.
    pub fn set_pressed_if_registered(
        &mut self,
        code: InputCode,
        pressed: bool,
        raw: &RawInput,
    ) -> bool {
        match self.entries.get_mut(&code) {
            Some(entry) => {
                entry.set_pressed(pressed, Some(raw));
                true
            }
            None => false,
        }
    }

    /// Flip the pressed state for a code, notify observers, and return the
    /// new state. Observers receive no raw event for synthetic transitions.
    pub fn toggle(&mut self, code: InputCode) -> Result<bool, InputError> {
        let entry = self
            .entries
            .get_mut(&code)
            .ok_or(InputError::UnknownCode(code))?;
        let pressed = !entry.pressed;
        entry.set_pressed(pressed, None);
        Ok(pressed)
    }

    /// Current pressed state for a code.
    pub fn is_pressed(&self, code: InputCode) -> Result<bool, InputError> {
        self.entries
            .get(&code)
            .map(RegisteredInput::is_pressed)
            .ok_or(InputError::UnknownCode(code))
    }

    /// Remove an entry, returning it if it was present. Never errors.
    ///
    /// This is the only removal path. It shifts rather than swaps, so the
    /// table indices of all surviving entries are unchanged.
    pub fn remove(&mut self, code: InputCode) -> Option<RegisteredInput> {
        self.entries.shift_remove(&code)
    }

    /// Label for a code, if registered.
    pub fn label(&self, code: InputCode) -> Option<&str> {
        self.entries.get(&code).map(RegisteredInput::label)
    }

    /// Whether a code is registered.
    pub fn contains(&self, code: InputCode) -> bool {
        self.entries.contains_key(&code)
    }

    /// Iterate entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &RegisteredInput> {
        self.entries.values()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
