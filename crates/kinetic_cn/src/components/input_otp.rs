//! One-time-code input
//!
//! A single hidden text buffer rendered as `max_length` slots. Raw input is
//! filtered to the accepted alphabet and truncated before it is stored, so the
//! buffer never holds more than `max_length` accepted characters.
//!
//! Each slot derives its display from the buffer alone:
//!
//! | slot index          | display                                 |
//! |---------------------|-----------------------------------------|
//! | `i < len`           | `Filled` (the character, or the mask)   |
//! | `i == len < max`    | `Cursor`                                |
//! | otherwise           | `Empty`                                 |
//!
//! A slot is *active* when it is the cursor slot, or when the buffer is full
//! and it is the last slot (the cursor parks there).
//!
//! # Example
//!
//! ```rust
//! use kinetic_cn::prelude::*;
//!
//! let code = cn::input_otp().max_length(4).build();
//! code.on_raw_input("12a3");
//!
//! assert_eq!(code.value(), "123");
//! assert!(code.slot(3).is_cursor_slot());
//! assert_eq!(code.slot(1).glyph(), Some('2'));
//! ```

use kinetic_core::{ChangeHandler, ControlledValue, Dispatch, Key, Scope, ScopeStack, UiEvent, VariantSelection};
use kinetic_theme::ThemeState;
use std::fmt;
use std::rc::Rc;

/// Characters the input accepts
#[derive(Clone, Copy, Default)]
pub enum Alphabet {
    /// ASCII digits
    #[default]
    Digits,
    /// ASCII letters and digits
    Alphanumeric,
    Custom(fn(char) -> bool),
}

impl Alphabet {
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Alphabet::Digits => c.is_ascii_digit(),
            Alphabet::Alphanumeric => c.is_ascii_alphanumeric(),
            Alphabet::Custom(accepts) => accepts(c),
        }
    }

    /// Keep accepted characters, truncated to `max_length`
    pub fn normalize(&self, raw: &str, max_length: usize) -> String {
        raw.chars()
            .filter(|c| self.accepts(*c))
            .take(max_length)
            .collect()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Digits => f.write_str("Digits"),
            Alphabet::Alphanumeric => f.write_str("Alphanumeric"),
            Alphabet::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Something the input can move keyboard focus to
pub trait FocusTarget {
    fn focus(&self);
}

impl<F: Fn()> FocusTarget for F {
    fn focus(&self) {
        self()
    }
}

/// What a slot shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotDisplay {
    Empty,
    /// Next character goes here
    Cursor,
    /// `active` is set on the last slot of a full buffer
    Filled { glyph: char, active: bool },
}

/// Derived state of one slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotState {
    pub index: usize,
    pub display: SlotDisplay,
}

impl SlotState {
    /// Derive slot `index` from the buffer
    ///
    /// Out-of-range indices report `Empty`.
    pub fn derive(buffer: &str, index: usize, max_length: usize, secure: bool, mask: char) -> Self {
        let len = buffer.chars().count();
        let display = if index >= max_length {
            SlotDisplay::Empty
        } else if let Some(c) = buffer.chars().nth(index) {
            SlotDisplay::Filled {
                glyph: if secure { mask } else { c },
                active: len >= max_length && index + 1 == max_length,
            }
        } else if index == len {
            SlotDisplay::Cursor
        } else {
            SlotDisplay::Empty
        };
        Self { index, display }
    }

    pub fn filled(&self) -> bool {
        matches!(self.display, SlotDisplay::Filled { .. })
    }

    pub fn is_cursor_slot(&self) -> bool {
        matches!(self.display, SlotDisplay::Cursor)
    }

    /// Cursor slot, or the parked last slot of a full buffer
    pub fn is_active(&self) -> bool {
        matches!(
            self.display,
            SlotDisplay::Cursor | SlotDisplay::Filled { active: true, .. }
        )
    }

    /// Character to draw, already masked when secure
    pub fn glyph(&self) -> Option<char> {
        match self.display {
            SlotDisplay::Filled { glyph, .. } => Some(glyph),
            _ => None,
        }
    }
}

/// Snapshot published by an [`InputOtp`] to its slots
pub struct InputOtpScope {
    pub value: String,
    pub max_length: usize,
    pub secure: bool,
    pub disabled: bool,
    pub mask: char,
    pub set_value: Dispatch<String>,
    focus: Option<Rc<dyn FocusTarget>>,
}

impl InputOtpScope {
    pub fn slot(&self, index: usize) -> SlotState {
        SlotState::derive(&self.value, index, self.max_length, self.secure, self.mask)
    }

    /// Focus the hidden input unless disabled
    pub fn request_focus(&self) -> bool {
        request_focus(self.focus.as_deref(), self.disabled)
    }
}

impl Scope for InputOtpScope {
    const NAME: &'static str = "InputOTP";
}

fn request_focus(focus: Option<&dyn FocusTarget>, disabled: bool) -> bool {
    if disabled {
        tracing::trace!("focus request ignored on disabled input");
        return false;
    }
    match focus {
        Some(target) => {
            target.focus();
            true
        }
        None => false,
    }
}

/// One-time-code input root
pub struct InputOtp {
    value: ControlledValue<String>,
    max_length: usize,
    secure: bool,
    disabled: bool,
    alphabet: Alphabet,
    mask: char,
    auto_focus: bool,
    focus: Option<Rc<dyn FocusTarget>>,
}

impl InputOtp {
    pub fn value(&self) -> String {
        self.value.get()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_complete(&self) -> bool {
        self.value.with(|v| v.chars().count() >= self.max_length)
    }

    /// Accept raw text from the platform input
    pub fn on_raw_input(&self, raw: &str) {
        if self.disabled {
            tracing::trace!("input ignored on disabled input");
            return;
        }
        let next = self.alphabet.normalize(raw, self.max_length);
        if next.len() != raw.len() {
            tracing::trace!(raw, accepted = %next, "filtered code input");
        }
        self.value.set(next);
    }

    /// Remove the last character, if any
    pub fn on_backspace(&self) {
        if self.disabled {
            return;
        }
        let mut next = self.value.get();
        if next.pop().is_some() {
            self.value.set(next);
        }
    }

    pub fn handle_event(&self, event: &UiEvent) -> bool {
        match event {
            UiEvent::TextChange(text) => {
                self.on_raw_input(text);
                true
            }
            UiEvent::KeyPress(Key::Backspace) => {
                self.on_backspace();
                true
            }
            UiEvent::Press => self.request_focus(),
            _ => false,
        }
    }

    /// Apply the owner's `value` prop for this update
    ///
    /// External values pass through the same filter as typed input.
    pub fn sync_value(&self, value: Option<String>) {
        let value = value.map(|raw| {
            let normalized = self.alphabet.normalize(&raw, self.max_length);
            if normalized != raw {
                tracing::debug!(raw = %raw, normalized = %normalized, "normalized external code value");
            }
            normalized
        });
        self.value.sync(value);
    }

    pub fn request_focus(&self) -> bool {
        request_focus(self.focus.as_deref(), self.disabled)
    }

    /// Called once when the input is first shown
    pub fn mount(&self) {
        if self.auto_focus {
            self.request_focus();
        }
    }

    pub fn slot(&self, index: usize) -> SlotState {
        self.value
            .with(|v| SlotState::derive(v, index, self.max_length, self.secure, self.mask))
    }

    pub fn slots(&self) -> Vec<SlotState> {
        self.value.with(|v| {
            (0..self.max_length)
                .map(|index| SlotState::derive(v, index, self.max_length, self.secure, self.mask))
                .collect()
        })
    }

    /// Snapshot for the slots
    ///
    /// `set_value` filters and truncates like typed input, and is inert while
    /// the input is disabled.
    pub fn scope(&self) -> InputOtpScope {
        let dispatch = self.value.dispatcher();
        let (alphabet, max_length, disabled) = (self.alphabet, self.max_length, self.disabled);
        InputOtpScope {
            value: self.value.get(),
            max_length: self.max_length,
            secure: self.secure,
            disabled: self.disabled,
            mask: self.mask,
            set_value: Rc::new(move |raw: String| {
                if !disabled {
                    dispatch(alphabet.normalize(&raw, max_length));
                }
            }),
            focus: self.focus.clone(),
        }
    }

    pub fn provide<R>(&self, scopes: &mut ScopeStack, f: impl FnOnce(&mut ScopeStack) -> R) -> R {
        scopes.provide(self.scope(), f)
    }
}

/// Builder for [`InputOtp`]
pub struct InputOtpBuilder {
    value: Option<String>,
    default_value: String,
    on_change: Option<ChangeHandler<String>>,
    max_length: Option<usize>,
    secure: bool,
    disabled: bool,
    alphabet: Alphabet,
    mask: Option<char>,
    auto_focus: bool,
    focus: Option<Rc<dyn FocusTarget>>,
}

impl InputOtpBuilder {
    pub fn new() -> Self {
        Self {
            value: None,
            default_value: String::new(),
            on_change: None,
            max_length: None,
            secure: false,
            disabled: false,
            alphabet: Alphabet::default(),
            mask: None,
            auto_focus: false,
            focus: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn on_change<F: Fn(String) + 'static>(mut self, f: F) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Show the mask glyph instead of the entered characters
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn mask(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn focus_target(mut self, target: impl FocusTarget + 'static) -> Self {
        self.focus = Some(Rc::new(target));
        self
    }

    pub fn build(self) -> InputOtp {
        let defaults = ThemeState::get().defaults().input_otp;
        let max_length = self.max_length.unwrap_or(defaults.max_length);
        let alphabet = self.alphabet;

        let value = ControlledValue::from_props(
            self.value.map(|v| alphabet.normalize(&v, max_length)),
            alphabet.normalize(&self.default_value, max_length),
            self.on_change,
        );

        InputOtp {
            value,
            max_length,
            secure: self.secure,
            disabled: self.disabled,
            alphabet,
            mask: self.mask.unwrap_or(defaults.mask),
            auto_focus: self.auto_focus,
            focus: self.focus,
        }
    }
}

impl Default for InputOtpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a one-time-code input
pub fn input_otp() -> InputOtpBuilder {
    InputOtpBuilder::new()
}

/// One rendered slot of the enclosing input
#[derive(Clone, Copy, Debug)]
pub struct InputOtpSlot {
    index: usize,
}

impl InputOtpSlot {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self, scopes: &ScopeStack) -> Option<SlotState> {
        scopes
            .read_in::<InputOtpScope>("InputOTPSlot")
            .map(|scope| scope.slot(self.index))
    }

    /// Pressing any slot focuses the hidden input
    pub fn press(&self, scopes: &ScopeStack) -> bool {
        scopes
            .read_in::<InputOtpScope>("InputOTPSlot")
            .is_some_and(|scope| scope.request_focus())
    }

    pub fn variants(&self, scopes: &ScopeStack) -> VariantSelection {
        match scopes.read_in::<InputOtpScope>("InputOTPSlot") {
            Some(scope) => {
                let state = scope.slot(self.index);
                VariantSelection::new()
                    .flag("active", state.is_active())
                    .flag("filled", state.filled())
                    .flag("disabled", scope.disabled)
            }
            None => VariantSelection::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_filter_and_truncate() {
        let code = input_otp().max_length(4).build();
        code.on_raw_input("1a2b3c4d5");
        assert_eq!(code.value(), "1234");
        assert!(code.is_complete());
    }

    #[test]
    fn test_slot_derivation() {
        let code = input_otp().max_length(6).build();
        code.on_raw_input("12a3");
        assert_eq!(code.value(), "123");

        let slots = code.slots();
        assert_eq!(slots.len(), 6);
        for slot in &slots[..3] {
            assert!(slot.filled());
            assert!(!slot.is_cursor_slot());
            assert!(!slot.is_active());
        }
        assert!(slots[3].is_cursor_slot());
        assert!(slots[3].is_active());
        assert_eq!(slots[4].display, SlotDisplay::Empty);
        assert_eq!(slots[0].glyph(), Some('1'));
    }

    #[test]
    fn test_full_buffer_parks_on_last_slot() {
        let code = input_otp().max_length(3).build();
        code.on_raw_input("987");

        let last = code.slot(2);
        assert!(last.filled());
        assert!(!last.is_cursor_slot());
        assert!(last.is_active());
        assert!(!code.slot(1).is_active());
        assert!(code.slots().iter().all(|s| !s.is_cursor_slot()));
    }

    #[test]
    fn test_secure_masks_glyphs() {
        let code = input_otp().secure(true).build();
        code.on_raw_input("42");
        assert_eq!(code.slot(0).glyph(), Some('•'));
        assert_eq!(code.value(), "42");
    }

    #[test]
    fn test_backspace() {
        let code = input_otp().default_value("123").build();
        code.handle_event(&UiEvent::KeyPress(Key::Backspace));
        assert_eq!(code.value(), "12");

        let empty = input_otp().build();
        empty.on_backspace();
        assert_eq!(empty.value(), "");
    }

    #[test]
    fn test_alphabets() {
        assert_eq!(Alphabet::Alphanumeric.normalize("a-B 3!", 6), "aB3");
        let hex = Alphabet::Custom(|c| c.is_ascii_hexdigit());
        assert_eq!(hex.normalize("0xfg1", 6), "0f1");
    }

    #[test]
    fn test_disabled_blocks_focus_and_input() {
        let focused = Rc::new(Cell::new(0));
        let counter = focused.clone();
        let code = input_otp()
            .disabled(true)
            .auto_focus(true)
            .focus_target(move || counter.set(counter.get() + 1))
            .build();

        code.mount();
        assert!(!code.request_focus());
        code.on_raw_input("12");
        assert_eq!(focused.get(), 0);
        assert_eq!(code.value(), "");
    }

    #[test]
    fn test_auto_focus_on_mount() {
        let focused = Rc::new(Cell::new(false));
        let flag = focused.clone();
        let code = input_otp()
            .auto_focus(true)
            .focus_target(move || flag.set(true))
            .build();

        code.mount();
        assert!(focused.get());
    }

    #[test]
    fn test_external_value_is_normalized() {
        let code = input_otp().max_length(4).value("12-34-56").build();
        assert_eq!(code.value(), "1234");

        code.sync_value(Some("9x9".to_string()));
        assert_eq!(code.value(), "99");
    }

    #[test]
    fn test_slot_reads_scope() {
        let code = input_otp().max_length(4).default_value("1").build();
        let mut scopes = ScopeStack::new();
        code.provide(&mut scopes, |scopes| {
            let state = InputOtpSlot::new(1).state(scopes).unwrap();
            assert!(state.is_cursor_slot());
            assert!(InputOtpSlot::new(1).variants(scopes).is_set("active"));
        });
        assert!(InputOtpSlot::new(0).state(&scopes).is_none());
    }

    #[test]
    fn test_scope_setter_filters_like_typing() {
        let code = input_otp().max_length(4).build();
        let mut scopes = ScopeStack::new();
        code.provide(&mut scopes, |scopes| {
            let scope = scopes.read::<InputOtpScope>().unwrap();
            (scope.set_value)("12ab34567".to_string());
        });
        assert_eq!(code.value(), "1234");
        assert!(code.is_complete());

        let locked = input_otp().max_length(4).disabled(true).build();
        (locked.scope().set_value)("99".to_string());
        assert_eq!(locked.value(), "");
    }
}
