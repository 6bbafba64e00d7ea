//! TUI application state and event handling.
//!
//! The `App` owns a [`Session`] (converter + history), the text buffers of
//! the two value fields, and the transient UI state:
//!
//! - **Focus ring**: category, from value, from unit, to value, to unit, history
//! - **Picker popup**: fuzzy-filtered list for category and unit selection
//! - **Prompt**: modal message (incomplete form) that swallows the next key
//! - **Status messages**: transient feedback with expiry, dismissed early by
//!   any key press
//! - **Dirty state tracking**: rendering only when state changes

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::debug;

use super::events::{Action, poll_event};
use super::picker::{Picker, PickerTarget};
use super::rendering::{RenderState, render_ui};
use crate::catalog::{Category, UnitCatalog};
use crate::clipboard::ClipboardProvider;
use crate::converter::Side;
use crate::session::Session;

/// How long the "copied" indicator stays up (milliseconds)
const STATUS_COPIED_DURATION_MS: u64 = 1250;
/// Duration for other success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest text accepted in a value field
const MAX_INPUT_LEN: usize = 32;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Field receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Category,
    Value(Side),
    Unit(Side),
    History,
}

impl Focus {
    const RING: [Focus; 6] = [
        Focus::Category,
        Focus::Value(Side::Left),
        Focus::Unit(Side::Left),
        Focus::Value(Side::Right),
        Focus::Unit(Side::Right),
        Focus::History,
    ];

    fn step(self, delta: isize) -> Self {
        let len = Self::RING.len() as isize;
        let pos = Self::RING.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::RING[(pos + delta).rem_euclid(len) as usize]
    }
}

/// Characters that can appear in a typed number
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Text shown in a value field for a state value
fn input_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub struct App<C> {
    session: Session<C>,
    clipboard: Box<dyn ClipboardProvider>,
    focus: Focus,
    left_input: String,
    right_input: String,
    picker: Option<Picker>,
    prompt: Option<String>,
    history_selected: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<C: UnitCatalog> App<C> {
    pub fn new(catalog: C, clipboard: Box<dyn ClipboardProvider>) -> Self {
        Self {
            session: Session::new(catalog),
            clipboard,
            focus: Focus::Category,
            left_input: String::new(),
            right_input: String::new(),
            picker: None,
            prompt: None,
            history_selected: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Start with a category already chosen and focus on the first value
    pub fn with_category(mut self, category: Category) -> Self {
        self.session.select_category(category);
        self.focus = Focus::Value(Side::Left);
        self.sync_inputs();
        self
    }

    pub fn session(&self) -> &Session<C> {
        &self.session
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        RenderState {
            state: self.session.converter().state(),
            history: self.session.history(),
            focus: self.focus,
            left_input: &self.left_input,
            right_input: &self.right_input,
            history_selected: self.history_selected,
            picker: self.picker.as_ref(),
            prompt: self.prompt.as_deref(),
            status_message: self.status_message.as_ref(),
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        if action == Action::None {
            return;
        }
        self.needs_redraw = true;

        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        // Any key press dismisses the transient indicator early
        self.status_message = None;

        // The prompt is modal: the key that closes it does nothing else
        if self.prompt.take().is_some() {
            return;
        }

        if self.picker.is_some() {
            self.handle_picker_action(action);
            return;
        }

        match action {
            Action::Cancel => self.should_quit = true,
            Action::Save => self.save(),
            Action::ClearValues => {
                self.session.clear_values();
                self.sync_inputs();
            }
            Action::SwapSides => {
                self.session.swap_sides();
                self.sync_inputs();
            }
            Action::ClearHistory => {
                self.session.clear_history();
                self.history_selected = 0;
                self.set_status("✓ History cleared", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Action::NextFocus => self.move_focus(1),
            Action::PrevFocus => self.move_focus(-1),
            Action::Copy => self.copy_selected(),
            _ => self.handle_focused_action(action),
        }
    }

    fn handle_focused_action(&mut self, action: Action) {
        match (self.focus, action) {
            (Focus::Category, Action::Confirm) => self.open_picker(PickerTarget::Category, None),
            (Focus::Category, Action::Input(c)) => {
                self.open_picker(PickerTarget::Category, Some(c))
            }
            (Focus::Unit(side), Action::Confirm) => self.open_picker(PickerTarget::Unit(side), None),
            (Focus::Unit(side), Action::Input(c)) => {
                self.open_picker(PickerTarget::Unit(side), Some(c))
            }
            (Focus::Value(side), Action::Input(c)) => self.edit_value(side, Some(c)),
            (Focus::Value(side), Action::DeleteChar) => self.edit_value(side, None),
            (Focus::Value(_), Action::Confirm) => self.move_focus(1),
            (Focus::History, Action::MoveUp) => self.move_history_selection(-1),
            (Focus::History, Action::MoveDown) => self.move_history_selection(1),
            (Focus::History, Action::Delete) | (Focus::History, Action::Input('d')) => {
                self.delete_selected()
            }
            (Focus::History, Action::Input('y')) | (Focus::History, Action::Confirm) => {
                self.copy_selected()
            }
            (_, Action::MoveUp) => self.move_focus(-1),
            (_, Action::MoveDown) => self.move_focus(1),
            _ => {}
        }
    }

    fn handle_picker_action(&mut self, action: Action) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };

        match action {
            Action::Cancel => self.picker = None,
            Action::MoveUp => picker.move_selection(-1),
            Action::MoveDown => picker.move_selection(1),
            Action::Input(c) => picker.push(c),
            Action::DeleteChar => picker.pop(),
            Action::Confirm => {
                let target = picker.target();
                let choice = picker.current().map(|o| o.key.clone());
                self.picker = None;
                if let Some(key) = choice {
                    self.apply_choice(target, &key);
                }
            }
            _ => {}
        }
    }

    fn open_picker(&mut self, target: PickerTarget, first_char: Option<char>) {
        let state = self.session.converter().state();
        let mut picker = match target {
            PickerTarget::Category => {
                let mut picker = Picker::categories();
                if let Some(category) = state.category() {
                    picker.select_key(category.as_str());
                }
                picker
            }
            PickerTarget::Unit(side) => {
                if state.category().is_none() {
                    self.set_status(
                        "✗ Choose a measurement category first",
                        MessageType::Error,
                        STATUS_ERROR_DURATION_MS,
                    );
                    return;
                }
                let mut picker = Picker::units(side, state.available_units());
                if let Some(unit) = state.side(side).unit.as_deref() {
                    picker.select_key(unit);
                }
                picker
            }
        };

        if let Some(c) = first_char {
            picker.push(c);
        }
        self.picker = Some(picker);
    }

    fn apply_choice(&mut self, target: PickerTarget, key: &str) {
        match target {
            PickerTarget::Category => match key.parse::<Category>() {
                Ok(category) => {
                    self.session.select_category(category);
                    self.focus = Focus::Value(Side::Left);
                }
                Err(e) => debug!(error = %e, "picker returned unknown category"),
            },
            PickerTarget::Unit(side) => self.session.set_unit(side, key),
        }
        self.sync_inputs();
    }

    /// Append `c` (or delete the last char when `None`) and push the text
    /// through the converter
    fn edit_value(&mut self, side: Side, c: Option<char>) {
        let buffer = match side {
            Side::Left => &mut self.left_input,
            Side::Right => &mut self.right_input,
        };

        match c {
            Some(c) if is_numeric_char(c) && buffer.len() < MAX_INPUT_LEN => buffer.push(c),
            Some(_) => return,
            None => {
                if buffer.pop().is_none() {
                    return;
                }
            }
        }

        let raw = buffer.clone();
        self.session.set_value(side, &raw);

        // The edited field keeps the typed text; the other one mirrors state
        let other = self.session.converter().state().side(side.opposite()).value;
        match side {
            Side::Left => self.right_input = input_text(other),
            Side::Right => self.left_input = input_text(other),
        }
    }

    /// Reload both value fields from the converter state
    fn sync_inputs(&mut self) {
        let state = self.session.converter().state();
        self.left_input = input_text(state.left().value);
        self.right_input = input_text(state.right().value);
    }

    fn move_focus(&mut self, delta: isize) {
        let leaving_value = matches!(self.focus, Focus::Value(_));
        self.focus = self.focus.step(delta);
        if leaving_value {
            self.sync_inputs();
        }
    }

    fn move_history_selection(&mut self, delta: isize) {
        let total = self.session.history().len();
        if total == 0 {
            self.history_selected = 0;
            return;
        }

        let new_idx = (self.history_selected as isize + delta).max(0) as usize;
        self.history_selected = new_idx.min(total - 1);
    }

    fn save(&mut self) {
        match self.session.save() {
            Ok(_) => {
                self.history_selected = 0;
                self.set_status("✓ Conversion saved", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Err(e) => self.prompt = Some(e.to_string()),
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.session.history().get(self.history_selected).map(|e| e.id) else {
            return;
        };
        self.session.delete(id);

        let total = self.session.history().len();
        self.history_selected = self.history_selected.min(total.saturating_sub(1));
    }

    fn copy_selected(&mut self) {
        let Some(id) = self.session.history().get(self.history_selected).map(|e| e.id) else {
            self.set_status("✗ No entries to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match self.session.copy_summary(id, self.clipboard.as_mut()) {
            Ok(()) => {
                self.set_status("Copied to clipboard!", MessageType::Success, STATUS_COPIED_DURATION_MS)
            }
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }
}
