//! Application state and core logic

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::TuiConfig;
use crate::data::countries;
use crate::platform::COPY_MODIFIER;
use crate::state::{FieldId, RegistrationForm, ViewState, FIELD_COUNT};

/// Focus index of the submit/clear button row (one past the last field)
const BUTTONS_ROW: usize = FIELD_COUNT;

/// Main application struct
pub struct App {
    /// The form engine: values, errors, touched flags, view state
    pub form: RegistrationForm,
    /// User configuration
    pub config: TuiConfig,
    /// Focused element: `0..FIELD_COUNT` are fields, `FIELD_COUNT` is the button row
    pub active_field: usize,
    /// Which button is selected on the button row (0=Submit, 1=Clear)
    pub selected_button: usize,
    /// Whether the password field renders in the clear
    pub show_password: bool,
    /// When the current submission was accepted
    pub submitted_at: Option<DateTime<Local>>,
    /// One-line feedback for the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance, loading user configuration
    pub fn new() -> Self {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("failed to load config, using defaults: {err:#}");
            TuiConfig::default()
        });
        Self::with_config(config)
    }

    pub fn with_config(config: TuiConfig) -> Self {
        let show_password = !config.mask_password();
        let active_field = config
            .initial_focus
            .as_deref()
            .and_then(|name| match name.parse::<FieldId>() {
                Ok(field) => FieldId::ALL.iter().position(|&f| f == field),
                Err(err) => {
                    tracing::warn!("ignoring initial_focus: {err}");
                    None
                }
            })
            .unwrap_or(0);
        Self {
            form: RegistrationForm::new(),
            config,
            active_field,
            selected_button: 0,
            show_password,
            submitted_at: None,
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The currently focused field, if focus is not on the button row
    pub fn focused_field(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field).copied()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.form.view() {
            ViewState::Editing => self.handle_editing_key(key),
            ViewState::Submitted => self.handle_submitted_key(key),
        }
        Ok(())
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        // Submit from anywhere in the form
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::F(2) => self.show_password = !self.show_password,
            KeyCode::Esc => self.status_message = None,
            KeyCode::Enter => {
                if self.active_field == BUTTONS_ROW {
                    self.activate_button();
                } else {
                    self.focus_next();
                }
            }
            KeyCode::Left => self.handle_horizontal(false),
            KeyCode::Right => self.handle_horizontal(true),
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field() {
                    if !field.is_select() {
                        self.form.pop_char(field);
                    }
                }
            }
            KeyCode::Char(c) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
                {
                    return;
                }
                if let Some(field) = self.focused_field() {
                    if !field.is_select() {
                        self.form.push_char(field, c);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) {
        let is_copy_chord =
            key.code == KeyCode::Char('c') && key.modifiers.contains(COPY_MODIFIER);
        match key.code {
            KeyCode::Enter => self.start_another(),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('y') => self.copy_submission(),
            _ if is_copy_chord => self.copy_submission(),
            _ => {}
        }
    }

    /// Move focus forward, blurring the field being left
    fn focus_next(&mut self) {
        self.blur_current();
        self.active_field = (self.active_field + 1) % (FIELD_COUNT + 1);
    }

    /// Move focus backward, blurring the field being left
    fn focus_prev(&mut self) {
        self.blur_current();
        if self.active_field == 0 {
            self.active_field = BUTTONS_ROW;
        } else {
            self.active_field -= 1;
        }
    }

    fn blur_current(&mut self) {
        if let Some(field) = self.focused_field() {
            self.form.blur_field(field);
        }
    }

    /// Left/Right: cycle options on a select field, pick a button on the row
    fn handle_horizontal(&mut self, forward: bool) {
        if self.active_field == BUTTONS_ROW {
            self.selected_button = 1 - self.selected_button;
            return;
        }
        if let Some(field) = self.focused_field() {
            if field.is_select() {
                self.cycle_select(field, forward);
            }
        }
    }

    fn cycle_select(&mut self, field: FieldId, forward: bool) {
        let options: Vec<&'static str> = match field {
            FieldId::Country => countries::names().collect(),
            _ => self.form.city_options().to_vec(),
        };
        if options.is_empty() {
            self.status_message = Some("Select a country first".to_string());
            return;
        }

        let current = self.form.value(field);
        let next = match options.iter().position(|&o| o == current) {
            Some(i) if forward => (i + 1) % options.len(),
            Some(i) => (i + options.len() - 1) % options.len(),
            None if forward => 0,
            None => options.len() - 1,
        };
        self.form.set_field(field, options[next].to_string());
    }

    fn activate_button(&mut self) {
        match self.selected_button {
            0 => self.submit(),
            _ => self.clear_form(),
        }
    }

    /// Attempt submission through the engine
    fn submit(&mut self) {
        if self.form.submit() {
            self.submitted_at = Some(Local::now());
            self.status_message = None;
            tracing::info!("registration submitted");
        } else {
            let invalid = FieldId::ALL
                .into_iter()
                .filter(|&f| !self.form.error(f).is_empty())
                .count();
            self.status_message = Some(format!("{invalid} field(s) need attention"));
            tracing::info!(invalid_fields = invalid, "submission rejected");
        }
    }

    /// Clear the form while staying on the editing view
    fn clear_form(&mut self) {
        self.form.reset();
        self.active_field = 0;
        self.selected_button = 0;
        self.submitted_at = None;
        self.status_message = Some("Form cleared".to_string());
        tracing::info!("form cleared");
    }

    /// Reset everything for a fresh registration
    fn start_another(&mut self) {
        self.form.reset();
        self.active_field = 0;
        self.selected_button = 0;
        self.submitted_at = None;
        self.status_message = None;
        tracing::info!("form reset for another submission");
    }

    /// Copy the submitted record to the clipboard as pretty JSON
    fn copy_submission(&mut self) {
        match self.try_copy() {
            Ok(()) => {
                self.status_message = Some("Details copied to clipboard".to_string());
                tracing::info!("submission copied to clipboard");
            }
            Err(err) => {
                self.status_message = Some(format!("Copy failed: {err:#}"));
                tracing::warn!("clipboard copy failed: {err:#}");
            }
        }
    }

    fn try_copy(&self) -> Result<()> {
        let text = self.submission_json()?;
        arboard::Clipboard::new()?.set_text(text)?;
        Ok(())
    }

    /// The submitted record with the derived phone display and timestamp
    fn submission_json(&self) -> Result<String> {
        let mut record = serde_json::to_value(self.form.data())?;
        if let serde_json::Value::Object(ref mut map) = record {
            map.insert("phoneDisplay".to_string(), self.form.phone_display().into());
            if let Some(at) = self.submitted_at {
                map.insert("submittedAt".to_string(), at.to_rfc3339().into());
            }
        }
        Ok(serde_json::to_string_pretty(&record)?)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(TuiConfig::default())
    }
}
