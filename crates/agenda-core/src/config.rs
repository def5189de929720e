//! Agenda module configuration.
//!
//! Every field has a default, so `{}` is a valid config document. Validation
//! fails fast instead of printing warnings and carrying on.

use serde::{Deserialize, Serialize};

use crate::columns::LabelStyle;
use crate::error::{AgendaError, Result};
use crate::layout::LayoutParams;

pub const DEFAULT_DATE_FORMAT: &str = "ddd D MMM";
pub const DEFAULT_TIME_FORMAT: &str = "HH:mm";
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgendaConfig {
    /// Arrow-style token for day header labels.
    pub date_format: String,
    /// Arrow-style token for event begin times.
    pub time_format: String,
    pub language: String,
    /// Module size in pixels, padding included.
    pub width: u32,
    pub height: u32,
    /// Applied on both the left and right edge.
    pub padding_x: u32,
    /// Applied on both the top and bottom edge.
    pub padding_y: u32,
    pub line_spacing: u32,
    pub font_height: u32,
    /// Remote iCalendar feeds. Only a [`crate::CalendarSource`] that fetches
    /// iCalendar data reads these; the layout never does.
    pub ical_urls: Vec<String>,
    /// Local iCalendar files, read by the same kind of source as `ical_urls`.
    pub ical_files: Vec<String>,
    /// IANA timezone name the agenda is displayed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            width: 400,
            height: 300,
            padding_x: 0,
            padding_y: 0,
            line_spacing: 1,
            font_height: 12,
            ical_urls: Vec::new(),
            ical_files: Vec::new(),
            timezone: None,
        }
    }
}

impl AgendaConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    /// Returns `AgendaError::ConfigParse` for malformed JSON, unknown keys, or
    /// wrongly typed values, and `AgendaError::InvalidConfig` when validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AgendaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `AgendaError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(AgendaError::InvalidConfig(
                "date_format has to be a non-empty arrow-compatible token".to_string(),
            ));
        }
        if self.time_format.trim().is_empty() {
            return Err(AgendaError::InvalidConfig(
                "time_format has to be a non-empty arrow-compatible token".to_string(),
            ));
        }
        if self.language.trim().is_empty() {
            return Err(AgendaError::InvalidConfig(
                "language has to be a locale name such as \"en\"".to_string(),
            ));
        }
        if self.font_height == 0 {
            return Err(AgendaError::InvalidConfig(
                "font_height must be at least 1".to_string(),
            ));
        }
        let (inner_width, inner_height) = self.image_size();
        if inner_width == 0 || inner_height == 0 {
            return Err(AgendaError::InvalidConfig(format!(
                "padding ({}, {}) leaves no room in a {}x{} module",
                self.padding_x, self.padding_y, self.width, self.height
            )));
        }
        if let Some(tz) = &self.timezone {
            if tz.trim().is_empty() {
                return Err(AgendaError::InvalidTimezone(tz.clone()));
            }
        }
        Ok(())
    }

    /// Drawable area after removing padding from both sides.
    pub fn image_size(&self) -> (u32, u32) {
        (
            self.width.saturating_sub(self.padding_x.saturating_mul(2)),
            self.height.saturating_sub(self.padding_y.saturating_mul(2)),
        )
    }

    pub fn row_height(&self) -> u32 {
        self.font_height.saturating_add(self.line_spacing)
    }

    /// How many rows fit in the drawable height.
    pub fn max_lines(&self) -> usize {
        let (_, inner_height) = self.image_size();
        match self.row_height() {
            0 => 0,
            row_height => (inner_height / row_height) as usize,
        }
    }

    /// Every configured calendar location, URLs first.
    pub fn calendar_locations(&self) -> impl Iterator<Item = &str> {
        self.ical_urls
            .iter()
            .chain(&self.ical_files)
            .map(String::as_str)
    }

    pub fn label_style(&self) -> LabelStyle<'_> {
        LabelStyle {
            date_format: &self.date_format,
            time_format: &self.time_format,
            locale: &self.language,
        }
    }

    pub fn layout_params(&self) -> LayoutParams<'_> {
        let (inner_width, _) = self.image_size();
        LayoutParams {
            style: self.label_style(),
            total_width: inner_width,
            row_height: self.row_height(),
        }
    }
}
