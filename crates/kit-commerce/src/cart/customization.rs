//! Name and number printing on a jersey.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest printable name.
pub const MAX_NAME_LEN: usize = 12;

/// Most digits in a shirt number.
pub const MAX_NUMBER_DIGITS: usize = 2;

/// Lettering style for the printed name and number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontStyle {
    #[default]
    Classic,
    Modern,
    Retro,
}

impl FontStyle {
    pub const ALL: [FontStyle; 3] = [FontStyle::Classic, FontStyle::Modern, FontStyle::Retro];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Classic => "Classic",
            FontStyle::Modern => "Modern",
            FontStyle::Retro => "Retro",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontStyle {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FontStyle::ALL
            .into_iter()
            .find(|font| font.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CommerceError::InvalidFont(s.to_string()))
    }
}

/// Personalisation printed on a jersey.
///
/// Only constructible through [`Customization::new`], so every value
/// satisfies the length and digit rules. Two customizations are equal
/// when name, number, and font all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customization {
    name: String,
    number: String,
    font: FontStyle,
}

impl Customization {
    /// Validate and normalise a customization.
    ///
    /// The name is trimmed and upper-cased. Either part may be blank; a
    /// print with both blank is still a customized line.
    pub fn new(
        name: impl AsRef<str>,
        number: impl AsRef<str>,
        font: FontStyle,
    ) -> Result<Self, CommerceError> {
        let name = name.as_ref().trim().to_uppercase();
        let number = number.as_ref().trim().to_string();

        if name.chars().count() > MAX_NAME_LEN {
            return Err(CommerceError::InvalidCustomization(format!(
                "name longer than {} characters",
                MAX_NAME_LEN
            )));
        }
        if number.len() > MAX_NUMBER_DIGITS || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::InvalidCustomization(format!(
                "number must be at most {} digits",
                MAX_NUMBER_DIGITS
            )));
        }
        Ok(Self { name, number, font })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn font(&self) -> FontStyle {
        self.font
    }

    /// True when neither a name nor a number is printed.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.number.is_empty()
    }

    /// Short label for the bag, e.g. "MESSI • 10".
    ///
    /// Blank parts are left out; a fully blank print reads "Blank print".
    pub fn label(&self) -> String {
        match (self.name.is_empty(), self.number.is_empty()) {
            (false, false) => format!("{} \u{2022} {}", self.name, self.number),
            (false, true) => self.name.clone(),
            (true, false) => format!("#{}", self.number),
            (true, true) => "Blank print".to_string(),
        }
    }
}
