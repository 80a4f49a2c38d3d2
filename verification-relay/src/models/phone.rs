use std::fmt;
use thiserror::Error;

/// Digits of a national mobile number, ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid 'phoneNumber' field: no digits")]
pub struct InvalidPhoneNumber;

impl PhoneNumber {
    /// Length of a number without its country prefix.
    pub const NATIONAL_LENGTH: usize = 10;

    /// Keeps ASCII digits only, then drops `country_prefix` when the number
    /// is longer than a national number and starts with it.
    pub fn normalize(raw: &str, country_prefix: &str) -> Result<Self, InvalidPhoneNumber> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(InvalidPhoneNumber);
        }

        let national = match digits.strip_prefix(country_prefix) {
            Some(rest)
                if !country_prefix.is_empty()
                    && digits.len() > Self::NATIONAL_LENGTH
                    && !rest.is_empty() =>
            {
                rest.to_string()
            }
            _ => digits,
        };

        Ok(Self(national))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All but the last four digits hidden, for logs.
    pub fn masked(&self) -> String {
        let visible = self.0.len().min(4);
        let hidden = self.0.len() - visible;
        format!("{}{}", "*".repeat(hidden), &self.0[hidden..])
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
