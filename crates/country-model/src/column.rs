//! Storage column size classes.
//!
//! The persistence layer stores selected codes in a textual column. The
//! column class is chosen from the largest value the field could ever hold.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest content that fits a `varchar(255)` column.
pub const STRING_MAX_LENGTH: usize = 255;
/// Largest content that fits a `text` column.
pub const TEXT_MAX_LENGTH: usize = 65_535;
/// Largest content that fits a `mediumtext` column.
pub const MEDIUM_TEXT_MAX_LENGTH: usize = 16_777_215;

/// Textual column size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Fixed small string, `varchar(255)`.
    String,
    Text,
    MediumText,
    LongText,
}

impl ColumnType {
    /// Smallest column class that can hold `length` bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use country_model::ColumnType;
    ///
    /// assert_eq!(ColumnType::for_content_length(2), ColumnType::String);
    /// assert_eq!(ColumnType::for_content_length(1_256), ColumnType::Text);
    /// ```
    pub const fn for_content_length(length: usize) -> Self {
        if length <= STRING_MAX_LENGTH {
            Self::String
        } else if length <= TEXT_MAX_LENGTH {
            Self::Text
        } else if length <= MEDIUM_TEXT_MAX_LENGTH {
            Self::MediumText
        } else {
            Self::LongText
        }
    }

    /// SQL spelling of the column type.
    pub const fn sql_type(self) -> &'static str {
        match self {
            Self::String => "varchar(255)",
            Self::Text => "text",
            Self::MediumText => "mediumtext",
            Self::LongText => "longtext",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_type())
    }
}
