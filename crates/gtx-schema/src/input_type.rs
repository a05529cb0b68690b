//! Questionnaire input types

use std::fmt;

/// The input a contributor uses to answer a question.
///
/// Identified in configurations by the input's `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    DropdownList,
    MultipleOption,
    Text,
    Number,
    Datetime,
    Url,
    Geotagging,
}

impl InputType {
    pub const ALL: [InputType; 7] = [
        InputType::DropdownList,
        InputType::MultipleOption,
        InputType::Text,
        InputType::Number,
        InputType::Datetime,
        InputType::Url,
        InputType::Geotagging,
    ];

    /// The `max-length` a text input gets when none is configured.
    pub const TEXT_MAX_LENGTH: i64 = 128;

    pub fn as_str(self) -> &'static str {
        match self {
            InputType::DropdownList => "dropdown-list",
            InputType::MultipleOption => "multiple-option",
            InputType::Text => "text",
            InputType::Number => "number",
            InputType::Datetime => "datetime",
            InputType::Url => "url",
            InputType::Geotagging => "geotagging",
        }
    }

    /// Parse a `type` tag. Unrecognized tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(InputType::from_tag("dropdown-list"), Some(InputType::DropdownList));
        assert_eq!(InputType::from_tag("geotagging"), Some(InputType::Geotagging));
        assert_eq!(InputType::from_tag("Text"), None);
        assert_eq!(InputType::from_tag("polygon"), None);
    }
}
