use std::fmt;
use std::path::Path;

/// Delimiter options offered when a file's extension does not decide it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterChoice {
    Comma,
    Tab,
    Space,
    /// Ask the user for a single character
    Other,
}

impl DelimiterChoice {
    /// All choices in menu order
    pub const ALL: [DelimiterChoice; 4] = [Self::Comma, Self::Tab, Self::Space, Self::Other];

    /// Menu label for this choice
    pub fn label(&self) -> &'static str {
        match self {
            Self::Comma => "Commas (',')",
            Self::Tab => "Tabs ('\\t')",
            Self::Space => "Spaces (' ')",
            Self::Other => "Other",
        }
    }

    /// The delimiter this choice stands for, `None` for [`DelimiterChoice::Other`]
    pub fn delimiter(&self) -> Option<char> {
        match self {
            Self::Comma => Some(','),
            Self::Tab => Some('\t'),
            Self::Space => Some(' '),
            Self::Other => None,
        }
    }

    /// Look up a choice by menu index
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Self::Other)
    }

    /// Menu labels in order
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(DelimiterChoice::label).collect()
    }
}

impl fmt::Display for DelimiterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Delimiter implied by a file name: `.csv` is comma, `.tsv` is tab
/// (case-insensitive). Anything else needs to be asked for.
pub fn delimiter_for_path(path: &Path) -> Option<char> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "csv" => Some(','),
        "tsv" => Some('\t'),
        _ => None,
    }
}

/// First character of user input, if any
pub fn parse_custom_delimiter(input: &str) -> Option<char> {
    input.chars().next()
}

/// Human readable name for the status bar and logs
pub fn describe(delimiter: char) -> String {
    match delimiter {
        ',' => "comma".to_string(),
        '\t' => "tab".to_string(),
        ' ' => "space".to_string(),
        other => format!("'{}'", other),
    }
}
