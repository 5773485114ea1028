use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix of the comments used to visually group sections, e.g. `# // DATABASE`.
pub const HEADER_PREFIX: &str = "# //";

/// The word that, when used as a default, stands for an explicitly empty value.
pub const NONE_DEFAULT: &str = "NONE";

static DEFAULT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[DEFAULT: (.+)\]").expect("invalid default pattern"));

/// A classified line of an env file, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A `# //` section header.
    Header,
    /// Any other comment, possibly declaring a new default.
    Comment { default: Option<DefaultValue<'a>> },
    /// `KEY=value` with both sides non-empty.
    Assignment { key: &'a str },
    /// Everything else.
    Blank,
}

impl<'a> Line<'a> {
    /// Classifies a line. The first matching rule wins: header, comment, assignment, blank.
    pub fn classify(content: &'a str) -> Self {
        if content.starts_with(HEADER_PREFIX) {
            return Self::Header;
        }

        if content.starts_with('#') {
            return Self::Comment {
                default: DefaultValue::extract(content),
            };
        }

        match split_assignment(content) {
            Some(key) => Self::Assignment { key },
            None => Self::Blank,
        }
    }
}

/// Returns the key of `content` if it is an assignment.
///
/// The key ends at the first `=` that has at least one character on both of its sides,
/// so `KEY=` and `=VALUE` are not assignments while `KEY=a=b` has the key `KEY`.
fn split_assignment(content: &str) -> Option<&str> {
    content
        .char_indices()
        .find(|(i, c)| *c == '=' && *i > 0 && i + 1 < content.len())
        .map(|(i, _)| &content[..i])
}

/// A default declared in a comment with `[DEFAULT: value]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue<'a> {
    Value(&'a str),
    /// Declared as `[DEFAULT: NONE]`.
    Empty,
}

impl<'a> DefaultValue<'a> {
    /// Finds a `[DEFAULT: ...]` declaration in the comment. The value spans up to the last `]`.
    pub fn extract(comment: &'a str) -> Option<Self> {
        let value = DEFAULT_PATTERN.captures(comment)?.get(1)?.as_str();
        if value == NONE_DEFAULT {
            Some(Self::Empty)
        } else {
            Some(Self::Value(value))
        }
    }

    /// The text written after `KEY=` while this default is in effect.
    pub fn render(&self) -> &'a str {
        match *self {
            Self::Value(v) => v,
            Self::Empty => r#""""#,
        }
    }
}
