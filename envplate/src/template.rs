use crate::line::Line;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Display};

/// The result of rendering a template.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub output: String,
    pub stats: Stats,
}

/// Counts of what was seen while rendering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub headers: usize,
    pub comments: usize,
    /// Comments which declared a default.
    pub defaults: usize,
    pub assignments: usize,
    pub blanks: usize,
}

impl Stats {
    /// Total number of lines processed.
    pub fn lines(&self) -> usize {
        self.headers + self.comments + self.assignments + self.blanks
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines ({} headers, {} comments, {} defaults, {} assignments, {} blank)",
            self.lines(),
            self.headers,
            self.comments,
            self.defaults,
            self.assignments,
            self.blanks
        )
    }
}

/// Line breaks recognised in the source: `\r\n`, a lone `\r` or `\n`.
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("invalid line break pattern"));

/// Renders the template of a whole env document in a single pass.
///
/// A template has the same number of lines as its source. Headers and comments are copied
/// verbatim, assignments become `KEY=<default>` where `<default>` is the last default
/// declared above them (empty if none was) and everything else becomes an empty line.
/// Every line break in the output is `\n`.
pub fn render(input: &str) -> Rendered {
    let mut output = String::with_capacity(input.len());
    let mut stats = Stats::default();

    split_lines(input)
        .into_iter()
        .fold("", |current, (content, terminated)| {
            render_line(content, terminated, current, &mut output, &mut stats)
        });

    debug!("Rendered template: {stats}");

    Rendered { output, stats }
}

/// Writes the template line for `content` to `buf` and returns the default in effect afterwards.
///
/// Copied lines keep a missing final break missing, rewritten lines always end in `\n`.
fn render_line<'a>(
    content: &'a str,
    terminated: bool,
    current: &'a str,
    buf: &mut String,
    stats: &mut Stats,
) -> &'a str {
    match Line::classify(content) {
        Line::Header => {
            stats.headers += 1;
            copy(content, terminated, buf);
            current
        }
        Line::Comment { default } => {
            stats.comments += 1;
            copy(content, terminated, buf);
            match default {
                Some(default) => {
                    stats.defaults += 1;
                    trace!("Default set to {default:?}");
                    default.render()
                }
                None => current,
            }
        }
        Line::Assignment { key } => {
            stats.assignments += 1;
            buf.push_str(key);
            buf.push('=');
            buf.push_str(current);
            buf.push('\n');
            current
        }
        Line::Blank => {
            stats.blanks += 1;
            buf.push('\n');
            current
        }
    }
}

fn copy(content: &str, terminated: bool, buf: &mut String) {
    buf.push_str(content);
    if terminated {
        buf.push('\n');
    }
}

/// Splits `input` into lines without their breaks, paired with whether a break followed.
fn split_lines(input: &str) -> Vec<(&str, bool)> {
    let mut lines = vec![];
    let mut start = 0;
    for brk in LINE_BREAK.find_iter(input) {
        lines.push((&input[start..brk.start()], true));
        start = brk.end();
    }
    if start < input.len() {
        lines.push((&input[start..], false));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
# //--------
# // AUTH
# //--------
# Auth token [DEFAULT: NONE]
TOKEN=abc123
# Port [DEFAULT: 8080]
PORT=9999
EMPTY=
";

    fn render_output(input: &str) -> String {
        render(input).output
    }

    fn count_lines(s: &str) -> usize {
        split_lines(s).len()
    }

    #[test]
    fn example_document() {
        let expected = "\
# //--------
# // AUTH
# //--------
# Auth token [DEFAULT: NONE]
TOKEN=\"\"
# Port [DEFAULT: 8080]
PORT=8080

";
        let rendered = render(EXAMPLE);
        assert_eq!(rendered.output, expected);
        assert_eq!(
            rendered.stats,
            Stats {
                headers: 3,
                comments: 2,
                defaults: 2,
                assignments: 2,
                blanks: 1,
            }
        );
    }

    #[test]
    fn line_count_is_preserved() {
        for input in [
            "",
            "\n",
            EXAMPLE,
            "A=1\nB=\n\n# c\nnoise\n# // h",
            "KEY=value",
            "\n\n\n",
            "A=1\r\nB=2\r\n",
            "A=1\rB=2\n",
            "# [DEFAULT: x]\r\nA=1\r\nB=2\rC=3\n",
            "\r\r\n\n",
        ] {
            let rendered = render(input);
            assert_eq!(
                count_lines(&rendered.output),
                count_lines(input),
                "{input:?}"
            );
            assert_eq!(rendered.stats.lines(), count_lines(input), "{input:?}");
        }
    }

    #[test]
    fn no_default_declared_leaves_values_empty() {
        assert_eq!(render_output("A=1\nB=2\n"), "A=\nB=\n");
    }

    #[test]
    fn default_persists_across_keys_and_sections() {
        let input = "\
# [DEFAULT: abc]
A=1
B=2
# // SECTION
# unrelated comment
C=3

D=4
# [DEFAULT: xyz]
E=5
";
        let expected = "\
# [DEFAULT: abc]
A=abc
B=abc
# // SECTION
# unrelated comment
C=abc

D=abc
# [DEFAULT: xyz]
E=xyz
";
        assert_eq!(render_output(input), expected);
    }

    #[test]
    fn header_defaults_are_ignored() {
        assert_eq!(
            render_output("# // [DEFAULT: nope]\nA=1\n"),
            "# // [DEFAULT: nope]\nA=\n"
        );
    }

    #[test]
    fn empty_values_become_blank_lines() {
        assert_eq!(
            render_output("# [DEFAULT: d]\nFOO=\n=BAR\n"),
            "# [DEFAULT: d]\n\n\n"
        );
    }

    #[test]
    fn unterminated_last_line() {
        assert_eq!(render_output("# [DEFAULT: 1]\nA=2"), "# [DEFAULT: 1]\nA=1\n");
        assert_eq!(render_output("# // tail"), "# // tail");
        assert_eq!(render_output("# tail"), "# tail");
    }

    #[test]
    fn line_breaks_are_normalized() {
        assert_eq!(
            render_output("# [DEFAULT: x]\r\nA=1\r\nB=\r\n"),
            "# [DEFAULT: x]\nA=x\n\n"
        );
        assert_eq!(render_output("A=1\rB=2\n"), "A=\nB=\n");
        assert_eq!(
            render_output("# [DEFAULT: x]\r\nA=1\r\nB=2\rC=3\n"),
            "# [DEFAULT: x]\nA=x\nB=x\nC=x\n"
        );
        assert_eq!(render_output("# // h\r# c\r"), "# // h\n# c\n");
    }

    #[test]
    fn splitting() {
        assert_eq!(split_lines(""), vec![]);
        assert_eq!(split_lines("a"), vec![("a", false)]);
        assert_eq!(
            split_lines("a\r\nb\rc\n\r\nd"),
            vec![("a", true), ("b", true), ("c", true), ("", true), ("d", false)]
        );
    }

    #[test]
    fn comments_are_idempotent() {
        let once = render_output(EXAMPLE);
        let twice = render_output(&once);
        let comments = |s: &str| {
            s.lines()
                .filter(|l| l.starts_with('#'))
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        assert_eq!(comments(&once), comments(EXAMPLE));
        assert_eq!(comments(&twice), comments(&once));
        assert_eq!(twice, once);
    }
}
