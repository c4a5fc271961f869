/// Single-line previews of problem text, sized for a fixed-width terminal.
///
/// Widths follow the East Asian Width property: Fullwidth, Wide and
/// Ambiguous characters take two columns, everything else takes one.
use icu_properties::props::EastAsianWidth;
use icu_properties::CodePointMapData;

pub const ELLIPSIS: &str = "…";

/// Columns reserved on every preview line: 4 indent + 2 ellipsis + 1 spare.
pub const RESERVED_COLUMNS: usize = 4 + 2 + 1;

const INDENT: &str = "    ";

/// Column cost of one character: 2 for F/W/A, 1 for H/Na/N.
pub fn char_width(c: char) -> usize {
    let eaw = CodePointMapData::<EastAsianWidth>::new().get(c);
    if eaw == EastAsianWidth::Fullwidth
        || eaw == EastAsianWidth::Wide
        || eaw == EastAsianWidth::Ambiguous
    {
        2
    } else {
        1
    }
}

pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Trim and turn every newline into a visible `\n` so the text fits one line.
pub fn normalize(content: &str) -> String {
    content.trim().replace('\n', "\\n")
}

/// Longest prefix whose width stays within `budget`, plus the character that
/// crossed it. The result can overshoot by one character (1-2 columns).
pub fn truncate_to_width(s: &str, budget: usize) -> &str {
    let mut width = 0;
    for (i, c) in s.char_indices() {
        width += char_width(c);
        if width > budget {
            return &s[..i + c.len_utf8()];
        }
    }
    s
}

/// Normalized, truncated preview. The ellipsis is appended whether or not
/// anything was cut.
pub fn render_preview(content: &str, budget: usize) -> String {
    let normalized = normalize(content);
    format!("{}{ELLIPSIS}", truncate_to_width(&normalized, budget))
}

/// `"<index>: <filename>\n    <preview>…"`
pub fn render_line(index: usize, filename: &str, content: &str, budget: usize) -> String {
    format!("{index}: {filename}\n{INDENT}{}", render_preview(content, budget))
}
