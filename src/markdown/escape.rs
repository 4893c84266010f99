//! Markdown escaping for literal record text.
//!
//! Record fields are plain text. Escaping keeps a title like `*Draft*` or a
//! description starting with `# ` from turning into markup.

/// Escape characters that Markdown would otherwise interpret.
///
/// Always escaped: `\`, `*`, `_`, `` ` ``, `[`, `]`, `|`, `<`, `>`, `&`.
/// Escaped only at the start of a line: `#`, `-`, `+`, `=`, `~`, and a `.`
/// or `)` that follows a leading run of digits (ordered-list markers).
/// A `#` ending a line is escaped so it cannot close an ATX heading, and
/// `!` is escaped when it would start an image.
///
/// Spaces and tabs at either end of a line are written as character
/// references, so indentation cannot open a code block and trailing spaces
/// cannot form a hard line break.
///
/// # Examples
///
/// ```
/// use ebook_detail::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("*Draft*"), "\\*Draft\\*");
/// assert_eq!(escape_markdown("1. First"), "1\\. First");
/// assert_eq!(escape_markdown("a - b"), "a - b");
/// assert_eq!(escape_markdown("  indented"), "&#32;&#32;indented");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        escape_line(line, &mut out);
    }
    out
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn push_blanks(blanks: &str, out: &mut String) {
    for c in blanks.chars() {
        out.push_str(if c == '\t' { "&#9;" } else { "&#32;" });
    }
}

fn escape_line(line: &str, out: &mut String) {
    let rest = line.trim_start_matches(is_blank);
    let body = rest.trim_end_matches(is_blank);
    push_blanks(&line[..line.len() - rest.len()], out);

    let mut chars = body.chars().peekable();
    let mut at_line_start = true;
    let mut leading_digits = false;

    while let Some(c) = chars.next() {
        let escape = match c {
            '\\' | '*' | '_' | '`' | '[' | ']' | '|' | '<' | '>' | '&' => true,
            '#' => at_line_start || chars.peek().is_none(),
            '-' | '+' | '=' | '~' => at_line_start,
            '.' | ')' => leading_digits,
            '!' => chars.peek() == Some(&'['),
            _ => false,
        };
        if escape {
            out.push('\\');
        }
        out.push(c);

        leading_digits = c.is_ascii_digit() && (at_line_start || leading_digits);
        at_line_start = false;
    }

    push_blanks(&rest[body.len()..], out);
}
