//! This module contains the text announcing the winners of a round. The announcement is wrapped to
//! a fixed width and padded to a fixed number of lines, so the area it is drawn in keeps the same
//! height from one round to the next.

/// The default width at which announcements are wrapped.
pub const MESSAGE_LINE_LENGTH: usize = 100;

/// The number of newlines every announcement carries at the very least.
const MIN_NEWLINES: usize = 3;

/// This function announces the winners of a round, wrapped at `MESSAGE_LINE_LENGTH`.
///
/// ```
/// use diceroll::format_announcement;
///
/// assert_eq!(
///     format_announcement(&["A", "B", "C"]),
///     "A, B and C won the round!\n\n\n"
/// );
/// ```
#[must_use]
pub fn format_announcement<S: AsRef<str>>(winners: &[S]) -> String {
    format_announcement_with_width(winners, MESSAGE_LINE_LENGTH)
}

/// This function announces the winners of a round, wrapped so no line is longer than
/// `line_length` characters wherever a space allows it.
///
/// Names are joined with commas, except for the last one, which is joined with "and". An empty
/// list yields just the padding.
#[must_use]
pub fn format_announcement_with_width<S: AsRef<str>>(
    winners: &[S],
    line_length: usize,
) -> String {
    let Some((last, rest)) = winners.split_last() else {
        return pad(String::new());
    };

    let mut names = rest
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ");
    if !rest.is_empty() {
        names.push_str(" and ");
    }
    names.push_str(last.as_ref());

    pad(wrap(&format!("{names} won the round!"), line_length))
}

/// This function breaks the text into lines of at most `width` characters, replacing the last
/// space at or before the limit with a newline. A line without any such space is left longer
/// than the limit and broken at its first space instead.
pub(crate) fn wrap(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut rest = text;

    loop {
        // byte offset of the first character past the limit
        let Some((limit, _)) = rest.char_indices().nth(width) else {
            lines.push(rest);
            break;
        };

        let head = rest.get(..limit).unwrap_or(rest);
        let tail = rest.get(limit..).unwrap_or_default();
        let split = if tail.starts_with(' ') {
            Some(limit)
        } else {
            head.rfind(' ').or_else(|| tail.find(' ').map(|offset| limit + offset))
        };

        let Some(split) = split else {
            lines.push(rest);
            break;
        };

        lines.push(rest.get(..split).unwrap_or(rest));
        rest = rest.get(split + 1..).unwrap_or_default();
    }

    lines.join("\n")
}

/// Appends newlines until the text holds at least `MIN_NEWLINES` of them.
fn pad(mut text: String) -> String {
    let newlines = text.matches('\n').count();

    for _ in newlines..MIN_NEWLINES {
        text.push('\n');
    }

    text
}
