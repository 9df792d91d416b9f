use unicode_width::UnicodeWidthChar;

/// Shortens `s` to at most `max_len` characters, ending in "...".
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// One visual row of the answer box: characters `start..end` of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

fn display_width(chars: &[char]) -> usize {
    chars.iter().map(|ch| ch.width().unwrap_or(0)).sum()
}

fn wrapped_line(chars: &[char], start: usize, end: usize) -> WrappedLine {
    let text: String = chars[start..end].iter().collect();
    WrappedLine {
        text: text.trim_end().to_string(),
        start,
        end,
    }
}

/// Word-wraps `text` into rows of at most `max_width` display columns.
/// Spaces hang at the end of a row, a word wider than a row is split.
pub fn wrap_input(text: &str, max_width: usize) -> Vec<WrappedLine> {
    let max_width = max_width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut width = 0;
    let mut last_space: Option<usize> = None;

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '\n' {
            lines.push(wrapped_line(&chars, start, i));
            start = i + 1;
            width = 0;
            last_space = None;
            continue;
        }
        if ch == ' ' {
            width += 1;
            last_space = Some(i);
            continue;
        }

        let char_width = ch.width().unwrap_or(0);
        if width + char_width > max_width && i > start {
            if let Some(space) = last_space.take() {
                lines.push(wrapped_line(&chars, start, space + 1));
                start = space + 1;
                width = display_width(&chars[start..i]);
            }
            if width + char_width > max_width && i > start {
                lines.push(wrapped_line(&chars, start, i));
                start = i;
                width = 0;
            }
        }
        width += char_width;
    }
    lines.push(wrapped_line(&chars, start, chars.len()));

    lines
}

/// Row and display column of a character cursor inside wrapped text.
/// A cursor that would sit past the right edge moves to the next row.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor_index: usize,
    max_width: usize,
) -> (usize, usize) {
    let max_width = max_width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor_index.min(chars.len());
    let lines = wrap_input(text, max_width);

    for (row, line) in lines.iter().enumerate() {
        let continues = lines.get(row + 1).is_some_and(|next| next.start == line.end);
        let on_row = cursor >= line.start
            && (cursor < line.end || (cursor == line.end && !continues));
        if on_row {
            let column = display_width(&chars[line.start..cursor]);
            return if column >= max_width {
                (row + 1, 0)
            } else {
                (row, column)
            };
        }
    }

    (lines.len().saturating_sub(1), 0)
}
