//! Cursor-aware editing on `String` values. Cursors count chars, not bytes.

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

pub fn clamp_cursor(cursor: usize, value: &str) -> usize {
    cursor.min(char_count(value))
}

pub fn insert_char(value: &mut String, cursor: &mut usize, ch: char) {
    let pos = clamp_cursor(*cursor, value);
    value.insert(byte_index_at_char(value, pos), ch);
    *cursor = pos + 1;
}

pub fn backspace_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    value.remove(byte_index_at_char(value, pos - 1));
    *cursor = pos - 1;
    true
}

pub fn delete_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    value.remove(byte_index_at_char(value, pos));
    *cursor = pos;
    true
}

pub fn move_left(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    *cursor = pos - 1;
    true
}

pub fn move_right(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    *cursor = pos + 1;
    true
}

pub fn delete_word_left(value: &mut String, cursor: &mut usize) -> bool {
    let chars: Vec<char> = value.chars().collect();
    let end = (*cursor).min(chars.len());
    let start = word_start_before(&chars, end);
    if start == end {
        *cursor = end;
        return false;
    }
    *value = chars[..start].iter().chain(&chars[end..]).collect();
    *cursor = start;
    true
}

pub fn delete_word_right(value: &mut String, cursor: &mut usize) -> bool {
    let chars: Vec<char> = value.chars().collect();
    let start = (*cursor).min(chars.len());
    let end = word_end_after(&chars, start);
    if start == end {
        *cursor = start;
        return false;
    }
    *value = chars[..start].iter().chain(&chars[end..]).collect();
    *cursor = start;
    true
}

fn word_start_before(chars: &[char], pos: usize) -> usize {
    let mut start = pos;
    while start > 0 && is_separator(chars[start - 1]) {
        start -= 1;
    }
    while start > 0 && !is_separator(chars[start - 1]) {
        start -= 1;
    }
    start
}

fn word_end_after(chars: &[char], pos: usize) -> usize {
    let mut end = pos;
    while end < chars.len() && is_separator(chars[end]) {
        end += 1;
    }
    while end < chars.len() && !is_separator(chars[end]) {
        end += 1;
    }
    end
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@' | '_' | ':')
}

fn byte_index_at_char(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_in_the_middle_of_multibyte_text() {
        let mut value = "Zë".to_string();
        let mut cursor = 1;
        insert_char(&mut value, &mut cursor, 'o');
        assert_eq!(value, "Zoë");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn backspace_and_delete_stop_at_the_edges() {
        let mut value = "ab".to_string();
        let mut cursor = 0;
        assert!(!backspace_char(&mut value, &mut cursor));
        assert!(delete_char(&mut value, &mut cursor));
        assert_eq!(value, "b");

        cursor = 1;
        assert!(!delete_char(&mut value, &mut cursor));
        assert!(backspace_char(&mut value, &mut cursor));
        assert_eq!(value, "");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn out_of_range_cursor_is_clamped() {
        let mut value = "abc".to_string();
        let mut cursor = 99;
        insert_char(&mut value, &mut cursor, 'd');
        assert_eq!(value, "abcd");
        assert_eq!(cursor, 4);
    }

    #[test]
    fn delete_word_left_stops_at_email_separators() {
        let mut value = "chavion@yahoo.com".to_string();
        let mut cursor = char_count(&value);
        assert!(delete_word_left(&mut value, &mut cursor));
        assert_eq!(value, "chavion@yahoo.");
        assert!(delete_word_left(&mut value, &mut cursor));
        assert_eq!(value, "chavion@");
        assert_eq!(cursor, 8);
    }

    #[test]
    fn delete_word_right_removes_following_word() {
        let mut value = "hello big world".to_string();
        let mut cursor = 5;
        assert!(delete_word_right(&mut value, &mut cursor));
        assert_eq!(value, "hello world");
        assert_eq!(cursor, 5);

        let mut end = char_count(&value);
        assert!(!delete_word_right(&mut value, &mut end));
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let mut cursor = 0;
        assert!(!move_left(&mut cursor, "ab"));
        assert!(move_right(&mut cursor, "ab"));
        assert!(move_right(&mut cursor, "ab"));
        assert!(!move_right(&mut cursor, "ab"));
        assert_eq!(cursor, 2);
    }
}
