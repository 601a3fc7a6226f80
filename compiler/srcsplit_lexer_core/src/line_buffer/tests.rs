use super::*;
use pretty_assertions::assert_eq;

fn filled(text: &str) -> LineBuffer {
    let mut buf = LineBuffer::new();
    for ch in text.chars() {
        buf.push(ch);
    }
    buf
}

#[test]
fn flush_returns_untrimmed_text() {
    let mut buf = filled("  int x = 1;  ");
    assert_eq!(buf.flush().as_deref(), Some("  int x = 1;  "));
    assert!(buf.is_blank());
    assert_eq!(buf.flush(), None);
}

#[test]
fn flush_drops_blank_line() {
    let mut buf = filled(" \t  ");
    assert!(buf.is_blank());
    assert_eq!(buf.flush(), None);
    buf.push('x');
    assert_eq!(buf.flush().as_deref(), Some("x"));
}

#[test]
fn flush_of_empty_buffer_is_none() {
    let mut buf = LineBuffer::new();
    assert_eq!(buf.flush(), None);
}

#[test]
fn carriage_return_is_not_stored() {
    let mut buf = filled("a\r\rb\r");
    assert_eq!(buf.flush().as_deref(), Some("ab"));
}

#[test]
fn lone_carriage_return_is_blank() {
    let mut buf = filled("\r");
    assert!(buf.is_blank());
    assert_eq!(buf.flush(), None);
}

#[test]
fn buffer_reusable_after_flush() {
    let mut buf = filled("first");
    buf.flush();
    buf.push('s');
    assert_eq!(buf.flush().as_deref(), Some("s"));
}

#[test]
fn kind_names() {
    assert_eq!(LineKind::Code.to_string(), "code");
    assert_eq!(LineKind::Comment.to_string(), "comment");
}
