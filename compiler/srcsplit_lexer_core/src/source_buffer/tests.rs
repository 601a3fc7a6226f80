use super::*;
use crate::CharSource;
use pretty_assertions::assert_eq;

/// Everything the cursor yields.
fn decoded(buf: &SourceBuffer) -> String {
    let mut cursor = buf.cursor();
    std::iter::from_fn(|| cursor.next_char()).collect()
}

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.encoding_issues().is_empty());
    assert!(buf.cursor().is_eof());
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("hello");
    assert_eq!(buf.len(), 5);
    assert_eq!(decoded(&buf), "hello");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn utf8_multibyte_source() {
    let source = "hello \u{1F600} world";
    let buf = SourceBuffer::new(source);
    assert_eq!(decoded(&buf), source);
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn cursor_reads_text() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.next_char(), Some('a'));
    assert_eq!(cursor.next_char(), Some('b'));
    assert_eq!(cursor.next_char(), None);
}

// === Line Counting ===

#[test]
fn line_count() {
    assert_eq!(SourceBuffer::new("").line_count(), 0);
    assert_eq!(SourceBuffer::new("a").line_count(), 1);
    assert_eq!(SourceBuffer::new("a\n").line_count(), 1);
    assert_eq!(SourceBuffer::new("a\nb").line_count(), 2);
    assert_eq!(SourceBuffer::new("\n\n\n").line_count(), 3);
}

// === BOM Detection ===

#[test]
fn utf8_bom_is_stripped_and_reported() {
    let buf = SourceBuffer::from_bytes(&[0xEF, 0xBB, 0xBF, b'h', b'i']);
    assert_eq!(decoded(&buf), "hi");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
}

#[test]
fn utf8_bom_via_unicode() {
    let buf = SourceBuffer::new("\u{FEFF}int x;");
    assert_eq!(decoded(&buf), "int x;");
    assert_eq!(buf.encoding_issues()[0].kind, EncodingIssueKind::Utf8Bom);
}

#[test]
fn utf16_le_bom() {
    let buf = SourceBuffer::from_bytes(&[0xFF, 0xFE, b'h', 0]);
    let kinds: Vec<_> = buf.encoding_issues().iter().map(|i| i.kind).collect();
    assert_eq!(kinds[0], EncodingIssueKind::Utf16LeBom);
    assert!(kinds.contains(&EncodingIssueKind::InvalidUtf8));
}

#[test]
fn utf16_be_bom() {
    let buf = SourceBuffer::from_bytes(&[0xFE, 0xFF, 0, b'h']);
    assert_eq!(buf.encoding_issues()[0].kind, EncodingIssueKind::Utf16BeBom);
}

#[test]
fn bom_not_at_start_is_plain_text() {
    let buf = SourceBuffer::new("a\u{FEFF}");
    assert!(buf.encoding_issues().is_empty());
}

// === Other Issues ===

#[test]
fn interior_nulls_reported_with_positions() {
    let buf = SourceBuffer::new("a\0b\0");
    let positions: Vec<u32> = buf
        .encoding_issues()
        .iter()
        .filter(|i| i.kind == EncodingIssueKind::InteriorNull)
        .map(|i| i.pos)
        .collect();
    assert_eq!(positions, vec![1, 3]);
    // Nulls stay in the text.
    assert_eq!(buf.len(), 4);
}

#[test]
fn null_positions_account_for_stripped_bom() {
    let buf = SourceBuffer::from_bytes(&[0xEF, 0xBB, 0xBF, b'a', 0]);
    let null = buf
        .encoding_issues()
        .iter()
        .find(|i| i.kind == EncodingIssueKind::InteriorNull)
        .copied();
    assert_eq!(null.map(|i| i.pos), Some(4));
}

#[test]
fn invalid_utf8_is_replaced() {
    let buf = SourceBuffer::from_bytes(b"ok \xC3( x");
    assert!(decoded(&buf).contains('\u{FFFD}'));
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::InvalidUtf8,
            pos: 3,
            len: 1,
        }]
    );
}

#[test]
fn descriptions_are_distinct() {
    let kinds = [
        EncodingIssueKind::Utf8Bom,
        EncodingIssueKind::Utf16LeBom,
        EncodingIssueKind::Utf16BeBom,
        EncodingIssueKind::InvalidUtf8,
        EncodingIssueKind::InteriorNull,
    ];
    for (i, a) in kinds.iter().enumerate() {
        for b in &kinds[i + 1..] {
            assert_ne!(a.description(), b.description());
        }
    }
}
