// Unit tests for the transcript buffer.
//
// These verify the fragment rules: partials replace, finals append in
// arrival order, empty finals are ignored.

use easyspeech::TranscriptBuffer;

#[test]
fn test_partial_is_replaced_wholesale() {
    let mut buffer = TranscriptBuffer::new();

    buffer.set_partial("hel");
    buffer.set_partial("hello");
    buffer.set_partial("hello wor");

    let snapshot = buffer.snapshot();
    assert_eq!(snapshot.partial_text, "hello wor");
    assert_eq!(snapshot.finalized_text, "");
}

#[test]
fn test_partials_never_reach_finalized_text() {
    let mut buffer = TranscriptBuffer::new();

    buffer.set_partial("first hypo");
    buffer.set_partial("second hypo");
    buffer.commit_final("what was actually said");

    assert_eq!(buffer.fragments(), &["what was actually said".to_string()]);
    assert!(!buffer.snapshot().finalized_text.contains("hypo"));
}

#[test]
fn test_finals_append_in_arrival_order() {
    let mut buffer = TranscriptBuffer::new();

    buffer.commit_final("one");
    buffer.commit_final("two");
    buffer.commit_final("three");

    assert_eq!(
        buffer.fragments(),
        &["one".to_string(), "two".to_string(), "three".to_string()]
    );
    assert_eq!(buffer.snapshot().finalized_text, "one\ntwo\nthree");
}

#[test]
fn test_empty_final_is_a_no_op() {
    let mut buffer = TranscriptBuffer::new();

    buffer.commit_final("kept");
    buffer.commit_final("");

    assert_eq!(buffer.fragments(), &["kept".to_string()]);
    assert_eq!(buffer.snapshot().finalized_text, "kept");
}

#[test]
fn test_clear_resets_both_fragments() {
    let mut buffer = TranscriptBuffer::new();

    buffer.commit_final("saved already");
    buffer.set_partial("in flight");
    buffer.clear();

    assert!(buffer.is_empty());
    let snapshot = buffer.snapshot();
    assert_eq!(snapshot.finalized_text, "");
    assert_eq!(snapshot.partial_text, "");
}

#[test]
fn test_empty_buffer_snapshot() {
    let buffer = TranscriptBuffer::new();

    assert!(buffer.is_empty());
    assert_eq!(buffer.snapshot().finalized_text, "");
}
