use super::*;
use pretty_assertions::assert_eq;

#[test]
fn recording_trace_keeps_order() {
    let mut trace = RecordingTrace::new();
    trace.char_read('/', LexState::Code, false);
    trace.pushed_back('x');
    trace.transition(LexState::Code, LexState::LineComment);
    trace.flushed(LineKind::Code, "a ", true);
    assert_eq!(
        trace.events(),
        &[
            TraceEvent::CharRead {
                ch: '/',
                state: LexState::Code,
                escape_pending: false,
            },
            TraceEvent::PushedBack('x'),
            TraceEvent::Transition {
                from: LexState::Code,
                to: LexState::LineComment,
            },
            TraceEvent::Flushed {
                kind: LineKind::Code,
                line: "a ".to_owned(),
                emitted: true,
            },
        ]
    );
}

#[test]
fn transitions_filters_other_events() {
    let mut trace = RecordingTrace::new();
    trace.char_read('"', LexState::Code, false);
    trace.transition(LexState::Code, LexState::StringLiteral);
    trace.flushed(LineKind::Code, "", false);
    trace.transition(LexState::StringLiteral, LexState::Code);
    assert_eq!(
        trace.transitions(),
        vec![
            (LexState::Code, LexState::StringLiteral),
            (LexState::StringLiteral, LexState::Code),
        ]
    );
}

#[test]
fn mut_ref_forwards_to_inner() {
    let mut trace = RecordingTrace::new();
    {
        let mut by_ref = &mut trace;
        ScanTrace::pushed_back(&mut by_ref, '*');
    }
    assert_eq!(trace.events(), &[TraceEvent::PushedBack('*')]);
}
