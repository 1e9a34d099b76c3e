use rishort_core::FailureReason;
use rishort_engine::{Clipboard, ClipboardCommand, ClipboardError, SystemClipboard};

#[test]
fn missing_programs_report_unavailable() {
    let clipboard = SystemClipboard::with_commands(vec![
        ClipboardCommand::new("rishort-no-such-clipboard-a", &[]),
        ClipboardCommand::new("rishort-no-such-clipboard-b", &[]),
    ]);

    let err = clipboard.write_text("http://sho.rt/x").unwrap_err();
    match &err {
        ClipboardError::Unavailable { tried } => {
            assert_eq!(
                tried,
                "rishort-no-such-clipboard-a, rishort-no-such-clipboard-b"
            );
        }
        other => panic!("unexpected error {other:?}"),
    }

    let reason: FailureReason = err.into();
    assert!(matches!(reason, FailureReason::ClipboardWriteFailed { .. }));
}

#[cfg(unix)]
#[test]
fn first_working_program_wins() {
    let clipboard = SystemClipboard::with_commands(vec![
        ClipboardCommand::new("rishort-no-such-clipboard", &[]),
        ClipboardCommand::new("cat", &[]),
    ]);

    assert!(clipboard.write_text("http://sho.rt/x").is_ok());
}

#[cfg(unix)]
#[test]
fn failing_program_reports_exit_status() {
    let clipboard = SystemClipboard::with_commands(vec![ClipboardCommand::new("false", &[])]);

    let err = clipboard.write_text("http://sho.rt/x").unwrap_err();
    assert!(matches!(err, ClipboardError::Exit { ref program, .. } if program == "false"));
}
