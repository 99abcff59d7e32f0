use super::*;

const REQUEST: ConfirmRequest = ConfirmRequest {
    title: "Are you sure?",
    text: "Really?",
    icon: Icon::Warning,
    confirm_label: "Yes",
    cancel_label: "No",
};

fn dialog(input: &'static [u8]) -> TerminalDialog<&'static [u8], Vec<u8>> {
    TerminalDialog::new(input, Vec::new())
}

// =============================================================
// parse_answer
// =============================================================

#[test]
fn answer_yes_variants_confirm() {
    for answer in ["y\n", "Y\n", "yes\n", " YES \r\n"] {
        assert_eq!(parse_answer(answer), Confirmation::Confirmed, "{answer:?}");
    }
}

#[test]
fn answer_other_input_cancels() {
    for answer in ["", "\n", "n\n", "no\n", "yep\n"] {
        assert_eq!(parse_answer(answer), Confirmation::Cancelled, "{answer:?}");
    }
}

// =============================================================
// TerminalDialog
// =============================================================

#[tokio::test]
async fn confirm_writes_prompt_and_reads_yes() {
    let dialog = dialog(b"y\n");
    assert_eq!(dialog.confirm(&REQUEST).await, Confirmation::Confirmed);

    let (_, written) = dialog.into_inner();
    let written = String::from_utf8(written).unwrap();
    assert!(written.starts_with("[warning] Are you sure?\nReally?\n"));
    assert!(written.ends_with("[y/N] "));
}

#[tokio::test]
async fn confirm_eof_cancels() {
    let dialog = dialog(b"");
    assert_eq!(dialog.confirm(&REQUEST).await, Confirmation::Cancelled);
}

#[tokio::test]
async fn confirm_reads_one_line_per_request() {
    let dialog = dialog(b"n\ny\n");
    assert_eq!(dialog.confirm(&REQUEST).await, Confirmation::Cancelled);
    assert_eq!(dialog.confirm(&REQUEST).await, Confirmation::Confirmed);
}

#[tokio::test]
async fn alert_writes_single_line() {
    let dialog = dialog(b"");
    dialog.alert(&Alert::success("Deleted!", "Gone.")).await;
    dialog.alert(&Alert::error("Error!", "Nope.")).await;

    let (_, written) = dialog.into_inner();
    assert_eq!(String::from_utf8(written).unwrap(), "[ok] Deleted!: Gone.\n[error] Error!: Nope.\n");
}

// =============================================================
// AssumeYes
// =============================================================

#[tokio::test]
async fn assume_yes_confirms_without_reading() {
    let dialog = AssumeYes::new(dialog(b"n\n"));
    assert_eq!(dialog.confirm(&REQUEST).await, Confirmation::Confirmed);
}

#[tokio::test]
async fn assume_yes_forwards_alerts() {
    let dialog = AssumeYes::new(dialog(b""));
    dialog.alert(&Alert::success("Success!", "Saved.")).await;

    let (_, written) = dialog.inner.into_inner();
    assert_eq!(String::from_utf8(written).unwrap(), "[ok] Success!: Saved.\n");
}
