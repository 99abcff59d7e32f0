use super::*;

#[test]
fn starts_idle() {
    assert_eq!(DeletionFlow::new().state(), &DeletionState::Idle);
}

#[test]
fn request_moves_to_confirm_pending() {
    let mut flow = DeletionFlow::new();
    let confirm = flow.request("r-1").unwrap();
    assert_eq!(confirm, &DELETE_CONFIRM);
    assert_eq!(confirm.icon, Icon::Warning);
    assert_eq!(flow.state(), &DeletionState::ConfirmPending { id: "r-1".into() });
}

#[test]
fn cancel_yields_no_id() {
    let mut flow = DeletionFlow::new();
    flow.request("r-1").unwrap();
    assert_eq!(flow.resolve(Confirmation::Cancelled).unwrap(), None);
    assert_eq!(flow.state(), &DeletionState::Cancelled { id: "r-1".into() });
    assert!(flow.state().is_settled());
}

#[test]
fn confirm_then_success_is_deleted() {
    let mut flow = DeletionFlow::new();
    flow.request("r-1").unwrap();
    assert_eq!(flow.resolve(Confirmation::Confirmed).unwrap(), Some("r-1".into()));
    assert_eq!(flow.state(), &DeletionState::InFlight { id: "r-1".into() });

    let alert = flow.complete(true).unwrap();
    assert_eq!(alert, &DELETED_ALERT);
    assert_eq!(flow.state(), &DeletionState::Deleted { id: "r-1".into() });
}

#[test]
fn confirm_then_failure_is_failed() {
    let mut flow = DeletionFlow::new();
    flow.request("r-1").unwrap();
    flow.resolve(Confirmation::Confirmed).unwrap();

    let alert = flow.complete(false).unwrap();
    assert_eq!(alert.icon, Icon::Error);
    assert_eq!(alert.title, "Error!");
    assert_eq!(flow.state(), &DeletionState::Failed { id: "r-1".into() });
}

#[test]
fn settled_states_accept_new_request() {
    let mut flow = DeletionFlow::new();
    flow.request("a").unwrap();
    flow.resolve(Confirmation::Cancelled).unwrap();
    flow.request("b").unwrap();
    assert_eq!(flow.state(), &DeletionState::ConfirmPending { id: "b".into() });
}

// =============================================================
// Invalid transitions leave state untouched
// =============================================================

#[test]
fn request_while_pending_is_rejected() {
    let mut flow = DeletionFlow::new();
    flow.request("a").unwrap();
    let err = flow.request("b").unwrap_err();
    assert_eq!(err, DeletionError::InvalidTransition { action: "request", state: "confirm_pending" });
    assert_eq!(flow.state(), &DeletionState::ConfirmPending { id: "a".into() });
}

#[test]
fn request_with_blank_or_dot_id_is_rejected() {
    let mut flow = DeletionFlow::new();
    for id in ["", ".", ".."] {
        assert_eq!(flow.request(id).unwrap_err(), DeletionError::InvalidId(id.into()));
        assert_eq!(flow.state(), &DeletionState::Idle);
    }
}

#[test]
fn resolve_when_idle_is_rejected() {
    let mut flow = DeletionFlow::new();
    assert!(flow.resolve(Confirmation::Confirmed).is_err());
    assert_eq!(flow.state(), &DeletionState::Idle);
}

#[test]
fn complete_before_confirm_is_rejected() {
    let mut flow = DeletionFlow::new();
    flow.request("a").unwrap();
    let err = flow.complete(true).unwrap_err();
    assert!(err.to_string().contains("confirm_pending"));
    assert_eq!(flow.state(), &DeletionState::ConfirmPending { id: "a".into() });
}

#[test]
fn reset_returns_to_idle() {
    let mut flow = DeletionFlow::new();
    flow.request("a").unwrap();
    flow.reset();
    assert_eq!(flow.state(), &DeletionState::Idle);
}
