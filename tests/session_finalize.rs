// Session completion: payload shape, at-most-once semantics, and the
// finalize policies.

mod test_helpers;

use test_helpers::{three_item_session, three_item_session_with};
use text_annotator::{
    Direction, FinalizePolicy, LabelAddressing, LabelRef, SessionConfig, SessionError, SessionPhase,
};

#[test]
fn finalize_exports_items_in_current_order() {
    let config = SessionConfig {
        addressing: LabelAddressing::ByName,
        ..SessionConfig::default()
    };
    let mut session = three_item_session_with(config);
    session.assign_label(0, &"positive".into()).unwrap();

    let payload = session.finalize("alice").unwrap();

    assert_eq!(payload.annotator, "alice");
    let ids: Vec<i64> = payload.labelled_dataset.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(
        payload.labelled_dataset[0].label,
        Some(LabelRef::Name("positive".to_string()))
    );
    assert!(!payload.labelled_dataset[1].is_labeled());

    // The second call fails and the first payload stands as produced.
    assert_eq!(session.finalize("alice"), Err(SessionError::AlreadyFinalized));
    assert_eq!(payload.labelled_dataset.len(), 3);
}

#[test]
fn finalize_includes_unlabeled_items() {
    let mut session = three_item_session();

    let payload = session.finalize("bob").unwrap();

    assert_eq!(payload.labelled_dataset.len(), 3);
    assert!(payload.labelled_dataset.iter().all(|item| !item.is_labeled()));
}

#[test]
fn mutating_operations_are_rejected_after_finalize() {
    let mut session = three_item_session();
    session.finalize("alice").unwrap();

    assert_eq!(session.phase(), SessionPhase::Finalized);
    assert_eq!(
        session.navigate(Direction::Next),
        Err(SessionError::AlreadyFinalized)
    );
    assert_eq!(session.goto(1), Err(SessionError::AlreadyFinalized));
    assert_eq!(
        session.assign_label(0, &"positive".into()),
        Err(SessionError::AlreadyFinalized)
    );
    assert_eq!(session.clear_label(0), Err(SessionError::AlreadyFinalized));

    // Reads stay available for whatever the host still wants to render.
    assert_eq!(session.progress().total, 3);
    assert_eq!(session.annotator(), Some("alice"));
}

#[test]
fn manual_policy_never_reports_due() {
    let mut session = three_item_session();

    session.goto(2).unwrap();
    session.assign_label(2, &"positive".into()).unwrap();

    assert!(!session.finalize_due());
}

#[test]
fn auto_policy_is_due_after_interacting_with_the_last_item() {
    let config = SessionConfig {
        finalize: FinalizePolicy::AutoOnLastItem,
        ..SessionConfig::default()
    };
    let mut session = three_item_session_with(config);

    assert!(!session.finalize_due());

    session.goto(2).unwrap();
    assert!(!session.finalize_due());

    session.assign_label(2, &"positive".into()).unwrap();
    assert!(session.finalize_due());

    session.finalize("alice").unwrap();
    assert!(!session.finalize_due());
}
