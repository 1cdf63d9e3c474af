use super::*;

fn member(name: &str, role: &str) -> Member {
    Member {
        id: None,
        name: name.to_owned(),
        role: role.to_owned(),
        bio: String::new(),
        profile_image_url: String::new(),
        linkedin_url: None,
        github_url: None,
    }
}

// =============================================================
// TeamState defaults
// =============================================================

#[test]
fn team_state_default_is_loading() {
    assert_eq!(TeamState::default(), TeamState::Loading);
    assert!(TeamState::default().is_loading());
}

// =============================================================
// reduce
// =============================================================

#[test]
fn reduce_loaded_moves_to_ready() {
    let members = vec![member("A", "Alumni")];
    let next = reduce(TeamState::Loading, TeamEvent::Loaded(members.clone()));
    assert_eq!(next, TeamState::Ready { members });
}

#[test]
fn reduce_failed_moves_to_error() {
    let next = reduce(TeamState::Loading, TeamEvent::Failed("Failed to fetch members".to_owned()));
    assert_eq!(next, TeamState::Error { message: "Failed to fetch members".to_owned() });
    assert!(!next.is_loading());
}

#[test]
fn reduce_ready_ignores_later_events() {
    let ready = TeamState::Ready { members: vec![member("A", "")] };
    assert_eq!(reduce(ready.clone(), TeamEvent::Failed("late".to_owned())), ready);
    assert_eq!(reduce(ready.clone(), TeamEvent::Loaded(Vec::new())), ready);
}

#[test]
fn reduce_error_ignores_later_events() {
    let error = TeamState::Error { message: "boom".to_owned() };
    assert_eq!(reduce(error.clone(), TeamEvent::Loaded(vec![member("A", "")])), error);
}

#[test]
fn team_event_from_result() {
    assert_eq!(TeamEvent::from(Ok(Vec::new())), TeamEvent::Loaded(Vec::new()));
    assert_eq!(TeamEvent::from(Err("x".to_owned())), TeamEvent::Failed("x".to_owned()));
}

// =============================================================
// categories
// =============================================================

#[test]
fn categories_empty_while_loading_or_failed() {
    assert!(TeamState::Loading.categories().is_empty());
    assert!(TeamState::Error { message: "e".to_owned() }.categories().is_empty());
}

#[test]
fn categories_empty_for_empty_roster() {
    let state = reduce(TeamState::Loading, TeamEvent::Loaded(Vec::new()));
    assert!(matches!(state, TeamState::Ready { .. }));
    assert!(state.categories().is_empty());
}

#[test]
fn categories_group_ready_members() {
    let state = TeamState::Ready { members: vec![member("V", ""), member("A", "Alumni Mentor")] };
    let titles: Vec<&str> = state.categories().iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Alumni", "Volunteers"]);
}
