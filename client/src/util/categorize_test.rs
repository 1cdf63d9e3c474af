use super::*;

// =============================================================
// Helpers
// =============================================================

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

fn names(category: &Category) -> Vec<&str> {
    category.members.iter().map(|m| m.name.as_str()).collect()
}

fn titles(categories: &[Category]) -> Vec<&'static str> {
    categories.iter().map(|c| c.title).collect()
}

// =============================================================
// CategoryKey
// =============================================================

#[test]
fn category_keys_are_listed_in_priority_order() {
    let priorities: Vec<u8> = CategoryKey::ALL.iter().map(|k| k.priority()).collect();
    assert_eq!(priorities, vec![1, 2, 3, 4, 5]);
}

#[test]
fn category_key_titles() {
    assert_eq!(CategoryKey::Alumni.title(), "Alumni");
    assert_eq!(CategoryKey::Leadership.title(), "Leadership Team");
    assert_eq!(CategoryKey::Coordinator.title(), "Club Coordinators");
    assert_eq!(CategoryKey::Executives.title(), "Executives");
    assert_eq!(CategoryKey::Volunteers.title(), "Volunteers");
}

#[test]
fn category_key_names() {
    let keys: Vec<&str> = CategoryKey::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["alumni", "leadership", "coordinator", "executives", "volunteers"]);
}

// =============================================================
// classify_role
// =============================================================

#[test]
fn classify_role_matches_each_keyword() {
    assert_eq!(classify_role("Alumni Mentor"), CategoryKey::Alumni);
    assert_eq!(classify_role("General Secretary"), CategoryKey::Leadership);
    assert_eq!(classify_role("Convener"), CategoryKey::Leadership);
    assert_eq!(classify_role("Club Coordinator"), CategoryKey::Coordinator);
    assert_eq!(classify_role("Executive Member"), CategoryKey::Executives);
    assert_eq!(classify_role("Designer"), CategoryKey::Volunteers);
}

#[test]
fn classify_role_is_case_insensitive() {
    assert_eq!(classify_role("ALUMNI"), CategoryKey::Alumni);
    assert_eq!(classify_role("co-CONVENER"), CategoryKey::Leadership);
    assert_eq!(classify_role("Technical ExEcUtIvE"), CategoryKey::Executives);
}

#[test]
fn classify_role_empty_is_volunteer() {
    assert_eq!(classify_role(""), CategoryKey::Volunteers);
}

#[test]
fn classify_role_matches_substrings() {
    assert_eq!(classify_role("executives lead"), CategoryKey::Executives);
    assert_eq!(classify_role("coordinators"), CategoryKey::Coordinator);
}

#[test]
fn classify_role_alumni_beats_everything() {
    assert_eq!(classify_role("Alumni Executive"), CategoryKey::Alumni);
    assert_eq!(classify_role("Secretary (alumni)"), CategoryKey::Alumni);
    assert_eq!(classify_role("Coordinator, Alumni"), CategoryKey::Alumni);
}

#[test]
fn classify_role_leadership_beats_coordinator_and_executive() {
    assert_eq!(classify_role("Secretary and Coordinator"), CategoryKey::Leadership);
    assert_eq!(classify_role("Convener / Executive"), CategoryKey::Leadership);
}

#[test]
fn classify_role_coordinator_beats_executive() {
    assert_eq!(classify_role("Executive Coordinator"), CategoryKey::Coordinator);
}

// =============================================================
// categorize
// =============================================================

#[test]
fn categorize_empty_list_yields_no_sections() {
    assert!(categorize(&[]).is_empty());
}

#[test]
fn categorize_single_alumni_member() {
    let out = categorize(&[member("A", "Alumni Mentor")]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Alumni");
    assert_eq!(out[0].key, CategoryKey::Alumni);
    assert_eq!(names(&out[0]), vec!["A"]);
}

#[test]
fn categorize_orders_sections_by_priority_not_input() {
    let input = [member("C", "Club Coordinator"), member("S", "Secretary"), member("E", "")];
    let out = categorize(&input);
    assert_eq!(titles(&out), vec!["Leadership Team", "Club Coordinators", "Volunteers"]);
    assert_eq!(names(&out[0]), vec!["S"]);
    assert_eq!(names(&out[1]), vec!["C"]);
    assert_eq!(names(&out[2]), vec!["E"]);
}

#[test]
fn categorize_preserves_fetch_order_within_section() {
    let input = [
        member("V1", "Volunteer"),
        member("X1", "Executive"),
        member("V2", "Photographer"),
        member("X2", "Junior Executive"),
        member("V3", ""),
    ];
    let out = categorize(&input);
    assert_eq!(titles(&out), vec!["Executives", "Volunteers"]);
    assert_eq!(names(&out[0]), vec!["X1", "X2"]);
    assert_eq!(names(&out[1]), vec!["V1", "V2", "V3"]);
}

#[test]
fn categorize_sets_key_title_and_priority_consistently() {
    let input = [member("a", "alumni"), member("v", "")];
    for category in categorize(&input) {
        assert_eq!(category.title, category.key.title());
        assert_eq!(category.priority, category.key.priority());
    }
}

#[test]
fn categorize_never_drops_or_duplicates() {
    let roles = [
        "Alumni", "Secretary", "Convener", "Coordinator", "Executive", "", "Alumni Executive",
        "secretary coordinator", "Mascot",
    ];
    let input: Vec<Member> = roles.iter().enumerate().map(|(i, r)| member(&format!("m{i}"), r)).collect();
    let out = categorize(&input);

    let mut seen: Vec<String> = out.iter().flat_map(|c| c.members.iter().map(|m| m.name.clone())).collect();
    seen.sort();
    let mut expected: Vec<String> = input.iter().map(|m| m.name.clone()).collect();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn categorize_sections_strictly_increase_in_priority() {
    let input = [
        member("v", "Helper"),
        member("x", "Executive"),
        member("c", "Coordinator"),
        member("l", "Convener"),
        member("a", "Alumni"),
    ];
    let out = categorize(&input);
    assert_eq!(out.len(), 5);
    assert!(out.windows(2).all(|w| w[0].priority < w[1].priority));
}

#[test]
fn categorize_is_idempotent() {
    let input = [member("a", "Alumni"), member("b", "Executive"), member("c", "")];
    assert_eq!(categorize(&input), categorize(&input));
}

#[test]
fn categorize_does_not_mutate_input() {
    let input = vec![member("a", "ALUMNI Lead")];
    let before = input.clone();
    let _ = categorize(&input);
    assert_eq!(input, before);
}
