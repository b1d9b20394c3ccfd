use pretty_assertions::assert_eq;
use shared_types::{
    allowed_roles_for, is_route_allowed, visible_entries, NAVIGATION, ROUTE_AUTHORIZATIONS,
    CLAIMS_PATH, INSIGHTS_PATH, OVERVIEW_PATH, PROFILE_PATH, SETTINGS_PATH, USERS_PATH,
};

const ROLE_INPUTS: &[Option<&str>] = &[
    Some("C_SUITE"),
    Some("DEPARTMENT_HEAD"),
    Some("STAFF"),
    Some("INTERN"),
    Some(""),
    None,
];

fn is_manager(role: Option<&str>) -> bool {
    matches!(role, Some("C_SUITE") | Some("DEPARTMENT_HEAD"))
}

#[test]
fn route_matrix_matches_manager_split() {
    let open = [OVERVIEW_PATH, CLAIMS_PATH, PROFILE_PATH, SETTINGS_PATH];
    let restricted = [INSIGHTS_PATH, USERS_PATH, "/dashboard/users/jdoe"];

    for role in ROLE_INPUTS {
        for path in open {
            assert!(
                is_route_allowed(*role, allowed_roles_for(path)),
                "{role:?} should reach {path}"
            );
        }
        for path in restricted {
            assert_eq!(
                is_route_allowed(*role, allowed_roles_for(path)),
                is_manager(*role),
                "{role:?} on {path}"
            );
        }
    }
}

#[test]
fn visible_navigation_never_links_to_a_denied_route() {
    for role in ROLE_INPUTS {
        for entry in visible_entries(*role) {
            assert!(
                is_route_allowed(*role, allowed_roles_for(entry.route)),
                "{role:?} sees {} but cannot open it",
                entry.label
            );
        }
    }
}

#[test]
fn navigation_labels_per_role() {
    let labels = |role| {
        visible_entries(role)
            .iter()
            .map(|e| e.label)
            .collect::<Vec<_>>()
    };
    assert_eq!(
        labels(Some("C_SUITE")),
        vec!["Overview", "Claims", "Users", "Settings"]
    );
    assert_eq!(
        labels(Some("DEPARTMENT_HEAD")),
        vec!["Overview", "Claims", "Users", "Settings"]
    );
    assert_eq!(labels(Some("STAFF")), vec!["Overview", "Claims", "Settings"]);
    assert_eq!(labels(None), vec!["Overview", "Claims", "Settings"]);
}

#[test]
fn every_navigation_route_is_in_the_route_table() {
    for entry in NAVIGATION {
        assert!(
            ROUTE_AUTHORIZATIONS.iter().any(|a| a.matches(entry.route)),
            "{} has no route authorization",
            entry.route
        );
    }
}

#[test]
fn query_strings_do_not_change_authorization() {
    assert_eq!(
        allowed_roles_for("/dashboard/insights?user=jdoe"),
        allowed_roles_for(INSIGHTS_PATH)
    );
    assert!(!is_route_allowed(
        Some("STAFF"),
        allowed_roles_for("/dashboard/insights?user=jdoe")
    ));
}
