use taskflow_core::{Filter, Todo, TodoCounts};
use uuid::Uuid;

#[test]
fn todo_new_sets_defaults() {
    let todo = Todo::new("buy milk");

    assert!(!todo.id.is_nil());
    assert_eq!(todo.text, "buy milk");
    assert!(!todo.completed);
    assert!(todo.created_at > 0);
}

#[test]
fn todo_new_assigns_distinct_ids() {
    let first = Todo::new("one");
    let second = Todo::new("two");

    assert_ne!(first.id, second.id);
}

#[test]
fn todo_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let todo = Todo::with_id(id, "ship release", true, 1_700_000_000_000);

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["text"], "ship release");
    assert_eq!(json["completed"], true);
    assert_eq!(json["createdAt"], 1_700_000_000_000_i64);

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn matches_selects_records_by_completion() {
    let active = Todo::new("still open");
    let mut done = Todo::new("finished");
    done.completed = true;

    assert!(active.matches(Filter::All));
    assert!(done.matches(Filter::All));
    assert!(active.matches(Filter::Active));
    assert!(!done.matches(Filter::Active));
    assert!(!active.matches(Filter::Completed));
    assert!(done.matches(Filter::Completed));
}

#[test]
fn filter_parse_accepts_known_names_case_insensitive() {
    assert_eq!(Filter::parse("all"), Some(Filter::All));
    assert_eq!(Filter::parse(" Active "), Some(Filter::Active));
    assert_eq!(Filter::parse("COMPLETED"), Some(Filter::Completed));
    assert_eq!(Filter::parse("done"), None);
    assert_eq!(Filter::parse(""), None);
}

#[test]
fn filter_as_str_round_trips_through_parse() {
    for filter in [Filter::All, Filter::Active, Filter::Completed] {
        assert_eq!(Filter::parse(filter.as_str()), Some(filter));
    }
}

#[test]
fn counts_default_is_zero() {
    let counts = TodoCounts::default();
    assert_eq!(counts.active, 0);
    assert_eq!(counts.completed, 0);
}
