//! Count-bounded take-while and skip-while over the employee fixture.

mod test_data;

use lazyq::{conditional, Operator, SequenceExt};
use test_data::{employees, names, Employee};

#[test]
fn test_take_while_salary_over_150() {
    let actual: Vec<Employee> = employees()
        .into_sequence()
        .take_while(2, |e| e.month_salary > 150)
        .unwrap()
        .collect();

    // Joe and Tom fail the predicate and are passed over.
    assert_eq!(names(&actual), vec!["Kevin", "Bas"]);
}

#[test]
fn test_take_while_stops_pulling_at_cap() {
    let mut seq = employees()
        .into_sequence()
        .take_while(2, |e| e.month_salary > 150)
        .unwrap();
    let yielded = seq.by_ref().count();
    assert_eq!(yielded, 2);
    assert_eq!(seq.pulled(), 4);
}

#[test]
fn test_take_while_cap_larger_than_matches() {
    let actual: Vec<Employee> = employees()
        .into_sequence()
        .take_while(10, |e| e.month_salary > 150)
        .unwrap()
        .collect();
    assert_eq!(names(&actual), vec!["Kevin", "Bas", "Mary", "Joey"]);
}

#[test]
fn test_skip_while_salary_under_150() {
    let actual: Vec<Employee> = employees()
        .into_sequence()
        .skip_while(3, |e| e.month_salary < 150)
        .unwrap()
        .collect();

    // Andy and Frank are below 150 but come after the skip phase ended at Kevin.
    assert_eq!(
        names(&actual),
        vec!["Kevin", "Bas", "Mary", "Andy", "Frank", "Joey"]
    );
}

#[test]
fn test_skip_while_cap_reached_before_failure() {
    let actual: Vec<Employee> = employees()
        .into_sequence()
        .skip_while(1, |e| e.month_salary < 150)
        .unwrap()
        .collect();

    assert_eq!(
        names(&actual),
        vec!["Tom", "Kevin", "Bas", "Mary", "Andy", "Frank", "Joey"]
    );
}

#[test]
fn test_skip_while_free_function() {
    let source = employees();
    let actual: Vec<&Employee> =
        conditional::skip_while(source.iter(), 3, |e| e.age > 30)
            .unwrap()
            .collect();
    assert_eq!(actual.len(), 5);
    assert_eq!(actual[0].name, "Bas");
}

#[test]
fn test_conditional_negative_counts_rejected() {
    assert!(employees()
        .into_sequence()
        .take_while(-1, |e| e.age > 0)
        .err()
        .unwrap()
        .is_invalid_argument());
    assert!(employees()
        .into_sequence()
        .skip_while(-1, |e| e.age > 0)
        .err()
        .unwrap()
        .is_invalid_argument());
}
