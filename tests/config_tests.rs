//! Configuration loading and its effect on count validation.

mod test_data;

use lazyq::{CountPolicy, Error, SequenceConfig, SequenceExt};
use test_data::{employees, names, Employee};

#[test]
fn test_from_env_overrides_defaults() {
    // Only this test touches these variables.
    std::env::set_var("LAZYQ_COUNT_POLICY", "clamp");
    std::env::set_var("LAZYQ_DEFAULT_PAGE_SIZE", "4");
    let cfg = SequenceConfig::from_env();
    std::env::set_var("LAZYQ_DEFAULT_PAGE_SIZE", "not-a-number");
    let fallback = SequenceConfig::from_env();
    std::env::set_var("LAZYQ_DEFAULT_PAGE_SIZE", "0");
    let zero = SequenceConfig::from_env();
    std::env::remove_var("LAZYQ_COUNT_POLICY");
    std::env::remove_var("LAZYQ_DEFAULT_PAGE_SIZE");

    assert_eq!(cfg.count_policy, CountPolicy::Clamp);
    assert_eq!(cfg.default_page_size, 4);
    assert_eq!(fallback.default_page_size, 3);
    assert_eq!(zero.default_page_size, 3);
    assert!(zero.validate().is_ok());

    let sums: Vec<i64> = employees()
        .into_sequence_with(cfg)
        .paged_group_sum_default(|e| e.month_salary)
        .unwrap()
        .collect();
    assert_eq!(sums, vec![900, 630]);
}

#[test]
fn test_clamp_policy_treats_negative_as_zero() {
    let cfg = SequenceConfig::from_json(r#"{ "count_policy": "clamp" }"#).unwrap();

    let taken: Vec<Employee> = employees()
        .into_sequence_with(cfg)
        .take(-3)
        .unwrap()
        .collect();
    assert!(taken.is_empty());

    let rest: Vec<Employee> = employees()
        .into_sequence_with(cfg)
        .skip(-3)
        .unwrap()
        .collect();
    assert_eq!(rest.len(), 8);

    let skipped: Vec<Employee> = employees()
        .into_sequence_with(cfg)
        .skip_while(-1, |e| e.month_salary < 150)
        .unwrap()
        .collect();
    assert_eq!(names(&skipped)[0], "Joe");
}

#[test]
fn test_clamp_policy_still_rejects_page_size() {
    let cfg = SequenceConfig::default().with_count_policy(CountPolicy::Clamp);
    let res = employees()
        .into_sequence_with(cfg)
        .paged_group_sum(-3, |e| e.month_salary);
    assert!(matches!(
        res.err(),
        Some(Error::InvalidArgument {
            op: "paged_group_sum",
            ..
        })
    ));
}

#[test]
fn test_rejection_message_names_operator() {
    let err = employees().into_sequence().take(-1).err().unwrap();
    assert_eq!(
        err.to_string(),
        "invalid argument to 'take': count must be non-negative, got -1"
    );
}

#[test]
fn test_invalid_config_document() {
    let err = SequenceConfig::from_json(r#"{ "count_policy": "sometimes" }"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
