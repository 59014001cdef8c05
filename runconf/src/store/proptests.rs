//! Property-based tests for the configuration store.

use super::ConfigStore;
use crate::error::Error;
use proptest::prelude::*;

// Names that are valid registry entries
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

// Values as they arrive from a shell: non-empty, no whitespace
fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._:/-]{1,16}"
}

fn store_with(parameters: &[String], flags: &[String]) -> ConfigStore {
    let mut store = ConfigStore::new();
    for name in parameters {
        store.register_parameter(name, true).unwrap();
    }
    for name in flags {
        store.register_flag(name).unwrap();
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // -p v then get(p) == v
    #[test]
    fn parameter_value_round_trips(name in name_strategy(), value in value_strategy()) {
        let mut store = store_with(&[name.clone()], &[]);
        let flag = format!("-{name}");
        store.parse_args([flag.as_str(), value.as_str()]).unwrap();

        prop_assert_eq!(store.get(&name), Some(value.as_str()));
        prop_assert!(store.verify_required().is_ok());
    }

    // --f sets the flag; absence reads as false
    #[test]
    fn flag_presence_matches_input(name in name_strategy(), present in any::<bool>()) {
        let mut store = store_with(&[], &[name.clone()]);
        let args: Vec<String> = if present { vec![format!("--{name}")] } else { vec![] };
        store.parse_args(&args).unwrap();

        prop_assert_eq!(store.is_flag_set(&name), present);
    }

    #[test]
    fn int_values_round_trip(n in any::<i32>()) {
        let mut store = store_with(&["n".to_string()], &[]);
        store.set("n", n.to_string()).unwrap();
        prop_assert_eq!(store.get_as_int("n").unwrap(), n);
        prop_assert_eq!(store.get_as_long("n").unwrap(), i64::from(n));
    }

    #[test]
    fn double_values_round_trip(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let mut store = store_with(&["x".to_string()], &[]);
        store.set("x", x.to_string()).unwrap();
        prop_assert_eq!(store.get_as_double("x").unwrap(), x);
    }

    #[test]
    fn bool_values_any_case(b in any::<bool>(), upper in prop::collection::vec(any::<bool>(), 5)) {
        let text: String = b
            .to_string()
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();

        let mut store = store_with(&["b".to_string()], &[]);
        store.set("b", text).unwrap();
        prop_assert_eq!(store.get_as_bool("b").unwrap(), b);
    }

    // Unregistered tokens never become keys
    #[test]
    fn unregistered_tokens_are_ignored(tokens in prop::collection::vec("-{0,2}[a-z]{1,6}", 0..20)) {
        let mut store = store_with(&["zzzzzzz".to_string()], &["yyyyyyy".to_string()]);
        store.parse_args(&tokens).unwrap();
        prop_assert!(store.is_empty());
    }

    // Re-parsing the same input yields the same entries
    #[test]
    fn reparse_is_idempotent(
        pairs in prop::collection::vec((name_strategy(), value_strategy()), 1..8),
    ) {
        let mut names: Vec<String> = pairs.iter().map(|(n, _)| n.clone()).collect();
        names.sort();
        names.dedup();
        let mut store = store_with(&names, &[]);

        let args: Vec<String> = pairs
            .iter()
            .flat_map(|(n, v)| [format!("-{n}"), v.clone()])
            .collect();

        let first = store.parse_args(&args).unwrap();
        let snapshot = store.as_map().clone();
        let second = store.parse_args(&args).unwrap();

        prop_assert_eq!(store.as_map(), &snapshot);
        prop_assert_eq!(first, second);
        prop_assert_eq!(store.stats().parameters_set, 2 * pairs.len());
    }

    // Verification fails exactly when some required parameter is missing
    #[test]
    fn verify_required_matches_supplied(
        names in prop::collection::btree_set(name_strategy(), 1..6),
        mask in prop::collection::vec(any::<bool>(), 6),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut store = store_with(&names, &[]);

        let mut args = Vec::new();
        let mut missing = Vec::new();
        for (name, supplied) in names.iter().zip(&mask) {
            if *supplied {
                args.push(format!("-{name}"));
                args.push("v".to_string());
            } else {
                missing.push(name.clone());
            }
        }
        store.parse_args(&args).unwrap();

        match store.verify_required() {
            Ok(()) => prop_assert!(missing.is_empty()),
            Err(Error::MissingRequired { names }) => prop_assert_eq!(names, missing),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
