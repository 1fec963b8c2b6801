mod common;

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

use coll_core::{Collection, Dict, SharedDict};

use common::english;

#[derive(Clone, Debug)]
enum Op {
    Insert(u8, u8),
    Remove(u8),
    Clear,
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (any::<u8>(), 0u8..8).prop_map(|(k, v)| Op::Insert(k % 16, v)),
        3 => any::<u8>().prop_map(|k| Op::Remove(k % 16)),
        1 => Just(Op::Clear),
    ]
}

fn apply(dict: &mut Dict<u8, u8>, op: &Op) {
    match op {
        Op::Insert(k, v) => {
            dict.insert(*k, *v);
        }
        Op::Remove(k) => {
            dict.remove(k);
        }
        Op::Clear => dict.clear(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, max_shrink_iters: 200, .. ProptestConfig::default()
    })]

    #[test]
    fn view_count_matches_store_after_each_mutation(ops in proptest::collection::vec(any_op(), 0..40)) {
        english();
        let shared = SharedDict::new(Dict::new());
        let live = shared.values();
        for op in &ops {
            apply(&mut shared.borrow_mut(), op);
            let dict = shared.borrow();
            prop_assert_eq!(dict.values().len(), dict.len());
            prop_assert_eq!(live.len().unwrap(), dict.len());
        }
    }

    #[test]
    fn view_yields_projected_pairs_in_order(ops in proptest::collection::vec(any_op(), 0..40)) {
        let mut dict = Dict::new();
        for op in &ops {
            apply(&mut dict, op);
        }
        let projected: Vec<u8> = dict.iter().map(|(_, v)| *v).collect();
        let viewed: Vec<u8> = dict.values().iter().copied().collect();
        prop_assert_eq!(&viewed, &projected);
        let again: Vec<u8> = dict.values().iter().copied().collect();
        prop_assert_eq!(&again, &viewed);
    }

    #[test]
    fn contains_matches_existential_scan(
        ops in proptest::collection::vec(any_op(), 0..40),
        probe in 0u8..10,
    ) {
        let mut dict = Dict::new();
        for op in &ops {
            apply(&mut dict, op);
        }
        let expected = dict.iter().any(|(_, v)| *v == probe);
        prop_assert_eq!(dict.values().contains(&probe), expected);
    }

    #[test]
    fn mutation_through_view_leaves_store_unchanged(
        ops in proptest::collection::vec(any_op(), 0..20),
        value in any::<u8>(),
    ) {
        english();
        let mut dict = Dict::new();
        for op in &ops {
            apply(&mut dict, op);
        }
        let before: Vec<(u8, u8)> = dict.iter().map(|(k, v)| (*k, *v)).collect();
        let ver = dict.version();
        let mut view = dict.values();
        prop_assert!(view.add(value).is_err());
        prop_assert!(view.remove(&value).is_err());
        prop_assert!(view.clear().is_err());
        let after: Vec<(u8, u8)> = dict.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(dict.version(), ver);
    }
}
