#![cfg(test)]

// Property tests for the byte containers kept inside the crate so the
// shared probing core is exercised through both facades, with and without
// an injected collision hasher.

use crate::{ByteMap, ByteSet};
use core::hash::{BuildHasher, Hasher};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Slot count for every scenario: small enough that random churn keeps the
/// tables near full and cycles slots through tombstone states.
const CAPACITY: usize = 4;

// Pool-indexed operations so shrinking reduces to earlier keys and shorter
// op lists.
#[derive(Clone, Debug)]
enum MapOp {
    Insert(usize, Vec<u8>),
    Remove(usize),
    Get(usize),
    Iterate,
}

#[derive(Clone, Debug)]
enum SetOp {
    Insert(usize),
    Remove(usize),
    Contains(usize),
    GetAll,
}

fn arb_map_scenario() -> impl Strategy<Value = (Vec<Vec<u8>>, Vec<MapOp>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let pool: Vec<Vec<u8>> = pool.into_iter().map(String::into_bytes).collect();
        let idx = 0..pool.len();
        let op = prop_oneof![
            (idx.clone(), "[a-z]{0,3}").prop_map(|(i, v)| MapOp::Insert(i, v.into_bytes())),
            idx.clone().prop_map(MapOp::Remove),
            idx.clone().prop_map(MapOp::Get),
            Just(MapOp::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn arb_set_scenario() -> impl Strategy<Value = (Vec<Vec<u8>>, Vec<SetOp>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let pool: Vec<Vec<u8>> = pool.into_iter().map(String::into_bytes).collect();
        let idx = 0..pool.len();
        let op = prop_oneof![
            idx.clone().prop_map(SetOp::Insert),
            idx.clone().prop_map(SetOp::Remove),
            idx.clone().prop_map(SetOp::Contains),
            Just(SetOp::GetAll),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run_map_ops<S: BuildHasher>(
    mut sut: ByteMap<S>,
    pool: &[Vec<u8>],
    ops: Vec<MapOp>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<Vec<u8>, Vec<u8>> = HashMap::new();
    for op in ops {
        match op {
            MapOp::Insert(i, value) => {
                let key = &pool[i];
                match sut.insert(key, &value) {
                    Ok(()) => {
                        prop_assert!(
                            model.len() < CAPACITY || model.contains_key(key),
                            "insert succeeded without a free slot or existing key"
                        );
                        model.insert(key.clone(), value);
                    }
                    Err(_) => {
                        prop_assert!(!model.contains_key(key), "updates never fail");
                        prop_assert_eq!(
                            model.len(),
                            CAPACITY,
                            "rejection is only legal when every slot holds a live key"
                        );
                    }
                }
            }
            MapOp::Remove(i) => {
                let key = &pool[i];
                prop_assert_eq!(sut.remove(key), model.remove(key).is_some());
            }
            MapOp::Get(i) => {
                let key = &pool[i];
                prop_assert_eq!(sut.get(key), model.get(key).map(|v| v.as_slice()));
                prop_assert_eq!(sut.contains_key(key), model.contains_key(key));
            }
            MapOp::Iterate => {
                let sut_keys: BTreeSet<Vec<u8>> = sut.iter().map(|(k, _)| k.to_vec()).collect();
                let model_keys: BTreeSet<Vec<u8>> = model.keys().cloned().collect();
                prop_assert_eq!(sut_keys, model_keys);
            }
        }

        // Post-conditions after each op.
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.len() <= sut.capacity());
    }
    Ok(())
}

fn run_set_ops<S: BuildHasher>(
    mut sut: ByteSet<S>,
    pool: &[Vec<u8>],
    ops: Vec<SetOp>,
) -> Result<(), TestCaseError> {
    let mut model: HashSet<Vec<u8>> = HashSet::new();
    for op in ops {
        match op {
            SetOp::Insert(i) => {
                let member = &pool[i];
                match sut.insert(member) {
                    Ok(newly) => {
                        prop_assert_eq!(newly, !model.contains(member));
                        prop_assert!(
                            model.len() < CAPACITY || model.contains(member),
                            "insert succeeded without a free slot or existing member"
                        );
                        model.insert(member.clone());
                    }
                    Err(_) => {
                        prop_assert!(!model.contains(member), "re-adding a member never fails");
                        prop_assert_eq!(model.len(), CAPACITY);
                    }
                }
            }
            SetOp::Remove(i) => {
                let member = &pool[i];
                prop_assert_eq!(sut.remove(member), model.remove(member));
            }
            SetOp::Contains(i) => {
                let member = &pool[i];
                prop_assert_eq!(sut.contains(member), model.contains(member));
            }
            SetOp::GetAll => {
                let total: usize = model.iter().map(|m| m.len()).sum();
                prop_assert_eq!(sut.get_all().len(), total);
                let sut_members: BTreeSet<Vec<u8>> = sut.iter().map(<[u8]>::to_vec).collect();
                let model_members: BTreeSet<Vec<u8>> = model.iter().cloned().collect();
                prop_assert_eq!(sut_members, model_members);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

// Collision variant hasher: sends every key to the same probe start.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

// Property: state-machine equivalence of ByteMap against
// std::collections::HashMap on a table kept near capacity.
// Invariants exercised across random op sequences:
// - insert succeeds exactly when the key exists or some slot is free; a
//   rejection implies a full table and an absent key, so delete/insert
//   churn proves removed slots are reclaimed.
// - get/contains_key/remove parity with the model, including lookups that
//   probe across removed slots.
// - iteration yields exactly the live key set; len parity after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_map_matches_model((pool, ops) in arb_map_scenario()) {
        run_map_ops(ByteMap::new(CAPACITY), &pool, ops)?;
    }

    #[test]
    fn prop_map_matches_model_under_collisions((pool, ops) in arb_map_scenario()) {
        run_map_ops(ByteMap::with_hasher(CAPACITY, ConstBuildHasher), &pool, ops)?;
    }
}

// Property: same equivalence for ByteSet against std::collections::HashSet,
// plus `get_all` returning exactly the live members' bytes. The collision
// variant pushes every member through one probe chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_set_matches_model((pool, ops) in arb_set_scenario()) {
        run_set_ops(ByteSet::new(CAPACITY), &pool, ops)?;
    }

    #[test]
    fn prop_set_matches_model_under_collisions((pool, ops) in arb_set_scenario()) {
        run_set_ops(ByteSet::with_hasher(CAPACITY, ConstBuildHasher), &pool, ops)?;
    }
}
