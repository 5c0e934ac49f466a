use bytekit::{ByteSet, TableFull};
use std::collections::BTreeSet;

#[test]
fn membership_after_churn() {
    let mut s = ByteSet::new(8);
    for i in 0..8u32 {
        assert!(s.insert(&i.to_le_bytes()).unwrap());
    }
    assert_eq!(s.insert(&9u32.to_le_bytes()), Err(TableFull));

    // free half, then refill with fresh members
    for i in (0..8u32).step_by(2) {
        assert!(s.remove(&i.to_le_bytes()));
    }
    assert_eq!(s.len(), 4);
    for i in 10..14u32 {
        assert!(s.insert(&i.to_le_bytes()).unwrap());
    }
    assert_eq!(s.len(), 8);
    assert!(s.contains(&1u32.to_le_bytes()));
    assert!(!s.contains(&0u32.to_le_bytes()));
    assert!(s.contains(&12u32.to_le_bytes()));
}

#[test]
fn duplicate_inserts_do_not_fill_the_set() {
    let mut s = ByteSet::new(2);
    assert!(s.insert(b"only").unwrap());
    for _ in 0..10 {
        assert!(!s.insert(b"only").unwrap());
    }
    assert_eq!(s.len(), 1);
}

#[test]
fn get_all_decodes_fixed_width_members() {
    let mut s = ByteSet::new(8);
    for i in [7u32, 3, 11] {
        s.insert(&i.to_le_bytes()).unwrap();
    }

    // members are 4 bytes each, so the flat buffer splits exactly
    let flat = s.get_all();
    assert_eq!(flat.len(), 12);
    let members: BTreeSet<u32> = flat
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes(chunk.try_into().unwrap()))
        .collect();
    assert_eq!(members, BTreeSet::from([3, 7, 11]));
}

#[test]
fn full_set_still_answers_membership() {
    let mut s = ByteSet::new(2);
    s.insert(b"a").unwrap();
    s.insert(b"b").unwrap();
    assert_eq!(s.insert(b"c"), Err(TableFull));
    // a repeated member is not a new entry, so it succeeds even when full
    assert_eq!(s.insert(b"a"), Ok(false));
    assert!(s.contains(b"a"));
    assert!(s.contains(b"b"));
    assert!(!s.contains(b"c"));
}

#[test]
fn empty_and_binary_members_coexist() {
    let mut s = ByteSet::new(4);
    assert!(s.insert(b"").unwrap());
    assert!(s.insert(b"\x00").unwrap());
    assert!(s.insert(&[0xff; 3]).unwrap());
    assert_eq!(s.len(), 3);
    assert!(s.contains(b""));
    assert!(s.contains(b"\x00"));
    assert!(!s.contains(&[0xff; 2]));
}
