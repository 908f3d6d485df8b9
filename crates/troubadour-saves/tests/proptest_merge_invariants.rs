//! Property-based invariant tests for save sets.
//!
//! Verifies:
//! 1. Merging the same set twice changes nothing the second time
//! 2. Ids stay unique under any sequence of add, delete and merge
//! 3. Merge never alters a local save
//! 4. After a merge, every incoming save is present by content

use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use serde_json::json;
use troubadour_saves::{SaveSet, Snapshot};

// ── Strategy helpers ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Draft {
    name: String,
    turn: u8,
    minute: u32,
}

#[derive(Debug, Clone)]
enum Op {
    Add(Draft),
    Delete(u32),
    Merge(Vec<Draft>),
}

fn arb_draft() -> impl Strategy<Value = Draft> {
    ("[a-c]{1,2}", 0u8..4, 0u32..3).prop_map(|(name, turn, minute)| Draft { name, turn, minute })
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_draft().prop_map(Op::Add),
        1 => (0u32..8).prop_map(Op::Delete),
        2 => prop::collection::vec(arb_draft(), 0..5).prop_map(Op::Merge),
    ]
}

fn date(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, minute, 0).unwrap()
}

fn add(set: &mut SaveSet, draft: &Draft) -> u32 {
    set.add(
        draft.name.clone(),
        Snapshot::from(json!({ "turn": draft.turn })),
        date(draft.minute),
    )
    .unwrap()
}

fn build(drafts: &[Draft]) -> SaveSet {
    let mut set = SaveSet::new();
    for draft in drafts {
        add(&mut set, draft);
    }
    set
}

fn ids_unique(set: &SaveSet) -> bool {
    let ids: HashSet<u32> = set.saves().iter().map(|s| s.id).collect();
    ids.len() == set.len()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn merge_twice_is_merge_once(
        local in prop::collection::vec(arb_draft(), 0..6),
        incoming in prop::collection::vec(arb_draft(), 0..6),
    ) {
        let mut set = build(&local);
        let other = build(&incoming);
        set.merge(other.clone()).unwrap();
        let once = set.clone();
        prop_assert_eq!(set.merge(other).unwrap(), 0);
        prop_assert_eq!(set, once);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Unique ids
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ids_stay_unique(ops in prop::collection::vec(arb_op(), 0..20)) {
        let mut set = SaveSet::new();
        for op in &ops {
            match op {
                Op::Add(draft) => {
                    let id = add(&mut set, draft);
                    prop_assert!(set.get(id).is_some());
                }
                Op::Delete(id) => {
                    set.delete(*id);
                }
                Op::Merge(drafts) => {
                    set.merge(build(drafts)).unwrap();
                }
            }
            prop_assert!(ids_unique(&set), "duplicate id after {:?}", op);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Local saves untouched
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn merge_keeps_local_prefix(
        local in prop::collection::vec(arb_draft(), 0..6),
        incoming in prop::collection::vec(arb_draft(), 0..6),
    ) {
        let mut set = build(&local);
        let before = set.clone();
        set.merge(build(&incoming)).unwrap();
        prop_assert_eq!(&set.saves()[..before.len()], before.saves());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Everything incoming is present afterwards
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn merge_covers_incoming(
        local in prop::collection::vec(arb_draft(), 0..6),
        incoming in prop::collection::vec(arb_draft(), 0..6),
    ) {
        let mut set = build(&local);
        let other = build(&incoming);
        set.merge(other.clone()).unwrap();
        for entry in other.saves() {
            prop_assert!(set.saves().iter().any(|s| s.same_content(entry)));
        }
    }
}
