use std::collections::BTreeSet;

use proptest::prelude::*;
use rb_forest::keyed::{find_by, insert_by};
use rb_forest::red_black::{rotate_left, rotate_right};
use rb_forest::util::{height, InOrder};
use rb_forest::{remove, validate_by, RbLink, RbNode, RbRoot};

struct Entry {
    key: u16,
    link: RbLink,
}

impl RbNode for Entry {
    fn link(&self) -> &RbLink {
        &self.link
    }

    fn link_mut(&mut self) -> &mut RbLink {
        &mut self.link
    }
}

fn key(entry: &Entry) -> &u16 {
    &entry.key
}

fn build(keys: &[u16]) -> (Vec<Entry>, RbRoot) {
    let mut arena: Vec<Entry> = keys
        .iter()
        .map(|&key| Entry {
            key,
            link: RbLink::new(),
        })
        .collect();
    let mut root = RbRoot::new();
    for i in 0..arena.len() as u32 {
        insert_by(&mut arena, &mut root, i, key, u16::cmp);
    }
    (arena, root)
}

fn keys_in_order(arena: &[Entry], root: &RbRoot) -> Vec<u16> {
    InOrder::new(arena, root.node)
        .map(|i| arena[i as usize].key)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_set_semantics(
        inserts in prop::collection::hash_set(any::<u16>(), 0..300),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..300),
    ) {
        let inserts: Vec<u16> = inserts.into_iter().collect();
        let (mut arena, mut root) = build(&inserts);
        let mut live: BTreeSet<u16> = inserts.iter().copied().collect();
        prop_assert_eq!(keys_in_order(&arena, &root), live.iter().copied().collect::<Vec<_>>());

        for pick in removals {
            if live.is_empty() {
                break;
            }
            let k = *live.iter().nth(pick.index(live.len())).unwrap();
            let idx = find_by(&arena, &root, &k, key, u16::cmp).unwrap();
            remove(&mut arena, &mut root, idx);
            live.remove(&k);

            if let Err(err) = validate_by(&arena, &root, key, u16::cmp) {
                return Err(TestCaseError::fail(format!("after removing {k}: {err}")));
            }
            prop_assert_eq!(keys_in_order(&arena, &root), live.iter().copied().collect::<Vec<_>>());
        }
        prop_assert_eq!(root.is_empty(), live.is_empty());
    }

    #[test]
    fn prop_height_is_logarithmic(keys in prop::collection::vec(any::<u16>(), 1..500)) {
        let (arena, root) = build(&keys);
        let report = validate_by(&arena, &root, key, u16::cmp).unwrap();
        let n = keys.len() as f64;
        // Edges on the longest path.
        let edges = (height(&arena, root.node) - 1) as f64;
        prop_assert!(edges <= 2.0 * (n + 1.0).log2());
        prop_assert_eq!(report.size, keys.len());
    }

    #[test]
    fn prop_rotation_keeps_order(
        keys in prop::collection::vec(any::<u16>(), 2..200),
        picks in prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 1..20),
    ) {
        let (mut arena, mut root) = build(&keys);
        let before = keys_in_order(&arena, &root);
        for (pick, left) in picks {
            let x = pick.index(arena.len()) as u32;
            let link = &arena[x as usize].link;
            if left && link.r.is_some() {
                rotate_left(&mut arena, &mut root, x);
            } else if !left && link.l.is_some() {
                rotate_right(&mut arena, &mut root, x);
            }
            prop_assert_eq!(keys_in_order(&arena, &root), before.clone());
        }
    }
}
