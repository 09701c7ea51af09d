//! One record type sitting in two trees at once.

use rb_forest::keyed::{find, find_slot};
use rb_forest::red_black::{insert, remove};
use rb_forest::{validate, InOrder, LinkStore, RbLink, RbRoot};

struct Task {
    id: u32,
    deadline: u64,
    by_id: RbLink,
    by_deadline: RbLink,
}

struct ById<'a>(&'a mut [Task]);
struct ByDeadline<'a>(&'a mut [Task]);

impl LinkStore for ById<'_> {
    fn link(&self, i: u32) -> &RbLink {
        &self.0[i as usize].by_id
    }

    fn link_mut(&mut self, i: u32) -> &mut RbLink {
        &mut self.0[i as usize].by_id
    }
}

impl LinkStore for ByDeadline<'_> {
    fn link(&self, i: u32) -> &RbLink {
        &self.0[i as usize].by_deadline
    }

    fn link_mut(&mut self, i: u32) -> &mut RbLink {
        &mut self.0[i as usize].by_deadline
    }
}

struct Scheduler {
    tasks: Vec<Task>,
    ids: RbRoot,
    deadlines: RbRoot,
}

impl Scheduler {
    fn new() -> Self {
        Self {
            tasks: Vec::new(),
            ids: RbRoot::new(),
            deadlines: RbRoot::new(),
        }
    }

    fn add(&mut self, id: u32, deadline: u64) {
        self.tasks.push(Task {
            id,
            deadline,
            by_id: RbLink::new(),
            by_deadline: RbLink::new(),
        });
        let idx = (self.tasks.len() - 1) as u32;

        let mut view = ById(&mut self.tasks);
        let (parent, side) = find_slot(&view, &self.ids, |i| id.cmp(&view.0[i as usize].id));
        insert(&mut view, &mut self.ids, idx, parent, side);

        let mut view = ByDeadline(&mut self.tasks);
        let (parent, side) = find_slot(&view, &self.deadlines, |i| {
            deadline.cmp(&view.0[i as usize].deadline)
        });
        insert(&mut view, &mut self.deadlines, idx, parent, side);
    }

    fn cancel(&mut self, id: u32) -> bool {
        let view = ById(&mut self.tasks);
        let Some(idx) = find(&view, &self.ids, |i| id.cmp(&view.0[i as usize].id)) else {
            return false;
        };
        remove(&mut ById(&mut self.tasks), &mut self.ids, idx);
        remove(&mut ByDeadline(&mut self.tasks), &mut self.deadlines, idx);
        true
    }

    fn ids_by_deadline(&mut self) -> Vec<u32> {
        let view = ByDeadline(&mut self.tasks);
        InOrder::new(&view, self.deadlines.node)
            .map(|i| view.0[i as usize].id)
            .collect()
    }

    fn check(&mut self) {
        let view = ById(&mut self.tasks);
        validate(&view, &self.ids, |a, b| {
            view.0[a as usize].id.cmp(&view.0[b as usize].id)
        })
        .unwrap();
        let view = ByDeadline(&mut self.tasks);
        validate(&view, &self.deadlines, |a, b| {
            view.0[a as usize].deadline.cmp(&view.0[b as usize].deadline)
        })
        .unwrap();
    }
}

#[test]
fn two_indices_over_one_arena() {
    let mut s = Scheduler::new();
    for (id, deadline) in [(1, 500), (2, 100), (3, 300), (4, 200), (5, 400)] {
        s.add(id, deadline);
        s.check();
    }
    assert_eq!(s.ids_by_deadline(), vec![2, 4, 3, 5, 1]);

    assert!(s.cancel(3));
    assert!(!s.cancel(3));
    s.check();
    assert_eq!(s.ids_by_deadline(), vec![2, 4, 5, 1]);
}
