use rb_forest::keyed::{find_by, insert_by};
use rb_forest::print::{print_in_order, print_tree};
use rb_forest::util::height;
use rb_forest::{remove, validate_by, InOrder, RbLink, RbNode, RbRoot, ValidationError, ValidationReport};

/// An integer-keyed record with an embedded tree link.
#[derive(Clone, Debug)]
pub struct Record {
    pub value: i64,
    pub link: RbLink,
}

impl RbNode for Record {
    fn link(&self) -> &RbLink {
        &self.link
    }

    fn link_mut(&mut self) -> &mut RbLink {
        &mut self.link
    }
}

fn value_of(record: &Record) -> &i64 {
    &record.value
}

/// Record arena plus the tree ordering it.
///
/// Slots of removed records go on a free list and are handed out again by
/// later inserts.
#[derive(Debug, Default)]
pub struct Forest {
    records: Vec<Record>,
    free: Vec<u32>,
    root: RbRoot,
    len: usize,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Stores `value` in a fresh or recycled slot and links it. Returns the slot.
    pub fn insert(&mut self, value: i64) -> u32 {
        let record = Record {
            value,
            link: RbLink::new(),
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.records[idx as usize] = record;
                idx
            }
            None => {
                self.records.push(record);
                (self.records.len() - 1) as u32
            }
        };
        insert_by(&mut self.records, &mut self.root, idx, value_of, i64::cmp);
        self.len += 1;
        idx
    }

    /// Unlinks the record in slot `idx` and frees the slot.
    ///
    /// Panics if the slot is not currently linked.
    pub fn remove(&mut self, idx: u32) {
        remove(&mut self.records, &mut self.root, idx);
        self.free.push(idx);
        self.len -= 1;
    }

    /// Slot of some record holding `value`.
    pub fn find(&self, value: i64) -> Option<u32> {
        find_by(&self.records, &self.root, &value, value_of, i64::cmp)
    }

    pub fn value(&self, idx: u32) -> i64 {
        self.records[idx as usize].value
    }

    pub fn record(&self, idx: u32) -> &Record {
        &self.records[idx as usize]
    }

    pub fn root(&self) -> &RbRoot {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn height(&self) -> usize {
        height(&self.records, self.root.node)
    }

    /// Values in ascending order.
    pub fn values(&self) -> Vec<i64> {
        InOrder::new(&self.records, self.root.node)
            .map(|i| self.records[i as usize].value)
            .collect()
    }

    pub fn check(&self) -> Result<ValidationReport, ValidationError> {
        validate_by(&self.records, &self.root, value_of, i64::cmp)
    }

    pub fn print_in_order(&self) -> String {
        print_in_order(&self.records, self.root.node, |i| self.value(i))
    }

    pub fn print_tree(&self) -> String {
        print_tree(&self.records, self.root.node, |i| self.value(i))
    }
}
