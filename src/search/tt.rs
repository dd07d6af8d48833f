use crate::board::Move;

pub const DEFAULT_ENTRIES: usize = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub key: u64,
    pub score: i32,
    pub depth: u32,
    pub bound: Bound,
    pub best: Option<Move>,
    pub age: u32,
}

/// Direct-mapped table: one slot per index, `key % capacity`, no chaining.
///
/// A slot is overwritten when empty or when the incoming depth is at least
/// the stored depth, whichever position it belonged to. The age is stored
/// but plays no part in replacement.
pub struct TranspositionTable {
    slots: Vec<Option<Entry>>,
    age: u32,
}

impl Default for TranspositionTable {
    fn default() -> Self { Self::new(DEFAULT_ENTRIES) }
}

impl TranspositionTable {
    pub fn new(capacity: usize) -> Self {
        Self { slots: vec![None; capacity.max(1)], age: 0 }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key % self.slots.len() as u64) as usize
    }

    pub fn capacity(&self) -> usize { self.slots.len() }

    /// Entry stored for exactly this key. An index collision reads as a miss.
    pub fn probe(&self, key: u64) -> Option<Entry> {
        self.slots[self.index(key)].filter(|e| e.key == key)
    }

    pub fn store(&mut self, key: u64, score: i32, depth: u32, bound: Bound, best: Option<Move>, age: u32) {
        let idx = self.index(key);
        let slot = &mut self.slots[idx];
        if slot.map_or(true, |cur| depth >= cur.depth) {
            *slot = Some(Entry { key, score, depth, bound, best, age });
        }
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn set_capacity_entries(&mut self, cap: usize) {
        self.slots = vec![None; cap.max(1)];
    }

    pub fn set_capacity_mb(&mut self, mb: usize) {
        let entry = std::mem::size_of::<Option<Entry>>().max(1);
        self.set_capacity_entries(mb.saturating_mul(1024 * 1024) / entry);
    }

    pub fn age(&self) -> u32 { self.age }
    pub fn bump_age(&mut self) { self.age = self.age.wrapping_add(1); }
}
