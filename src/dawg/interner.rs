use super::edges::EdgeList;
use super::error::DawgError;
use super::node::Node;

/// Slot count of the state table. Must be prime; sized about 20% larger
/// than the largest unique-state count the format supports.
pub(crate) const HASH_TABLE_SIZE: usize = 240_007;

/// Open-addressed table mapping edge-group structure to arena offsets.
///
/// Each slot holds the 0-based arena index of an interned group's first
/// edge, or 0 for empty. Index 0 is unambiguous as the empty sentinel
/// because the arena starts with the root group, which is never interned.
///
/// Collisions are resolved by double hashing: the probe increment starts
/// at 9 and is itself advanced by 8 after each miss, both modulo the table
/// size. A probe sequence that wraps back to its starting slot means the
/// table is saturated.
pub(crate) struct Interner {
    slots: Box<[usize]>,
}

impl Interner {
    pub fn new() -> Self {
        Interner {
            slots: vec![0; HASH_TABLE_SIZE].into_boxed_slice(),
        }
    }

    /// Inserts `edges` into `arena` unless a structurally identical group
    /// is already stored, and returns the group's 1-based offset.
    ///
    /// Structural identity is full 32-bit equality of every edge. Child
    /// offsets are assigned bottom-up before a parent group is interned,
    /// so equal groups imply equal subgraphs and shared groups yield the
    /// minimal automaton.
    pub fn intern(&mut self, edges: &EdgeList, arena: &mut Vec<Node>) -> Result<u32, DawgError> {
        let initial = edges.fingerprint() as usize % HASH_TABLE_SIZE;
        let mut slot = initial;
        let mut inc = 9;

        loop {
            let stored = self.slots[slot];
            if stored == 0 {
                let index = arena.len();
                self.slots[slot] = index;
                arena.extend_from_slice(edges.as_slice());
                return Ok((index + 1) as u32);
            }
            // Comparing exactly `edges.len()` records suffices: group length
            // is encoded in the edge values themselves via end_of_node, so
            // no two interned groups differ only in trailing edges.
            if arena
                .get(stored..stored + edges.len())
                .is_some_and(|group| group == edges.as_slice())
            {
                return Ok((stored + 1) as u32);
            }
            slot = wrapping_add(slot, inc);
            inc = wrapping_add(inc, 8);
            if slot == initial {
                return Err(DawgError::HashTableFull);
            }
        }
    }
}

fn wrapping_add(base: usize, inc: usize) -> usize {
    let sum = base + inc;
    if sum >= HASH_TABLE_SIZE {
        sum - HASH_TABLE_SIZE
    } else {
        sum
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn group(letters: &[(u8, bool)]) -> EdgeList {
        let mut list = EdgeList::default();
        for &(letter, ends_word) in letters {
            list.push(Node::new(letter, ends_word));
        }
        list.seal();
        list
    }

    // The arena under test mimics the builder's: a reserved root group
    // followed by interned groups.
    fn root_arena() -> Vec<Node> {
        vec![Node::default(); 256]
    }

    #[test]
    fn first_intern_appends_to_the_arena() {
        let mut interner = Interner::new();
        let mut arena = root_arena();

        let offset = interner.intern(&group(&[(b's', true)]), &mut arena).unwrap();
        assert_eq!(offset, 257);
        assert_eq!(arena.len(), 257);
        assert_eq!(arena[256].letter(), b's');
    }

    #[test]
    fn identical_groups_share_an_offset() {
        let mut interner = Interner::new();
        let mut arena = root_arena();

        let first = interner.intern(&group(&[(b'a', false), (b'b', true)]), &mut arena).unwrap();
        let second = interner.intern(&group(&[(b'a', false), (b'b', true)]), &mut arena).unwrap();
        assert_eq!(first, second);
        assert_eq!(arena.len(), 258);
    }

    #[test]
    fn groups_differing_in_flags_do_not_merge() {
        let mut interner = Interner::new();
        let mut arena = root_arena();

        let plain = interner.intern(&group(&[(b'a', false)]), &mut arena).unwrap();
        let word = interner.intern(&group(&[(b'a', true)]), &mut arena).unwrap();
        assert_ne!(plain, word);
        assert_eq!(arena.len(), 258);
    }

    #[test]
    fn a_prefix_group_does_not_match_a_longer_group() {
        let mut interner = Interner::new();
        let mut arena = root_arena();

        let long = interner
            .intern(&group(&[(b'a', false), (b'b', true)]), &mut arena)
            .unwrap();
        // end_of_node lands on 'a' here, so the first edge differs from the
        // stored group even though the letters agree.
        let short = interner.intern(&group(&[(b'a', false)]), &mut arena).unwrap();
        assert_ne!(long, short);
    }

    #[test]
    fn wrapping_add_stays_in_table_range() {
        assert_eq!(wrapping_add(HASH_TABLE_SIZE - 1, 9), 8);
        assert_eq!(wrapping_add(0, 9), 9);
    }
}
