use std::io::BufRead;

use itertools::{Itertools, Position};
use tracing::debug;

use super::edges::EdgeList;
use super::error::DawgError;
use super::graph::Dawg;
use super::interner::Interner;
use super::node::{Node, MAX_CHARS};
use super::reader::WordReader;

/// Single-pass minimising DAWG compiler.
///
/// Words must arrive in strictly ascending lexicographic order. The builder
/// keeps one pending edge list per level of the most recent word's path (the
/// spine); whenever the next word diverges, the levels below the divergence
/// point are complete and are committed bottom-up through the interner,
/// which merges structurally identical groups. The result is the minimal
/// automaton, laid out in the arena in commit order behind the reserved
/// 256-entry root group.
pub struct Builder {
    arena: Vec<Node>,
    interner: Interner,
    spine: Vec<EdgeList>,
}

impl Builder {
    /// Creates a builder with an empty lexicon.
    pub fn new() -> Self {
        Builder {
            // Space for the root group, filled in by `finish`.
            arena: vec![Node::default(); MAX_CHARS],
            interner: Interner::new(),
            spine: vec![EdgeList::default()],
        }
    }

    /// Compiles a whitespace-separated, sorted word stream into a graph.
    pub fn compile<R: BufRead>(mut self, input: R) -> Result<Dawg, DawgError> {
        let mut words = WordReader::new(input);
        loop {
            let (prefix_len, word) = words.next_word()?;

            let depth = self.spine.len() - 1;
            if prefix_len > depth {
                return Err(DawgError::PrefixOverflow { prefix_len, depth });
            }
            self.fold_to(prefix_len)?;

            if word.is_empty() {
                let depth = self.spine.len() - 1;
                if depth != 0 {
                    return Err(DawgError::DanglingEdges { depth });
                }
                break;
            }

            self.extend(prefix_len, word);
        }
        Ok(self.finish())
    }

    /// Commits completed suffix levels until the spine is `target` deep.
    ///
    /// Each popped level is sealed, interned, and linked from the last edge
    /// of the level above it.
    fn fold_to(&mut self, target: usize) -> Result<(), DawgError> {
        while self.spine.len() - 1 > target {
            let mut ready = self.pop_level();
            if !ready.is_empty() {
                ready.seal();
                let offset = self.interner.intern(&ready, &mut self.arena)?;
                self.top()
                    .last_mut()
                    .expect("a non-empty child level implies an edge above it")
                    .set_child_offset(offset);
            }
        }
        Ok(())
    }

    /// Appends the new suffix of `word` below the common prefix, growing
    /// the spine by one empty level per letter.
    fn extend(&mut self, prefix_len: usize, word: &[u8]) {
        for (position, letter) in word[prefix_len..].iter().copied().with_position() {
            let ends_word = matches!(position, Position::Last | Position::Only);
            self.top().push(Node::new(letter, ends_word));
            self.spine.push(EdgeList::default());
        }
    }

    /// Seals and pads the root group, writes it over the reservation, and
    /// releases the arena.
    fn finish(mut self) -> Dawg {
        let mut root = self.pop_level();
        debug_assert!(self.spine.is_empty());

        if root.is_empty() {
            // No usable words at all: the file carries no records, not
            // even a root group.
            return Dawg::from_arena(Vec::new());
        }

        root.seal();
        root.pad_to(MAX_CHARS);
        root.seal();
        self.arena[..MAX_CHARS].copy_from_slice(root.as_slice());

        debug!(edges = self.arena.len(), "compiled graph");
        Dawg::from_arena(self.arena)
    }

    fn top(&mut self) -> &mut EdgeList {
        self.spine.last_mut().expect("the spine always has a root level")
    }

    fn pop_level(&mut self) -> EdgeList {
        self.spine.pop().expect("the spine always has a root level")
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiles a sorted word list read from `input` into a packed graph.
///
/// Tokens are separated by whitespace; tokens shorter than two bytes are
/// skipped. The input must be strictly ascending in byte order.
///
/// # Examples
///
/// ```
/// use dawgpack::dawg::compile_dawg;
///
/// let dawg = compile_dawg("cars\njars\n".as_bytes()).unwrap();
/// assert_eq!(dawg.edge_count(), 259);
/// ```
pub fn compile_dawg<R: BufRead>(input: R) -> Result<Dawg, DawgError> {
    Builder::new().compile(input)
}
