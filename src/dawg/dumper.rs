//! Depth-first extraction of the word list from a loaded graph.

use std::io::Write;

use tracing::error;

use super::error::DawgError;
use super::graph::Dawg;

impl Dawg {
    /// Writes every accepted word to `out`, one per line, in lexicographic
    /// order.
    ///
    /// The traversal is iterative: a stack of arena indices tracks the
    /// current path, so depth is bounded by the longest word rather than
    /// the call stack. Every index reached through an `offset` field is
    /// range-checked; an out-of-range offset is diagnosed on the error
    /// stream and stops the traversal, but the call still succeeds. I/O
    /// failures propagate.
    pub fn dump<W: Write>(&self, out: &mut W) -> Result<(), DawgError> {
        match self.walk(out) {
            Err(DawgError::CorruptGraph { index }) => {
                error!(index, "graph appears corrupt: edge offset points outside the arena");
                Ok(())
            }
            result => result,
        }
    }

    fn walk<W: Write>(&self, out: &mut W) -> Result<(), DawgError> {
        let arena = self.arena();
        if arena.is_empty() {
            return Ok(());
        }

        // Each stack entry is the arena index of the edge currently being
        // visited at that depth; the spelled word is the letters along the
        // stack.
        let mut stack: Vec<usize> = vec![0];
        while let Some(&top) = stack.last() {
            let node = *arena
                .get(top)
                .ok_or(DawgError::CorruptGraph { index: top })?;

            if node.is_end_of_word() {
                for &index in &stack {
                    out.write_all(&[arena[index].letter()])?;
                }
                out.write_all(b"\n")?;
            }

            let offset = node.offset();
            if offset != 0 {
                let child = offset as usize - 1;
                if child >= arena.len() {
                    return Err(DawgError::CorruptGraph { index: child });
                }
                stack.push(child);
            } else {
                // Advance to the next sibling, popping completed groups.
                while let Some(done) = stack.pop() {
                    if !arena[done].is_end_of_node() {
                        stack.push(done + 1);
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}
