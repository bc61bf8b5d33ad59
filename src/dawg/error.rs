use std::io;

use thiserror::Error;

/// Errors produced while compiling a word list or decoding a graph file.
#[derive(Debug, Error)]
pub enum DawgError {
    /// Input tokens were not in strictly ascending lexicographic order.
    #[error("out of order input: {word:?} after {previous:?}")]
    OutOfOrder {
        /// The previously accepted token.
        previous: String,
        /// The offending token.
        word: String,
    },

    /// A word's common-prefix length exceeded the pending suffix depth.
    /// Unreachable for readers that enforce sort order; kept as a guard.
    #[error("common prefix length {prefix_len} exceeds the current spine depth {depth}")]
    PrefixOverflow {
        /// The reported common-prefix length.
        prefix_len: usize,
        /// The depth of the pending suffix stack.
        depth: usize,
    },

    /// Input ended while suffix levels were still pending.
    #[error("end of input with {depth} unfinished edge groups")]
    DanglingEdges {
        /// Number of levels still on the stack.
        depth: usize,
    },

    /// The state table is saturated: the lexicon has more unique states
    /// than the format supports.
    #[error("state table is full")]
    HashTableFull,

    /// The file's length disagrees with its edge-count header.
    #[error("corrupt graph file: {file_len} bytes cannot hold {edge_count} edges")]
    CorruptFile {
        /// Total file length in bytes.
        file_len: usize,
        /// Edge count read from the header.
        edge_count: u32,
    },

    /// An edge offset pointed outside the arena during traversal.
    #[error("edge offset at index {index} points outside the arena")]
    CorruptGraph {
        /// The out-of-range arena index.
        index: usize,
    },

    /// An underlying stream read or write failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
