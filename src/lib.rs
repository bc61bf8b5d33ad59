//! # dawgpack
//!
//! Compiler and decompiler for packed
//! [DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (Directed Acyclic Word Graph) word-list files.
//!
//! A DAWG is a minimal acyclic finite-state automaton, essentially a trie
//! with shared suffixes. This crate builds one in a single pass over a sorted
//! word list, and serialises it in a fixed 32-bit packed edge format that is
//! byte-compatible with the lexicon files used by pre-existing tools.
//!
//! ## Features
//!
//! - **Minimal output**: equivalent suffix subgraphs are merged as they are
//!   committed, so the arena grows with the number of *unique* states
//! - **Exact format**: little-endian on disk on every host, reserved bits
//!   preserved, root group padded the way the reference files expect
//! - **Streaming input**: words are consumed from any buffered reader, one
//!   pass, constant memory beyond the state table
//!
//! ## Quick Start
//!
//! ```
//! use dawgpack::dawg::compile_dawg;
//!
//! let dawg = compile_dawg("cars\njars\n".as_bytes()).unwrap();
//!
//! let mut file = Vec::new();
//! dawg.save(&mut file).unwrap();
//!
//! let mut words = Vec::new();
//! dawg.dump(&mut words).unwrap();
//! assert_eq!(words, b"cars\njars\n");
//! ```

#![warn(missing_docs)]

/// Core DAWG machinery: packed nodes, builder, interner, codec, and dumper.
pub mod dawg;
