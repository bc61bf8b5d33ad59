use std::io::{Read, Write};

use tracing::debug;

use super::error::DawgError;
use super::node::Node;

/// A word graph: a flat, immutable arena of packed edge records.
///
/// The first 256 records are the root edge group (zero-padded, with
/// end-of-node forced on the final slot); every other group follows in the
/// order it was committed by the builder. An empty graph has no records at
/// all, not even the root group.
///
/// The on-disk form is a little-endian 32-bit edge count followed by the
/// records, also little-endian, regardless of host byte order.
#[derive(Debug)]
pub struct Dawg {
    arena: Vec<Node>,
}

impl Dawg {
    pub(crate) fn from_arena(arena: Vec<Node>) -> Self {
        Dawg { arena }
    }

    /// Number of edge records, including the padded root group.
    pub fn edge_count(&self) -> usize {
        self.arena.len()
    }

    pub(crate) fn arena(&self) -> &[Node] {
        &self.arena
    }

    /// Decodes a graph from its on-disk representation.
    ///
    /// Fails with [`DawgError::CorruptFile`] unless the length is exactly
    /// `4 * (edge_count + 1)` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DawgError> {
        let file_len = bytes.len();
        let header = bytes.get(..4).ok_or(DawgError::CorruptFile {
            file_len,
            edge_count: 0,
        })?;
        let edge_count = u32::from_le_bytes(header.try_into().expect("4-byte header"));
        if file_len != 4 * (edge_count as usize + 1) {
            return Err(DawgError::CorruptFile {
                file_len,
                edge_count,
            });
        }

        let arena = bytes[4..]
            .chunks_exact(4)
            .map(|chunk| Node::from_bits(u32::from_le_bytes(chunk.try_into().expect("4-byte chunk"))))
            .collect();
        debug!(edges = edge_count, "loaded graph");
        Ok(Dawg { arena })
    }

    /// Reads a graph from `input` until end of stream and decodes it.
    pub fn load<R: Read>(mut input: R) -> Result<Self, DawgError> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Writes the edge-count header followed by every packed record.
    pub fn save<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(&(self.arena.len() as u32).to_le_bytes())?;
        for node in &self.arena {
            out.write_all(&node.bits().to_le_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn saved(dawg: &Dawg) -> Vec<u8> {
        let mut bytes = Vec::new();
        dawg.save(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn empty_graph_saves_as_a_zero_header() {
        let dawg = Dawg::from_arena(Vec::new());
        assert_eq!(saved(&dawg), [0, 0, 0, 0]);
    }

    #[test]
    fn header_and_records_are_little_endian() {
        let dawg = Dawg::from_arena(vec![Node::from_bits(0x6180_0001), Node::from_bits(0x0040_0000)]);
        assert_eq!(
            saved(&dawg),
            [
                2, 0, 0, 0, // edge count
                0x01, 0x00, 0x80, 0x61, // first record
                0x00, 0x00, 0x40, 0x00, // second record
            ]
        );
    }

    #[test]
    fn load_round_trips_save() {
        let dawg = Dawg::from_arena(vec![
            Node::from_bits(0x6180_0000),
            Node::from_bits(0x1234_5678),
        ]);
        let bytes = saved(&dawg);
        let loaded = Dawg::load(&bytes[..]).unwrap();
        assert_eq!(saved(&loaded), bytes);
    }

    #[test]
    fn reserved_bits_survive_a_load() {
        let dawg = Dawg::from_arena(vec![Node::from_bits(0x0020_0000)]);
        let loaded = Dawg::load(&saved(&dawg)[..]).unwrap();
        assert_eq!(loaded.arena()[0].bits(), 0x0020_0000);
    }

    #[test]
    fn length_mismatch_is_corrupt() {
        // Header claims 5 edges but only one follows.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&5u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        let err = Dawg::from_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            DawgError::CorruptFile { file_len: 8, edge_count: 5 }
        ));
    }

    #[test]
    fn truncated_header_is_corrupt() {
        assert!(matches!(
            Dawg::from_bytes(&[1, 2]).unwrap_err(),
            DawgError::CorruptFile { file_len: 2, .. }
        ));
    }

    #[test]
    fn trailing_garbage_is_corrupt() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.push(0xff);
        assert!(Dawg::from_bytes(&bytes).is_err());
    }
}
