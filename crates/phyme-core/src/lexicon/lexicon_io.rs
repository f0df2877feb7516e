use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;

use super::{Lexicon, LexiconError};

const MAGIC: &[u8; 4] = b"PHYX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 4 + 1 + 3 + 4; // magic + version + reserved + payload_len = 12

impl Lexicon {
    pub fn to_bytes(&self) -> Result<Vec<u8>, LexiconError> {
        let payload = bincode::serialize(self).map_err(LexiconError::Serialize)?;
        let payload_len: u32 = payload
            .len()
            .try_into()
            .map_err(|_| LexiconError::Parse("lexicon payload exceeds u32::MAX".to_string()))?;

        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&[0u8; 3]); // reserved
        buf.extend_from_slice(&payload_len.to_le_bytes());
        buf.extend_from_slice(&payload);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, LexiconError> {
        if data.len() < 5 {
            return Err(LexiconError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(LexiconError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(LexiconError::UnsupportedVersion(data[4]));
        }
        let Some(len_bytes) = data.get(8..HEADER_SIZE) else {
            return Err(LexiconError::InvalidHeader);
        };
        let mut len = [0u8; 4];
        len.copy_from_slice(len_bytes);
        let payload_len = u32::from_le_bytes(len) as usize;

        let Some(payload) = data.get(HEADER_SIZE..HEADER_SIZE + payload_len) else {
            return Err(LexiconError::InvalidHeader);
        };
        bincode::deserialize(payload).map_err(LexiconError::Deserialize)
    }

    /// Open a lexicon snapshot, using mmap to avoid reading the file into a
    /// separate buffer before deserializing.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), LexiconError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }
}
