use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pack;

const TEMP_EXT: &str = "tmp"; // For atomic writes

/// On-disk container for one compressed text: the serialized key, the
/// packed code bits, and the exact bit count.
///
/// `bit_len` extends the bare pack/unpack contract, which records no
/// length: without it a decoder reads the final byte's zero-padding as
/// real codes and can emit spurious trailing characters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Archive {
    pub key: String,
    pub bit_len: u64,
    pub original_len: u64,
    pub data: Vec<u8>,
}

impl Archive {
    /// Builds an archive from a compression result, packing the bits.
    pub fn from_compressed(compressed: &crate::codec::Compressed, original_len: u64) -> Result<Self> {
        Ok(Archive {
            key: compressed.key.clone(),
            bit_len: compressed.bits.len() as u64,
            original_len,
            data: pack::pack(&compressed.bits)?,
        })
    }

    /// Unpacks the payload and trims the padding back to the recorded
    /// bit count.
    pub fn bits(&self) -> String {
        let mut bits = pack::unpack(&self.data);
        bits.truncate(self.bit_len as usize);
        bits
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::Archive(e.to_string()))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        bincode::deserialize(data).map_err(|e| Error::Archive(e.to_string()))
    }
}

pub fn save(path: &Path, archive: &Archive) -> Result<()> {
    let temp_path = path.with_extension(TEMP_EXT);
    fs::write(&temp_path, archive.to_bytes()?)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

pub fn load(path: &Path) -> Result<Archive> {
    if !path.exists() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "archive file not found",
        )));
    }
    let data = fs::read(path)?;
    Archive::from_bytes(&data)
}
