// corpus.rs - Corpus loading and preparation.
//
// Produces two 0-terminated buffers: the raw corpus bytes (ISO-8859-1) and
// their UTF-8 conversion. The sentinel lets scans treat `buf[len]` as a
// guaranteed non-matching byte, mirroring the NUL-terminated buffers the
// original harness scanned.

use std::fs;
use std::path::Path;

use crate::encodings::latin1;
use crate::error::HarnessError;

/// The corpus under test: primary (Latin-1) and secondary (UTF-8) buffers.
///
/// Both buffers carry a trailing `0` sentinel that is excluded from the
/// reported lengths. Created once at startup, immutable for the whole run.
pub struct Corpus {
    mem: Vec<u8>,
    memlen: usize,
    umem: Vec<u8>,
    umemlen: usize,
}

impl Corpus {
    /// Read a corpus file fully into memory and prepare both buffers.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Corpus, HarnessError> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| HarnessError::Io {
            path: path.to_owned(),
            source,
        })?;
        Corpus::from_bytes(raw)
    }

    /// Prepare a corpus from in-memory Latin-1 bytes.
    ///
    /// The UTF-8 buffer is allocated at twice the input size, the worst
    /// case for Latin-1 input where every byte >= 0x80 becomes two bytes.
    /// A conversion that does not consume the entire input is a corpus
    /// error, not a condition to recover from.
    pub fn from_bytes(raw: Vec<u8>) -> Result<Corpus, HarnessError> {
        let memlen = raw.len();
        let mut mem = raw;
        mem.push(0);

        let mut umem = vec![0u8; 2 * memlen];
        let conv = latin1::to_utf8(&mem[..memlen], &mut umem);
        if conv.read != memlen {
            return Err(HarnessError::IncompleteConversion {
                consumed: conv.read,
                total: memlen,
            });
        }
        let umemlen = conv.written;
        umem.truncate(umemlen);
        umem.push(0);

        Ok(Corpus {
            mem,
            memlen,
            umem,
            umemlen,
        })
    }

    /// The primary (Latin-1) buffer, without the sentinel.
    pub fn bytes(&self) -> &[u8] {
        &self.mem[..self.memlen]
    }

    /// The secondary (UTF-8) buffer, without the sentinel.
    pub fn utf8_bytes(&self) -> &[u8] {
        &self.umem[..self.umemlen]
    }

    /// Length of the primary buffer in bytes.
    pub fn len(&self) -> usize {
        self.memlen
    }

    /// Length of the converted UTF-8 buffer in bytes.
    pub fn utf8_len(&self) -> usize {
        self.umemlen
    }

    /// Returns `true` for an empty corpus.
    pub fn is_empty(&self) -> bool {
        self.memlen == 0
    }

    /// The primary buffer including its `0` sentinel.
    pub fn terminated(&self) -> &[u8] {
        &self.mem
    }
}

impl std::fmt::Debug for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Corpus")
            .field("len", &self.memlen)
            .field("utf8_len", &self.umemlen)
            .finish()
    }
}
