// encodings/latin1.rs - ISO-8859-1 to UTF-8 conversion.
//
// Latin-1 code points are exactly U+0000..U+00FF, so every source byte maps
// to one or two UTF-8 bytes and the conversion can never fail on the input
// side. A conversion stops early only when the destination runs out of
// room, which the caller observes through `Conversion::read`.

/// Byte accounting for one conversion call, iconv-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    /// Source bytes consumed.
    pub read: usize,
    /// Destination bytes produced.
    pub written: usize,
}

/// Convert ISO-8859-1 bytes to UTF-8, writing into `dst`.
///
/// Consumes source bytes while each converted character still fits in the
/// remaining destination space. `read == src.len()` signals a complete
/// conversion.
pub fn to_utf8(src: &[u8], dst: &mut [u8]) -> Conversion {
    let mut read = 0;
    let mut written = 0;
    while read < src.len() {
        let b = src[read];
        if b < 0x80 {
            if written >= dst.len() {
                break;
            }
            dst[written] = b;
            written += 1;
        } else {
            if written + 2 > dst.len() {
                break;
            }
            dst[written] = 0xc0 | (b >> 6);
            dst[written + 1] = 0x80 | (b & 0x3f);
            written += 2;
        }
        read += 1;
    }
    Conversion { read, written }
}

/// Exact UTF-8 length of a Latin-1 byte sequence after conversion.
pub fn utf8_len(src: &[u8]) -> usize {
    src.iter().map(|&b| if b < 0x80 { 1 } else { 2 }).sum()
}
