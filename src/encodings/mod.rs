// encodings/mod.rs - Encoding conversions used by the corpus loader.

pub mod latin1;

pub use latin1::{to_utf8, utf8_len, Conversion};
