// Joseph Prichard
// 10/16/2026
// Huffman coding compressor: frequency table, code tree, header and bit packing

pub mod bitwise;
pub mod block;
pub mod codec;
pub mod codes;
pub mod compress;
pub mod debug;
pub mod decompress;
pub mod error;
pub mod frequency;
pub mod header;
pub mod logger;
pub mod queue;
pub mod read;
pub mod threading;
pub mod tree;
pub mod utils;
pub mod write;

pub use codec::{decode, decode_packed, encode, CodeBook, Encoded};
pub use error::{CodecError, Result};
