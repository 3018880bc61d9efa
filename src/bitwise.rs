// Joseph Prichard
// 10/16/2026
// Bit twiddling helpers, bit n counts from the most significant bit of a byte

pub fn set_bit(byte: u8, n: u32) -> u8 {
    (0x80 >> n) | byte
}

pub fn get_bit(byte: u8, n: u32) -> u8 {
    (byte >> (7 - n)) & 1
}
