//! Incremental one's-complement checksum arithmetic (RFC 1624).
//!
//! Checksummed headers are patched in place, so the checksum is updated
//! from the known prior value and the changed words instead of re-scanning
//! the covered region. All words are the 16-bit big-endian units the
//! checksum was originally computed over, read via `u16::from_be_bytes`.

/// One's-complement 16-bit add: sum the two values and fold the carry out
/// of bit 16 back into bit 0.
#[must_use]
pub const fn csum16_add(csum: u16, addend: u16) -> u16 {
    let (sum, overflow) = csum.overflowing_add(addend);
    sum + overflow as u16
}

/// One's-complement 16-bit subtract, expressed as adding the complement.
#[must_use]
pub const fn csum16_sub(csum: u16, addend: u16) -> u16 {
    csum16_add(csum, !addend)
}

/// Update a checksum for the replacement of one 16-bit word.
///
/// `~(add16(add16(~check, ~old), new))`: remove the old word's
/// contribution, add the new word's, re-complement.
#[must_use]
pub const fn csum_replace_u16(check: u16, old: u16, new: u16) -> u16 {
    !csum16_add(csum16_sub(!check, old), new)
}

/// Update a checksum for the replacement of one 32-bit value, as two
/// independent 16-bit word replacements.
#[must_use]
pub const fn csum_replace_u32(check: u16, old: u32, new: u32) -> u16 {
    let check = csum_replace_u16(check, (old >> 16) as u16, (new >> 16) as u16);
    csum_replace_u16(check, old as u16, new as u16)
}
