//! Forward-only parse cursor, bounds-checked against the frame on every
//! advance.
//!
//! This is the single safety mechanism of the whole decode path: no header
//! byte is ever dereferenced without `offset + size <= frame.len()` having
//! been established first, using overflow-checked arithmetic. A cursor is
//! `Copy`, so multi-step decoders work on a scratch copy and commit only
//! on full success — a failed decode never leaves the caller's cursor
//! half-advanced.

use crate::error::FrameError;
use crate::frame::Frame;

/// Current parse offset into a [`Frame`], relative to the window start.
///
/// A cursor is only meaningful for the frame it was created against and
/// is invalidated by any length-changing mutation of that frame; restart
/// from [`Cursor::new`] after a VLAN push or pop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    /// A cursor at the start of the frame.
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    /// The current offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left between the cursor and the frame end.
    #[must_use]
    pub fn remaining(&self, frame: &Frame<'_>) -> usize {
        frame.len().saturating_sub(self.offset)
    }

    /// Advance by `n` bytes without reading them. Fails with `Truncated`
    /// and leaves the offset unchanged if `offset + n` would pass the
    /// frame end.
    pub fn advance(&mut self, frame: &Frame<'_>, n: usize) -> Result<(), FrameError> {
        self.offset = self.checked_target(frame, n)?;
        Ok(())
    }

    /// Read the next `n` bytes and advance past them. Fails with
    /// `Truncated` and leaves the offset unchanged if they do not fit.
    pub fn take<'f>(&mut self, frame: &'f Frame<'_>, n: usize) -> Result<&'f [u8], FrameError> {
        let end = self.checked_target(frame, n)?;
        let bytes = &frame.as_bytes()[self.offset..end];
        self.offset = end;
        Ok(bytes)
    }

    fn checked_target(&self, frame: &Frame<'_>, n: usize) -> Result<usize, FrameError> {
        let need = self.offset.checked_add(n).ok_or(FrameError::Truncated {
            need: usize::MAX,
            have: frame.len(),
        })?;
        if need > frame.len() {
            return Err(FrameError::Truncated {
                need,
                have: frame.len(),
            });
        }
        Ok(need)
    }
}
