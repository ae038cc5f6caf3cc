//! The frame buffer: fixed storage with a movable valid window.
//!
//! A [`Frame`] borrows a caller-owned byte buffer and tracks which span of
//! it currently holds the frame. Length-changing edits (VLAN push/pop)
//! slide the front of the window within the pre-reserved headroom rather
//! than reallocating, so the whole receive path stays allocation-free.

use crate::error::FrameError;

/// One network frame: borrowed storage plus a `start..end` valid window.
///
/// Invariant: `start <= end <= buf.len()`. All byte access goes through
/// the checked [`slice`](Frame::slice) / [`slice_mut`](Frame::slice_mut)
/// accessors; offsets are always relative to the current window start.
#[derive(Debug)]
pub struct Frame<'a> {
    buf: &'a mut [u8],
    start: usize,
    end: usize,
}

impl<'a> Frame<'a> {
    /// Wrap a buffer whose entire contents are one frame (no headroom).
    pub fn new(buf: &'a mut [u8]) -> Self {
        let end = buf.len();
        Self { buf, start: 0, end }
    }

    /// Wrap a buffer where the frame occupies `len` bytes starting at
    /// `headroom`. The leading `headroom` bytes are growth capacity for
    /// front-of-frame insertions.
    pub fn with_headroom(
        buf: &'a mut [u8],
        headroom: usize,
        len: usize,
    ) -> Result<Self, FrameError> {
        let end = headroom
            .checked_add(len)
            .ok_or(FrameError::Truncated { need: usize::MAX, have: buf.len() })?;
        if end > buf.len() {
            return Err(FrameError::Truncated {
                need: end,
                have: buf.len(),
            });
        }
        Ok(Self {
            buf,
            start: headroom,
            end,
        })
    }

    /// Current valid length of the frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Bytes available for front-of-frame growth.
    #[must_use]
    pub fn headroom(&self) -> usize {
        self.start
    }

    /// The frame's valid bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    /// The frame's valid bytes, mutably.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.start..self.end]
    }

    /// Checked read access to `offset..offset + len` within the frame.
    pub fn slice(&self, offset: usize, len: usize) -> Result<&[u8], FrameError> {
        let need = checked_end(offset, len, self.len())?;
        Ok(&self.as_bytes()[offset..need])
    }

    /// Checked write access to `offset..offset + len` within the frame.
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> Result<&mut [u8], FrameError> {
        let need = checked_end(offset, len, self.len())?;
        Ok(&mut self.as_bytes_mut()[offset..need])
    }

    /// Grow the frame at the front by `n` bytes, exposing previously
    /// reserved headroom. The exposed bytes are uninitialized from the
    /// frame's point of view; the caller writes them before reading.
    ///
    /// Fails with `CapacityExceeded` before any state change if the
    /// headroom is insufficient.
    pub fn grow_head(&mut self, n: usize) -> Result<(), FrameError> {
        if n > self.start {
            return Err(FrameError::CapacityExceeded {
                need: n,
                headroom: self.start,
            });
        }
        self.start -= n;
        Ok(())
    }

    /// Shrink the frame at the front by `n` bytes, returning them to
    /// headroom. Fails with `Truncated` if the frame is shorter than `n`.
    pub fn shrink_head(&mut self, n: usize) -> Result<(), FrameError> {
        if n > self.len() {
            return Err(FrameError::Truncated {
                need: n,
                have: self.len(),
            });
        }
        self.start += n;
        Ok(())
    }
}

fn checked_end(offset: usize, len: usize, have: usize) -> Result<usize, FrameError> {
    let need = offset
        .checked_add(len)
        .ok_or(FrameError::Truncated { need: usize::MAX, have })?;
    if need > have {
        return Err(FrameError::Truncated { need, have });
    }
    Ok(need)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_tracks_headroom() {
        let mut buf = [0u8; 32];
        let frame = Frame::with_headroom(&mut buf, 8, 20).unwrap();
        assert_eq!(frame.len(), 20);
        assert_eq!(frame.headroom(), 8);
        assert!(!frame.is_empty());
    }

    #[test]
    fn with_headroom_rejects_oversized_window() {
        let mut buf = [0u8; 16];
        let err = Frame::with_headroom(&mut buf, 8, 12).unwrap_err();
        assert_eq!(err, FrameError::Truncated { need: 20, have: 16 });
    }

    #[test]
    fn grow_consumes_headroom() {
        let mut buf = [0u8; 32];
        let mut frame = Frame::with_headroom(&mut buf, 4, 20).unwrap();
        frame.grow_head(4).unwrap();
        assert_eq!(frame.len(), 24);
        assert_eq!(frame.headroom(), 0);

        let err = frame.grow_head(1).unwrap_err();
        assert_eq!(err, FrameError::CapacityExceeded { need: 1, headroom: 0 });
        // Failed growth leaves the window untouched.
        assert_eq!(frame.len(), 24);
    }

    #[test]
    fn shrink_returns_bytes_to_headroom() {
        let mut buf = [0u8; 32];
        let mut frame = Frame::with_headroom(&mut buf, 0, 20).unwrap();
        frame.shrink_head(4).unwrap();
        assert_eq!(frame.len(), 16);
        assert_eq!(frame.headroom(), 4);

        let err = frame.shrink_head(17).unwrap_err();
        assert_eq!(err, FrameError::Truncated { need: 17, have: 16 });
    }

    #[test]
    fn slice_is_window_relative() {
        let mut buf = [0u8; 8];
        for (i, b) in buf.iter_mut().enumerate() {
            *b = i as u8;
        }
        let mut frame = Frame::with_headroom(&mut buf, 2, 6).unwrap();
        assert_eq!(frame.slice(0, 2).unwrap(), &[2, 3]);

        frame.slice_mut(1, 1).unwrap()[0] = 0xFF;
        assert_eq!(frame.as_bytes()[1], 0xFF);
    }

    #[test]
    fn slice_past_end_is_truncated() {
        let mut buf = [0u8; 8];
        let frame = Frame::new(&mut buf);
        let err = frame.slice(6, 3).unwrap_err();
        assert_eq!(err, FrameError::Truncated { need: 9, have: 8 });
    }
}
