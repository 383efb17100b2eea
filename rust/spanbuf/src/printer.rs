//! Diagnostic rendering of buffers and segments as space-separated element
//! listings. Not a stable serialization format.

use std::fmt;

use crate::{Buffer, Segment, SegmentMut};

fn fmt_elements<T: fmt::Display>(elements: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, value) in elements.iter().enumerate() {
        if i != 0 {
            f.write_str(" ")?;
        }
        fmt::Display::fmt(value, f)?;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(self.as_slice(), f)
    }
}

impl<T: fmt::Display> fmt::Display for Segment<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(self.as_slice(), f)
    }
}

impl<T: fmt::Display> fmt::Display for SegmentMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(self.as_slice(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Buffer, Span, SpanMut};

    #[test]
    fn test_display_buffer() {
        let buf = Buffer::copy_from_slice(&[1, 2, 3]);
        assert_eq!(buf.to_string(), "1 2 3");

        let empty = Buffer::<i32>::new();
        assert_eq!(empty.to_string(), "");

        let single = Buffer::copy_from_slice(&[42]);
        assert_eq!(single.to_string(), "42");
    }

    #[test]
    fn test_display_segments() {
        let mut buf = Buffer::copy_from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(buf.segment(1, 3).to_string(), "2 3 4");
        assert_eq!(buf.segment_mut(0, 2).to_string(), "1 2");
    }

    #[test]
    fn test_debug_delegates_to_slice() {
        let buf = Buffer::copy_from_slice(&[1, 2]);
        assert_eq!(format!("{buf:?}"), "[1, 2]");
        assert_eq!(format!("{:?}", buf.segment(0, 1)), "[1]");
    }
}
