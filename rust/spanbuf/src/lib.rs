//! Fixed-capacity typed buffers with zero-copy segment views.
//!
//! The crate provides one owning container, [`Buffer`], and two non-owning
//! views, [`Segment`] and [`SegmentMut`], unified behind the [`Span`] /
//! [`SpanMut`] read/write-range capability traits. A buffer holds a single
//! heap-allocated block of trivially copyable elements and never grows;
//! segments alias a sub-range of memory owned elsewhere and never release
//! it. The lifetime on a segment ties it to its source, so a view cannot
//! outlive the memory it aliases.
//!
//! ```
//! use spanbuf::{Buffer, Span, SpanMut};
//!
//! let mut frame = Buffer::<u8>::zeroed(16);
//! frame.fill_range(0xFF, 0, 4);
//!
//! let mut payload = frame.segment_mut(4, 12);
//! payload.fill(0x2A);
//!
//! assert_eq!(frame.head(4).as_slice(), &[0xFF; 4]);
//! assert_eq!(frame.bytes(), 16);
//! ```

pub mod buffer;
pub mod printer;
pub mod segment;
pub mod span;

pub use buffer::Buffer;
pub use segment::{Segment, SegmentMut};
pub use span::{Span, SpanMut};
