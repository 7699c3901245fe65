//! Sequentially indexed container with O(1) snapshots.
//!
//! `snapseq` provides [`Sequence<T>`], a sequence container whose contents
//! can be captured at any moment as an immutable [`Snapshot`] without
//! copying the elements. The sequence is stored as a graph of storage
//! slices; snapshots share those slices, and the two sides diverge lazily
//! through structural copy-on-write the first time a write would disturb a
//! shared segment.
//!
//! # Quick Start
//!
//! ```
//! use snapseq::Sequence;
//!
//! let mut seq: Sequence<u64> = (0..1024).collect();
//! let snap = seq.snapshot(); // O(number of slices), not O(elements)
//!
//! let cursor = seq.cursor(512);
//! seq.insert_from(&cursor, 2000..3024).unwrap();
//!
//! assert_eq!(seq.len(), 2048);
//! assert_eq!(snap.len(), 1024); // frozen at capture time
//! ```
//!
//! # Positions
//!
//! References obtained through indexing are valid only until the next
//! mutating call. A [`Cursor`] is the durable way to hold a position: it
//! addresses a container index and transparently re-resolves itself after
//! any mutation. See [`Cursor`] for the index-stability contract.
//!
//! # Storage backends
//!
//! Elements live in storage engines behind the [`Storage`] trait; the
//! kernel only requires contiguous random access and ranged deep copies.
//! [`VecStorage`] is the default. A custom backend plugs in through
//! [`StorageFactory`].

#![warn(missing_docs, missing_debug_implementations)]
#![deny(unsafe_code)]

mod config;
mod cursor;
mod error;
mod iter;
mod kernel;
mod seq;
mod slice;
mod snapshot;
mod storage;

pub use config::CowConfig;
pub use cursor::{Cursor, NPOS};
pub use error::{Error, Result};
pub use iter::Iter;
pub use seq::Sequence;
pub use snapshot::Snapshot;
pub use storage::{Storage, StorageFactory, StorageId, VecFactory, VecStorage};
