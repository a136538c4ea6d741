// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Capstan Collections
//!
//! **Container types for the Capstan utility ecosystem.**
//!
//! The centerpiece of this crate is [`queue::VecQueue`], a growable FIFO
//! queue backed by a flat `Vec` with a lazily advancing head index. Dequeued
//! slots are tombstoned rather than shifted out, and a tunable
//! [`policy::CompactionPolicy`] decides when the accumulated tombstone
//! prefix is physically reclaimed in a single pass. The result is amortized
//! O(1) enqueue and dequeue with the cache-friendly layout of a plain
//! vector.
//!
//! ## Architecture
//!
//! * **`policy`**: The compaction trigger — pure threshold math, no
//!   container state — so the reclamation strategy can be tested and tuned
//!   in isolation.
//! * **`queue`**: The `VecQueue<E>` container itself, with the standard
//!   iterator ecosystem (`Iterator`, `IntoIterator`, `FromIterator`,
//!   `Extend`) and diagnostic accessors for storage introspection.
//!
//! ## Design Philosophy
//!
//! 1. **Emptiness is not an error**: `dequeue` and `front` return `Option`;
//!    querying an empty queue is a normal condition.
//! 2. **No bounds on the element type**: storing and moving values is the
//!    only capability `VecQueue<E>` asks of `E`.
//! 3. **Compaction is invisible**: reclamation never reorders elements or
//!    changes any observable result, only the storage footprint.

pub mod policy;
pub mod queue;
