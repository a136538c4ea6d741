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

//! # Capstan Core
//!
//! Foundational numeric utilities for the Capstan utility ecosystem. This
//! crate consolidates the small, reusable numeric building blocks that the
//! container crates build on, with a focus on predictable arithmetic
//! semantics and ergonomic, by-value APIs.
//!
//! ## Modules
//!
//! - `num`: Integer-centric utilities, including by-value arithmetic traits
//!   for saturating (clamped) and checked (`Option<T>`) operations, and
//!   checked numeric conversions between primitive types built on
//!   `num-traits`.
//!
//! ## Purpose
//!
//! Utility and container code should not have to choose between wrapping
//! overflow silently and panicking in release builds. These traits make the
//! chosen semantics explicit at every call site while compiling down to the
//! intrinsic operations on primitives.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
