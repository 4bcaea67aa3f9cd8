// SPDX-License-Identifier: MPL-2.0
//! Application layer: ports the UI depends on.
//!
//! - [`port`]: Abstract interfaces implemented by infrastructure adapters

pub mod port;
