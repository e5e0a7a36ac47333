// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across the UI layers.

pub mod team;

pub use team::Team;
