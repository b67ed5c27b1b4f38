//! Size/checksum maintenance for Arduino-style package-index manifests.
//!
//! Two small binaries share this library: `platform-updater` edits
//! `packages[].platforms[]` entries and `tool-updater` edits
//! `packages[].tools[].systems[]` entries. Each run loads the manifest into an
//! owned [`manifest::Manifest`], applies zero or more field updates, and
//! either discards the tree (display-only invocations) or writes it back with
//! a single `.backup` copy of the prior content.

pub mod cli;
pub mod digest;
pub mod manifest;
pub mod report;
pub mod store;
pub mod update;
