//! Domain model for portfolio catalog records.
//!
//! # Responsibility
//! - Define the canonical `Project` record shared by admin and display paths.
//! - Own the defaulting and merge rules applied on create/update.
//!
//! # Invariants
//! - Every record is identified by a strictly positive `ProjectId`.
//! - `youtube_id` is either a valid 11-character id or absent, never `""`.

pub mod project;
