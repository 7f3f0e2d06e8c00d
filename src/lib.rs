//! # commons-upload
//!
//! Upload portfolio photos to Wikimedia Commons with metadata derived from
//! the filename. Photos are named `subject_event_year.ext`; the tool turns
//! that into a Commons description page, shows a preview, and hands the file
//! to the external pywikibot client.
//!
//! # Architecture: Parse → Merge → Render → Hand Off
//!
//! ```text
//! 1. Parse    filename           →  ParsedName        (subject, event, year)
//! 2. Merge    flags + profile    →  UploadMetadata    (categories, license, author)
//! 3. Render   metadata           →  description page  (wiki markup)
//! 4. Hand off path + page        →  Uploader          (external pwb client)
//! ```
//!
//! Stages 1–3 are pure string-to-string transformations, so unit tests cover
//! every metadata shape without touching the network or a client install.
//! Stage 4 is a trait seam: the production [`upload::PwbUploader`] invokes
//! `pwb upload`, and tests substitute a recording mock.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `subject_event_year` filename convention parser |
//! | [`description`] | Commons description page rendering from [`description::UploadMetadata`] |
//! | [`config`] | JSON upload profile loading and CLI/profile option merging |
//! | [`upload`] | `Uploader` collaborator seam and the pywikibot CLI binding |
//! | [`output`] | Pre-upload preview formatting |
//!
//! # Design Decisions
//!
//! ## The Filename Is the Metadata Source
//!
//! No sidecar files, no embedded-tag reading, no prompts for fields. Renaming
//! a file is the one editing operation every photo tool supports, so the
//! naming convention doubles as the metadata entry form. The parser never
//! rejects input — missing tokens become empty fields and the description
//! degrades gracefully.
//!
//! ## Upload Stays External
//!
//! Commons uploads involve OAuth sessions, chunked transfer, and server-side
//! warning negotiation. The pywikibot client already does all of that well,
//! so this tool prepares metadata and delegates, surfacing whatever the
//! client reports without translation. The [`upload::Uploader`] trait keeps
//! that binding swappable.
//!
//! ## Explicit Flags Beat the Profile
//!
//! A JSON profile pre-fills categories and the license for a batch of
//! uploads, but a flag typed on the command line is always the more specific
//! intent: `--license` overrides the profile value, and CLI categories come
//! first in the merged list.

pub mod config;
pub mod description;
pub mod naming;
pub mod output;
pub mod upload;
