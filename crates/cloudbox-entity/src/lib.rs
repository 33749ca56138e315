//! # cloudbox-entity
//!
//! Domain records for the Cloudbox client. Every struct in this crate is
//! either a record decoded from a REST payload (`FolderRecord`,
//! `FileRecord`) or a value derived from one (`FolderNode`, `FileCategory`).
//! All records derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod file;
pub mod folder;
