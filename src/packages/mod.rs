//! # Package Sources
//!
//! Query-only adapters that turn package manager output into
//! [`Candidate`](crate::core::types::Candidate) records.
//!
//! - **pacman** (`pacman.rs`): official repositories via `pacman -Ss`,
//!   falling back to the full `pacman -Sl` listing for misspellings
//! - **helper** (`helper.rs`): AUR via `yay`/`paru -Ss --aur`
//! - **aur_rpc** (`aur_rpc.rs`): AUR RPC search when no helper is installed
//! - **installed** (`installed.rs`): the local database, for remove/purge
//!
//! [`CandidateFetcher`] combines sources and deduplicates names, preferring
//! official entries.

pub mod aur_rpc;
pub mod fetcher;
pub mod helper;
pub mod installed;
pub mod pacman;
pub mod search_parsing;
pub mod traits;

pub use fetcher::{CandidateFetcher, installed_helper, merge_candidates};
pub use traits::PackageSource;
