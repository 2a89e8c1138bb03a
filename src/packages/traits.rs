use crate::core::types::Candidate;
use crate::error::Result;

/// A queryable package universe (sync repos, AUR, local database).
///
/// Implementations are query-only and must never change system state.
pub trait PackageSource {
    /// Short label for logs and warnings
    fn name(&self) -> &str;

    /// Whether the backing tool or service can be used at all
    fn is_available(&self) -> bool;

    /// Search for candidates matching `query`.
    fn search(&self, query: &str) -> Result<Vec<Candidate>>;
}
