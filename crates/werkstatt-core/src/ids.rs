//! Identifier namespaces for projects and features.
//!
//! User-created projects and the read-only example templates draw their ids
//! from disjoint namespaces, so membership is decidable from the id alone
//! without touching storage. Minted ids combine a millisecond timestamp with
//! a process-local counter; a single process can create several projects
//! within one millisecond.

use std::sync::atomic::{AtomicU64, Ordering};

use jiff::Timestamp;

/// Prefix of every user-created project id.
pub const USER_PROJECT_PREFIX: &str = "project-";

/// Prefixes of the read-only example template namespace.
pub const EXAMPLE_PREFIXES: [&str; 2] = ["example-", "demo-"];

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Checks whether a project id belongs to the example template namespace.
/// Pure prefix test, no I/O.
pub fn is_example_id(id: &str) -> bool {
    EXAMPLE_PREFIXES.iter().any(|p| id.starts_with(p))
}

/// Mints a fresh id in the user project namespace.
pub fn mint_project_id() -> String {
    format!("{}{}", USER_PROJECT_PREFIX, unique_suffix())
}

/// Mints a feature id, unique within its owning project.
pub fn mint_feature_id() -> String {
    format!("feature-{}", unique_suffix())
}

fn unique_suffix() -> String {
    let millis = Timestamp::now().as_millisecond();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_namespace_predicate() {
        assert!(is_example_id("example-churn"));
        assert!(is_example_id("demo-intro"));
        assert!(!is_example_id("project-1700000000000-0"));
        assert!(!is_example_id(""));
    }

    #[test]
    fn test_minted_ids_are_user_namespace() {
        let id = mint_project_id();
        assert!(id.starts_with(USER_PROJECT_PREFIX));
        assert!(!is_example_id(&id));
    }

    #[test]
    fn test_minted_ids_are_unique() {
        let ids: Vec<String> = (0..100).map(|_| mint_project_id()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
