use crate::reverse::{CheckOptions, IrreversibleRoutes, NonExistentRoutes, ReverseResult};
use std::cmp::Ordering;

/// Both sides of a registered-versus-referenced comparison, each sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDiff {
    pub irreversible: Vec<String>,
    pub non_existent: Vec<String>,
}

impl RouteDiff {
    pub fn is_empty(&self) -> bool {
        self.irreversible.is_empty() && self.non_existent.is_empty()
    }

    pub(crate) fn apply(&mut self, options: &CheckOptions) {
        self.irreversible.retain(|pattern| !options.tolerates(pattern));
    }

    /// Non-existent routes are reported ahead of irreversible ones; the two
    /// are never combined.
    pub fn into_result(self) -> ReverseResult<()> {
        if !self.non_existent.is_empty() {
            return Err(NonExistentRoutes(self.non_existent).into());
        }
        if !self.irreversible.is_empty() {
            return Err(IrreversibleRoutes(self.irreversible).into());
        }
        Ok(())
    }
}

/// Computes the two one-sided differences between `registered` and
/// `referenced` with a single merge pass over their sorted, deduplicated
/// contents.
pub fn diff_routes(mut registered: Vec<String>, mut referenced: Vec<String>) -> RouteDiff {
    registered.sort_unstable();
    registered.dedup();
    referenced.sort_unstable();
    referenced.dedup();

    let mut diff = RouteDiff::default();
    let mut registered = registered.into_iter().peekable();
    let mut referenced = referenced.into_iter().peekable();

    loop {
        let order = match (registered.peek(), referenced.peek()) {
            (Some(pattern), Some(reference)) => pattern.cmp(reference),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => break,
        };
        match order {
            Ordering::Less => diff.irreversible.extend(registered.next()),
            Ordering::Greater => diff.non_existent.extend(referenced.next()),
            Ordering::Equal => {
                registered.next();
                referenced.next();
            }
        }
    }

    diff
}
