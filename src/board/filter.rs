//! Filter selectors and the filtered task view.

use crate::board::task::{Priority, Task};

/// Done-state selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoneFilter {
    Done,
    Undone,
}

impl DoneFilter {
    #[must_use]
    pub fn matches(self, done: bool) -> bool {
        match self {
            DoneFilter::Done => done,
            DoneFilter::Undone => !done,
        }
    }
}

/// Replacement value for one of the two filter selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSelector {
    Done(Option<DoneFilter>),
    Priority(Option<Priority>),
}

/// Active view filters. `None` on a selector means "show all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub done: Option<DoneFilter>,
    pub priority: Option<Priority>,
}

impl FilterState {
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.done.map_or(true, |filter| filter.matches(task.done))
            && self.priority.map_or(true, |priority| task.priority == priority)
    }

    pub fn apply(&mut self, selector: FilterSelector) {
        match selector {
            FilterSelector::Done(done) => self.done = done,
            FilterSelector::Priority(priority) => self.priority = priority,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.done.is_some() || self.priority.is_some()
    }

    /// Done selector after this one in All -> Done -> Undone -> All order
    #[must_use]
    pub fn next_done(&self) -> Option<DoneFilter> {
        match self.done {
            None => Some(DoneFilter::Done),
            Some(DoneFilter::Done) => Some(DoneFilter::Undone),
            Some(DoneFilter::Undone) => None,
        }
    }

    /// Priority selector after this one in All -> Low -> Medium -> High -> All order
    #[must_use]
    pub fn next_priority(&self) -> Option<Priority> {
        match self.priority {
            None => Some(Priority::Low),
            Some(Priority::Low) => Some(Priority::Medium),
            Some(Priority::Medium) => Some(Priority::High),
            Some(Priority::High) => None,
        }
    }

    #[must_use]
    pub fn done_label(&self) -> &'static str {
        match self.done {
            None => "All Tasks",
            Some(DoneFilter::Done) => "Done",
            Some(DoneFilter::Undone) => "Undone",
        }
    }

    #[must_use]
    pub fn priority_label(&self) -> &'static str {
        self.priority.map_or("All Priorities", |priority| priority.label())
    }
}

/// Order-preserving subsequence of `tasks` that passes `filters`
pub fn filtered_view<'a>(tasks: &'a [Task], filters: &FilterState) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filters.matches(task)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_done_selector() {
        let mut filters = FilterState::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            filters.apply(FilterSelector::Done(filters.next_done()));
            seen.push(filters.done_label());
        }
        assert_eq!(seen, vec!["Done", "Undone", "All Tasks"]);
    }

    #[test]
    fn test_apply_leaves_other_selector() {
        let mut filters = FilterState {
            done: Some(DoneFilter::Undone),
            priority: None,
        };
        filters.apply(FilterSelector::Priority(Some(Priority::High)));
        assert_eq!(filters.done, Some(DoneFilter::Undone));
        assert_eq!(filters.priority, Some(Priority::High));
        assert!(filters.is_active());
    }
}
