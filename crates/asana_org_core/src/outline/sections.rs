//! Section grouping for top-level tasks.
//!
//! # Responsibility
//! - Partition top-level tasks by `memberships[0].section.gid`.
//! - Preserve first-seen section order and per-section task order.
//!
//! # Invariants
//! - One owned `Section` per gid; membership snapshots are only read.
//! - Tasks are borrowed from the document, never copied.
//! - Enumeration order never depends on hash order.

use crate::error::{ExportError, ExportResult};
use crate::model::task::Task;
use log::debug;
use std::collections::HashMap;

/// One section with the top-level tasks assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'doc> {
    pub gid: String,
    pub name: String,
    /// Tasks in document order.
    pub tasks: Vec<&'doc Task>,
}

/// Insertion-ordered collection of sections keyed by gid.
#[derive(Debug, Clone, Default)]
pub struct Sections<'doc> {
    index: HashMap<String, usize>,
    ordered: Vec<Section<'doc>>,
}

impl<'doc> Sections<'doc> {
    /// Groups top-level tasks by their first membership's section.
    ///
    /// Completed tasks are skipped when `include_completed` is `false`.
    ///
    /// # Errors
    /// - `ExportError::MalformedInput` when a selected task has no
    ///   memberships, or its first membership carries no section.
    pub fn group(tasks: &'doc [Task], include_completed: bool) -> ExportResult<Self> {
        let mut sections = Self::default();
        for task in tasks {
            if !include_completed && task.is_completed() {
                continue;
            }
            let section_ref = match task.memberships.first() {
                None => return Err(ExportError::missing_membership(&task.gid)),
                Some(membership) => membership
                    .section
                    .as_ref()
                    .ok_or_else(|| ExportError::missing_section(&task.gid))?,
            };
            sections
                .entry(&section_ref.gid, &section_ref.name)
                .tasks
                .push(task);
        }
        debug!(
            "event=sections_grouped module=outline status=ok sections={} tasks={}",
            sections.len(),
            sections.task_count()
        );
        Ok(sections)
    }

    /// Returns the section for a gid.
    pub fn get(&self, gid: &str) -> Option<&Section<'doc>> {
        self.index.get(gid).map(|&position| &self.ordered[position])
    }

    /// Iterates sections in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Section<'doc>> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Total grouped top-level tasks across all sections.
    pub fn task_count(&self) -> usize {
        self.ordered.iter().map(|section| section.tasks.len()).sum()
    }

    fn entry(&mut self, gid: &str, name: &str) -> &mut Section<'doc> {
        let position = match self.index.get(gid) {
            Some(&position) => position,
            None => {
                let position = self.ordered.len();
                self.index.insert(gid.to_string(), position);
                self.ordered.push(Section {
                    gid: gid.to_string(),
                    name: name.to_string(),
                    tasks: Vec::new(),
                });
                position
            }
        };
        &mut self.ordered[position]
    }
}

impl<'a, 'doc> IntoIterator for &'a Sections<'doc> {
    type Item = &'a Section<'doc>;
    type IntoIter = std::slice::Iter<'a, Section<'doc>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Sections;
    use crate::model::task::{Membership, Task};

    fn task_in(gid: &str, section_gid: &str, section_name: &str) -> Task {
        let mut task = Task::new(gid, format!("Task {gid}"));
        task.memberships = vec![Membership::in_section(section_gid, section_name)];
        task
    }

    #[test]
    fn first_seen_name_wins_for_repeated_gid() {
        let tasks = vec![task_in("T1", "S1", "Inbox"), task_in("T2", "S1", "Renamed")];
        let sections = Sections::group(&tasks, false).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get("S1").unwrap().name, "Inbox");
        assert_eq!(sections.task_count(), 2);
    }

    #[test]
    fn grouped_tasks_borrow_document_tasks() {
        let tasks = vec![task_in("T1", "S1", "Inbox")];
        let sections = Sections::group(&tasks, false).unwrap();

        let grouped = sections.get("S1").unwrap().tasks[0];
        assert!(std::ptr::eq(grouped, &tasks[0]));
    }

    #[test]
    fn empty_input_yields_no_sections() {
        let sections = Sections::group(&[], true).unwrap();
        assert!(sections.is_empty());
        assert!(sections.get("S1").is_none());
    }
}
