//! Org-mode outline rendering.
//!
//! # Responsibility
//! - Render sections as level-1 headings and tasks as level-2+ headings.
//! - Apply assignee and completion filters per task, recursively.
//!
//! # Invariants
//! - An empty rendering means "this subtree contributes nothing".
//! - Subtasks nested `n` levels deep get `n` stars beyond `**`.
//! - Text is trimmed but never escaped; notes pass through verbatim.

use crate::config::ExportOptions;
use crate::model::task::Task;
use crate::outline::sections::{Section, Sections};

const KEYWORD_TODO: &str = "TODO";
const KEYWORD_DONE: &str = "DONE";
const SECTION_PREFIX: &str = "*";
// Top-level tasks sit one level below their section heading.
const TOP_LEVEL_TASK_STARS: usize = 2;

/// Renders all sections in grouping order.
///
/// Each section rendering is terminated by one newline.
pub fn render_outline(sections: &Sections<'_>, options: &ExportOptions) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&render_section(section, options));
        out.push('\n');
    }
    out
}

/// Renders one section heading followed by its non-empty task renderings.
pub fn render_section(section: &Section<'_>, options: &ExportOptions) -> String {
    let mut out = format!("{SECTION_PREFIX} {}", section.name);
    for task in &section.tasks {
        let rendered = render_task(task, options);
        if !rendered.is_empty() {
            out.push('\n');
            out.push_str(&rendered);
        }
    }
    out
}

/// Renders a top-level task and its subtree.
///
/// Returns an empty string when the task is filtered out.
pub fn render_task(task: &Task, options: &ExportOptions) -> String {
    render_task_at(task, options, 0)
}

fn render_task_at(task: &Task, options: &ExportOptions, depth: usize) -> String {
    if !options.accepts_assignee(task.assignee_name()) {
        return String::new();
    }
    let keyword = if task.is_completed() {
        if !options.include_completed {
            return String::new();
        }
        KEYWORD_DONE
    } else {
        KEYWORD_TODO
    };

    let stars = "*".repeat(TOP_LEVEL_TASK_STARS + depth);
    let mut out = format!("{stars} {keyword} {}", task.name.trim());

    let notes = task.notes.trim();
    if !notes.is_empty() {
        out.push('\n');
        out.push_str(notes);
        if !task.has_subtasks() && task.is_top_level() {
            out.push('\n');
        }
    }

    for subtask in &task.subtasks {
        let rendered = render_task_at(subtask, options, depth + 1);
        if !rendered.is_empty() {
            out.push('\n');
            out.push_str(&rendered);
        }
    }

    // Leaf subtasks close their chain with a blank line.
    if !task.has_subtasks() && !task.is_top_level() {
        out.push('\n');
    }

    out
}
