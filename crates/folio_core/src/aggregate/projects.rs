//! Technology filter over the project list.
//!
//! # Invariants
//! - Source order is preserved; it carries no meaning but is never shuffled.
//! - A blank technology selection returns the exact original list.
//! - `technologies()` is ascending and duplicate-free.

use crate::model::project::{Project, ProjectId};
use std::collections::{BTreeMap, BTreeSet};

/// Project list with a precomputed technology index.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    projects: Vec<Project>,
    technologies: Vec<String>,
}

impl ProjectFilter {
    pub fn new(projects: Vec<Project>) -> Self {
        let technologies = projects
            .iter()
            .flat_map(|project| project.technologies.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self {
            projects,
            technologies,
        }
    }

    /// Original project list in source order.
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Projects listing `technology`; blank input disables the filter.
    pub fn filter(&self, technology: &str) -> Vec<&Project> {
        let selected = technology.trim();
        if selected.is_empty() {
            return self.projects.iter().collect();
        }
        self.projects
            .iter()
            .filter(|project| project.uses(selected))
            .collect()
    }

    /// Sorted distinct union of every project's technologies.
    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    /// Number of projects per technology, keyed in ascending order.
    pub fn technology_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for project in &self.projects {
            let distinct = project
                .technologies
                .iter()
                .map(String::as_str)
                .collect::<BTreeSet<_>>();
            for technology in distinct {
                *counts.entry(technology).or_insert(0) += 1;
            }
        }
        counts
    }

    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
