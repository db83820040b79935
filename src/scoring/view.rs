//! Read-only view shared by all criteria

use crate::input::resume::{present_str, StructuredResumeData};

/// One experience or project entry with its cleaned bullets
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView<'a> {
    pub label: &'a str,
    pub bullets: Vec<&'a str>,
}

/// Precomputed projections of a resume.
///
/// Bullets are trimmed and blank lines dropped; dates are the trimmed,
/// non-blank start/end strings of experiences, projects and education,
/// in that order.
#[derive(Debug, Clone)]
pub struct ResumeView<'a> {
    pub resume: &'a StructuredResumeData,
    pub entries: Vec<EntryView<'a>>,
    pub bullets: Vec<&'a str>,
    pub dates: Vec<&'a str>,
}

fn clean_bullets(description: &[String]) -> Vec<&str> {
    description
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .collect()
}

impl<'a> ResumeView<'a> {
    pub fn new(resume: &'a StructuredResumeData) -> Self {
        let mut entries = Vec::with_capacity(resume.experiences.len() + resume.projects.len());
        for experience in &resume.experiences {
            entries.push(EntryView {
                label: experience.label(),
                bullets: clean_bullets(&experience.description),
            });
        }
        for project in &resume.projects {
            entries.push(EntryView {
                label: project.label(),
                bullets: clean_bullets(&project.description),
            });
        }

        let bullets = entries.iter().flat_map(|e| e.bullets.iter().copied()).collect();

        let date_pairs = resume
            .experiences
            .iter()
            .map(|e| (&e.start_date, &e.end_date))
            .chain(resume.projects.iter().map(|p| (&p.start_date, &p.end_date)))
            .chain(resume.education.iter().map(|e| (&e.start_date, &e.end_date)));

        let mut dates = Vec::new();
        for (start, end) in date_pairs {
            dates.extend(present_str(start));
            dates.extend(present_str(end));
        }

        Self {
            resume,
            entries,
            bullets,
            dates,
        }
    }

    pub fn total_bullets(&self) -> usize {
        self.bullets.len()
    }
}
