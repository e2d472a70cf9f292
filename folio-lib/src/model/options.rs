//! Fixed option lists offered by the row editor.

/// Reviewer placeholder meaning "nobody assigned yet".
pub const UNASSIGNED_REVIEWER: &str = "Assign reviewer";

/// Section types offered in the type picker.
pub const SECTION_TYPES: [&str; 8] = [
    "Table of Contents",
    "Executive Summary",
    "Technical Approach",
    "Design",
    "Capabilities",
    "Focus Documents",
    "Narrative",
    "Cover Page",
];

/// Reviewers offered in the reviewer picker.
pub const REVIEWERS: [&str; 3] = ["Eddie Lake", "Jamik Tashpulatov", "Emily Whalen"];
