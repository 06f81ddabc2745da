//! Fixed milestone and task templates seeded at project creation.
//!
//! Phase 1 milestones come with their task checklists; Phase 2 and Phase 3
//! are seeded as milestone skeletons whose tasks arrive when those phases
//! open up.

use crate::Phase;

#[derive(Debug, Clone, Copy)]
pub struct MilestoneTemplate {
    pub name: &'static str,
    pub order_index: i32,
    pub tasks: &'static [TaskTemplate],
}

#[derive(Debug, Clone, Copy)]
pub struct TaskTemplate {
    pub name: &'static str,
    pub order_index: i32,
}

const fn t(name: &'static str, order_index: i32) -> TaskTemplate {
    TaskTemplate { name, order_index }
}

pub const PHASE1_MILESTONES: &[MilestoneTemplate] = &[
    MilestoneTemplate {
        name: "Idea Validation",
        order_index: 1,
        tasks: &[
            t("Describe Your SaaS Idea", 1),
            t("Validate via Lightweight Survey", 2),
            t("Conduct 5 User Interviews", 3),
            t("Summarize Key Insights", 4),
        ],
    },
    MilestoneTemplate {
        name: "Competitor & Market Research",
        order_index: 2,
        tasks: &[
            t("Research Top 5 Competitors on G2", 1),
            t("Research Top 5 Competitors on Capterra", 2),
            t("Scan Reddit with Gummy Search", 3),
            t("Analyze Trends on Google Trends", 4),
            t("Summarize Market Gaps & Opportunities", 5),
        ],
    },
    MilestoneTemplate {
        name: "Define Your SaaS Solution",
        order_index: 3,
        tasks: &[
            t("Write Problem Statement", 1),
            t("Write Unique Value Proposition (UVP)", 2),
            t("List Must-Have Features for MVP", 3),
            t("Create User Persona(s)", 4),
        ],
    },
    MilestoneTemplate {
        name: "Select Your Tool Stack",
        order_index: 4,
        tasks: &[
            t("Confirm Frontend Builder", 1),
            t("Confirm Backend / Database", 2),
            t("Confirm Automation Tool", 3),
            t("Confirm Payment Processor & Deployment", 4),
        ],
    },
];

pub const PHASE2_MILESTONES: &[MilestoneTemplate] = &[
    MilestoneTemplate { name: "Backend Setup", order_index: 1, tasks: &[] },
    MilestoneTemplate { name: "Frontend MVP", order_index: 2, tasks: &[] },
    MilestoneTemplate { name: "Authentication & User Roles", order_index: 3, tasks: &[] },
    MilestoneTemplate { name: "Automations & Workflows", order_index: 4, tasks: &[] },
    MilestoneTemplate { name: "Deployment & Testing", order_index: 5, tasks: &[] },
];

pub const PHASE3_MILESTONES: &[MilestoneTemplate] = &[
    MilestoneTemplate { name: "Pre-Launch Preparedness", order_index: 1, tasks: &[] },
    MilestoneTemplate { name: "Organic Marketing", order_index: 2, tasks: &[] },
    MilestoneTemplate { name: "Paid & Affiliate Marketing", order_index: 3, tasks: &[] },
    MilestoneTemplate { name: "Launch Day & Post-Launch", order_index: 4, tasks: &[] },
];

/// Milestone templates for one phase.
#[must_use]
pub const fn phase_template(phase: Phase) -> &'static [MilestoneTemplate] {
    match phase {
        Phase::One => PHASE1_MILESTONES,
        Phase::Two => PHASE2_MILESTONES,
        Phase::Three => PHASE3_MILESTONES,
    }
}
