use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, Phase};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub primary_keyword: String,
    pub project_type: ProjectType,
    pub owner_id: String,
    pub use_community: bool,
    pub community_choice: CommunityChoice,
    pub community_url: Option<String>,
    /// Selected tool stack from the creation wizard, stored as JSON.
    pub tools: ToolSelections,
    pub phase1_complete: i32,
    pub phase2_complete: i32,
    pub phase3_complete: i32,
    pub overall_complete: i32,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Stored completion percentage for one phase.
    #[must_use]
    pub const fn phase_completion(&self, phase: Phase) -> i32 {
        match phase {
            Phase::One => self.phase1_complete,
            Phase::Two => self.phase2_complete,
            Phase::Three => self.phase3_complete,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ProjectType {
    #[default]
    Blank,
    Marketplace,
    #[serde(rename = "Micro-SaaS")]
    MicroSaas,
    B2B,
    B2C,
}

impl ProjectType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "Blank",
            Self::Marketplace => "Marketplace",
            Self::MicroSaas => "Micro-SaaS",
            Self::B2B => "B2B",
            Self::B2C => "B2C",
        }
    }
}

impl std::str::FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Blank" => Ok(Self::Blank),
            "Marketplace" => Ok(Self::Marketplace),
            "Micro-SaaS" => Ok(Self::MicroSaas),
            "B2B" => Ok(Self::B2B),
            "B2C" => Ok(Self::B2C),
            _ => Err(DomainError::InvalidProjectType(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CommunityChoice {
    #[default]
    None,
    Skool,
    Whop,
}

impl CommunityChoice {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Skool => "Skool",
            Self::Whop => "Whop",
        }
    }
}

impl std::str::FromStr for CommunityChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Skool" => Ok(Self::Skool),
            "Whop" => Ok(Self::Whop),
            _ => Err(DomainError::InvalidCommunityChoice(s.to_owned())),
        }
    }
}

/// Tool stack chosen in step 2 of the creation wizard.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ToolSelections {
    pub frontend: Vec<String>,
    pub backend: String,
    pub automation: Vec<String>,
    pub payment: String,
    pub deployment: String,
}

/// Everything the creation wizard collects before the final submit.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProjectInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub primary_keyword: String,
    #[serde(default)]
    pub project_type: ProjectType,
    #[serde(default)]
    pub use_community: bool,
    #[serde(default)]
    pub community_choice: CommunityChoice,
    #[serde(default)]
    pub community_url: Option<String>,
    pub tools: ToolSelections,
}

impl NewProjectInput {
    /// Wizard validation: step 1 requires name and keyword, step 2 bounds the
    /// tool selections. Mirrors what the continue button gates on.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("project name must not be empty".into()));
        }
        if self.primary_keyword.trim().is_empty() {
            return Err(DomainError::InvalidInput("primary keyword must not be empty".into()));
        }
        if self.tools.frontend.is_empty() || self.tools.frontend.len() > crate::MAX_FRONTEND_TOOLS {
            return Err(DomainError::InvalidInput(format!(
                "select between 1 and {} frontend tools",
                crate::MAX_FRONTEND_TOOLS
            )));
        }
        if self.tools.backend.is_empty() {
            return Err(DomainError::InvalidInput("select a backend".into()));
        }
        if self.tools.automation.is_empty() {
            return Err(DomainError::InvalidInput("select at least one automation tool".into()));
        }
        if self.tools.payment.is_empty() {
            return Err(DomainError::InvalidInput("select a payment processor".into()));
        }
        if self.tools.deployment.is_empty() {
            return Err(DomainError::InvalidInput("select a deployment target".into()));
        }
        Ok(())
    }
}
