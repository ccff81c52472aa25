use serde::{Deserialize, Serialize};

/// The four screens of the MVP wizard, in their nominal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MvpStep {
    #[default]
    Submit,
    Preview,
    Tracking,
    Delivery,
}

impl MvpStep {
    pub const ALL: [MvpStep; 4] = [
        MvpStep::Submit,
        MvpStep::Preview,
        MvpStep::Tracking,
        MvpStep::Delivery,
    ];

    /// 1-based position shown by the stepper.
    pub fn number(self) -> u8 {
        match self {
            MvpStep::Submit => 1,
            MvpStep::Preview => 2,
            MvpStep::Tracking => 3,
            MvpStep::Delivery => 4,
        }
    }

    /// The step after this one, if any.
    pub fn next(self) -> Option<MvpStep> {
        match self {
            MvpStep::Submit => Some(MvpStep::Preview),
            MvpStep::Preview => Some(MvpStep::Tracking),
            MvpStep::Tracking => Some(MvpStep::Delivery),
            MvpStep::Delivery => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MvpStep::Submit => "submit",
            MvpStep::Preview => "preview",
            MvpStep::Tracking => "tracking",
            MvpStep::Delivery => "delivery",
        }
    }
}

impl std::fmt::Display for MvpStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target platform of the submitted product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mobile,
    #[default]
    Web,
    Desktop,
    Cross,
}

/// Package level unlocking different amounts of preview material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewTier {
    #[default]
    Free,
    Interactive,
    Investor,
}

impl PreviewTier {
    pub fn is_paid(self) -> bool {
        !matches!(self, PreviewTier::Free)
    }
}

/// Overall progress of the build behind the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    #[default]
    Review,
    Design,
    Development,
    Ready,
}

/// The idea description collected on the first screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Idea {
    pub name: String,
    pub description: String,
    /// Audience tags in insertion order, without duplicates.
    pub audience: Vec<String>,
    pub platform: Platform,
    /// References to uploaded files.
    pub attachments: Vec<String>,
}

/// The selected preview package and the token proving it was paid for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preview {
    pub tier: PreviewTier,
    pub access_token: Option<String>,
}

impl Preview {
    /// True when `tier` is the selected package and an access token is present.
    pub fn is_purchased(&self, tier: PreviewTier) -> bool {
        self.tier == tier && self.access_token.is_some()
    }
}

/// Independent billing checkpoints, one flag per milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Payments {
    pub prototype: bool,
    pub design: bool,
    pub development: bool,
}

/// Complete state of one MVP wizard session.
///
/// # Session Host
/// This struct implements [`WorkflowEntity`](crate::framework::WorkflowEntity); see
/// [`mvp_workflow::entity`](crate::mvp_workflow::entity) for the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MvpState {
    pub step: MvpStep,
    pub idea: Idea,
    pub preview: Preview,
    pub payments: Payments,
    pub status: BuildStatus,
}

// --- Partial payloads (None = leave unchanged) ---

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdeaUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub audience: Option<Vec<String>>,
    pub platform: Option<Platform>,
    pub attachments: Option<Vec<String>>,
}

impl IdeaUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.audience.is_none()
            && self.platform.is_none()
            && self.attachments.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreviewUpdate {
    pub tier: Option<PreviewTier>,
    /// `Some(None)` clears the token.
    pub access_token: Option<Option<String>>,
}

impl PreviewUpdate {
    pub fn tier(tier: PreviewTier) -> Self {
        Self { tier: Some(tier), access_token: None }
    }

    pub fn is_empty(&self) -> bool {
        self.tier.is_none() && self.access_token.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentsUpdate {
    pub prototype: Option<bool>,
    pub design: Option<bool>,
    pub development: Option<bool>,
}

impl PaymentsUpdate {
    pub fn is_empty(&self) -> bool {
        self.prototype.is_none() && self.design.is_none() && self.development.is_none()
    }
}

/// Transition events accepted by an MVP session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum MvpEvent {
    SetStep(MvpStep),
    UpdateIdea(IdeaUpdate),
    SetPreview(PreviewUpdate),
    UpdatePayments(PaymentsUpdate),
    SetStatus(BuildStatus),
    /// Append one audience tag; blank or duplicate tags are ignored.
    AddAudience(String),
    RemoveAudience(String),
}

impl MvpEvent {
    /// Name of the event kind, for logging.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SetStep(_) => "set_step",
            Self::UpdateIdea(_) => "update_idea",
            Self::SetPreview(_) => "set_preview",
            Self::UpdatePayments(_) => "update_payments",
            Self::SetStatus(_) => "set_status",
            Self::AddAudience(_) => "add_audience",
            Self::RemoveAudience(_) => "remove_audience",
        }
    }
}
