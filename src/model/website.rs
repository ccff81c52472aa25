use serde::{Deserialize, Serialize};

/// Screens of the business-website configuration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebsiteStep {
    #[default]
    BusinessInfo,
    Template,
    Features,
    Launch,
}

impl WebsiteStep {
    pub const ALL: [WebsiteStep; 4] = [
        WebsiteStep::BusinessInfo,
        WebsiteStep::Template,
        WebsiteStep::Features,
        WebsiteStep::Launch,
    ];

    pub fn number(self) -> u8 {
        match self {
            WebsiteStep::BusinessInfo => 1,
            WebsiteStep::Template => 2,
            WebsiteStep::Features => 3,
            WebsiteStep::Launch => 4,
        }
    }

    pub fn next(self) -> Option<WebsiteStep> {
        match self {
            WebsiteStep::BusinessInfo => Some(WebsiteStep::Template),
            WebsiteStep::Template => Some(WebsiteStep::Features),
            WebsiteStep::Features => Some(WebsiteStep::Launch),
            WebsiteStep::Launch => None,
        }
    }

    pub fn previous(self) -> Option<WebsiteStep> {
        match self {
            WebsiteStep::BusinessInfo => None,
            WebsiteStep::Template => Some(WebsiteStep::BusinessInfo),
            WebsiteStep::Features => Some(WebsiteStep::Template),
            WebsiteStep::Launch => Some(WebsiteStep::Features),
        }
    }
}

impl std::fmt::Display for WebsiteStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WebsiteStep::BusinessInfo => "business_info",
            WebsiteStep::Template => "template",
            WebsiteStep::Features => "features",
            WebsiteStep::Launch => "launch",
        };
        f.write_str(name)
    }
}

/// Free-form answers collected across the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebsiteDetails {
    pub business_name: String,
    /// Industry slug, e.g. `"real-estate"`.
    pub industry: String,
    pub description: String,
    pub has_content: bool,
    pub additional_info: String,
    pub domain: String,
}

/// Complete state of one website wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebsiteState {
    pub step: WebsiteStep,
    pub niche: Option<String>,
    pub template: Option<String>,
    /// Selected features in the order they were switched on.
    pub features: Vec<String>,
    pub details: WebsiteDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebsiteDetailsUpdate {
    pub business_name: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub has_content: Option<bool>,
    pub additional_info: Option<String>,
    pub domain: Option<String>,
}

/// Transition events accepted by a website session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum WebsiteEvent {
    SetStep(WebsiteStep),
    UpdateDetails(WebsiteDetailsUpdate),
    SelectNiche(String),
    SelectTemplate(String),
    /// Switches a feature on if absent, off if present.
    ToggleFeature(String),
}

/// Final summary handed over when the wizard is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteSubmission {
    pub niche: Option<String>,
    pub template_id: String,
    pub template_title: String,
    pub price: u32,
    pub features: Vec<String>,
    pub details: WebsiteDetails,
}
