//! Requirements a website session must meet before leaving each step.

use crate::model::{WebsiteState, WebsiteStep};

/// Returns the unmet requirements for leaving the current step, or `Ok` when
/// the wizard may move on.
pub fn step_requirements(state: &WebsiteState) -> Result<(), Vec<&'static str>> {
    let mut missing = Vec::new();
    match state.step {
        WebsiteStep::BusinessInfo => {
            let details = &state.details;
            if details.business_name.trim().is_empty() {
                missing.push("Business name is required");
            }
            if details.industry.trim().is_empty() {
                missing.push("Industry is required");
            }
            if details.description.trim().is_empty() {
                missing.push("Business description is required");
            }
        }
        WebsiteStep::Template => {
            if state.template.is_none() {
                missing.push("Select a template to continue");
            }
        }
        WebsiteStep::Features | WebsiteStep::Launch => {}
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WebsiteDetails;

    #[test]
    fn test_business_info_requirements() {
        let missing = step_requirements(&WebsiteState::default()).unwrap_err();
        assert_eq!(missing.len(), 3);

        let state = WebsiteState {
            details: WebsiteDetails {
                business_name: "Harbor Dental".into(),
                industry: "healthcare".into(),
                description: "Family dentistry".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(step_requirements(&state).is_ok());
    }

    #[test]
    fn test_template_step_needs_selection() {
        let mut state = WebsiteState { step: WebsiteStep::Template, ..Default::default() };
        assert_eq!(step_requirements(&state), Err(vec!["Select a template to continue"]));

        state.template = Some("booking-1".into());
        assert!(step_requirements(&state).is_ok());

        let features = WebsiteState { step: WebsiteStep::Features, ..Default::default() };
        assert!(step_requirements(&features).is_ok());
    }
}
