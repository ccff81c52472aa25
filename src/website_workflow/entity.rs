//! [`WorkflowEntity`] implementation for [`WebsiteState`].

use crate::catalog::{website_template, WEBSITE_FEATURES};
use crate::framework::{StepPolicy, WorkflowEntity};
use crate::model::{WebsiteDetails, WebsiteDetailsUpdate, WebsiteEvent, WebsiteState};

impl WorkflowEntity for WebsiteState {
    type Id = String;
    /// Optional niche picked before the wizard opened.
    type StartParams = Option<String>;
    type Event = WebsiteEvent;
    type Context = StepPolicy;

    const KIND: &'static str = "website";

    fn start(_id: String, niche: Option<String>) -> Result<Self, String> {
        if let Some(niche) = &niche {
            if crate::catalog::niche(niche).is_none() {
                return Err(format!("Unknown niche: {niche}"));
            }
        }
        Ok(Self { niche, ..Self::default() })
    }

    fn reduce(&self, event: WebsiteEvent) -> Self {
        let mut next = self.clone();
        match event {
            WebsiteEvent::SetStep(step) => next.step = step,
            WebsiteEvent::UpdateDetails(update) => next.details = merge_details(&self.details, update),
            WebsiteEvent::SelectNiche(niche) => {
                let keeps_template = next
                    .template
                    .as_deref()
                    .and_then(website_template)
                    .is_some_and(|t| t.niche_id == niche);
                if !keeps_template {
                    next.template = None;
                }
                next.niche = Some(niche);
            }
            WebsiteEvent::SelectTemplate(template) => next.template = Some(template),
            WebsiteEvent::ToggleFeature(feature) => {
                if let Some(pos) = next.features.iter().position(|f| *f == feature) {
                    next.features.remove(pos);
                } else {
                    next.features.push(feature);
                }
            }
        }
        next
    }

    fn guard(&self, event: &WebsiteEvent, policy: &StepPolicy) -> Result<(), String> {
        match event {
            // "Previous" is part of this wizard, so one step back is always allowed.
            WebsiteEvent::SetStep(to) if Some(*to) == self.step.previous() => Ok(()),
            WebsiteEvent::SetStep(to) => policy.check(self.step, *to, self.step.next()),
            WebsiteEvent::SelectNiche(niche) if crate::catalog::niche(niche).is_none() => {
                Err(format!("Unknown niche: {niche}"))
            }
            WebsiteEvent::SelectTemplate(id) => match website_template(id) {
                None => Err(format!("Unknown template: {id}")),
                Some(t) if self.niche.as_deref().is_some_and(|n| n != t.niche_id) => {
                    Err(format!("Template {id} does not belong to niche {}", t.niche_id))
                }
                Some(_) => Ok(()),
            },
            WebsiteEvent::ToggleFeature(feature) if !WEBSITE_FEATURES.contains(&feature.as_str()) => {
                Err(format!("Unknown feature: {feature}"))
            }
            _ => Ok(()),
        }
    }
}

fn merge_details(details: &WebsiteDetails, update: WebsiteDetailsUpdate) -> WebsiteDetails {
    WebsiteDetails {
        business_name: update.business_name.unwrap_or_else(|| details.business_name.clone()),
        industry: update.industry.unwrap_or_else(|| details.industry.clone()),
        description: update.description.unwrap_or_else(|| details.description.clone()),
        has_content: update.has_content.unwrap_or(details.has_content),
        additional_info: update.additional_info.unwrap_or_else(|| details.additional_info.clone()),
        domain: update.domain.unwrap_or_else(|| details.domain.clone()),
    }
}
