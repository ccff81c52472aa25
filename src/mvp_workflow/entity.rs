//! [`WorkflowEntity`] implementation for [`MvpState`]: the MVP wizard reducer.
//!
//! Every event is a shallow merge into one nested record or a plain replacement of the
//! step or status. Empty partial payloads produce an identical state.

use crate::framework::{StepPolicy, WorkflowEntity};
use crate::model::{
    Idea, IdeaUpdate, MvpEvent, MvpState, Payments, PaymentsUpdate, Preview, PreviewUpdate,
};

impl WorkflowEntity for MvpState {
    type Id = String;
    type StartParams = ();
    type Event = MvpEvent;
    type Context = StepPolicy;

    const KIND: &'static str = "mvp";

    fn start(_id: String, _params: ()) -> Result<Self, String> {
        Ok(Self::default())
    }

    fn reduce(&self, event: MvpEvent) -> Self {
        match event {
            MvpEvent::SetStep(step) => Self { step, ..self.clone() },
            MvpEvent::UpdateIdea(update) => Self {
                idea: merge_idea(&self.idea, update),
                ..self.clone()
            },
            MvpEvent::SetPreview(update) => Self {
                preview: merge_preview(&self.preview, update),
                ..self.clone()
            },
            MvpEvent::UpdatePayments(update) => Self {
                payments: merge_payments(self.payments, update),
                ..self.clone()
            },
            MvpEvent::SetStatus(status) => Self { status, ..self.clone() },
            MvpEvent::AddAudience(tag) => {
                let tag = tag.trim();
                if tag.is_empty() || self.idea.audience.iter().any(|a| a == tag) {
                    return self.clone();
                }
                let mut next = self.clone();
                next.idea.audience.push(tag.to_string());
                next
            }
            MvpEvent::RemoveAudience(tag) => {
                let mut next = self.clone();
                next.idea.audience.retain(|a| *a != tag);
                next
            }
        }
    }

    fn guard(&self, event: &MvpEvent, policy: &StepPolicy) -> Result<(), String> {
        match event {
            MvpEvent::SetStep(to) => policy.check(self.step, *to, self.step.next()),
            _ => Ok(()),
        }
    }
}

fn merge_idea(idea: &Idea, update: IdeaUpdate) -> Idea {
    Idea {
        name: update.name.unwrap_or_else(|| idea.name.clone()),
        description: update.description.unwrap_or_else(|| idea.description.clone()),
        audience: update.audience.map(dedup).unwrap_or_else(|| idea.audience.clone()),
        platform: update.platform.unwrap_or(idea.platform),
        attachments: update.attachments.unwrap_or_else(|| idea.attachments.clone()),
    }
}

fn merge_preview(preview: &Preview, update: PreviewUpdate) -> Preview {
    Preview {
        tier: update.tier.unwrap_or(preview.tier),
        access_token: update.access_token.unwrap_or_else(|| preview.access_token.clone()),
    }
}

fn merge_payments(payments: Payments, update: PaymentsUpdate) -> Payments {
    Payments {
        prototype: update.prototype.unwrap_or(payments.prototype),
        design: update.design.unwrap_or(payments.design),
        development: update.development.unwrap_or(payments.development),
    }
}

/// Keeps the first occurrence of each tag.
fn dedup(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BuildStatus, MvpStep, Platform, PreviewTier};

    fn idea_update() -> IdeaUpdate {
        IdeaUpdate::default()
    }

    #[test]
    fn test_defaults() {
        let state = MvpState::start("mvp_1".into(), ()).unwrap();
        assert_eq!(state.step, MvpStep::Submit);
        assert_eq!(state.idea.platform, Platform::Web);
        assert!(state.idea.audience.is_empty());
        assert_eq!(state.preview.tier, PreviewTier::Free);
        assert!(state.preview.access_token.is_none());
        assert_eq!(state.payments, Payments::default());
        assert_eq!(state.status, BuildStatus::Review);
    }

    #[test]
    fn test_disjoint_idea_updates_union() {
        let state = MvpState::default()
            .reduce(MvpEvent::UpdateIdea(IdeaUpdate { name: Some("Lumen".into()), ..idea_update() }))
            .reduce(MvpEvent::UpdateIdea(IdeaUpdate { platform: Some(Platform::Mobile), ..idea_update() }))
            .reduce(MvpEvent::UpdateIdea(IdeaUpdate {
                audience: Some(vec!["B2B".into(), "SMEs".into()]),
                ..idea_update()
            }));

        assert_eq!(
            state.idea,
            Idea {
                name: "Lumen".into(),
                description: String::new(),
                audience: vec!["B2B".into(), "SMEs".into()],
                platform: Platform::Mobile,
                attachments: Vec::new(),
            }
        );
        assert_eq!(state.step, MvpStep::Submit);
    }

    #[test]
    fn test_later_update_overwrites_same_field() {
        let state = MvpState::default()
            .reduce(MvpEvent::UpdateIdea(IdeaUpdate { name: Some("First".into()), ..idea_update() }))
            .reduce(MvpEvent::UpdateIdea(IdeaUpdate { name: Some("Second".into()), ..idea_update() }));
        assert_eq!(state.idea.name, "Second");
    }

    #[test]
    fn test_empty_payloads_are_noops() {
        let state = MvpState::default()
            .reduce(MvpEvent::UpdateIdea(IdeaUpdate { name: Some("Lumen".into()), ..idea_update() }))
            .reduce(MvpEvent::UpdatePayments(PaymentsUpdate { design: Some(true), ..Default::default() }));

        assert_eq!(state.reduce(MvpEvent::UpdateIdea(IdeaUpdate::default())), state);
        assert_eq!(state.reduce(MvpEvent::SetPreview(PreviewUpdate::default())), state);
        assert_eq!(state.reduce(MvpEvent::UpdatePayments(PaymentsUpdate::default())), state);
    }

    #[test]
    fn test_set_step_is_idempotent() {
        let once = MvpState::default().reduce(MvpEvent::SetStep(MvpStep::Tracking));
        let twice = once.reduce(MvpEvent::SetStep(MvpStep::Tracking));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_payment_flags_are_independent() {
        let state = MvpState::default()
            .reduce(MvpEvent::UpdatePayments(PaymentsUpdate { design: Some(true), ..Default::default() }))
            .reduce(MvpEvent::UpdatePayments(PaymentsUpdate { prototype: Some(true), ..Default::default() }));
        assert_eq!(state.payments, Payments { prototype: true, design: true, development: false });
    }

    #[test]
    fn test_free_preview_then_tracking() {
        let state = MvpState::default()
            .reduce(MvpEvent::SetPreview(PreviewUpdate::tier(PreviewTier::Free)))
            .reduce(MvpEvent::SetStep(MvpStep::Tracking));
        assert_eq!(state.preview.tier, PreviewTier::Free);
        assert_eq!(state.step, MvpStep::Tracking);
        assert!(state.preview.access_token.is_none());
    }

    #[test]
    fn test_preview_token_set_and_cleared() {
        let paid = MvpState::default().reduce(MvpEvent::SetPreview(PreviewUpdate {
            tier: Some(PreviewTier::Investor),
            access_token: Some(Some("pay_123".into())),
        }));
        assert!(paid.preview.is_purchased(PreviewTier::Investor));
        assert!(!paid.preview.is_purchased(PreviewTier::Interactive));

        let cleared = paid.reduce(MvpEvent::SetPreview(PreviewUpdate { tier: None, access_token: Some(None) }));
        assert_eq!(cleared.preview.tier, PreviewTier::Investor);
        assert!(cleared.preview.access_token.is_none());
    }

    #[test]
    fn test_audience_add_remove() {
        let state = MvpState::default()
            .reduce(MvpEvent::AddAudience("GenZ".into()))
            .reduce(MvpEvent::AddAudience("  B2C ".into()))
            .reduce(MvpEvent::AddAudience("GenZ".into()))
            .reduce(MvpEvent::AddAudience("   ".into()));
        assert_eq!(state.idea.audience, vec!["GenZ".to_string(), "B2C".to_string()]);

        let state = state.reduce(MvpEvent::RemoveAudience("GenZ".into()));
        assert_eq!(state.idea.audience, vec!["B2C".to_string()]);
        assert_eq!(state.reduce(MvpEvent::RemoveAudience("absent".into())), state);
    }

    #[test]
    fn test_audience_replacement_drops_duplicates() {
        let state = MvpState::default().reduce(MvpEvent::UpdateIdea(IdeaUpdate {
            audience: Some(vec!["B2B".into(), "B2C".into(), "B2B".into()]),
            ..idea_update()
        }));
        assert_eq!(state.idea.audience, vec!["B2B".to_string(), "B2C".to_string()]);
    }

    #[test]
    fn test_guard_respects_policy() {
        let state = MvpState::default();
        let skip = MvpEvent::SetStep(MvpStep::Delivery);
        assert!(state.guard(&skip, &StepPolicy::Permissive).is_ok());
        assert!(state.guard(&skip, &StepPolicy::ForwardOnly).is_err());
        assert!(state.guard(&MvpEvent::SetStep(MvpStep::Preview), &StepPolicy::ForwardOnly).is_ok());
        assert!(state.guard(&MvpEvent::SetStatus(BuildStatus::Ready), &StepPolicy::ForwardOnly).is_ok());
    }
}
