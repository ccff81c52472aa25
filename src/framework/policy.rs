//! Step transition policy shared by all wizards.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How strictly a host treats explicit step changes.
///
/// Reducers always apply a step change as given. The policy is consulted by
/// [`WorkflowEntity::guard`](super::WorkflowEntity::guard) before the event reaches the
/// reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPolicy {
    /// Any step may follow any other step.
    #[default]
    Permissive,
    /// Only staying put or moving to the immediate next step is allowed.
    ForwardOnly,
}

impl StepPolicy {
    /// Checks a move from `from` to `to`, where `next` is the step after `from`.
    pub fn check<S>(self, from: S, to: S, next: Option<S>) -> Result<(), String>
    where
        S: PartialEq + Copy + Display,
    {
        match self {
            StepPolicy::Permissive => Ok(()),
            StepPolicy::ForwardOnly if to == from || Some(to) == next => Ok(()),
            StepPolicy::ForwardOnly => Err(format!("step {from} cannot move to {to}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MvpStep;

    #[test]
    fn test_permissive_allows_any_jump() {
        let policy = StepPolicy::Permissive;
        assert!(policy.check(MvpStep::Submit, MvpStep::Delivery, MvpStep::Submit.next()).is_ok());
        assert!(policy.check(MvpStep::Tracking, MvpStep::Submit, MvpStep::Tracking.next()).is_ok());
    }

    #[test]
    fn test_forward_only() {
        let policy = StepPolicy::ForwardOnly;
        assert!(policy.check(MvpStep::Submit, MvpStep::Preview, MvpStep::Submit.next()).is_ok());
        assert!(policy.check(MvpStep::Preview, MvpStep::Preview, MvpStep::Preview.next()).is_ok());

        let err = policy.check(MvpStep::Submit, MvpStep::Delivery, MvpStep::Submit.next()).unwrap_err();
        assert_eq!(err, "step submit cannot move to delivery");
        assert!(policy.check(MvpStep::Tracking, MvpStep::Submit, MvpStep::Tracking.next()).is_err());
    }
}
