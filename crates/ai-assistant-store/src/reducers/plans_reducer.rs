//! Plans Reducer

use crate::actions::Action;
use crate::domain_models::Plan;

/// Reducer for the plans list
pub fn reduce(plans: Vec<Plan>, action: &Action) -> Vec<Plan> {
    match action {
        Action::SetPlans { plans: next } => {
            log::debug!("Plans set: {} plans", next.len());
            next.clone()
        }
        _ => plans,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_plans_replaces_list() {
        let before = vec![Plan::new("jetpack_free")];
        let after = vec![Plan::new("jetpack_ai_monthly"), Plan::new("jetpack_ai_yearly")];
        let plans = reduce(before, &Action::set_plans(after.clone()));
        assert_eq!(plans, after);
    }

    #[test]
    fn test_set_plans_empty() {
        let plans = reduce(vec![Plan::new("jetpack_free")], &Action::set_plans(Vec::new()));
        assert!(plans.is_empty());
    }

    #[test]
    fn test_other_actions_keep_plans() {
        let before = vec![Plan::new("jetpack_free")];
        let plans = reduce(before.clone(), &Action::request_ai_assistant_feature());
        assert_eq!(plans, before);
    }
}
