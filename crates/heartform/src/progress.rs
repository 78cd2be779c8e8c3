//! Step indicator derived from form completion

use heartform_rules::step_index;
use serde::Serialize;

/// Display state of one progress step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

/// Numbered steps shown above the form
///
/// Steps before the reached index are completed and the step at it is
/// active. Once every required field is filled the reached index equals
/// the step count, so all steps are completed and none is active.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSteps {
    ratio: f64,
    reached: usize,
    step_count: usize,
}

impl ProgressSteps {
    pub fn new(ratio: f64, step_count: usize) -> Self {
        Self {
            ratio,
            reached: step_index(ratio, step_count),
            step_count,
        }
    }

    /// Completion ratio in `[0, 1]`
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn percent(&self) -> f64 {
        self.ratio * 100.0
    }

    /// Number of completed steps
    pub fn reached(&self) -> usize {
        self.reached
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn state(&self, index: usize) -> StepState {
        if index < self.reached {
            StepState::Completed
        } else if index == self.reached {
            StepState::Active
        } else {
            StepState::Pending
        }
    }

    pub fn states(&self) -> impl Iterator<Item = StepState> + '_ {
        (0..self.step_count).map(|index| self.state(index))
    }

    pub fn is_complete(&self) -> bool {
        self.reached == self.step_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::StepState::{Active, Completed, Pending};

    #[test]
    fn test_empty_form_first_step_active() {
        let steps = ProgressSteps::new(0.0, 4);
        assert_eq!(steps.states().collect::<Vec<_>>(), vec![Active, Pending, Pending, Pending]);
    }

    #[test]
    fn test_half_filled() {
        let steps = ProgressSteps::new(7.0 / 13.0, 4);
        assert_eq!(steps.reached(), 2);
        assert_eq!(steps.states().collect::<Vec<_>>(), vec![Completed, Completed, Active, Pending]);
    }

    #[test]
    fn test_complete_has_no_active_step() {
        let steps = ProgressSteps::new(1.0, 4);
        assert!(steps.is_complete());
        assert!(steps.states().all(|state| state == Completed));
        assert_eq!(steps.percent(), 100.0);
    }
}
