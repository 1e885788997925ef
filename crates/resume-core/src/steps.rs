use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One page of the wizard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Personal,
    Experience,
    Education,
    Skills,
    Target,
    Preview,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Personal,
        Step::Experience,
        Step::Education,
        Step::Skills,
        Step::Target,
        Step::Preview,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Step::Personal => "personal",
            Step::Experience => "experience",
            Step::Education => "education",
            Step::Skills => "skills",
            Step::Target => "target",
            Step::Preview => "preview",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Step::Personal => "Personal Info",
            Step::Experience => "Military Experience",
            Step::Education => "Education",
            Step::Skills => "Skills",
            Step::Target => "Target Job",
            Step::Preview => "Preview",
        }
    }
}

/// Linear wizard navigation over the fixed step sequence.
///
/// Every operation is total: positions are clamped to the sequence ends and
/// forward jumps are refused, so `0 <= position < len` always holds.
#[derive(Debug, Clone)]
pub struct StepController {
    steps: Vec<Step>,
    position: usize,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepController {
    pub fn new() -> Self {
        Self {
            steps: Step::ALL.to_vec(),
            position: 0,
        }
    }

    pub fn current(&self) -> Step {
        self.steps[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.steps.len()
    }

    /// Move to the next step; no-op when already at the last step.
    pub fn advance(&mut self) {
        self.position = (self.position + 1).min(self.steps.len() - 1);
    }

    /// Move to the previous step; no-op when already at the first step.
    pub fn retreat(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Jump to an already-visited step. Forward jumps are refused to force
    /// linear completion; returns whether the position changed.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index > self.position {
            return false;
        }
        self.position = index;
        true
    }
}
