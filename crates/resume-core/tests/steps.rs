use resume_core::{Step, StepController};

#[test]
fn starts_on_personal_info() {
    let controller = StepController::new();
    assert_eq!(controller.current(), Step::Personal);
    assert_eq!(controller.position(), 0);
    assert!(controller.is_first());
}

#[test]
fn advance_clamps_at_last_step() {
    let mut controller = StepController::new();
    for _ in 0..20 {
        controller.advance();
    }
    assert_eq!(controller.current(), Step::Preview);
    assert_eq!(controller.position(), controller.len() - 1);
    assert!(controller.is_last());
}

#[test]
fn retreat_clamps_at_first_step() {
    let mut controller = StepController::new();
    controller.advance();
    for _ in 0..20 {
        controller.retreat();
    }
    assert_eq!(controller.position(), 0);
}

#[test]
fn position_stays_in_bounds_under_any_sequence() {
    let mut controller = StepController::new();
    // A scripted walk mixing both directions, including runs past each end.
    let script = [1, 1, 1, -1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, 1];
    for delta in script {
        if delta > 0 {
            controller.advance();
        } else {
            controller.retreat();
        }
        assert!(controller.position() < controller.len());
    }
}

#[test]
fn jump_back_is_allowed() {
    let mut controller = StepController::new();
    controller.advance();
    controller.advance();
    controller.advance();
    assert!(controller.jump_to(1));
    assert_eq!(controller.current(), Step::Experience);
}

#[test]
fn forward_jump_is_a_no_op() {
    let mut controller = StepController::new();
    controller.advance();
    let before = controller.position();
    assert!(!controller.jump_to(4));
    assert_eq!(controller.position(), before);
    assert_eq!(controller.current(), Step::Experience);
}

#[test]
fn step_ids_follow_display_order() {
    let ids: Vec<&str> = Step::ALL.iter().map(Step::id).collect();
    assert_eq!(
        ids,
        vec![
            "personal",
            "experience",
            "education",
            "skills",
            "target",
            "preview"
        ]
    );
}
