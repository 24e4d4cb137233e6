use sakubrain_core::model::idea::{
    Idea, IdeaCategory, IdeaImpact, IdeaStage, IdeaValidation, NewIdea, ValidationStep,
};

fn idea_with(validation: IdeaValidation) -> Idea {
    Idea::with_id(
        "idea-1",
        NewIdea {
            title: "Stage check".to_string(),
            description: String::new(),
            category: IdeaCategory::SaaS,
            impact: IdeaImpact::Low,
            validation,
            archived: false,
        },
        0,
    )
    .unwrap()
}

fn expected_stage(count: u32) -> IdeaStage {
    match count {
        0 => IdeaStage::Idea,
        1 | 2 => IdeaStage::Validation,
        3 | 4 => IdeaStage::Mvp,
        _ => IdeaStage::Revenue,
    }
}

#[test]
fn every_flag_combination_maps_to_one_stage() {
    for bits in 0u8..64 {
        let validation = IdeaValidation::from_bits(bits);
        let idea = idea_with(validation);
        assert_eq!(
            idea.stage(),
            expected_stage(bits.count_ones()),
            "bits {bits:06b}"
        );
        assert_eq!(IdeaStage::from_validation(&validation), idea.stage());
    }
}

#[test]
fn stage_boundaries_follow_checklist_count() {
    assert_eq!(idea_with(IdeaValidation::from_bits(0b000011)).stage(), IdeaStage::Validation);
    assert_eq!(idea_with(IdeaValidation::from_bits(0b000111)).stage(), IdeaStage::Mvp);
    assert_eq!(idea_with(IdeaValidation::from_bits(0b011111)).stage(), IdeaStage::Revenue);
    assert_eq!(idea_with(IdeaValidation::from_bits(0b111111)).stage(), IdeaStage::Revenue);
}

#[test]
fn toggling_a_step_twice_restores_flags_and_stage() {
    for bits in [0u8, 0b000001, 0b010101, 0b111110, 0b111111] {
        for step in ValidationStep::ALL {
            let mut idea = idea_with(IdeaValidation::from_bits(bits));
            let before_validation = *idea.validation();
            let before_stage = idea.stage();

            idea.toggle_validation_step(step);
            assert_ne!(idea.validation().get(step), before_validation.get(step));

            idea.toggle_validation_step(step);
            assert_eq!(*idea.validation(), before_validation);
            assert_eq!(idea.stage(), before_stage);
        }
    }
}

#[test]
fn stage_does_not_depend_on_toggle_order() {
    let forward = {
        let mut idea = idea_with(IdeaValidation::default());
        for step in &ValidationStep::ALL[..4] {
            idea.toggle_validation_step(*step);
        }
        idea
    };
    let backward = {
        let mut idea = idea_with(IdeaValidation::default());
        for step in ValidationStep::ALL[..4].iter().rev() {
            idea.toggle_validation_step(*step);
        }
        idea
    };

    assert_eq!(forward.validation(), backward.validation());
    assert_eq!(forward.stage(), IdeaStage::Mvp);
    assert_eq!(backward.stage(), IdeaStage::Mvp);
}

#[test]
fn climbing_the_checklist_walks_through_every_stage() {
    let mut idea = idea_with(IdeaValidation::default());
    let mut seen = vec![idea.stage()];
    for step in ValidationStep::ALL {
        idea.toggle_validation_step(step);
        seen.push(idea.stage());
    }
    assert_eq!(
        seen,
        vec![
            IdeaStage::Idea,
            IdeaStage::Validation,
            IdeaStage::Validation,
            IdeaStage::Mvp,
            IdeaStage::Mvp,
            IdeaStage::Revenue,
            IdeaStage::Revenue,
        ]
    );
    assert_eq!(idea.validation_progress(), 100);
}

#[test]
fn validated_threshold_uses_rounded_progress() {
    let two = idea_with(IdeaValidation::from_bits(0b000011));
    let three = idea_with(IdeaValidation::from_bits(0b000111));
    assert_eq!(two.validation_progress(), 33);
    assert!(!two.is_validated(50));
    assert!(three.is_validated(50));
    assert!(two.is_validated(33));
}
