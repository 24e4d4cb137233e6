use sakubrain_core::model::idea::{IdeaCategory, IdeaImpact, IdeaStage, IdeaValidation, NewIdea};
use sakubrain_core::repo::idea_repo::InMemoryIdeaRepository;
use sakubrain_core::service::idea_service::{
    calculate_validation_progress, stage_color, IdeaService, IdeaServiceError,
};
use sakubrain_core::{LatencyProfile, ModelError, RepoError};

fn service() -> IdeaService<InMemoryIdeaRepository> {
    IdeaService::new(InMemoryIdeaRepository::seeded(LatencyProfile::instant()).unwrap())
}

fn new_idea(title: &str, bits: u8) -> NewIdea {
    NewIdea {
        title: title.to_string(),
        description: "Habit-forming budgeting for students.".to_string(),
        category: IdeaCategory::FinTech,
        impact: IdeaImpact::Medium,
        validation: IdeaValidation::from_bits(bits),
        archived: false,
    }
}

#[test]
fn archived_ideas_leave_list_and_stats_but_stay_addressable() {
    let service = service();
    let archived = service.archive_idea("2").unwrap();
    assert!(archived.archived);

    let ids: Vec<String> = service
        .all_ideas()
        .unwrap()
        .into_iter()
        .map(|idea| idea.id)
        .collect();
    assert_eq!(ids, vec!["1", "3", "4"]);

    let stats = service.idea_stats().unwrap();
    assert_eq!(stats.total_ideas, 3);
    assert_eq!(stats.validated_ideas, 1);
    assert_eq!(stats.ideas_by_stage.get(&IdeaStage::Revenue), Some(&1));

    let stored = service.idea_by_id("2").unwrap().unwrap();
    assert!(stored.archived);
    assert_eq!(stored.stage(), IdeaStage::Revenue);

    let restored = service.unarchive_idea("2").unwrap();
    assert!(!restored.archived);
    assert_eq!(service.all_ideas().unwrap().len(), 4);
    assert_eq!(service.idea_stats().unwrap().total_ideas, 4);
}

#[test]
fn mutations_on_unknown_ids_return_not_found() {
    let service = service();
    let expected = RepoError::NotFound {
        entity: "idea",
        id: "nope".to_string(),
    };
    assert_eq!(service.archive_idea("nope").unwrap_err(), expected);
    assert_eq!(service.unarchive_idea("nope").unwrap_err(), expected);
    assert_eq!(
        service.toggle_validation_step("nope", "mvpBuilt").unwrap_err(),
        IdeaServiceError::Repo(expected)
    );
}

#[test]
fn delete_removes_known_ids_and_ignores_unknown_ones() {
    let service = service();
    service.delete_idea("nope").unwrap();
    assert_eq!(service.all_ideas().unwrap().len(), 4);

    service.delete_idea("3").unwrap();
    assert!(service.idea_by_id("3").unwrap().is_none());
    assert_eq!(service.all_ideas().unwrap().len(), 3);
}

#[test]
fn added_idea_gets_id_timestamp_and_derived_stage() {
    let service = service();
    let idea = service.add_idea(new_idea("Student budget coach", 0b000111)).unwrap();

    assert_eq!(idea.id.len(), 36);
    assert!(idea.created_at > 0);
    assert_eq!(idea.stage(), IdeaStage::Mvp);
    assert_eq!(idea.validation_progress(), 50);
    assert_eq!(service.idea_by_id(&idea.id).unwrap(), Some(idea));
    assert_eq!(service.all_ideas().unwrap().len(), 5);
}

#[test]
fn added_idea_with_blank_title_is_rejected() {
    let service = service();
    let err = service.add_idea(new_idea("   ", 0)).unwrap_err();
    assert_eq!(err, IdeaServiceError::Model(ModelError::BlankField("title")));
    assert_eq!(service.all_ideas().unwrap().len(), 4);
}

#[test]
fn progress_and_stage_color_helpers() {
    assert_eq!(calculate_validation_progress(&IdeaValidation::default()), 0);
    assert_eq!(calculate_validation_progress(&IdeaValidation::from_bits(0b000001)), 17);
    assert_eq!(calculate_validation_progress(&IdeaValidation::from_bits(0b011111)), 83);
    assert_eq!(calculate_validation_progress(&IdeaValidation::from_bits(0b111111)), 100);

    assert_eq!(stage_color(IdeaStage::Idea), "bg-slate-500");
    assert_eq!(stage_color(IdeaStage::Validation), "bg-blue-500");
    assert_eq!(stage_color(IdeaStage::Mvp), "bg-amber-500");
    assert_eq!(stage_color(IdeaStage::Revenue), "bg-emerald-500");
}
