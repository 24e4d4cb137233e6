use sakubrain_core::model::habit::{Habit, HabitCategory, NewHabit};
use sakubrain_core::model::idea::{
    Idea, IdeaCategory, IdeaImpact, IdeaStage, IdeaValidation, NewIdea,
};
use sakubrain_core::model::learning::{Book, BookCategory, NewBook, NewSkill, Skill, SkillCategory};
use sakubrain_core::repo::habit_repo::{HabitRepository, InMemoryHabitRepository};
use sakubrain_core::repo::idea_repo::{IdeaRepository, InMemoryIdeaRepository};
use sakubrain_core::repo::learning_repo::{InMemoryLearningRepository, LearningRepository};
use sakubrain_core::LatencyProfile;

fn learning_repo() -> InMemoryLearningRepository {
    InMemoryLearningRepository::seeded(LatencyProfile::instant()).unwrap()
}

#[test]
fn saving_a_book_under_existing_id_replaces_it_in_place() {
    let repo = learning_repo();
    let replacement = Book::with_id(
        "2",
        NewBook {
            title: "The Psychology of Money (2nd ed.)".to_string(),
            author: "Morgan Housel".to_string(),
            progress: 40,
            category: BookCategory::Finance,
            cover_image_url: None,
            started_at: None,
            completed_at: None,
        },
    )
    .unwrap();

    let saved = repo.save_book(replacement.clone()).unwrap();
    assert_eq!(saved, replacement);

    let books = repo.recent_books(usize::MAX).unwrap();
    assert_eq!(books.len(), 4);
    assert_eq!(books[1], replacement);
    let ids: Vec<&str> = books.iter().map(|book| book.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[test]
fn saving_a_skill_under_existing_id_replaces_it_in_place() {
    let repo = learning_repo();
    let replacement = Skill::with_id(
        "3",
        NewSkill {
            name: "Data Analysis".to_string(),
            level: 95,
            category: SkillCategory::Analytics,
        },
    )
    .unwrap();

    repo.save_skill(replacement.clone()).unwrap();

    let skills = repo.all_skills().unwrap();
    assert_eq!(skills.len(), 5);
    assert_eq!(skills[2], replacement);
    assert_eq!(skills[2].level(), 95);
}

#[test]
fn saving_a_habit_under_existing_id_replaces_it_in_place() {
    let repo = InMemoryHabitRepository::seeded(LatencyProfile::instant()).unwrap();
    let replacement = Habit::with_id(
        "3",
        NewHabit {
            name: "Strength training".to_string(),
            streak: 2,
            completed: vec![false, false, false, false, false, true, true],
            color: "from-amber-500 to-orange-500".to_string(),
            category: HabitCategory::Health,
            created_at: 0,
            target_days_per_week: 3,
        },
    )
    .unwrap();

    repo.save_habit(replacement.clone()).unwrap();

    let habits = repo.all_habits().unwrap();
    assert_eq!(habits.len(), 5);
    assert_eq!(habits[2], replacement);
    assert_eq!(habits[2].name, "Strength training");
    assert_eq!(repo.stats().unwrap().completed_today, 2);
}

#[test]
fn saving_an_idea_under_existing_id_replaces_it_in_place() {
    let repo = InMemoryIdeaRepository::seeded(LatencyProfile::instant()).unwrap();
    let replacement = Idea::with_id(
        "1",
        NewIdea {
            title: "AI Finance Coach for Teams".to_string(),
            description: "Shared budgets with coaching.".to_string(),
            category: IdeaCategory::SaaS,
            impact: IdeaImpact::High,
            validation: IdeaValidation::default(),
            archived: false,
        },
        0,
    )
    .unwrap();

    repo.save_idea(replacement.clone()).unwrap();

    let ideas = repo.all_ideas().unwrap();
    assert_eq!(ideas.len(), 4);
    assert_eq!(ideas[0], replacement);
    assert_eq!(ideas[0].stage(), IdeaStage::Idea);
    assert_eq!(repo.stats().unwrap().ideas_by_stage.get(&IdeaStage::Idea), Some(&1));
}
