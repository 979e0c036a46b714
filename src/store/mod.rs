pub mod models;

use std::collections::BTreeMap;

use parking_lot::RwLock;

pub use models::{
    AlphabetContent, GrammarContent, GrammarExample, Lesson, LessonContent, NewLesson, Progress,
};

/// In-memory lesson catalog and progress tracker.
///
/// Lessons are fixed at construction. Progress records are keyed by their own
/// id and there is at most one per lesson id; `upsert_progress` holds the
/// write lock across its scan and mutation to keep it that way.
pub struct ContentStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    lessons: BTreeMap<u32, Lesson>,
    progress: BTreeMap<u32, Progress>,
    next_lesson_id: u32,
    next_progress_id: u32,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    /// Store seeded with the built-in lesson set.
    pub fn new() -> Self {
        Self::with_lessons(crate::seed::seed_lessons())
    }

    pub fn empty() -> Self {
        Self::with_lessons(Vec::new())
    }

    /// Store seeded with `lessons`, assigned ids 1, 2, ... in the given order.
    pub fn with_lessons(lessons: Vec<NewLesson>) -> Self {
        let mut inner = StoreInner {
            lessons: BTreeMap::new(),
            progress: BTreeMap::new(),
            next_lesson_id: 1,
            next_progress_id: 1,
        };

        for lesson in lessons {
            let id = inner.next_lesson_id;
            inner.next_lesson_id += 1;
            inner.lessons.insert(
                id,
                Lesson {
                    id,
                    title: lesson.title,
                    content: lesson.content,
                    order: lesson.order,
                    audio_url: lesson.audio_url,
                },
            );
        }

        tracing::debug!(count = inner.lessons.len(), "content store seeded");

        Self {
            inner: RwLock::new(inner),
        }
    }

    /// All lessons, ascending by `order`. Equal orders keep id order.
    pub fn list_lessons(&self) -> Vec<Lesson> {
        let inner = self.inner.read();
        sorted_by_order(inner.lessons.values())
    }

    pub fn get_lesson(&self, id: u32) -> Option<Lesson> {
        self.inner.read().lessons.get(&id).cloned()
    }

    /// Lessons whose type is exactly `kind`, ascending by `order`.
    pub fn list_lessons_by_type(&self, kind: &str) -> Vec<Lesson> {
        let inner = self.inner.read();
        sorted_by_order(inner.lessons.values().filter(|lesson| lesson.kind() == kind))
    }

    pub fn lesson_count(&self) -> usize {
        self.inner.read().lessons.len()
    }

    /// Progress records in creation order.
    pub fn list_progress(&self) -> Vec<Progress> {
        self.inner.read().progress.values().cloned().collect()
    }

    /// Records a learner's result for `lesson_id`.
    ///
    /// An existing record gets `completed` replaced, and `score` replaced only
    /// when one is given: `None` keeps whatever score is already stored. When
    /// no record exists for the lesson a new one is created with the next
    /// progress id. The lesson id is not checked against the catalog.
    pub fn upsert_progress(&self, lesson_id: u32, completed: bool, score: Option<i32>) -> Progress {
        let mut inner = self.inner.write();

        if let Some(existing) = inner
            .progress
            .values_mut()
            .find(|p| p.lesson_id == lesson_id)
        {
            existing.completed = completed;
            if score.is_some() {
                existing.score = score;
            }
            tracing::debug!(lesson_id, progress_id = existing.id, "progress updated");
            return existing.clone();
        }

        let id = inner.next_progress_id;
        inner.next_progress_id += 1;
        let created = Progress {
            id,
            lesson_id,
            completed,
            score,
        };
        inner.progress.insert(id, created.clone());
        tracing::debug!(lesson_id, progress_id = id, "progress created");
        created
    }
}

fn sorted_by_order<'a>(lessons: impl Iterator<Item = &'a Lesson>) -> Vec<Lesson> {
    let mut out: Vec<Lesson> = lessons.cloned().collect();
    out.sort_by_key(|lesson| lesson.order);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(title: &str, kind: &str, order: i32) -> NewLesson {
        NewLesson {
            title: title.to_string(),
            content: LessonContent::parse(kind, "{}"),
            order,
            audio_url: None,
        }
    }

    #[test]
    fn seeded_lessons_are_sorted_by_order() {
        let store = ContentStore::new();
        let lessons = store.list_lessons();
        assert!(!lessons.is_empty());
        assert!(lessons.windows(2).all(|w| w[0].order <= w[1].order));
    }

    #[test]
    fn listed_ids_round_trip_through_get_lesson() {
        let store = ContentStore::new();
        for listed in store.list_lessons() {
            let fetched = store.get_lesson(listed.id).expect("listed lesson must exist");
            assert_eq!(fetched.id, listed.id);
        }
        assert!(store.get_lesson(0).is_none());
        assert!(store.get_lesson(10_000).is_none());
    }

    #[test]
    fn lower_order_lists_first() {
        let store = ContentStore::with_lessons(vec![
            lesson("second", "alphabet", 2),
            lesson("first", "alphabet", 1),
        ]);
        let ids: Vec<u32> = store.list_lessons().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn equal_orders_keep_insertion_order() {
        let store = ContentStore::with_lessons(vec![
            lesson("a", "grammar", 5),
            lesson("b", "grammar", 5),
            lesson("c", "grammar", 1),
        ]);
        let ids: Vec<u32> = store.list_lessons().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn filter_by_type_is_exact() {
        let store = ContentStore::with_lessons(vec![
            lesson("vowels", "alphabet", 3),
            lesson("rules", "grammar", 1),
            lesson("consonants", "alphabet", 2),
            lesson("upper", "Alphabet", 0),
        ]);
        let alphabet = store.list_lessons_by_type("alphabet");
        assert_eq!(alphabet.len(), 2);
        assert!(alphabet.iter().all(|l| l.kind() == "alphabet"));
        assert_eq!(alphabet[0].title, "consonants");
        assert!(store.list_lessons_by_type("nonexistent").is_empty());
    }

    #[test]
    fn absent_score_keeps_stored_score() {
        let store = ContentStore::new();
        store.upsert_progress(1, true, Some(80));
        let updated = store.upsert_progress(1, true, None);

        assert_eq!(updated.score, Some(80));
        assert!(updated.completed);

        let all = store.list_progress();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], updated);
    }

    #[test]
    fn given_score_and_completed_are_replaced() {
        let store = ContentStore::new();
        let first = store.upsert_progress(2, true, Some(90));
        let second = store.upsert_progress(2, false, Some(10));
        assert_eq!(second.id, first.id);
        assert!(!second.completed);
        assert_eq!(second.score, Some(10));
    }

    #[test]
    fn distinct_lessons_get_distinct_records() {
        let store = ContentStore::new();
        let a = store.upsert_progress(1, true, Some(50));
        let b = store.upsert_progress(2, false, Some(0));
        assert_ne!(a.id, b.id);

        let all = store.list_progress();
        assert_eq!(all, vec![a, b]);
    }

    #[test]
    fn upsert_for_unknown_lesson_creates_first_record() {
        let store = ContentStore::empty();
        let created = store.upsert_progress(99, true, Some(100));
        assert_eq!(
            created,
            Progress {
                id: 1,
                lesson_id: 99,
                completed: true,
                score: Some(100),
            }
        );
    }

    #[test]
    fn new_record_may_have_no_score() {
        let store = ContentStore::empty();
        let created = store.upsert_progress(4, false, None);
        assert_eq!(created.score, None);
        assert!(!created.completed);
    }

    #[test]
    fn concurrent_upserts_keep_one_record_per_lesson() {
        let store = std::sync::Arc::new(ContentStore::empty());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    for lesson_id in 1..=20 {
                        store.upsert_progress(lesson_id, i % 2 == 0, Some(i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.list_progress().len(), 20);
    }
}
