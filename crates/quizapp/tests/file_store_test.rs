use quizapp::api::QuizApi;
use quizapp::model::{seed_quizzes, Quiz};
use quizapp::store::fs::FileStore;
use quizapp::store::QuizRepository;
use std::fs;
use tempfile::TempDir;

fn data_file(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("quizzes.json")
}

#[test]
fn first_open_seeds_and_writes_the_file() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open_file(data_file(&dir)).unwrap();

    assert_eq!(store.get_all(), seed_quizzes());
    assert!(data_file(&dir).exists());

    let reopened = FileStore::open_file(data_file(&dir)).unwrap();
    assert_eq!(reopened.get_all(), seed_quizzes());
}

#[test]
fn existing_file_replaces_the_seed() {
    let dir = TempDir::new().unwrap();
    fs::write(
        data_file(&dir),
        r#"[{"question": "Only one", "answer": "1"}]"#,
    )
    .unwrap();

    let store = FileStore::open_file(data_file(&dir)).unwrap();
    assert_eq!(store.get_all(), vec![Quiz::new("Only one", "1")]);
}

#[test]
fn mutations_survive_a_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = FileStore::open_file(data_file(&dir)).unwrap();
        store.add("  Capital of Peru ", " Lima").unwrap();
        store.update(0, "Capital of Italy", "Roma").unwrap();
        store.delete_by_index(1).unwrap();
    }

    let store = FileStore::open_file(data_file(&dir)).unwrap();
    let all = store.get_all();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0], Quiz::new("Capital of Italy", "Roma"));
    assert_eq!(all[1], Quiz::new("Capital of Spain", "Madrid"));
    assert_eq!(all[3], Quiz::new("Capital of Peru", "Lima"));
}

#[test]
fn ids_shift_after_delete_across_processes() {
    let dir = TempDir::new().unwrap();
    let mut api = QuizApi::new(FileStore::open_file(data_file(&dir)).unwrap());
    api.delete_quiz(Some("0")).unwrap();

    let api = QuizApi::new(FileStore::open_file(data_file(&dir)).unwrap());
    let shown = api.show_quiz(Some("0")).unwrap();
    assert_eq!(shown.listed_quizzes[0].quiz.question, "Capital of France");
}

#[test]
fn corrupt_file_fails_to_open() {
    let dir = TempDir::new().unwrap();
    fs::write(data_file(&dir), "[{\"question\": 1}]").unwrap();

    match FileStore::open_file(data_file(&dir)) {
        Ok(_) => panic!("expected an error"),
        Err(e) => assert!(e.is_fatal()),
    }
}
