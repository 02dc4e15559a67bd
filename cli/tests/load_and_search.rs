use search_cli::{build_server, load_documents, render_pages, replay};
use search_core::{DocumentStatus, SearchConfig};
use std::fs;
use tempfile::tempdir;

const PETS_JSONL: &str = r#"{"id": 1, "text": "curly cat curly tail", "ratings": [7, 2, 7]}
{"id": 2, "text": "curly dog and fancy collar", "ratings": [1, 2, 3]}

{"id": 3, "text": "big cat fancy collar", "ratings": [1, 2, 8]}
"#;

const BIRDS_JSON: &str = r#"[
  {"id": 4, "text": "big dog sparrow Eugene", "ratings": [1, 3, 2]},
  {"id": 5, "text": "big dog sparrow Vasiliy", "status": "banned"}
]"#;

#[test]
fn loads_json_and_jsonl_from_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.jsonl"), PETS_JSONL).unwrap();
    fs::create_dir_all(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/b.json"), BIRDS_JSON).unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let docs = load_documents(dir.path()).unwrap();
    assert_eq!(docs.len(), 5);
    let banned = docs.iter().find(|d| d.id == 5).unwrap();
    assert_eq!(banned.status, DocumentStatus::Banned);
    assert!(banned.ratings.is_empty());

    let server = build_server("and in at", SearchConfig::default(), &docs).unwrap();
    assert_eq!(server.document_count(), 5);
    let ids: Vec<i32> = server.find_top_documents("sparrow").unwrap().iter().map(|d| d.id).collect();
    assert_eq!(ids, [4]);
}

#[test]
fn duplicate_ids_fail_the_build() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("dup.jsonl");
    fs::write(&file, "{\"id\": 1, \"text\": \"a\"}\n{\"id\": 1, \"text\": \"b\"}\n").unwrap();
    let docs = load_documents(&file).unwrap();
    let err = build_server("", SearchConfig::default(), &docs).unwrap_err();
    assert!(format!("{err:#}").contains("already added"));
}

#[test]
fn renders_pages_with_breaks() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("pets.jsonl");
    fs::write(&file, PETS_JSONL).unwrap();
    let server = build_server("and in at", SearchConfig::default(), &load_documents(&file).unwrap()).unwrap();
    let results = server.find_top_documents("curly collar").unwrap();
    assert_eq!(results.len(), 3);
    let out = render_pages(&results, 2);
    assert_eq!(out.matches("Page break").count(), 2);
    assert!(out.starts_with("{ document_id = 1, relevance = "));
}

#[test]
fn replay_counts_empty_queries() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("pets.jsonl");
    fs::write(&file, PETS_JSONL).unwrap();
    let server = build_server("and in at", SearchConfig::default(), &load_documents(&file).unwrap()).unwrap();
    let log = "empty request\n\ncurly\nempty request\nfancy\n";
    assert_eq!(replay(&server, log.lines(), 1440).unwrap(), 2);
    assert_eq!(replay(&server, log.lines(), 2).unwrap(), 1);
    assert!(replay(&server, ["cat --dog"], 10).is_err());
}

#[test]
fn bad_array_element_names_its_position() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("docs.json");
    fs::write(&file, r#"[{"id": 1, "text": "ok"}, {"id": "two", "text": "bad"}]"#).unwrap();
    let err = load_documents(&file).unwrap_err();
    assert!(format!("{err:#}").contains("docs.json[1]"));
}
