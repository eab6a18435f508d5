// file: tests/scikeras_index.rs
// description: end-to-end checks against a generated SciKeras documentation index
// reference: tests/fixtures/searchindex.js

use docsearch::{
    Config, ExportFormat, HitKind, IndexExporter, IndexLoader, IndexValidator, ObjectPriority,
    SearchIndex, Searcher, ValidationStatus,
};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::tempdir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/searchindex.js");

async fn fixture() -> SearchIndex {
    IndexLoader::load(Path::new(FIXTURE)).await.unwrap()
}

#[tokio::test]
async fn fixture_loads_and_validates() {
    let index = fixture().await;

    let report = IndexValidator::new().validate(&index);
    assert_eq!(report.status, ValidationStatus::Valid, "{}", report.format());

    let stats = index.stats();
    assert_eq!(stats.documents, 9);
    assert_eq!(stats.terms, 31);
    assert_eq!(stats.postings, 121);
    assert_eq!(stats.title_terms, 16);
    assert_eq!(stats.objects, 24);
    assert_eq!(stats.object_kinds, 5);
}

#[tokio::test]
async fn titles_stay_aligned_with_docnames() {
    let index = fixture().await;

    let doc = index.find_document("quickstart").unwrap();
    assert_eq!(doc.index, 7);
    assert_eq!(doc.title, "Quickstart");
    assert_eq!(doc.filename, "quickstart.rst");

    let migration = index.document(6).unwrap();
    assert_eq!(
        migration.display_title(),
        "Migrating from tf.keras.wrappers.scikit_learn"
    );
}

#[tokio::test]
async fn token_lookup_fails_closed() {
    let index = fixture().await;

    assert_eq!(index.lookup_term("Kera"), (0..9).collect::<Vec<_>>());
    assert_eq!(index.lookup_term("pip"), vec![5]);
    assert_eq!(index.lookup_title_term("migrat"), vec![6]);
    assert!(index.lookup_term("pytorch").is_empty());
    assert!(index.lookup_title_term("pip").is_empty());
}

#[tokio::test]
async fn class_name_query_ranks_class_first() {
    let index = fixture().await;
    let config = Config::default_config();
    let hits = Searcher::new(&index, &config.search).search("KerasClassifier", 5);

    assert_eq!(hits[0].title, "scikeras.wrappers.KerasClassifier");
    assert_eq!(hits[0].kind, HitKind::Object);
    assert_eq!(hits[0].score, 16);
    assert_eq!(
        hits[0].link(),
        "generated/scikeras.wrappers.KerasClassifier.html#scikeras.wrappers.KerasClassifier"
    );

    assert_eq!(hits[1].kind, HitKind::Title);
    assert_eq!(hits[1].score, 15);
    assert_eq!(hits[1].doc, 2);
}

#[tokio::test]
async fn method_query_orders_equal_scores_by_name() {
    let index = fixture().await;
    let config = Config::default_config();
    let hits = Searcher::new(&index, &config.search).search("fit", 10);

    let titles: Vec<&str> = hits.iter().take(4).map(|h| h.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "scikeras.wrappers.BaseWrapper.fit",
            "scikeras.wrappers.KerasClassifier.fit",
            "scikeras.wrappers.KerasRegressor.fit",
            "scikeras.wrappers.BaseWrapper.partial_fit",
        ]
    );
    assert_eq!(hits[3].score, 11);
}

#[tokio::test]
async fn unimportant_objects_are_demoted() {
    let index = fixture().await;

    let entry = index
        .object("scikeras.wrappers.KerasRegressor.r_squared")
        .unwrap();
    assert_eq!(entry.priority(), ObjectPriority::Unimportant);

    let config = Config::default_config();
    let hits = Searcher::new(&index, &config.search).search("r_squared", 10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, 6);
}

#[tokio::test]
async fn excluded_words_remove_pages_and_objects() {
    let index = fixture().await;
    let config = Config::default_config();
    let hits = Searcher::new(&index, &config.search).search("keras -regressor", 100);

    let regressor_docs = [0, 3, 4, 6, 7];
    assert!(hits.iter().all(|h| !regressor_docs.contains(&h.doc)));

    let mut page_docs: Vec<usize> = hits
        .iter()
        .filter(|h| h.kind != HitKind::Object)
        .map(|h| h.doc)
        .collect();
    page_docs.sort_unstable();
    assert_eq!(page_docs, vec![1, 2, 5, 8]);
}

#[tokio::test]
async fn export_round_trips() {
    let index = fixture().await;
    let dir = tempdir().unwrap();
    let exporter = IndexExporter::new(dir.path()).unwrap();

    for format in [ExportFormat::Js, ExportFormat::Json] {
        let manifest = exporter.export(&index, format, false).unwrap();
        let reloaded = IndexLoader::load(&dir.path().join(&manifest.file))
            .await
            .unwrap();

        assert_eq!(reloaded, index);
        assert_eq!(reloaded.docnames, index.docnames);
        assert_eq!(reloaded.titles, index.titles);
    }

    let original = std::fs::read_to_string(FIXTURE).unwrap();
    let payload = IndexLoader::extract_payload("fixture", &original).unwrap();
    let written = IndexExporter::render(&index, ExportFormat::Json, false).unwrap();

    let original: serde_json::Value = serde_json::from_str(payload).unwrap();
    let written: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(written, original);
}
