use degree_advisor::catalog::{Catalog, Course};
use degree_advisor::document::{corpus, Document, DocumentId, RULES_SOURCE};

fn cloud_course() -> Course {
    Course {
        code: "CIS 630".to_string(),
        title: "Cloud Computing".to_string(),
        credits: 4,
        description: "Elastic infrastructure and deployment.".to_string(),
        tags: vec!["cloud".to_string(), "systems".to_string()],
    }
}

#[test]
fn invariant_same_content_same_version() {
    let doc1 = Document::new(DocumentId::new("a.md"), "Hello world".to_string());
    let doc2 = Document::new(DocumentId::new("b.md"), "Hello world".to_string());

    assert_eq!(doc1.version, doc2.version);
    assert!(doc1.version.as_str().starts_with("sha256:"));
}

#[test]
fn invariant_different_content_different_version() {
    let doc1 = Document::new(DocumentId::new("a.md"), "Hello world".to_string());
    let doc2 = Document::new(DocumentId::new("a.md"), "Hello world!".to_string());

    assert_ne!(doc1.version, doc2.version);
}

#[test]
fn course_document_is_synthesized_summary() {
    let doc = Document::from_course(&cloud_course());

    assert_eq!(doc.id.as_str(), "CIS 630");
    assert_eq!(
        doc.content,
        "CIS 630 — Cloud Computing (4 cr)\nElastic infrastructure and deployment.\nTags: cloud, systems"
    );
    assert_eq!(doc.headline(), "CIS 630 — Cloud Computing (4 cr)");
}

#[test]
fn course_without_tags_has_empty_tag_line() {
    let mut course = cloud_course();
    course.tags.clear();

    let doc = Document::from_course(&course);
    assert!(doc.content.ends_with("\nTags: "));
}

#[test]
fn corpus_puts_rules_first_then_catalog_order() {
    let mut second = cloud_course();
    second.code = "CIS 512".to_string();
    let catalog = Catalog::from_courses(vec![cloud_course(), second]).unwrap();

    let docs = corpus(RULES_SOURCE, "# Rules\nbody", &catalog);

    let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["program_rules.md", "CIS 630", "CIS 512"]);
    assert_eq!(docs[0].headline(), "# Rules");
}
