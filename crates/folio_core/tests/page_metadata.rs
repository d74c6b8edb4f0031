use folio_core::{PageMetadata, PageMetadataService};

fn service() -> PageMetadataService {
    PageMetadataService::new(
        "Folio",
        PageMetadata {
            title: String::new(),
            description: "Projects, activities and writing.".to_string(),
            canonical_path: "/".to_string(),
            image: Some("/og.png".to_string()),
            keywords: vec!["portfolio".to_string()],
        },
    )
}

#[test]
fn scope_applies_page_and_restores_defaults_on_drop() {
    let mut service = service();
    assert_eq!(service.document_title(), "Folio");

    {
        let scope = service.enter(PageMetadata {
            title: "Timeline".to_string(),
            canonical_path: "/timeline".to_string(),
            ..PageMetadata::default()
        });
        assert_eq!(scope.document_title(), "Timeline | Folio");
        assert_eq!(scope.metadata().canonical_path, "/timeline");
        assert_eq!(
            scope.metadata().description,
            "Projects, activities and writing."
        );
        assert_eq!(scope.metadata().image.as_deref(), Some("/og.png"));
    }

    assert_eq!(service.current(), service.defaults());
    assert_eq!(service.document_title(), "Folio");
}

#[test]
fn page_specific_fields_override_defaults() {
    let mut service = service();
    let scope = service.enter(PageMetadata {
        title: "Synth".to_string(),
        description: "Web audio toy".to_string(),
        canonical_path: "/projects/2".to_string(),
        image: Some("/synth.png".to_string()),
        keywords: vec!["audio".to_string()],
    });

    assert_eq!(scope.metadata().description, "Web audio toy");
    assert_eq!(scope.metadata().image.as_deref(), Some("/synth.png"));
    drop(scope);
    assert_eq!(service.current().canonical_path, "/");
}
