//! Integration tests for snippet operations.

mod helpers;

use helpers::TestStash;

use sqlstash_core::error::ErrorKind;
use sqlstash_core::types::{FolderId, SnippetId};
use sqlstash_entity::snippet::CreateSnippet;
use sqlstash_service::UpdateSnippetRequest;

#[tokio::test]
async fn test_save_then_list_round_trip() {
    let stash = TestStash::new().await;

    let created = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "q1".into(),
            sql: "SELECT *\nFROM users\nWHERE id = 1;".into(),
            folder_id: None,
        })
        .await
        .unwrap();

    let listed = stash.snippets.list_snippets().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "q1");
    assert_eq!(listed[0].content.sql, "SELECT *\nFROM users\nWHERE id = 1;");
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].folder_id, None);

    // The body is persisted as a JSON-quoted string, not raw text.
    assert!(stash.exists("q1.sql"));
    let on_disk = std::fs::read_to_string(stash.path("q1.sql")).unwrap();
    assert!(on_disk.starts_with('"'));
}

#[tokio::test]
async fn test_get_snippet_by_id() {
    let stash = TestStash::new().await;

    let created = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "lookup".into(),
            sql: "SELECT 1;".into(),
            folder_id: None,
        })
        .await
        .unwrap();

    let fetched = stash.snippets.get_snippet(created.id).await.unwrap();
    assert_eq!(fetched.name, "lookup");
    assert_eq!(fetched.content.sql, "SELECT 1;");
}

#[tokio::test]
async fn test_get_missing_snippet_is_not_found() {
    let stash = TestStash::new().await;

    let ghost = SnippetId::from_name("ghost.sql");
    let err = stash.snippets.get_snippet(ghost).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(err.message.contains(&ghost.to_string()));
}

#[tokio::test]
async fn test_create_with_empty_name_is_rejected() {
    let stash = TestStash::new().await;

    let err = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "  ".into(),
            sql: "SELECT 1;".into(),
            folder_id: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_create_into_folder_places_file_there() {
    let stash = TestStash::new().await;

    let folder = stash.folders.create_folder("Reports").await.unwrap();
    let created = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "q1".into(),
            sql: "SELECT 1;".into(),
            folder_id: Some(folder.id),
        })
        .await
        .unwrap();

    assert_eq!(created.folder_id, Some(folder.id));
    assert!(stash.exists("Reports/q1.sql"));
    assert!(!stash.exists("q1.sql"));

    let listed = stash.snippets.list_snippets().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].folder_id, Some(folder.id));
}

#[tokio::test]
async fn test_create_into_missing_folder_is_not_found() {
    let stash = TestStash::new().await;

    let missing = FolderId::from_name("Nope");
    let err = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "q1".into(),
            sql: "SELECT 1;".into(),
            folder_id: Some(missing),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(stash.count_entries(""), 0);
}

#[tokio::test]
async fn test_recursive_listing_tags_immediate_parent() {
    let stash = TestStash::new().await;

    // One root-level file, two subdirectories with files, one of which
    // contains a further nested subdirectory with one more file.
    stash.write_raw_snippet("root.sql", "SELECT 0;");
    stash.write_raw_snippet("One/a.sql", "SELECT 1;");
    stash.write_raw_snippet("Two/b.sql", "SELECT 2;");
    stash.write_raw_snippet("Two/Deep/c.sql", "SELECT 3;");

    let mut listed = stash.snippets.list_snippets().await.unwrap();
    listed.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(listed.len(), 4);

    let by_name = |name: &str| listed.iter().find(|s| s.name == name).unwrap();

    assert_eq!(by_name("root").folder_id, None);
    assert_eq!(by_name("a").folder_id, Some(FolderId::from_name("One")));
    assert_eq!(by_name("b").folder_id, Some(FolderId::from_name("Two")));
    // A deeply nested file is tagged with its immediate parent, not the
    // top-level ancestor.
    assert_eq!(by_name("c").folder_id, Some(FolderId::from_name("Deep")));
}

#[tokio::test]
async fn test_listing_skips_unrecognized_files() {
    let stash = TestStash::new().await;

    stash.write_raw_snippet("q1.sql", "SELECT 1;");
    std::fs::write(stash.path("notes.txt"), "not a snippet").unwrap();

    let listed = stash.snippets.list_snippets().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "q1");
}

#[tokio::test]
async fn test_update_content_in_place() {
    let stash = TestStash::new().await;

    let created = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "q1".into(),
            sql: "SELECT 1;".into(),
            folder_id: None,
        })
        .await
        .unwrap();

    let updated = stash
        .snippets
        .update_snippet(
            created.id,
            UpdateSnippetRequest {
                sql: Some("SELECT 2;".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Same name, same identity, new body.
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content.sql, "SELECT 2;");
    assert_eq!(stash.read_raw_snippet("q1.sql"), "SELECT 2;");
    assert_eq!(stash.count_entries(""), 1);
}

#[tokio::test]
async fn test_rename_changes_identity() {
    let stash = TestStash::new().await;

    let created = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "q1".into(),
            sql: "SELECT 1;".into(),
            folder_id: None,
        })
        .await
        .unwrap();

    let renamed = stash
        .snippets
        .update_snippet(
            created.id,
            UpdateSnippetRequest {
                name: Some("q2".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(renamed.name, "q2");
    assert_ne!(renamed.id, created.id);
    assert!(stash.exists("q2.sql"));
    assert!(!stash.exists("q1.sql"));

    // The old identity no longer resolves.
    let err = stash.snippets.get_snippet(created.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_move_root_snippet_into_folder() {
    let stash = TestStash::new().await;

    let reports = stash.folders.create_folder("Reports").await.unwrap();
    let created = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "q1".into(),
            sql: "SELECT 1;".into(),
            folder_id: None,
        })
        .await
        .unwrap();

    let moved = stash
        .snippets
        .update_snippet(
            created.id,
            UpdateSnippetRequest {
                folder_id: Some(Some(reports.id)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.folder_id, Some(reports.id));
    assert!(stash.exists("Reports/q1.sql"));
    assert!(!stash.exists("q1.sql"));

    let listed = stash.snippets.list_snippets().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "q1");
    assert_eq!(listed[0].folder_id, Some(reports.id));
    assert_eq!(listed[0].content.sql, "SELECT 1;");
}

#[tokio::test]
async fn test_move_folder_snippet_back_to_root() {
    let stash = TestStash::new().await;

    let archive = stash.folders.create_folder("Archive").await.unwrap();
    let created = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "q1".into(),
            sql: "SELECT 1;".into(),
            folder_id: Some(archive.id),
        })
        .await
        .unwrap();

    let moved = stash
        .snippets
        .update_snippet(
            created.id,
            UpdateSnippetRequest {
                folder_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.folder_id, None);
    assert!(stash.exists("q1.sql"));
    assert!(!stash.exists("Archive/q1.sql"));
}

#[tokio::test]
async fn test_move_to_missing_folder_mutates_nothing() {
    let stash = TestStash::new().await;

    let created = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "q1".into(),
            sql: "SELECT 1;".into(),
            folder_id: None,
        })
        .await
        .unwrap();

    let missing = FolderId::from_name("Nope");
    let err = stash
        .snippets
        .update_snippet(
            created.id,
            UpdateSnippetRequest {
                folder_id: Some(Some(missing)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(err.message.contains(&missing.to_string()));

    // The failure short-circuited before any write or delete.
    assert!(stash.exists("q1.sql"));
    assert_eq!(stash.read_raw_snippet("q1.sql"), "SELECT 1;");
    assert_eq!(stash.count_entries(""), 1);
}

#[tokio::test]
async fn test_delete_snippet_is_idempotent() {
    let stash = TestStash::new().await;

    let created = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "q1".into(),
            sql: "SELECT 1;".into(),
            folder_id: None,
        })
        .await
        .unwrap();

    stash.snippets.delete_snippet(created.id).await.unwrap();
    assert!(!stash.exists("q1.sql"));

    // Second delete of the same id succeeds as a no-op.
    stash.snippets.delete_snippet(created.id).await.unwrap();
}

#[tokio::test]
async fn test_delete_snippet_inside_folder() {
    let stash = TestStash::new().await;

    let reports = stash.folders.create_folder("Reports").await.unwrap();
    let created = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "q1".into(),
            sql: "SELECT 1;".into(),
            folder_id: Some(reports.id),
        })
        .await
        .unwrap();

    stash.snippets.delete_snippet(created.id).await.unwrap();
    assert!(!stash.exists("Reports/q1.sql"));
    // The containing folder survives.
    assert!(stash.exists("Reports"));
}

#[tokio::test]
async fn test_full_scenario_reports_q1() {
    let stash = TestStash::new().await;

    let reports = stash.folders.create_folder("Reports").await.unwrap();

    let q1 = stash
        .snippets
        .create_snippet(CreateSnippet {
            name: "q1".into(),
            sql: "SELECT 1;".into(),
            folder_id: None,
        })
        .await
        .unwrap();

    stash
        .snippets
        .update_snippet(
            q1.id,
            UpdateSnippetRequest {
                folder_id: Some(Some(reports.id)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let listed = stash.snippets.list_snippets().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "q1");
    assert_eq!(listed[0].folder_id, Some(reports.id));
    assert_eq!(listed[0].content.sql, "SELECT 1;");
    assert!(stash.exists("Reports/q1.sql"));
    assert!(!stash.exists("q1.sql"));
}
