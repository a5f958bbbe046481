//! Integration tests: candidates built from files on disk, uploaded into a
//! temporary root, checked against the resulting directory tree.

mod common;

use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use common::fixtures::{candidate, list, MB};
use depot_core::config::DEFAULT_MAX_FILE_SIZE_BYTES;
use depot_core::{CandidateOutcome, UploadError, UploadService};
use tempfile::tempdir;

#[test]
fn report_stored_exe_rejected() {
    let src = tempdir().unwrap();
    let root = tempdir().unwrap();
    let svc = UploadService::new(root.path(), DEFAULT_MAX_FILE_SIZE_BYTES);

    let stored = svc
        .upload_many(
            vec![
                candidate(src.path(), "report.pdf", 2 * MB),
                candidate(src.path(), "photo.exe", MB),
            ],
            "user@test.com",
        )
        .unwrap();

    assert_eq!(stored, vec!["report.pdf".to_string()]);
    let user_dir = root.path().join("user_test.com");
    assert!(user_dir.is_dir());
    assert_eq!(list(&user_dir), vec!["report.pdf".to_string()]);
    assert_eq!(
        fs::read(user_dir.join("report.pdf")).unwrap(),
        fs::read(src.path().join("report.pdf")).unwrap()
    );
}

#[test]
fn outcomes_follow_input_order() {
    let src = tempdir().unwrap();
    let root = tempdir().unwrap();
    let svc = UploadService::new(root.path(), DEFAULT_MAX_FILE_SIZE_BYTES);

    let report = svc
        .upload_batch(
            vec![
                candidate(src.path(), "a.txt", 10),
                candidate(src.path(), "b.bat", 10),
            ],
            "someone",
        )
        .unwrap();

    assert_eq!(report.scope, "someone");
    assert!(matches!(report.outcomes[0], CandidateOutcome::Stored { .. }));
    assert!(matches!(report.outcomes[1], CandidateOutcome::Rejected { .. }));
    assert_eq!(report.outcomes[1].original_name(), "b.bat");
}

#[test]
fn scopes_are_isolated() {
    let src = tempdir().unwrap();
    let root = tempdir().unwrap();
    let svc = UploadService::new(root.path(), DEFAULT_MAX_FILE_SIZE_BYTES);

    svc.upload_many(vec![candidate(src.path(), "cv.docx", 5)], "a@x.io")
        .unwrap();
    let other = svc
        .upload_many(vec![candidate(src.path(), "cv.docx", 5)], "b@x.io")
        .unwrap();

    // Same name in a different scope is not a collision.
    assert_eq!(other, vec!["cv.docx".to_string()]);
    assert_eq!(list(root.path()), vec!["a_x.io".to_string(), "b_x.io".to_string()]);
}

#[test]
fn repeated_uploads_never_overwrite() {
    let src = tempdir().unwrap();
    let root = tempdir().unwrap();
    let svc = UploadService::new(root.path(), DEFAULT_MAX_FILE_SIZE_BYTES);

    let mut names = Vec::new();
    for _ in 0..5 {
        names.extend(
            svc.upload_many(vec![candidate(src.path(), "scan.jpg", 100)], "u")
                .unwrap(),
        );
    }
    let mut unique = names.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 5, "names: {names:?}");
    assert_eq!(list(&root.path().join("u")).len(), 5);
}

#[test]
fn concurrent_same_name_uploads_all_land() {
    let src = tempdir().unwrap();
    let root = tempdir().unwrap();
    let svc = Arc::new(UploadService::new(root.path(), DEFAULT_MAX_FILE_SIZE_BYTES));
    let threads = 4;
    let barrier = Arc::new(Barrier::new(threads));

    let paths: Vec<_> = (0..threads)
        .map(|i| common::fixtures::source_file(src.path(), &format!("src{i}.txt"), 10 + i))
        .collect();

    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let svc = Arc::clone(&svc);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut c = depot_core::UploadCandidate::from_path(&path).unwrap();
                c.original_name = "shared.txt".to_string();
                barrier.wait();
                svc.upload_many(vec![c], "team").unwrap()
            })
        })
        .collect();

    let mut names: Vec<String> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), threads);

    // Every source size shows up exactly once on disk.
    let dir = root.path().join("team");
    let mut sizes: Vec<u64> = list(&dir)
        .iter()
        .map(|n| fs::metadata(dir.join(n)).unwrap().len())
        .collect();
    sizes.sort();
    assert_eq!(sizes, (0..threads as u64).map(|i| 10 + i).collect::<Vec<_>>());
}

#[test]
fn oversized_only_batch_fails_but_creates_scope() {
    let src = tempdir().unwrap();
    let root = tempdir().unwrap();
    let svc = UploadService::new(root.path(), MB as u64);

    let err = svc
        .upload_many(vec![candidate(src.path(), "huge.zip", MB + 1)], "u")
        .unwrap_err();
    match err {
        UploadError::NoFilesStored { outcomes } => assert!(matches!(
            &outcomes[0],
            CandidateOutcome::Rejected {
                reason: UploadError::FileTooLarge { limit_mb: 1 },
                ..
            }
        )),
        other => panic!("expected NoFilesStored, got {other:?}"),
    }
    assert!(list(&root.path().join("u")).is_empty());
}
