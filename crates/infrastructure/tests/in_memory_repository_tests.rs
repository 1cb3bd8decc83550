use restriction_board_application::ports::RestrictionRepository;
use restriction_board_domain::{seed_records, RestrictionStatus};
use restriction_board_infrastructure::repositories::InMemoryRestrictionRepository;
use std::sync::Arc;

#[test]
fn test_seeded_store_keeps_literal_order() {
    let repo = InMemoryRestrictionRepository::seeded();

    let ids: Vec<String> = repo
        .get_all()
        .unwrap()
        .iter()
        .map(|r| r.id.to_string())
        .collect();
    assert_eq!(ids, vec!["minebot_tob", "Clexi_t", "Unknown"]);
    assert_eq!(repo.count().unwrap(), 3);
}

#[test]
fn test_insert_appends() {
    let repo = InMemoryRestrictionRepository::default();
    let mut record = seed_records().remove(0);
    record.id = "appended".into();

    repo.insert(seed_records().remove(1)).unwrap();
    repo.insert(record).unwrap();

    let all = repo.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].id.as_ref(), "appended");
    assert_eq!(all[1].status, RestrictionStatus::SoftBlocked);
}

#[test]
fn test_get_by_id() {
    let repo = InMemoryRestrictionRepository::seeded();

    let found = repo.get_by_id("Unknown").unwrap().unwrap();
    assert_eq!(found.block_id.as_ref(), "0001");
    assert!(repo.get_by_id("unknown").unwrap().is_none());
}

#[test]
fn test_remove_existing_and_missing() {
    let repo = InMemoryRestrictionRepository::seeded();

    let removed = repo.remove("Clexi_t").unwrap();
    assert_eq!(removed.map(|r| r.block_id.to_string()), Some("0002".to_string()));
    assert_eq!(repo.count().unwrap(), 2);

    assert!(repo.remove("Clexi_t").unwrap().is_none());
    assert_eq!(repo.count().unwrap(), 2);
}

#[test]
fn test_shared_across_threads() {
    let repo = Arc::new(InMemoryRestrictionRepository::seeded());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let repo = repo.clone();
            std::thread::spawn(move || {
                let mut record = seed_records().remove(0);
                record.id = format!("thread-{}", i).into();
                repo.insert(record).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(repo.count().unwrap(), 7);
}
