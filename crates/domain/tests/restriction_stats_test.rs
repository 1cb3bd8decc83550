use restriction_board_domain::{seed_records, RestrictionStats, RestrictionStatus};

mod helpers;
use helpers::RestrictionRecordBuilder;

#[test]
fn test_seed_stats() {
    let stats = RestrictionStats::from_records(&seed_records());
    assert_eq!(
        stats,
        RestrictionStats {
            blocked: 1,
            restricted: 1,
            warning: 0,
            soft_blocked: 1,
            total: 3,
        }
    );
}

#[test]
fn test_empty_store_stats() {
    assert_eq!(RestrictionStats::from_records(&[]), RestrictionStats::default());
}

#[test]
fn test_unknown_status_counts_only_in_total() {
    let mut store = seed_records();
    store.push(
        RestrictionRecordBuilder::new()
            .status(RestrictionStatus::from("muted"))
            .build(),
    );

    let stats = RestrictionStats::from_records(&store);
    assert_eq!(stats.total, 4);
    assert_eq!(
        stats.blocked + stats.restricted + stats.warning + stats.soft_blocked,
        3
    );
    assert_eq!(stats.count_for(&RestrictionStatus::from("muted")), 0);
    assert_eq!(stats.count_for(&RestrictionStatus::SoftBlocked), 1);
}
