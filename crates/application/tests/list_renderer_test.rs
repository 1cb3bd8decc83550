use restriction_board_application::ports::Region;
use restriction_board_application::services::{render_list, CardRenderer, DEFAULT_URGENT_DAYS};
use restriction_board_domain::seed_records;

mod helpers;
use helpers::{FakeSurface, FixedClock};

fn renderer() -> CardRenderer {
    CardRenderer::new(FixedClock::at(2026, 10, 18, 12), DEFAULT_URGENT_DAYS)
}

#[test]
fn test_empty_list_shows_empty_state() {
    let mut surface = FakeSurface::new();
    render_list(&mut surface, &renderer(), &[]);

    assert_eq!(surface.is_visible(Region::EmptyState), Some(true));
    assert_eq!(surface.is_visible(Region::Grid), Some(false));
    assert_eq!(surface.content_writes, 0);
}

#[test]
fn test_non_empty_list_shows_grid() {
    let mut surface = FakeSurface::new();
    render_list(&mut surface, &renderer(), &seed_records());

    assert_eq!(surface.is_visible(Region::EmptyState), Some(false));
    assert_eq!(surface.is_visible(Region::Grid), Some(true));
    assert_eq!(surface.grid().matches(r#"class="user-card""#).count(), 3);
}

#[test]
fn test_rerender_replaces_grid_content() {
    let mut surface = FakeSurface::new();
    let records = seed_records();
    render_list(&mut surface, &renderer(), &records);
    render_list(&mut surface, &renderer(), &records[1..2]);

    assert_eq!(surface.grid().matches(r#"class="user-card""#).count(), 1);
    assert!(surface.grid().contains("Clexi_t"));
}
