use restriction_board_domain::RestrictionRecord;

use super::CardRenderer;
use crate::ports::{Region, ViewSurface};

/// Shows the cards, or the empty-state indicator when there are none.
pub fn render_list(
    surface: &mut dyn ViewSurface,
    renderer: &CardRenderer,
    records: &[RestrictionRecord],
) {
    if records.is_empty() {
        surface.set_visible(Region::Grid, false);
        surface.set_visible(Region::EmptyState, true);
    } else {
        surface.set_visible(Region::Grid, true);
        surface.set_visible(Region::EmptyState, false);
        surface.set_content(Region::Grid, &renderer.render_all(records));
    }
}
