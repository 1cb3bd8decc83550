use restriction_board_domain::RestrictionStats;

use crate::ports::{StatSlot, ViewSurface};

pub fn update_stats_panel(surface: &mut dyn ViewSurface, stats: &RestrictionStats) {
    for slot in StatSlot::all() {
        let value = match slot {
            StatSlot::Blocked => stats.blocked,
            StatSlot::Restricted => stats.restricted,
            StatSlot::Warning => stats.warning,
            StatSlot::SoftBlocked => stats.soft_blocked,
            StatSlot::Total => stats.total,
        };
        surface.set_text(slot, &value.to_string());
    }
}
