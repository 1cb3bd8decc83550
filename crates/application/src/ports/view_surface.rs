/// Display regions whose visibility and content the list renderer controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Grid,
    EmptyState,
}

impl Region {
    pub fn element_id(&self) -> &'static str {
        match self {
            Region::Grid => "usersGrid",
            Region::EmptyState => "noResults",
        }
    }
}

/// Numeric slots of the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatSlot {
    Blocked,
    Restricted,
    Warning,
    SoftBlocked,
    Total,
}

impl StatSlot {
    pub fn element_id(&self) -> &'static str {
        match self {
            StatSlot::Blocked => "totalBlocked",
            StatSlot::Restricted => "totalRestricted",
            StatSlot::Warning => "totalWarning",
            StatSlot::SoftBlocked => "totalSoftBlocked",
            StatSlot::Total => "totalUsers",
        }
    }

    pub fn all() -> [StatSlot; 5] {
        [
            StatSlot::Blocked,
            StatSlot::Restricted,
            StatSlot::Warning,
            StatSlot::SoftBlocked,
            StatSlot::Total,
        ]
    }
}

/// The host document as seen by the board.
pub trait ViewSurface {
    fn set_visible(&mut self, region: Region, visible: bool);

    fn set_text(&mut self, slot: StatSlot, text: &str);

    fn set_content(&mut self, region: Region, html: &str);

    /// Filter values of every category button, in document order.
    fn filter_buttons(&self) -> Vec<String>;

    fn set_button_active(&mut self, filter: &str, active: bool);

    fn search_value(&self) -> String;

    fn set_search_value(&mut self, value: &str);
}
