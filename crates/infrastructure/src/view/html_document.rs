use restriction_board_application::ports::{Region, StatSlot, ViewSurface};
use restriction_board_application::services::html_escape;
use restriction_board_domain::record_filter::ALL_FILTER;
use std::collections::HashMap;

const FILTER_BUTTONS: [(&str, &str); 5] = [
    ("all", "All"),
    ("blocked", "Blocked"),
    ("restricted", "Restricted"),
    ("warning", "Warnings"),
    ("soft_blocked", "Soft blocked"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: String,
    pub label: String,
    pub active: bool,
}

/// Server-side rendition of the board page.
///
/// Holds the state of every element the board writes to and serialises it as
/// a complete HTML document. Search and filter controls submit a GET form, so
/// each request replays one interaction against a fresh document.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    title: String,
    visible: HashMap<Region, bool>,
    content: HashMap<Region, String>,
    texts: HashMap<StatSlot, String>,
    buttons: Vec<FilterButton>,
    search: String,
}

impl HtmlDocument {
    pub fn new(title: impl Into<String>) -> Self {
        let buttons = FILTER_BUTTONS
            .iter()
            .map(|(filter, label)| FilterButton {
                filter: filter.to_string(),
                label: label.to_string(),
                active: *filter == ALL_FILTER,
            })
            .collect();

        Self {
            title: title.into(),
            visible: HashMap::from([(Region::Grid, true), (Region::EmptyState, false)]),
            content: HashMap::new(),
            texts: StatSlot::all()
                .into_iter()
                .map(|slot| (slot, "0".to_string()))
                .collect(),
            buttons,
            search: String::new(),
        }
    }

    pub fn with_search(mut self, query: &str) -> Self {
        self.search = query.to_string();
        self
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.visible.get(&region).copied().unwrap_or(false)
    }

    pub fn content(&self, region: Region) -> &str {
        self.content.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn text(&self, slot: StatSlot) -> &str {
        self.texts.get(&slot).map(String::as_str).unwrap_or("")
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    /// Filter of the active button, `all` when none is active.
    pub fn active_filter(&self) -> &str {
        self.buttons
            .iter()
            .find(|b| b.active)
            .map(|b| b.filter.as_str())
            .unwrap_or(ALL_FILTER)
    }

    pub fn render(&self) -> String {
        let title = html_escape(&self.title);
        format!(
            r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header class="page-header">
        <h1>{title}</h1>
    </header>
    <section class="stats-panel">
{stats}    </section>
    <div class="controls">
        <form id="searchForm" method="get" action="/">
            <input type="text" id="searchInput" name="q" value="{search}" placeholder="Search by name, ID or reason" autocomplete="off">
            <input type="hidden" name="filter" value="{active}">
            <button type="submit" class="search-btn">Search</button>
        </form>
        <form class="filter-buttons" method="get" action="/">
            <input type="hidden" name="q" value="{search}">
{buttons}        </form>
    </div>
    <main>
        <div id="usersGrid" class="users-grid" style="display: {grid_display}">
{grid}        </div>
        <div id="noResults" class="no-results" style="display: {empty_display}">
            <p>No users match the current filters</p>
        </div>
    </main>
    <script src="/static/board.js" defer></script>
</body>
</html>
"#,
            title = title,
            stats = self.render_stats(),
            search = html_escape(&self.search),
            active = html_escape(self.active_filter()),
            buttons = self.render_buttons(),
            grid_display = if self.is_visible(Region::Grid) { "grid" } else { "none" },
            grid = self.content(Region::Grid),
            empty_display = if self.is_visible(Region::EmptyState) {
                "block"
            } else {
                "none"
            },
        )
    }

    fn render_stats(&self) -> String {
        StatSlot::all()
            .into_iter()
            .map(|slot| {
                format!(
                    "        <div class=\"stat-card\"><span id=\"{}\" class=\"stat-value\">{}</span><span class=\"stat-label\">{}</span></div>\n",
                    slot.element_id(),
                    html_escape(self.text(slot)),
                    stat_label(slot),
                )
            })
            .collect()
    }

    fn render_buttons(&self) -> String {
        self.buttons
            .iter()
            .map(|button| {
                let class = if button.active {
                    "filter-btn active"
                } else {
                    "filter-btn"
                };
                format!(
                    "                <button type=\"submit\" name=\"filter\" value=\"{filter}\" class=\"{class}\" data-filter=\"{filter}\">{label}</button>\n",
                    filter = html_escape(&button.filter),
                    class = class,
                    label = html_escape(&button.label),
                )
            })
            .collect()
    }
}

fn stat_label(slot: StatSlot) -> &'static str {
    match slot {
        StatSlot::Blocked => "Blocked",
        StatSlot::Restricted => "Restricted",
        StatSlot::Warning => "Warnings",
        StatSlot::SoftBlocked => "Soft blocked",
        StatSlot::Total => "Total",
    }
}

impl ViewSurface for HtmlDocument {
    fn set_visible(&mut self, region: Region, visible: bool) {
        self.visible.insert(region, visible);
    }

    fn set_text(&mut self, slot: StatSlot, text: &str) {
        self.texts.insert(slot, text.to_string());
    }

    fn set_content(&mut self, region: Region, html: &str) {
        self.content.insert(region, html.to_string());
    }

    fn filter_buttons(&self) -> Vec<String> {
        self.buttons.iter().map(|b| b.filter.clone()).collect()
    }

    fn set_button_active(&mut self, filter: &str, active: bool) {
        if let Some(button) = self.buttons.iter_mut().find(|b| b.filter == filter) {
            button.active = active;
        }
    }

    fn search_value(&self) -> String {
        self.search.clone()
    }

    fn set_search_value(&mut self, value: &str) {
        self.search = value.to_string();
    }
}
