#![allow(dead_code)]
use restriction_board_application::ports::{Region, StatSlot, ViewSurface};
use std::collections::HashMap;

pub const FILTER_BUTTONS: [&str; 5] = ["all", "blocked", "restricted", "warning", "soft_blocked"];

/// In-memory stand-in for the host document.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub visible: HashMap<Region, bool>,
    pub content: HashMap<Region, String>,
    pub texts: HashMap<StatSlot, String>,
    pub buttons: Vec<(String, bool)>,
    pub search: String,
    pub content_writes: usize,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            buttons: FILTER_BUTTONS
                .iter()
                .map(|b| (b.to_string(), *b == "all"))
                .collect(),
            ..Self::default()
        }
    }

    pub fn is_visible(&self, region: Region) -> Option<bool> {
        self.visible.get(&region).copied()
    }

    pub fn grid(&self) -> &str {
        self.content.get(&Region::Grid).map(String::as_str).unwrap_or("")
    }

    pub fn text(&self, slot: StatSlot) -> &str {
        self.texts.get(&slot).map(String::as_str).unwrap_or("")
    }

    pub fn active_buttons(&self) -> Vec<&str> {
        self.buttons
            .iter()
            .filter(|(_, active)| *active)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn type_search(&mut self, text: &str) {
        self.search = text.to_string();
    }
}

impl ViewSurface for FakeSurface {
    fn set_visible(&mut self, region: Region, visible: bool) {
        self.visible.insert(region, visible);
    }

    fn set_text(&mut self, slot: StatSlot, text: &str) {
        self.texts.insert(slot, text.to_string());
    }

    fn set_content(&mut self, region: Region, html: &str) {
        self.content_writes += 1;
        self.content.insert(region, html.to_string());
    }

    fn filter_buttons(&self) -> Vec<String> {
        self.buttons.iter().map(|(name, _)| name.clone()).collect()
    }

    fn set_button_active(&mut self, filter: &str, active: bool) {
        for (name, flag) in self.buttons.iter_mut() {
            if name == filter {
                *flag = active;
            }
        }
    }

    fn search_value(&self) -> String {
        self.search.clone()
    }

    fn set_search_value(&mut self, value: &str) {
        self.search = value.to_string();
    }
}
