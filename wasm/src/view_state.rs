//! Client view state
//!
//! Tracks which view is showing and caches the last category and consumable
//! lists fetched from the server. Categories never change at runtime, so only
//! the consumable snapshot is dropped on navigation.

use std::str::FromStr;

use wasm_bindgen::prelude::*;

/// Top-level screens of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Inventory,
    Purchases,
    Usage,
    Settings,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Inventory => "inventory",
            View::Purchases => "purchases",
            View::Usage => "usage",
            View::Settings => "settings",
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(View::Dashboard),
            "inventory" => Ok(View::Inventory),
            "purchases" => Ok(View::Purchases),
            "usage" => Ok(View::Usage),
            "settings" => Ok(View::Settings),
            other => Err(format!("unknown view: {}", other)),
        }
    }
}

#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct ViewState {
    view: View,
    categories: Option<String>,
    consumables: Option<String>,
}

#[wasm_bindgen]
impl ViewState {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ViewState {
        ViewState::default()
    }

    /// Switch views. Returns false and stays put for an unknown view name.
    pub fn navigate(&mut self, view: &str) -> bool {
        match view.parse::<View>() {
            Ok(next) => {
                if next != self.view {
                    self.consumables = None;
                }
                self.view = next;
                true
            }
            Err(e) => {
                crate::log(&e);
                false
            }
        }
    }

    pub fn current_view(&self) -> String {
        self.view.as_str().to_string()
    }

    pub fn cache_categories(&mut self, json: String) {
        self.categories = Some(json);
    }

    pub fn cached_categories(&self) -> Option<String> {
        self.categories.clone()
    }

    pub fn cache_consumables(&mut self, json: String) {
        self.consumables = Some(json);
    }

    pub fn cached_consumables(&self) -> Option<String> {
        self.consumables.clone()
    }

    /// Drop every cached snapshot, e.g. after a restore
    pub fn invalidate(&mut self) {
        self.categories = None;
        self.consumables = None;
    }
}
