//! Application Configuration
//!
//! Static settings provided to components through context.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key holding the serialized list
    pub storage_key: String,
    /// Question asked before clearing every item
    pub clear_prompt: String,
    /// Header title
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "groceryItems".to_string(),
            clear_prompt: "Do you want to clear all items?".to_string(),
            title: "GROCERY LIST".to_string(),
        }
    }
}

/// Get the config from context
pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}
