use serde::{Deserialize, Serialize};

/// 面向用户的固定提示文案
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub network: String,
    pub unauthorized: String,
    pub forbidden: String,
    pub not_found: String,
    pub server: String,
    pub validation: String,
    pub login: String,
    pub logout: String,
    pub download_started: String,
    pub download_failed: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            network: "Connection error. Check your internet connection.".to_string(),
            unauthorized: "You must be authenticated to perform this action.".to_string(),
            forbidden: "You do not have permission to perform this action.".to_string(),
            not_found: "Resource not found.".to_string(),
            server: "Server error. Please try again later.".to_string(),
            validation: "Invalid data. Please check the fields.".to_string(),
            login: "Logged in successfully!".to_string(),
            logout: "Logged out successfully!".to_string(),
            download_started: "Download started successfully".to_string(),
            download_failed: "Failed to download file".to_string(),
        }
    }
}
