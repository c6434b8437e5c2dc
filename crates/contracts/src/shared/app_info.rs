use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "Broadway";

/// Version marker shown in the UI. Not computed, not validated.
pub const APP_VERSION: &str = "0.8.0";

/// Response body of `GET /api/version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl AppInfo {
    pub fn current() -> Self {
        Self {
            name: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_app_info_json() {
        let json = serde_json::to_value(AppInfo::current()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Broadway", "version": "0.8.0" })
        );
    }
}
