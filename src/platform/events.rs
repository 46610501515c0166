//! `themeChanged` notification dispatched on `window` after every apply.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

pub const THEME_CHANGED_EVENT: &str = "themeChanged";

/// `CustomEvent` detail, serialized as `{"darkMode": bool}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeChanged {
    pub dark_mode: bool,
}

impl ThemeChanged {
    pub fn new(theme: Theme) -> Self {
        Self {
            dark_mode: theme.is_dark(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_shape() {
        let json = serde_json::to_string(&ThemeChanged::new(Theme::Dark)).unwrap();
        assert_eq!(json, r#"{"darkMode":true}"#);
    }

    #[test]
    fn test_listener_side_parse() {
        let event: ThemeChanged = serde_json::from_str(r#"{"darkMode":false}"#).unwrap();
        assert_eq!(event.theme(), Theme::Light);
    }
}
