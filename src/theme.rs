use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub box_fill: String,
    pub box_stroke: String,
    pub placeholder_stroke: String,
    pub line_color: String,
    pub image_fill: String,
    pub image_stroke: String,
    pub background: String,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            box_fill: "#FFFFFF".to_string(),
            box_stroke: "#7A7A7A".to_string(),
            placeholder_stroke: "#BDBDBD".to_string(),
            line_color: "#555555".to_string(),
            image_fill: "#E6E6E6".to_string(),
            image_stroke: "#9E9E9E".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            box_fill: "#F8FAFF".to_string(),
            box_stroke: "#C7D2E5".to_string(),
            placeholder_stroke: "#D7E0F0".to_string(),
            line_color: "#7A8AA6".to_string(),
            image_fill: "#EEF2F8".to_string(),
            image_stroke: "#C7D2E5".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}
