use serde::{Deserialize, Serialize};

/// A listing as returned by `GET /api/houses`. All values are display strings.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    pub price: String,
    pub area: String,
    pub age: String,
    pub description: String,
}

/// A sample "before" photo for a property, from `GET /api/demo-images/{id}`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct DemoImage {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Renovation presets understood by the generation endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenovationStyle {
    Modern,
    Traditional,
    Western,
    Scandinavian,
    Industrial,
    Zen,
    Showa,
    Luxury,
    Eco,
    Mediterranean,
    Smart,
    Bohemian,
}

impl RenovationStyle {
    pub const ALL: [RenovationStyle; 12] = [
        RenovationStyle::Modern,
        RenovationStyle::Traditional,
        RenovationStyle::Western,
        RenovationStyle::Scandinavian,
        RenovationStyle::Industrial,
        RenovationStyle::Zen,
        RenovationStyle::Showa,
        RenovationStyle::Luxury,
        RenovationStyle::Eco,
        RenovationStyle::Mediterranean,
        RenovationStyle::Smart,
        RenovationStyle::Bohemian,
    ];

    /// Key sent as `style` in the renovation request body.
    pub fn key(self) -> &'static str {
        match self {
            RenovationStyle::Modern => "modern",
            RenovationStyle::Traditional => "traditional",
            RenovationStyle::Western => "western",
            RenovationStyle::Scandinavian => "scandinavian",
            RenovationStyle::Industrial => "industrial",
            RenovationStyle::Zen => "zen",
            RenovationStyle::Showa => "showa",
            RenovationStyle::Luxury => "luxury",
            RenovationStyle::Eco => "eco",
            RenovationStyle::Mediterranean => "mediterranean",
            RenovationStyle::Smart => "smart",
            RenovationStyle::Bohemian => "bohemian",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RenovationStyle::Modern => "モダン",
            RenovationStyle::Traditional => "和モダン",
            RenovationStyle::Western => "洋風",
            RenovationStyle::Scandinavian => "北欧風",
            RenovationStyle::Industrial => "インダストリアル",
            RenovationStyle::Zen => "ミニマリスト禅",
            RenovationStyle::Showa => "昭和レトロ",
            RenovationStyle::Luxury => "ラグジュアリー",
            RenovationStyle::Eco => "エコナチュラル",
            RenovationStyle::Mediterranean => "地中海風",
            RenovationStyle::Smart => "スマートホーム",
            RenovationStyle::Bohemian => "ボヘミアン",
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RenovateRequest {
    pub style: String,
    pub image_url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RenovateResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub output: Vec<String>,
    #[serde(default)]
    pub style: Option<String>,
    // Set by the backend when it answers with a mock instead of a real render.
    #[serde(default)]
    pub message: Option<String>,
}

impl RenovateResponse {
    pub fn first_output(&self) -> Option<&str> {
        self.output.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_ignores_extra_backend_fields() {
        let json = r#"{"id":"house1","name":"世田谷区 - 古民家","address":"東京都世田谷区",
            "price":"3,800万円","area":"180㎡","age":"築80年",
            "description":"伝統的な日本家屋。","images":[]}"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, "house1");
        assert_eq!(property.price, "3,800万円");
    }

    #[test]
    fn renovate_response_tolerates_missing_optional_fields() {
        let response: RenovateResponse =
            serde_json::from_str(r#"{"output":["https://cdn/after.png"]}"#).unwrap();
        assert_eq!(response.first_output(), Some("https://cdn/after.png"));
        assert_eq!(response.message, None);

        let empty: RenovateResponse = serde_json::from_str(r#"{"status":"failed"}"#).unwrap();
        assert_eq!(empty.first_output(), None);
    }

    #[test]
    fn renovate_request_uses_backend_field_names() {
        let body = RenovateRequest {
            style: RenovationStyle::Zen.key().to_string(),
            image_url: "/static/demo-images/demo1.jpg".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["style"], "zen");
        assert_eq!(value["image_url"], "/static/demo-images/demo1.jpg");
    }

    #[test]
    fn style_keys_are_unique() {
        let mut keys: Vec<_> = RenovationStyle::ALL.iter().map(|s| s.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), RenovationStyle::ALL.len());
    }
}
