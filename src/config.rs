//! Card copy and imagery, loaded from `./card.json` next to the deployed
//! bundle so each deployment can reword the card without a rebuild. Missing
//! fields (or a missing file) fall back to the built-in valentine defaults.

use gloo_net::http::Request;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CardConfig {
    pub question: String,
    pub ask_hint: String,
    pub ask_image: String,
    pub ask_image_alt: String,
    pub celebrate_image: String,
    pub celebrate_image_alt: String,
    pub celebrate_title: String,
    pub celebrate_message: String,
    pub reset_label: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            question: "Will you be my valentine?".into(),
            ask_hint: "(Try to click \"No\" if you can!)".into(),
            ask_image: "assets/panda.png".into(),
            ask_image_alt: "Panda".into(),
            celebrate_image: "assets/cat.gif".into(),
            celebrate_image_alt: "Cat".into(),
            celebrate_title: "Yay! 🥳❤️".into(),
            celebrate_message: "Thank you for being my valentine! 😻".into(),
            reset_label: "Try Again".into(),
        }
    }
}

/// Fetches `./card.json` relative to the page, so the card works when served
/// from a sub-path. Errors are stringly-typed; the caller folds them into the
/// default config.
pub async fn fetch_card_config() -> Result<CardConfig, String> {
    let resp = Request::get("./card.json")
        .send()
        .await
        .map_err(|e| format!("Failed fetching ./card.json: {e}"))?;
    resp.json::<CardConfig>()
        .await
        .map_err(|e| format!("Failed parsing card.json: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let cfg: CardConfig =
            serde_json::from_str(r#"{ "question": "Dinner on Friday?" }"#).unwrap();
        assert_eq!(cfg.question, "Dinner on Friday?");
        assert_eq!(cfg.reset_label, "Try Again");
        assert_eq!(cfg.celebrate_title, CardConfig::default().celebrate_title);
    }

    #[test]
    fn empty_object_is_the_default_config() {
        let cfg: CardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, CardConfig::default());
    }
}
