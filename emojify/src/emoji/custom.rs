use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `:shortcode:` (colons included) to image URL.
pub type CustomEmojiMap = HashMap<String, String>;

/// A custom emoji as the instance API hands it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEmoji {
    pub shortcode: String,
    pub url: String,
}

/// Entry for the client-side emoji picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerEmoji {
    pub id: String,
    pub name: String,
    pub short_names: Vec<String>,
    pub text: String,
    pub emoticons: Vec<String>,
    pub keywords: Vec<String>,
    pub image_url: String,
    pub custom: bool,
}

impl From<&CustomEmoji> for PickerEmoji {
    fn from(emoji: &CustomEmoji) -> Self {
        let name = emoji.shortcode.replacen(':', "", 1);
        PickerEmoji {
            id: name.clone(),
            short_names: vec![name.clone()],
            text: String::new(),
            emoticons: vec![],
            keywords: vec![name.clone()],
            image_url: emoji.url.clone(),
            custom: true,
            name,
        }
    }
}

pub fn build_custom_emojis(emojis: &[CustomEmoji]) -> Vec<PickerEmoji> {
    emojis.iter().map(PickerEmoji::from).collect()
}

/// Key each emoji by `:shortcode:` for the scanner. Later duplicates win.
pub fn custom_emoji_map(emojis: &[CustomEmoji]) -> CustomEmojiMap {
    emojis
        .iter()
        .map(|e| (format!(":{}:", e.shortcode.trim_matches(':')), e.url.clone()))
        .collect()
}
