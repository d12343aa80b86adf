use super::custom::CustomEmojiMap;
use super::profile::ProfileEmojiMap;

/// Per-call lookup maps. Read-only for the duration of one render.
#[derive(Debug, Clone, Copy)]
pub struct EmojiContext<'a> {
    pub custom: &'a CustomEmojiMap,
    pub profiles: &'a ProfileEmojiMap,
}

impl<'a> EmojiContext<'a> {
    pub fn new(custom: &'a CustomEmojiMap, profiles: &'a ProfileEmojiMap) -> Self {
        Self { custom, profiles }
    }
}

pub trait Transformer: Send + Sync {
    fn transform(&self, text: String, ctx: &EmojiContext<'_>) -> String;
}
