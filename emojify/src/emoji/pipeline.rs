use super::config::AppConfig;
use super::literals::LiteralImages;
use super::profile::ProfileMentions;
use super::scanner::EmojiScan;
use super::traits::{EmojiContext, Transformer};

pub struct EmojiPipeline {
    transformers: Vec<Box<dyn Transformer>>,
}

impl EmojiPipeline {
    /// Unicode emoji, custom shortcodes and (when enabled) literal phrases.
    pub fn status(config: &AppConfig) -> Self {
        let mut transformers: Vec<Box<dyn Transformer>> =
            vec![Box::new(EmojiScan::standard(config.asset_host()))];
        if config.literal_replacements {
            transformers.push(Box::new(LiteralImages));
        }
        Self { transformers }
    }

    /// Everything in [`EmojiPipeline::status`], then `:@name:` profile emoji.
    pub fn full(config: &AppConfig) -> Self {
        // Order matters: profile mentions must see the scanner's output so the
        // colons it already consumed are not reconsidered.
        Self::status(config).with(Box::new(ProfileMentions))
    }

    pub fn with(mut self, transformer: Box<dyn Transformer>) -> Self {
        self.transformers.push(transformer);
        self
    }

    pub fn render(&self, text: &str, ctx: &EmojiContext<'_>) -> String {
        self.transformers
            .iter()
            .fold(text.to_string(), |acc, t| t.transform(acc, ctx))
    }
}
