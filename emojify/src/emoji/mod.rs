pub mod config;
pub mod custom;
pub mod literals;
pub mod pipeline;
pub mod profile;
pub mod scanner;
pub mod table;
pub mod traits;

pub use config::AppConfig;
pub use custom::{CustomEmoji, CustomEmojiMap, PickerEmoji, build_custom_emojis, custom_emoji_map};
pub use pipeline::EmojiPipeline;
pub use profile::{ProfileEmoji, ProfileEmojiMap, profile_emojify};
pub use scanner::{Resolution, Scanner, emojify};
pub use table::{EmojiEntry, LookupTable};
pub use traits::{EmojiContext, Transformer};
