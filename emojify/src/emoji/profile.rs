//! `:@name:` profile emoji.
//!
//! Rich-text editors like to wrap pieces of a mention in their own markup,
//! so `:<span><a>@<span>foo</span> </a></span>:` has to resolve the same as
//! `:@foo:`. Tags inside the span are skipped and whitespace is dropped when
//! collecting the name; the whole span, markup included, is then replaced.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::traits::{EmojiContext, Transformer};

/// Avatar emoji for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEmoji {
    #[serde(rename = "url", alias = "image_url")]
    pub image_url: String,
    #[serde(rename = "account_url", alias = "profile_url")]
    pub profile_url: String,
}

/// Bare account name (no colons, no `@`) to its avatar emoji.
pub type ProfileEmojiMap = HashMap<String, ProfileEmoji>;

#[derive(Debug, Default)]
struct MentionCursor {
    inside_tag: bool,
    inside_colon: bool,
    shortname: String,
    /// Output length at the opening colon; everything after it is the span.
    span_start: usize,
}

pub fn profile_emojify(input: &str, profiles: &ProfileEmojiMap) -> String {
    if profiles.is_empty() {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len() + 64);
    let mut cursor = MentionCursor::default();
    let mut pos = 0;

    while let Some(ch) = input[pos..].chars().next() {
        let next = pos + ch.len_utf8();

        if ch == '<' {
            cursor.inside_tag = true;
        } else if cursor.inside_tag && ch == '>' {
            cursor.inside_tag = false;
        } else if !cursor.inside_tag && ch == ':' {
            if !cursor.inside_colon {
                cursor.inside_colon = true;
                cursor.shortname.clear();
                cursor.span_start = out.len();
            } else {
                cursor.inside_colon = false;
                if let Some(replacement) = resolve_mention(&cursor.shortname, profiles) {
                    out.truncate(cursor.span_start);
                    out.push_str(&replacement);
                    pos = next;
                }
                // On a miss the same colon comes round again, this time as an opener.
                continue;
            }
        } else if !cursor.inside_tag && cursor.inside_colon && !ch.is_whitespace() {
            cursor.shortname.push(ch);
        }

        out.push(ch);
        pos = next;
    }

    out
}

fn resolve_mention(shortname: &str, profiles: &ProfileEmojiMap) -> Option<String> {
    let name = shortname.strip_prefix('@')?;
    let emoji = profiles.get(name)?;
    Some(mention_fragment(shortname, name, emoji))
}

pub fn mention_fragment(shortname: &str, name: &str, emoji: &ProfileEmoji) -> String {
    format!(
        r#"<a href="{href}" class="profile-emoji" data-account-name="{name}"><img draggable="false" class="emojione" alt=":{shortname}:" title=":{shortname}:" src="{src}" /></a>"#,
        href = emoji.profile_url,
        src = emoji.image_url,
    )
}

pub struct ProfileMentions;

impl Transformer for ProfileMentions {
    fn transform(&self, text: String, ctx: &EmojiContext<'_>) -> String {
        profile_emojify(&text, ctx.profiles)
    }
}
