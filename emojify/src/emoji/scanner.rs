//! Single left-to-right pass that swaps Unicode emoji and custom `:shortcode:`
//! tokens for `<img>` markup.
//!
//! Existing tags (`<...>`) and character references (`&...;`) are copied
//! through untouched and never searched for tokens. Anything the pass does not
//! recognise is emitted exactly as it came in.

use super::custom::CustomEmojiMap;
use super::table::{EmojiEntry, LookupTable};
use super::traits::{EmojiContext, Transformer};

/// Outcome of trying to read a `:shortcode:` at a given colon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The span up to byte `end` (exclusive, closing colon included) is replaced by `fragment`.
    Replaced { fragment: String, end: usize },
    /// Not a known shortcode; only the opening colon should be consumed.
    Declined,
}

#[derive(Debug)]
enum Token<'t> {
    Tag { at: usize, terminator: char },
    Colon(usize),
    Unicode { at: usize, entry: &'t EmojiEntry },
}

pub struct Scanner<'a> {
    table: &'a LookupTable,
    custom: &'a CustomEmojiMap,
    asset_host: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(table: &'a LookupTable, custom: &'a CustomEmojiMap, asset_host: &'a str) -> Self {
        Self {
            table,
            custom,
            asset_host,
        }
    }

    pub fn scan(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() + 64);
        let mut rest = input;

        while let Some(token) = self.next_token(rest) {
            match token {
                Token::Tag { at, terminator } => {
                    // Unterminated tag: give up and flush the remainder as-is.
                    let Some(offset) = rest[at + 1..].find(terminator) else {
                        break;
                    };
                    let end = at + 1 + offset + terminator.len_utf8();
                    out.push_str(&rest[..end]);
                    rest = &rest[end..];
                }
                Token::Colon(at) => match resolve_shortcode(rest, at, self.custom) {
                    Resolution::Replaced { fragment, end } => {
                        out.push_str(&rest[..at]);
                        out.push_str(&fragment);
                        rest = &rest[end..];
                    }
                    Resolution::Declined => {
                        out.push_str(&rest[..=at]);
                        rest = &rest[at + 1..];
                    }
                },
                Token::Unicode { at, entry } => {
                    out.push_str(&rest[..at]);
                    out.push_str(&unicode_fragment(entry, self.asset_host));
                    rest = &rest[at + entry.sequence.len()..];
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Step one code point at a time until a tag marker, a colon or an
    /// emoji sequence starts at the cursor.
    fn next_token(&self, text: &str) -> Option<Token<'a>> {
        text.char_indices().find_map(|(at, ch)| match ch {
            '<' => Some(Token::Tag {
                at,
                terminator: '>',
            }),
            '&' => Some(Token::Tag {
                at,
                terminator: ';',
            }),
            ':' => Some(Token::Colon(at)),
            _ => self
                .table
                .search(&text[at..])
                .map(|entry| Token::Unicode { at, entry }),
        })
    }
}

/// Try to read a custom shortcode whose opening colon sits at byte `at`.
///
/// The candidate runs to the next colon. It is rejected when there is no
/// closing colon, when a `<` shows up before it, or when the text between
/// (colons included) is not a key of `custom`.
pub fn resolve_shortcode(text: &str, at: usize, custom: &CustomEmojiMap) -> Resolution {
    let after = at + 1;
    let Some(close) = text[after..].find(':').map(|offset| after + offset) else {
        return Resolution::Declined;
    };
    if text[after..close].contains('<') {
        return Resolution::Declined;
    }

    let end = close + 1;
    let shortname = &text[at..end];
    match custom.get(shortname) {
        Some(url) => Resolution::Replaced {
            fragment: custom_fragment(shortname, url),
            end,
        },
        None => Resolution::Declined,
    }
}

pub fn unicode_fragment(entry: &EmojiEntry, asset_host: &str) -> String {
    format!(
        r#"<img draggable="false" class="emojione" alt="{seq}" title=":{name}:" src="{host}/emoji/{file}.svg" />"#,
        seq = entry.sequence,
        name = entry.display_name,
        host = asset_host,
        file = entry.asset_file,
    )
}

pub fn custom_fragment(shortname: &str, url: &str) -> String {
    format!(
        r#"<img draggable="false" class="emojione" alt="{shortname}" title="{shortname}" src="{url}" />"#
    )
}

/// Pipeline pass wrapping [`Scanner`] with a fixed table and asset host.
pub struct EmojiScan {
    table: &'static LookupTable,
    asset_host: String,
}

impl EmojiScan {
    pub fn new(table: &'static LookupTable, asset_host: impl Into<String>) -> Self {
        Self {
            table,
            asset_host: asset_host.into(),
        }
    }

    pub fn standard(asset_host: impl Into<String>) -> Self {
        Self::new(LookupTable::standard(), asset_host)
    }
}

impl Transformer for EmojiScan {
    fn transform(&self, text: String, ctx: &EmojiContext<'_>) -> String {
        Scanner::new(self.table, ctx.custom, &self.asset_host).scan(&text)
    }
}

/// Run the scanner with the standard Unicode table.
pub fn emojify(input: &str, custom: &CustomEmojiMap, asset_host: &str) -> String {
    Scanner::new(LookupTable::standard(), custom, asset_host).scan(input)
}
