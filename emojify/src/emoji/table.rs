use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

/// One registered Unicode emoji sequence and the asset it renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiEntry {
    pub sequence: String,
    pub display_name: String,
    pub asset_file: String,
}

impl EmojiEntry {
    pub fn new(
        sequence: impl Into<String>,
        display_name: impl Into<String>,
        asset_file: impl Into<String>,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            display_name: display_name.into(),
            asset_file: asset_file.into(),
        }
    }
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    entry: Option<usize>,
}

/// Prefix trie over emoji sequences, keyed by code point.
///
/// Read-only once built, so a single table can back any number of
/// concurrent scans.
#[derive(Debug, Default)]
pub struct LookupTable {
    root: TrieNode,
    entries: Vec<EmojiEntry>,
}

static STANDARD: Lazy<LookupTable> = Lazy::new(|| {
    let table = LookupTable::from_entries(standard_entries());
    debug!("built standard emoji table with {} sequences", table.len());
    table
});

impl LookupTable {
    /// Build a table from `entries`. When two entries share a sequence the
    /// first one is kept.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = EmojiEntry>,
    {
        let mut table = Self::default();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    /// The process-wide table covering every emoji known to the `emojis` crate.
    pub fn standard() -> &'static LookupTable {
        &STANDARD
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, sequence: &str) -> Option<&EmojiEntry> {
        self.search(sequence)
            .filter(|entry| entry.sequence.len() == sequence.len())
    }

    /// Longest registered sequence that is a prefix of `suffix`.
    pub fn search(&self, suffix: &str) -> Option<&EmojiEntry> {
        let mut node = &self.root;
        let mut best = None;

        for ch in suffix.chars() {
            match node.children.get(&ch) {
                Some(next) => node = next,
                None => break,
            }
            if let Some(idx) = node.entry {
                best = Some(idx);
            }
        }

        best.map(|idx| &self.entries[idx])
    }

    fn insert(&mut self, entry: EmojiEntry) {
        if entry.sequence.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in entry.sequence.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.entry.is_some() {
            return;
        }

        node.entry = Some(self.entries.len());
        self.entries.push(entry);
    }
}

fn standard_entries() -> Vec<EmojiEntry> {
    let mut entries = Vec::new();

    for emoji in emojis::iter() {
        push_emoji(&mut entries, emoji);
        if let Some(variants) = emoji.skin_tones() {
            for variant in variants {
                push_emoji(&mut entries, variant);
            }
        }
    }

    entries
}

fn push_emoji(entries: &mut Vec<EmojiEntry>, emoji: &emojis::Emoji) {
    let sequence = emoji.as_str();
    let display_name = emoji
        .shortcode()
        .map(str::to_string)
        .unwrap_or_else(|| shortcode_from_name(emoji.name()));
    let asset_file = asset_file_name(sequence);

    entries.push(EmojiEntry::new(sequence, display_name.clone(), asset_file.clone()));

    // Plenty of input arrives without the variation selector, e.g. a bare U+2764.
    let unqualified: String = sequence.chars().filter(|&c| c != VARIATION_SELECTOR).collect();
    if !unqualified.is_empty() && unqualified != sequence {
        entries.push(EmojiEntry::new(unqualified, display_name, asset_file));
    }
}

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Emojione file naming: lowercase hex code points, at least four digits each,
/// joined by `-`, without U+FE0F.
pub fn asset_file_name(sequence: &str) -> String {
    sequence
        .chars()
        .filter(|&c| c != VARIATION_SELECTOR)
        .map(|c| format!("{:04x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

fn shortcode_from_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }

    out
}
