//! Property tests for the emoji scanners.
//!
//! Inputs are drawn from a small alphabet that is dense in the characters the
//! scanners care about (`:`, `<`, `>`, `&`, `;`, `@`, whitespace and the
//! sample table's emoji) so the interesting branches get hit often.

use std::collections::HashMap;

use emojify::emoji::{
    CustomEmojiMap, EmojiEntry, LookupTable, ProfileEmoji, ProfileEmojiMap, Scanner,
    profile_emojify,
};
use proptest::prelude::*;

fn table() -> LookupTable {
    LookupTable::from_entries([
        EmojiEntry::new("😀", "grinning", "1f600"),
        EmojiEntry::new("😀🏽", "grinning_tone3", "1f600-1f3fd"),
        EmojiEntry::new("👍", "thumbsup", "1f44d"),
    ])
}

fn custom() -> CustomEmojiMap {
    HashMap::from([
        (":a:".to_string(), "https://x/a.png".to_string()),
        (":ab:".to_string(), "https://x/ab.png".to_string()),
    ])
}

fn profiles() -> ProfileEmojiMap {
    HashMap::from([(
        "foo".to_string(),
        ProfileEmoji {
            image_url: "https://x/foo.png".into(),
            profile_url: "https://x/@foo".into(),
        },
    )])
}

fn scan(input: &str) -> String {
    let table = table();
    let custom = custom();
    Scanner::new(&table, &custom, "https://cdn.test").scan(input)
}

// -- Strategies --

/// Any mix of the characters the scanners branch on.
fn markup_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abfo@ :<>&;/=\"\t\nü😀🏽👍]{0,48}").expect("valid regex")
}

/// Text with no colon, no tag or reference opener and no table emoji.
fn inert_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 @>;/=\"\t\nü🏽✓.,!?]{0,64}").expect("valid regex")
}

/// A run of well-formed tags whose bodies contain shortcodes, emoji and references.
fn tags_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex("</?[abfo@ :&;=\"/😀🏽👍]{0,20}>").expect("valid regex"),
        0..8,
    )
    .prop_map(|tags| tags.concat())
}

/// Text that can never spell the only registered profile name.
fn unmatched_profile_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abe@ :<>&;/\t😀]{0,48}").expect("valid regex")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    #[test]
    fn scan_is_identity_on_inert_text(text in inert_text_strategy()) {
        prop_assert_eq!(scan(&text), text);
    }

    #[test]
    fn scan_passes_tags_through_byte_for_byte(tags in tags_strategy()) {
        prop_assert_eq!(scan(&tags), tags);
    }

    #[test]
    fn profile_scan_passes_tags_through_byte_for_byte(tags in tags_strategy()) {
        prop_assert_eq!(profile_emojify(&tags, &profiles()), tags);
    }

    #[test]
    fn scan_is_stable_on_its_own_output(text in markup_strategy()) {
        let once = scan(&text);
        prop_assert_eq!(scan(&once), once);
    }

    #[test]
    fn profile_scan_is_identity_without_a_match(text in unmatched_profile_strategy()) {
        prop_assert_eq!(profile_emojify(&text, &profiles()), text);
    }
}
