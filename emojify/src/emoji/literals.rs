use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::traits::{EmojiContext, Transformer};

struct LiteralRule {
    re: Regex,
    file: &'static str,
    attrs: &'static str,
}

static RULES: Lazy<Vec<LiteralRule>> = Lazy::new(|| {
    [
        (r"5,?000\s*兆円", "5000tyoen.svg", r#"style="height: 1.8em;""#),
        (r"ニコる", "nicoru.svg", r#"style="height: 1.5em;""#),
        (r"バジリスク\s*タイム", "basilisktime.png", r#"height="40""#),
        (r"熱盛", "atumori.png", r#"height="51""#),
        (r"欲しい！", "hosii.png", r#"height="30""#),
    ]
    .into_iter()
    .map(|(pattern, file, attrs)| LiteralRule {
        re: Regex::new(pattern).expect("literal emoji regex"),
        file,
        attrs,
    })
    .collect()
});

/// Swap the instance's catch-phrases for their images. Rules run in order,
/// each over the previous rule's output.
pub fn rewrite_literals(input: &str) -> String {
    RULES.iter().fold(input.to_string(), |text, rule| {
        rule.re
            .replace_all(&text, |caps: &Captures| {
                format!(
                    r#"<img alt="{}" src="/emoji/{}" {}/>"#,
                    &caps[0], rule.file, rule.attrs
                )
            })
            .into_owned()
    })
}

pub struct LiteralImages;

impl Transformer for LiteralImages {
    fn transform(&self, text: String, _ctx: &EmojiContext<'_>) -> String {
        rewrite_literals(&text)
    }
}
