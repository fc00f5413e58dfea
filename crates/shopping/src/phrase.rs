//! Free-text shopping commands, such as the transcript of a voice request.
//!
//! `"i need 2 apples"`, `"remove milk"` or `"find organic apples under $5 by farmfresh"`
//! are turned into a [`ParsedCommand`] the API layer can execute.

use std::sync::LazyLock;

use basket_catalog::SearchFilters;
use basket_shared::Quantity;
use regex::Regex;
use serde::Serialize;

static RE_LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(set|switch) (language|lang) (to )?(english|hindi|en|hi|en-us|hi-in)").unwrap()
});
static RE_REMOVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(remove|delete|drop)\b\s+(\d+\s+)?([a-zA-Z ]+)").unwrap());
static RE_ADD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(add|buy|need|want|purchase|get)\b\s+(\d+\s+)?([a-zA-Z ]+)").unwrap()
});
static RE_SEARCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(find|search|look\s*for)\b\s+(.*)").unwrap());
static RE_CLEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(clear|reset) (list|all)\b").unwrap());
static RE_UNDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"under\s*\$?(\d+(?:\.\d+)?)").unwrap());
static RE_BY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"by\s+([a-zA-Z']+)").unwrap());
static RE_ORGANIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\borganic\b").unwrap());

pub const ENGLISH: &str = "en-US";
pub const HINDI: &str = "hi-IN";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ParsedCommand {
    SetLanguage { lang: String },
    Add { item: String, qty: Quantity },
    Remove { item: String, qty: Quantity },
    Search { query: String, filters: SearchFilters },
    Clear,
    Unknown { raw: String },
}

/// Parse a free-text command. Blank input yields `None`; anything else
/// that matches no rule comes back as [`ParsedCommand::Unknown`].
pub fn parse_phrase(raw: &str) -> Option<ParsedCommand> {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = RE_LANGUAGE.captures(&text) {
        let lang = if caps[4].starts_with("hi") { HINDI } else { ENGLISH };
        return Some(ParsedCommand::SetLanguage {
            lang: lang.to_owned(),
        });
    }

    if let Some(caps) = RE_REMOVE.captures(&text) {
        let (item, qty) = item_and_qty(&caps);
        return Some(ParsedCommand::Remove { item, qty });
    }

    if let Some(caps) = RE_ADD.captures(&text) {
        let (item, qty) = item_and_qty(&caps);
        return Some(ParsedCommand::Add { item, qty });
    }

    if let Some(caps) = RE_SEARCH.captures(&text) {
        return Some(search(caps[2].trim()));
    }

    if RE_CLEAR.is_match(&text) {
        return Some(ParsedCommand::Clear);
    }

    Some(ParsedCommand::Unknown {
        raw: raw.to_owned(),
    })
}

fn item_and_qty(caps: &regex::Captures<'_>) -> (String, Quantity) {
    let qty = caps
        .get(2)
        .and_then(|m| m.as_str().trim().parse().ok())
        .unwrap_or(1);

    (caps[3].trim().to_owned(), qty)
}

fn search(query: &str) -> ParsedCommand {
    let max_price = RE_UNDER
        .captures(query)
        .and_then(|caps| caps[1].parse::<f64>().ok());
    let brand = RE_BY.captures(query).map(|caps| caps[1].to_owned());
    let organic = RE_ORGANIC.is_match(query);

    let item = RE_UNDER.replace(query, "");
    let item = RE_BY.replace(&item, "");
    let item = RE_ORGANIC.replace(&item, "");
    let item = match item.trim() {
        "" => query,
        item => item,
    };

    ParsedCommand::Search {
        query: item.to_owned(),
        filters: SearchFilters {
            brand,
            max_price,
            organic: organic.then_some(true),
        },
    }
}
