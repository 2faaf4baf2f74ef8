//! Keyword heuristics over the free-text application (应用) section.
//!
//! Both functions are best effort. A keyword miss is not an error: a domain
//! with no matching clause receives the whole text, and a text with no
//! fortune keyword is labelled neutral.

use yijing_types::{Fortune, Guidance};

const CAREER: &[&str] = &["事业", "创业", "工作"];
const WEALTH: &[&str] = &["财运", "财富", "投资"];
const RELATIONSHIP: &[&str] = &["感情", "爱情", "婚姻"];
const HEALTH: &[&str] = &["健康", "身体"];

fn is_clause_break(c: char) -> bool {
    matches!(c, ',' | '，' | '。' | '.' | ';' | '；')
}

/// First clause containing the earliest-listed keyword present in `text`.
///
/// Keywords are ranked: 事业 beats 工作 even when 工作 comes first in the text.
fn domain_clause(text: &str, keywords: &[&str]) -> String {
    keywords
        .iter()
        .find_map(|keyword| {
            text.split(is_clause_break)
                .map(str::trim)
                .find(|clause| clause.contains(keyword))
        })
        .unwrap_or_else(|| text.trim())
        .to_string()
}

/// Split guidance text into the four life domains.
#[must_use]
pub fn split_guidance(text: &str) -> Guidance {
    Guidance {
        career: domain_clause(text, CAREER),
        relationship: domain_clause(text, RELATIONSHIP),
        health: domain_clause(text, HEALTH),
        wealth: domain_clause(text, WEALTH),
    }
}

/// 大吉 outranks 吉, which outranks 凶.
#[must_use]
pub fn fortune(text: &str) -> Fortune {
    if text.contains("大吉") {
        Fortune::GreatFortune
    } else if text.contains('吉') {
        Fortune::Fortune
    } else if text.contains('凶') {
        Fortune::Misfortune
    } else {
        Fortune::Neutral
    }
}
