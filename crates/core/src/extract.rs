//! Epicenter extraction from earthquake bulletin text.
//!
//! Three publisher layouts are recognized, tried in a fixed priority
//! order with the first match winning. An unrecognized bulletin yields
//! an empty span, never an error.

use crate::types::{BulletinFormat, Extraction};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// JMA bulletins carry the epicenter inside full-width parentheses,
/// e.g. （北緯４２．７度、東経１４１．９度）.
static JMA_PAREN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"（([^）]+)）").unwrap());

/// NHK pages label the epicenter line 緯度 / 経度, terminated by CRLF.
static NHK_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"緯度 / 経度(.+)\r\n").unwrap());

/// USGS entries use degree-symbol notation, e.g. 42.588°N 141.977°E.
static USGS_DEGREE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([0-9.]+°[NSns]\s+[0-9.]+°[EWew])").unwrap());

/// Label stripped from a matched NHK line.
const NHK_LABEL: &str = "緯度 / 経度";

/// One detection rule: the pattern that identifies a publisher layout
/// and the cleanup applied to its match.
struct LayoutRule {
    format: BulletinFormat,
    matcher: &'static LazyLock<Regex>,
    cleanup: fn(&Captures) -> String,
}

/// Rules in priority order. The parenthesized JMA form is always tried
/// first, so a bulletin containing any full-width parenthesized run
/// short-circuits there even when a later layout is also present.
static RULES: &[LayoutRule] = &[
    LayoutRule {
        format: BulletinFormat::Jma,
        matcher: &JMA_PAREN_REGEX,
        // the whole span, parentheses included
        cleanup: |caps| caps[0].to_string(),
    },
    LayoutRule {
        format: BulletinFormat::Nhk,
        matcher: &NHK_LABEL_REGEX,
        cleanup: |caps| {
            caps[0]
                .replace(NHK_LABEL, "")
                .replace(" \t", "")
                .replace("\r\n", "")
        },
    },
    LayoutRule {
        format: BulletinFormat::Usgs,
        matcher: &USGS_DEGREE_REGEX,
        // a span wrapped across lines keeps CRLF plus indent; drop it
        cleanup: |caps| caps[0].replace("\r\n    ", ""),
    },
];

/// Try each publisher layout in priority order, returning the layout
/// that matched and the cleaned coordinate span.
///
/// Detection is stateless: every call re-evaluates from the first rule.
pub fn detect(text: &str) -> Option<Extraction> {
    for rule in RULES {
        if let Some(caps) = rule.matcher.captures(text) {
            log::debug!("bulletin matched the {} layout", rule.format);
            return Some(Extraction {
                format: rule.format,
                span: (rule.cleanup)(&caps),
            });
        }
    }
    None
}

/// Extract the epicenter coordinate span from bulletin text.
///
/// Returns the empty string when no publisher layout matches; an empty
/// span is the defined "not found" state, not a failure.
pub fn extract(text: &str) -> String {
    detect(text).map(|e| e.span).unwrap_or_default()
}
