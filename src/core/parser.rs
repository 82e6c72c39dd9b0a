//! Coordinate text parsing.
//!
//! Input is one coordinate pair per line. Each line is matched against an
//! ordered list of [`CoordinateFormat`]s and the first one that extracts a
//! pair wins. The pair may sit anywhere in the line; the leftmost one is
//! taken and surrounding labels are ignored. The extracted pair is then
//! range checked.

use crate::domain::model::GeoPoint;
use crate::utils::error::{GeoError, Result};
use regex::Regex;
use std::sync::LazyLock;

const NUMBER: &str = r"[-+]?(?:\d+(?:\.\d*)?|\.\d+)";

static BARE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({NUMBER})\s*[,\s]\s*({NUMBER})")).expect("bare pair pattern")
});

static DEGREE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"({NUMBER})\s*(°)?\s*(?:([NSns])\b)?\s*[,\s]\s*({NUMBER})\s*(°)?\s*(?:([EWew])\b)?"
    ))
    .expect("degree pair pattern")
});

/// Recognized line layouts, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateFormat {
    /// `lat, lng` or `lat lng`. Declines when the first value cannot be a
    /// latitude or the second carries a degree mark or hemisphere letter.
    Standard,
    /// `40.7128°N, 74.0060°W`; `S` and `W` force the value negative.
    DegreeAnnotated,
    /// Two bare numbers; read as `lng, lat` when only the first exceeds 90 in magnitude.
    Reversed,
}

impl CoordinateFormat {
    pub const PRECEDENCE: [CoordinateFormat; 3] = [
        CoordinateFormat::Standard,
        CoordinateFormat::DegreeAnnotated,
        CoordinateFormat::Reversed,
    ];

    /// Returns `(lat, lng)` when the line has this layout. No range checking.
    pub fn extract(&self, line: &str) -> Option<(f64, f64)> {
        match self {
            CoordinateFormat::Standard => {
                let (first, second, rest) = bare_pair(line)?;
                (first.abs() <= 90.0 && !starts_with_annotation(rest)).then_some((first, second))
            }
            CoordinateFormat::DegreeAnnotated => degree_pair(line),
            CoordinateFormat::Reversed => {
                let (first, second, _) = bare_pair(line)?;
                if first.abs() > 90.0 && second.abs() <= 90.0 {
                    Some((second, first))
                } else {
                    Some((first, second))
                }
            }
        }
    }
}

/// Leftmost pair of bare numbers, with the text that follows it.
fn bare_pair(line: &str) -> Option<(f64, f64, &str)> {
    let caps = BARE_PAIR.captures(line)?;
    let first = caps[1].parse::<f64>().ok()?;
    let second = caps[2].parse::<f64>().ok()?;
    let end = caps.get(0)?.end();
    Some((first, second, &line[end..]))
}

/// `°`, or a lone hemisphere letter such as the `W` in `74.0060 W`. `New York` is a label.
fn starts_with_annotation(rest: &str) -> bool {
    let mut chars = rest.trim_start().chars();
    match chars.next() {
        Some('°') => true,
        Some(c) if "NSEWnsew".contains(c) => !chars.next().is_some_and(char::is_alphabetic),
        _ => false,
    }
}

fn degree_pair(line: &str) -> Option<(f64, f64)> {
    let caps = DEGREE_PAIR.captures(line)?;

    // 至少要有一個度數符號或半球字母，否則交給其他格式處理
    let annotated = [2, 3, 5, 6].iter().any(|&i| caps.get(i).is_some());
    if !annotated {
        return None;
    }

    let mut lat = caps[1].parse::<f64>().ok()?;
    if caps.get(3).is_some_and(|m| m.as_str().eq_ignore_ascii_case("s")) {
        lat = -lat.abs();
    }

    let mut lng = caps[4].parse::<f64>().ok()?;
    if caps.get(6).is_some_and(|m| m.as_str().eq_ignore_ascii_case("w")) {
        lng = -lng.abs();
    }

    Some((lat, lng))
}

/// Drops a trailing `// label` comment, so comment-only lines count as blank.
fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    }
}

/// Finds the first format that matches `line`, returning it with the extracted pair.
pub fn detect_format(line: &str) -> Option<(CoordinateFormat, f64, f64)> {
    let content = strip_comment(line.trim());
    CoordinateFormat::PRECEDENCE
        .iter()
        .find_map(|format| format.extract(content).map(|(lat, lng)| (*format, lat, lng)))
}

/// Parses and range checks a single non-blank line.
pub fn parse_line(line: &str) -> Result<GeoPoint> {
    let line = line.trim();
    let (_, lat, lng) = detect_format(line).ok_or_else(|| GeoError::ParseError {
        line: line.to_string(),
    })?;

    GeoPoint::from_source(lat, lng, line)
}

/// Parses every non-blank line of `input`, stopping at the first bad line.
///
/// Blank input yields an empty vector; see [`parse_non_empty`] for callers
/// that need at least one point.
pub fn parse_points(input: &str) -> Result<Vec<GeoPoint>> {
    input
        .split('\n')
        .map(str::trim)
        .filter(|line| !strip_comment(line).is_empty())
        .map(parse_line)
        .collect()
}

pub fn parse_non_empty(input: &str) -> Result<Vec<GeoPoint>> {
    let points = parse_points(input)?;
    if points.is_empty() {
        return Err(GeoError::no_valid_coordinates());
    }
    Ok(points)
}
