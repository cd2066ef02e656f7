use lazy_static::lazy_static;
use regex::Regex;

use super::Character;

const DEFAULT_DURATION_SECS: f64 = 5.0;

lazy_static! {
    static ref DIGITS_REGEX: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// A table row from a storyboard, before actions are extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryboardRow {
    pub character: Character,
    pub step: String,
    pub step_name: String,
    pub duration: f64,
    pub animation_hint: String,
    pub dialogue: String,
}

/// Collect the scene rows of a markdown storyboard.
///
/// `## ` headings select the current character; rows before the first
/// recognised heading, header and separator rows, and rows with fewer than
/// four cells are skipped.
pub fn parse_rows(input: &str) -> Vec<StoryboardRow> {
    let mut rows = Vec::new();
    let mut current: Option<Character> = None;

    for line in input.lines() {
        let line = line.trim();

        if line.starts_with("## ") {
            if let Some(character) = Character::from_heading(line) {
                current = Some(character);
            }
            continue;
        }

        let Some(character) = current else {
            continue;
        };
        if !line.contains('|') {
            continue;
        }

        if let Some(row) = parse_row(line, character) {
            rows.push(row);
        }
    }

    rows
}

fn parse_row(line: &str, character: Character) -> Option<StoryboardRow> {
    let cells: Vec<&str> = line
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect();

    if cells.len() < 4 {
        return None;
    }

    let step = cells[0];
    if step.contains("Step") || step.contains("---") || step.contains('#') {
        return None;
    }

    Some(StoryboardRow {
        character,
        step: step.to_string(),
        step_name: cells[1].to_string(),
        duration: parse_duration(cells[2]),
        animation_hint: cells[3].to_string(),
        dialogue: cells.get(4).map(|s| s.to_string()).unwrap_or_default(),
    })
}

/// Seconds from strings like "5s" or "20 sec"; the first digit run wins.
pub fn parse_duration(cell: &str) -> f64 {
    DIGITS_REGEX
        .find(cell)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(DEFAULT_DURATION_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORYBOARD: &str = "\
# ToothBuddy Storyboard

| Step | Name | Duration | Animation | Dialogue |
|------|------|----------|-----------|----------|
| 0 | Orphan | 3s | idle | Nobody owns this row |

## Luna the Tooth Fairy

| Step | Name | Duration | Animation | Dialogue |
|------|------|----------|-----------|----------|
| 1 | Intro | 5s | wave | Hi there, let's wave! |
| 2 | Paste | ~8 seconds | paste | Squeeze a little paste |
| 3 | Short | 4s |
| 4 | Quiet | soon | idle |

## Captain Sparkle

| 1 | Rinse | 10s | rinse | Now rinse! |
";

    #[test]
    fn parses_rows_per_character() {
        let rows = parse_rows(STORYBOARD);
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].character, Character::Luna);
        assert_eq!(rows[0].step, "1");
        assert_eq!(rows[0].step_name, "Intro");
        assert_eq!(rows[0].duration, 5.0);
        assert_eq!(rows[0].animation_hint, "wave");
        assert_eq!(rows[0].dialogue, "Hi there, let's wave!");

        assert_eq!(rows[1].duration, 8.0);

        assert_eq!(rows[2].step, "4");
        assert_eq!(rows[2].duration, DEFAULT_DURATION_SECS);
        assert_eq!(rows[2].dialogue, "");

        assert_eq!(rows[3].character, Character::Captain);
        assert_eq!(rows[3].duration, 10.0);
    }

    #[test]
    fn unknown_heading_keeps_character() {
        let rows = parse_rows("## Captain\n## Extras\n| 7 | Bye | 2s | wave | Bye! |\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].character, Character::Captain);
    }

    #[test]
    fn skips_rows_without_character() {
        assert!(parse_rows("| 1 | Intro | 5s | wave | Hi |").is_empty());
    }

    #[test]
    fn duration_uses_first_digit_run() {
        assert_eq!(parse_duration("20s"), 20.0);
        assert_eq!(parse_duration("15-20s"), 15.0);
        assert_eq!(parse_duration("a while"), 5.0);
    }

    #[test]
    fn duration_ignores_non_ascii_digits() {
        assert_eq!(parse_duration("x\u{0663} 7s"), 7.0);
    }

    #[test]
    fn empty_input() {
        assert!(parse_rows("").is_empty());
    }
}
