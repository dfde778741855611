//! Host-facing text: score line, choice lines, and the full round frame.

use crate::arena::RoundReport;
use crate::core::{Choice, Side, SideMap};

use super::render_tree;

/// `"AI 1: 3   AI 2: 1"`
#[must_use]
pub fn score_line(names: &SideMap<String>, scores: &SideMap<u32>) -> String {
    format!(
        "{}: {}   {}: {}",
        names[Side::A],
        scores[Side::A],
        names[Side::B],
        scores[Side::B]
    )
}

/// `"AI 1 chose: Rock"`
#[must_use]
pub fn choice_line(name: &str, choice: Choice) -> String {
    format!("{} chose: {}", name, choice)
}

/// Full text frame for one round: scores, tree, result, both choices.
#[must_use]
pub fn render_round(names: &SideMap<String>, report: &RoundReport) -> String {
    let scores = SideMap::new(report.score_a, report.score_b);
    let mut frame = Vec::with_capacity(5);
    frame.push(score_line(names, &scores));
    frame.push(render_tree(&report.stack));
    frame.push(report.outcome.to_string());
    for side in Side::BOTH {
        frame.push(choice_line(&names[side], report.choice(side)));
    }
    frame.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{ProgressStack, StackChange};
    use crate::rules::RoundOutcome;

    fn names() -> SideMap<String> {
        SideMap::new("AI 1".to_string(), "AI 2".to_string())
    }

    #[test]
    fn test_score_line() {
        assert_eq!(score_line(&names(), &SideMap::new(3, 1)), "AI 1: 3   AI 2: 1");
    }

    #[test]
    fn test_choice_line() {
        assert_eq!(choice_line("AI 2", Choice::Scissors), "AI 2 chose: Scissors");
    }

    #[test]
    fn test_render_round() {
        let report = RoundReport {
            round: 1,
            choice_a: Choice::Scissors,
            choice_b: Choice::Scissors,
            outcome: RoundOutcome::Tie,
            winner: None,
            score_a: 0,
            score_b: 0,
            stack: ProgressStack::new(),
            change: StackChange::Unchanged,
        };
        let frame = render_round(&names(), &report);
        let lines: Vec<_> = frame.split('\n').collect();

        assert_eq!(lines.first(), Some(&"AI 1: 0   AI 2: 0"));
        assert!(lines.contains(&"It's a tie!"));
        assert_eq!(lines[lines.len() - 2], "AI 1 chose: Scissors");
        assert_eq!(lines[lines.len() - 1], "AI 2 chose: Scissors");
    }
}
