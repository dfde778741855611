//! Text rendering of the progress stack as a small tree.
//!
//! The frame always has the same height; tiers that are not revealed leave
//! blank rows, so successive frames line up when printed in place.

use crate::progress::{ProgressStack, Tier};

/// Rows drawn for each tier, top of the tree first.
fn rows(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Star => &["     *"],
        Tier::Top => &["    / \\", "   /   \\"],
        Tier::Middle => &["  /     \\"],
        Tier::Bottom => &[" /       \\", "/_________\\"],
        Tier::Trunk => &["    | |"],
    }
}

/// Total rows in a frame.
#[must_use]
pub fn frame_height() -> usize {
    Tier::ORDER.iter().map(|tier| rows(*tier).len()).sum()
}

/// Render the stack. Hidden tiers become empty lines.
///
/// ```
/// use rps_arena::display::render_tree;
/// use rps_arena::progress::ProgressStack;
///
/// let mut stack = ProgressStack::new();
/// stack.step(1);
/// assert!(render_tree(&stack).starts_with("     *\n"));
/// ```
#[must_use]
pub fn render_tree(stack: &ProgressStack) -> String {
    let mut lines = Vec::with_capacity(frame_height());
    for tier in Tier::ORDER {
        let shown = stack.contains(tier);
        for row in rows(tier) {
            lines.push(if shown { *row } else { "" });
        }
    }
    lines.join("\n")
}
