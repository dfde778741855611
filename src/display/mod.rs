//! Plain-text rendering for hosts without a canvas.

mod labels;
mod tree;

pub use labels::{choice_line, render_round, score_line};
pub use tree::{frame_height, render_tree};
