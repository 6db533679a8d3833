//! Line-by-line block scoring.
//!
//! Each of a block's eight lines is scanned cell by cell with a running sum.
//! A line holding both marks is dead and scores 0. Otherwise it scores by how
//! many marks one side has on it:
//!
//! | Marks on line | Perspective side | Opponent |
//! |---------------|------------------|----------|
//! | 1             | +1               | -1       |
//! | 2             | +20              | -20      |
//! | 3 (won)       | +200             | -200     |

use ninefold_core::{Block, LINES, Mark};

/// Score for one mark on an otherwise open line.
pub const ONE_IN_LINE: i32 = 1;

/// Score for two marks on an otherwise open line.
pub const TWO_IN_LINE: i32 = 20;

/// Score for a completed line.
pub const LINE_WIN: i32 = 200;

/// Score a single line of three marks from `perspective`'s point of view.
pub fn line_score(line: [Mark; 3], perspective: Mark) -> i32 {
    let mut sum = 0;

    for mark in line {
        if mark.is_empty() {
            continue;
        }

        if mark == perspective {
            match sum {
                s if s < 0 => return 0,
                0 => sum = ONE_IN_LINE,
                ONE_IN_LINE => sum = TWO_IN_LINE,
                _ => return LINE_WIN,
            }
        } else {
            match sum {
                s if s > 0 => return 0,
                0 => sum = -ONE_IN_LINE,
                s if s == -ONE_IN_LINE => sum = -TWO_IN_LINE,
                _ => return -LINE_WIN,
            }
        }
    }

    sum
}

/// Sum of [`line_score`] over all eight lines, without caching.
pub fn score_block(block: &Block, perspective: Mark) -> i32 {
    LINES
        .iter()
        .map(|line| line_score(block.line(line), perspective))
        .sum()
}
