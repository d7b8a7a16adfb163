//! Terminal LeetCode stats card.
//!
//! Library surface of the `leetcard` binary, exposed for the render tests.

pub mod card_display;
