//! Pattern checks - repeated runs and sequential runs.

use secrecy::ExposeSecret;

use super::CheckContext;
use crate::types::WeaknessCode;

/// Shortest run of identical or sequential characters that counts as a hit.
pub const RUN_LENGTH: usize = 3;

/// Keyboard rows matched as sequences, forward or reversed.
pub const KEYBOARD_ROWS: &[&str] = &["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Flags runs of [`RUN_LENGTH`] or more identical consecutive characters.
pub fn repeated_run_check(ctx: &CheckContext<'_>) -> Option<WeaknessCode> {
    let chars: Vec<char> = ctx.candidate.expose_secret().chars().collect();

    let mut run = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            run += 1;
            if run >= RUN_LENGTH {
                return Some(WeaknessCode::RepeatedRun);
            }
        } else {
            run = 1;
        }
    }
    None
}

/// Flags runs of [`RUN_LENGTH`] or more characters that ascend or descend
/// in code-point order ("abc", "321"), or that walk a keyboard row in
/// either direction ("qwe", "lkj").
pub fn sequential_run_check(ctx: &CheckContext<'_>) -> Option<WeaknessCode> {
    let chars: Vec<char> = ctx.candidate.expose_secret().chars().collect();
    if chars.len() < RUN_LENGTH {
        return None;
    }

    for window in chars.windows(RUN_LENGTH) {
        let ascending = window
            .windows(2)
            .all(|pair| pair[1] as u32 == pair[0] as u32 + 1);
        let descending = window
            .windows(2)
            .all(|pair| (pair[1] as u32) + 1 == pair[0] as u32);
        if ascending || descending {
            return Some(WeaknessCode::SequentialRun);
        }
    }

    let lowered: Vec<char> = chars
        .iter()
        .flat_map(|c| c.to_lowercase())
        .collect();
    for window in lowered.windows(RUN_LENGTH) {
        let forward: String = window.iter().collect();
        let backward: String = window.iter().rev().collect();
        if KEYBOARD_ROWS
            .iter()
            .any(|row| row.contains(&forward) || row.contains(&backward))
        {
            return Some(WeaknessCode::SequentialRun);
        }
    }

    None
}
