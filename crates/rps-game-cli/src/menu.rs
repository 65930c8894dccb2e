//! Menu, player input and the rules table.

use rps_game_core::{MoveSet, RelationTable};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Corner label of the rules table
const TABLE_CORNER: &str = "v PC\\User >";

/// One line of player input, parsed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Exit,
    Help,
    /// 0-based index into the move set
    Move(usize),
    Invalid,
}

impl Selection {
    /// Parse `0`, `?` or a 1-based move number against a set of `count` moves
    pub fn parse(input: &str, count: usize) -> Selection {
        let input = input.trim();
        if input == "?" {
            return Selection::Help;
        }
        match input.parse::<usize>() {
            Ok(0) => Selection::Exit,
            Ok(n) if n <= count => Selection::Move(n - 1),
            _ => Selection::Invalid,
        }
    }
}

pub fn write_menu<W: Write>(out: &mut W, moves: &MoveSet) -> io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (i, name) in moves.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, name)?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "? - help")
}

/// Rules table: rows are the computer's move, columns the player's, and each
/// cell is the player's result.
pub fn write_rules<W: Write>(out: &mut W, moves: &MoveSet, table: &RelationTable) -> io::Result<()> {
    let mut rows: Vec<Vec<&str>> = Vec::with_capacity(moves.len() + 1);
    rows.push(std::iter::once(TABLE_CORNER).chain(moves.iter()).collect());
    for (pc, pc_name) in moves.iter().enumerate() {
        let mut row = vec![pc_name];
        row.extend((0..moves.len()).map(|user| table.get(user, pc).as_str()));
        rows.push(row);
    }

    let widths: Vec<usize> = (0..=moves.len())
        .map(|col| rows.iter().map(|r| r[col].width()).max().unwrap_or(0))
        .collect();

    writeln!(out, "Rules:")?;
    writeln!(out, "{}", border(&widths, '╔', '═', '╤', '╗'))?;
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            writeln!(out, "{}", border(&widths, '╟', '─', '┼', '╢'))?;
        }
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            // Pad by display width; `{:<n}` counts chars and misaligns wide glyphs.
            .map(|(cell, width)| format!(" {}{} ", cell, " ".repeat(width - cell.width())))
            .collect();
        writeln!(out, "║{}║", cells.join("│"))?;
    }
    writeln!(out, "{}", border(&widths, '╚', '═', '╧', '╝'))
}

fn border(widths: &[usize], left: char, fill: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("{}{}{}", left, segments.join(mid.to_string().as_str()), right)
}
