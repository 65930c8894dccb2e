//! Interactive game loop.

use crate::menu::{write_menu, write_rules, Selection};
use anyhow::{anyhow, Result};
use rps_game_core::{MoveSet, Outcome, RelationTable, Round, RoundReveal, RuleEngine};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Running score for the player
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::AWins => self.wins += 1,
            Outcome::BWins => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Session state that outlives individual rounds
pub struct Session {
    moves: MoveSet,
    table: RelationTable,
    key_bits: u32,
    json: bool,
}

impl Session {
    pub fn new(moves: MoveSet, key_bits: u32, json: bool) -> Self {
        let table = RuleEngine::build_relation_table(&moves);
        Self {
            moves,
            table,
            key_bits,
            json,
        }
    }

    /// Play rounds until the player exits or input ends
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<Tally> {
        let mut tally = Tally::default();
        let mut line = String::new();

        write_menu(out, &self.moves)?;
        loop {
            // Fresh key and computer move every iteration, help and typos included.
            let round = Round::start(&self.moves, self.key_bits)?;
            debug!(round_id = %round.id(), digest = %round.commitment(), "round started");

            writeln!(out, "HMAC: {}", round.commitment())?;
            write!(out, "Enter your move: ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            match Selection::parse(&line, self.moves.len()) {
                Selection::Exit => break,
                Selection::Help => write_rules(out, &self.moves, &self.table)?,
                Selection::Invalid => {
                    debug!(input = line.trim(), "invalid selection");
                    writeln!(
                        out,
                        "Invalid input! Please enter a valid move or type \"?\" for help."
                    )?;
                }
                Selection::Move(index) => {
                    let human = self
                        .moves
                        .get(index)
                        .ok_or_else(|| anyhow!("move index {} out of range", index + 1))?;
                    let reveal = round.play(human)?;
                    info!(round_id = %reveal.round_id, outcome = %reveal.outcome, "round finished");
                    self.report(out, &reveal)?;
                    tally.record(reveal.outcome);
                }
            }
        }

        info!(
            wins = tally.wins,
            losses = tally.losses,
            draws = tally.draws,
            "session ended"
        );
        Ok(tally)
    }

    fn report<W: Write>(&self, out: &mut W, reveal: &RoundReveal) -> Result<()> {
        writeln!(out, "Your move: {}", reveal.human_move)?;
        writeln!(out, "Computer move: {}", reveal.computer_move)?;
        let verdict = match reveal.outcome {
            Outcome::AWins => "Player 1 wins!",
            Outcome::BWins => "Computer wins!",
            Outcome::Draw => "It's a draw!",
        };
        writeln!(out, "{}", verdict)?;
        writeln!(out, "HMAC key: {}", reveal.key.as_hex())?;
        if self.json {
            writeln!(out, "{}", serde_json::to_string(reveal)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_game_core::{Commitment, SecretKey, DEFAULT_KEY_BITS};
    use std::io::Cursor;

    fn play(script: &str, json: bool) -> (Tally, String) {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let session = Session::new(moves, DEFAULT_KEY_BITS, json);
        let mut out = Vec::new();
        let tally = session.run(Cursor::new(script), &mut out).unwrap();
        (tally, String::from_utf8(out).unwrap())
    }

    fn field<'a>(output: &'a str, prefix: &str) -> Vec<&'a str> {
        output
            .lines()
            .filter_map(|l| l.split("Enter your move: ").last())
            .filter_map(|l| l.strip_prefix(prefix))
            .collect()
    }

    #[test]
    fn test_exit_immediately() {
        let (tally, output) = play("0\n", false);
        assert_eq!(tally, Tally::default());
        assert!(output.starts_with("Available moves:\n1 - rock\n"));
        assert_eq!(field(&output, "HMAC: ").len(), 1);
        assert!(!output.contains("HMAC key:"));
    }

    #[test]
    fn test_round_reveals_verifiable_key() {
        let (tally, output) = play("2\n0\n", false);
        assert_eq!(tally.wins + tally.losses + tally.draws, 1);

        let digests = field(&output, "HMAC: ");
        let keys = field(&output, "HMAC key: ");
        let computer = field(&output, "Computer move: ");
        assert_eq!(field(&output, "Your move: "), ["paper"]);
        assert_eq!(keys.len(), 1);

        let key = SecretKey::from_hex(keys[0]).unwrap();
        let digest = Commitment::from_hex(digests[0]).unwrap();
        assert!(digest.verify(&key, computer[0]));
    }

    #[test]
    fn test_verdict_matches_rules() {
        let (tally, output) = play("1\n", false);
        let computer = field(&output, "Computer move: ")[0];
        let expected = match computer {
            "rock" => "It's a draw!",
            "paper" => "Computer wins!",
            _ => "Player 1 wins!",
        };
        assert!(output.lines().any(|l| l == expected), "{output}");
        assert_eq!(tally.wins + tally.losses + tally.draws, 1);
    }

    #[test]
    fn test_help_and_invalid_input_start_new_rounds() {
        let (tally, output) = play("?\nlizard\n7\n0\n", false);
        assert_eq!(tally, Tally::default());
        assert!(output.contains("Rules:"));
        assert!(output.contains("v PC\\User >"));
        assert_eq!(
            output
                .matches("Invalid input! Please enter a valid move or type \"?\" for help.")
                .count(),
            2
        );

        let digests = field(&output, "HMAC: ");
        assert_eq!(digests.len(), 4);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (tally, output) = play("3\n", false);
        assert_eq!(tally.wins + tally.losses + tally.draws, 1);
        assert_eq!(field(&output, "HMAC: ").len(), 2);
    }

    #[test]
    fn test_json_reveal_line() {
        let (_, output) = play("1\n0\n", true);
        let line = output
            .lines()
            .find(|l| l.starts_with('{'))
            .expect("json line");
        let reveal: RoundReveal = serde_json::from_str(line).unwrap();
        assert_eq!(reveal.human_move, "rock");
        assert!(reveal.verify());
        assert_eq!(field(&output, "HMAC key: "), [reveal.key.as_hex()]);
    }
}
