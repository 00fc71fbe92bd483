use crate::player::Player;
use std::cmp::Ordering;

/// Classification of a single guess against a player's own secret number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Feedback {
    #[strum(serialize = "WIN")]
    Win,
    /// The secret is higher than the guess.
    #[strum(serialize = "HI")]
    Hi,
    /// The secret is lower than the guess.
    #[strum(serialize = "LO")]
    Lo,
}

pub fn classify(secret: i32, guess: i32) -> Feedback {
    match secret.cmp(&guess) {
        Ordering::Equal => Feedback::Win,
        Ordering::Greater => Feedback::Hi,
        Ordering::Less => Feedback::Lo,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub player_id: u32,
    pub guess: i32,
    pub feedback: Feedback,
}

/// Per-player verdicts for one round, in player order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundOutcome {
    pub verdicts: Vec<Verdict>,
}

impl RoundOutcome {
    pub fn winners(&self) -> impl Iterator<Item = u32> + '_ {
        self.verdicts
            .iter()
            .filter(|v| v.feedback == Feedback::Win)
            .map(|v| v.player_id)
    }

    pub fn has_winner(&self) -> bool {
        self.winners().next().is_some()
    }
}

pub struct RoundEngine;

impl RoundEngine {
    /// Ask `guess_for` for each player's guess in order, store it, and
    /// classify it. Guesses arrive already validated.
    pub fn play<E, F>(players: &mut [Player], mut guess_for: F) -> Result<RoundOutcome, E>
    where
        F: FnMut(&Player) -> Result<i32, E>,
    {
        for player in players.iter_mut() {
            let guess = guess_for(&*player)?;
            player.last_guess = Some(guess);
        }

        let verdicts = players
            .iter()
            .filter_map(|p| {
                p.last_guess.map(|guess| Verdict {
                    player_id: p.id,
                    guess,
                    feedback: classify(p.secret_number, guess),
                })
            })
            .collect();

        Ok(RoundOutcome { verdicts })
    }
}
