use crate::player::Player;
use chrono::{DateTime, Local};
use itertools::Itertools;

/// Number of entries shown on the Wall of Fame.
pub const WALL_OF_FAME_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub guesses_needed: u32,
    pub recorded_at: DateTime<Local>,
}

/// Append-only record of every win in this process.
#[derive(Debug, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry per winner, all sharing `round` and `now`.
    pub fn record<'a>(
        &mut self,
        winners: impl IntoIterator<Item = &'a Player>,
        round: u32,
        now: DateTime<Local>,
    ) {
        for winner in winners {
            log::info!("{} found their number in {} guesses", winner.name, round);
            self.entries.push(LeaderboardEntry {
                player_name: winner.name.clone(),
                guesses_needed: round,
                recorded_at: now,
            });
        }
    }

    /// Fewest guesses first, earlier wins break ties. Equal keys keep
    /// insertion order.
    pub fn top_n(&self, n: usize) -> Vec<&LeaderboardEntry> {
        self.entries
            .iter()
            .sorted_by(|a, b| {
                a.guesses_needed
                    .cmp(&b.guesses_needed)
                    .then(a.recorded_at.cmp(&b.recorded_at))
            })
            .take(n)
            .collect()
    }

    pub fn wall_of_fame(&self) -> Vec<&LeaderboardEntry> {
        self.top_n(WALL_OF_FAME_SIZE)
    }

    /// Entries in the order they were recorded.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
