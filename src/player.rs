use crate::round::{classify, Feedback};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub secret_number: i32,
    pub last_guess: Option<i32>,
}

impl Player {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            secret_number: 0,
            last_guess: None,
        }
    }

    /// Display form used in prompts and announcements.
    pub fn label(&self) -> String {
        format!("Player {} - {}", self.id, self.name)
    }

    /// Outcome of the last guess, if one was made this game.
    pub fn status(&self) -> Option<Feedback> {
        self.last_guess
            .map(|guess| classify(self.secret_number, guess))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStep {
    Added(u32),
    /// Empty input before anyone joined; ask again.
    NeedAtLeastOne,
    Finished,
}

/// Collects player names in entry order, assigning ids from 1.
#[derive(Debug, Default)]
pub struct PlayerSelection {
    players: Vec<Player>,
}

impl PlayerSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next accepted name will receive.
    pub fn next_id(&self) -> u32 {
        self.players.len() as u32 + 1
    }

    pub fn offer(&mut self, line: &str) -> SelectionStep {
        let name = line.trim();
        if name.is_empty() {
            return if self.players.is_empty() {
                SelectionStep::NeedAtLeastOne
            } else {
                SelectionStep::Finished
            };
        }

        let id = self.next_id();
        self.players.push(Player::new(id, name));
        SelectionStep::Added(id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }
}
