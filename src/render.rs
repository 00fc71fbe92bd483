//! Text shown to the operator. Nothing here decides game flow.

use crate::config::RangeConfig;
use crate::leaderboard::LeaderboardEntry;
use crate::player::Player;
use crate::round::Feedback;

pub const WALL_OF_FAME_TITLE: &str = "WALL OF FAME";
pub const CONTINUE_PROMPT: &str = "Press [ENTER] to continue";
pub const RESTART_PROMPT: &str = "Type [Y] to play again";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn welcome(range: &RangeConfig) -> Vec<String> {
    vec![
        "Welcome to HI-LO-GAME".to_string(),
        String::new(),
        format!(
            "In this game you have to find a secret number that's in this range [{}-{}]",
            range.min(),
            range.max()
        ),
    ]
}

pub fn name_prompt(player_id: u32) -> String {
    if player_id > 1 {
        format!("Please type the name of Player {player_id} (or press [ENTER] to start playing)")
    } else {
        format!("Please type the name of Player {player_id}")
    }
}

pub fn round_banner(round: u32) -> String {
    format!("Round {round} !")
}

pub fn guess_prompt(player: &Player) -> String {
    format!("{}'s guess:", player.label())
}

pub fn feedback_line(player: &Player, feedback: Feedback) -> String {
    match feedback {
        Feedback::Hi => format!(
            "{}: HI: the mystery number is > the player's guess",
            player.label()
        ),
        Feedback::Lo => format!(
            "{}: LO: the mystery number is < the player's guess",
            player.label()
        ),
        Feedback::Win => format!("{}: WIN", player.label()),
    }
}

pub fn winner_line(player: &Player) -> String {
    format!(
        "Congratulations [{}], you found your Secret Number!",
        player.label()
    )
}

pub fn wall_of_fame_line(entry: &LeaderboardEntry) -> String {
    format!(
        "{} - {} Guesses - {}",
        entry.recorded_at.format(DATE_FORMAT),
        entry.guesses_needed,
        entry.player_name
    )
}

pub fn wall_of_fame(entries: &[&LeaderboardEntry]) -> Vec<String> {
    let mut lines = vec![WALL_OF_FAME_TITLE.to_string(), String::new()];
    lines.extend(entries.iter().map(|e| wall_of_fame_line(e)));
    lines
}
