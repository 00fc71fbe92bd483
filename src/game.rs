use crate::config::RangeConfig;
use crate::console::Console;
use crate::error::GameError;
use crate::leaderboard::Leaderboard;
use crate::player::{Player, PlayerSelection, SelectionStep};
use crate::render;
use crate::round::{RoundEngine, RoundOutcome};
use crate::secret::SecretNumberGenerator;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum GameState {
    SelectPlayers,
    RoundInProgress,
    RoundWon,
    RoundContinues,
    AwaitRestartDecision,
    NewGame,
    Terminated,
}

/// Players, round counter and leaderboard for one process.
pub struct GameSession<G: SecretNumberGenerator> {
    range: RangeConfig,
    generator: G,
    players: Vec<Player>,
    round: u32,
    leaderboard: Leaderboard,
    last_outcome: RoundOutcome,
}

impl<G: SecretNumberGenerator> GameSession<G> {
    pub fn new(range: RangeConfig, generator: G) -> Self {
        Self {
            range,
            generator,
            players: Vec::new(),
            round: 0,
            leaderboard: Leaderboard::new(),
            last_outcome: RoundOutcome::default(),
        }
    }

    /// Seat the players and draw their first secret numbers.
    pub fn start(&mut self, players: Vec<Player>) -> Result<(), GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        log::info!("starting a game with {} player(s)", players.len());
        self.players = players;
        self.new_game();
        Ok(())
    }

    /// Same players, fresh secret numbers, round counter back to 0.
    pub fn restart(&mut self) {
        log::info!("restarting with {} player(s)", self.players.len());
        self.new_game();
    }

    fn new_game(&mut self) {
        for player in &mut self.players {
            player.secret_number = self.generator.draw(&self.range);
            player.last_guess = None;
            log::debug!("drew secret {} for {}", player.secret_number, player.label());
        }
        self.round = 0;
        self.last_outcome = RoundOutcome::default();
    }

    pub fn begin_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    pub fn play_round<E, F>(&mut self, guess_for: F) -> Result<&RoundOutcome, E>
    where
        F: FnMut(&Player) -> Result<i32, E>,
    {
        self.last_outcome = RoundEngine::play(&mut self.players, guess_for)?;
        Ok(&self.last_outcome)
    }

    /// Record the last round's winners at the current round number.
    pub fn record_winners(&mut self, now: DateTime<Local>) {
        let players = &self.players;
        let winners = self
            .last_outcome
            .winners()
            .filter_map(|id| players.iter().find(|p| p.id == id));
        self.leaderboard.record(winners, self.round, now);
    }

    pub fn winners(&self) -> Vec<&Player> {
        self.last_outcome
            .winners()
            .filter_map(|id| self.player(id))
            .collect()
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn range(&self) -> &RangeConfig {
        &self.range
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn last_outcome(&self) -> &RoundOutcome {
        &self.last_outcome
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GameOptions {
    /// Show "Press [ENTER] to continue" between screens.
    pub pause: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { pause: true }
    }
}

/// Drives a [`GameSession`] through its states against a [`Console`].
pub struct GameLoop<C: Console, G: SecretNumberGenerator> {
    console: C,
    session: GameSession<G>,
    state: GameState,
    options: GameOptions,
}

impl<C: Console, G: SecretNumberGenerator> GameLoop<C, G> {
    pub fn new(console: C, session: GameSession<G>, options: GameOptions) -> Self {
        Self {
            console,
            session,
            state: GameState::SelectPlayers,
            options,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> &GameSession<G> {
        &self.session
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_parts(self) -> (C, GameSession<G>) {
        (self.console, self.session)
    }

    /// Run until the operator declines to play again.
    pub fn run(&mut self) -> Result<(), GameError> {
        while self.state != GameState::Terminated {
            self.step()?;
        }
        Ok(())
    }

    /// Perform one transition and return the new state.
    pub fn step(&mut self) -> Result<GameState, GameError> {
        let next = match self.state {
            GameState::SelectPlayers => self.select_players()?,
            GameState::RoundInProgress => self.play_round()?,
            GameState::RoundContinues => self.show_feedback()?,
            GameState::RoundWon => self.celebrate()?,
            GameState::AwaitRestartDecision => self.ask_restart()?,
            GameState::NewGame => {
                self.session.restart();
                GameState::RoundInProgress
            }
            GameState::Terminated => GameState::Terminated,
        };
        log::debug!("{} -> {}", self.state, next);
        self.state = next;
        Ok(next)
    }

    fn select_players(&mut self) -> Result<GameState, GameError> {
        self.console.clear()?;
        for line in render::welcome(self.session.range()) {
            self.console.write_line(&line)?;
        }
        self.pause()?;

        let mut selection = PlayerSelection::new();
        loop {
            self.console.clear()?;
            self.console
                .write_line(&render::name_prompt(selection.next_id()))?;
            let line = self.console.read_line()?;
            match selection.offer(&line) {
                SelectionStep::Added(id) => log::debug!("player {id} joined"),
                SelectionStep::NeedAtLeastOne => log::debug!("no players yet, asking again"),
                SelectionStep::Finished => break,
            }
        }

        self.session.start(selection.into_players())?;
        Ok(GameState::RoundInProgress)
    }

    fn play_round(&mut self) -> Result<GameState, GameError> {
        let round = self.session.begin_round();
        self.console.clear()?;
        self.console.write_line(&render::round_banner(round))?;

        let console = &mut self.console;
        let outcome = self.session.play_round(|player| -> std::io::Result<i32> {
            console.write_line(&render::guess_prompt(player))?;
            console.read_int()
        })?;

        if outcome.has_winner() {
            Ok(GameState::RoundWon)
        } else {
            Ok(GameState::RoundContinues)
        }
    }

    fn show_feedback(&mut self) -> Result<GameState, GameError> {
        self.console.clear()?;
        for verdict in &self.session.last_outcome().verdicts {
            if let Some(player) = self.session.player(verdict.player_id) {
                self.console
                    .write_line(&render::feedback_line(player, verdict.feedback))?;
            }
        }
        self.pause()?;
        Ok(GameState::RoundInProgress)
    }

    fn celebrate(&mut self) -> Result<GameState, GameError> {
        self.session.record_winners(Local::now());

        self.console.clear()?;
        for winner in self.session.winners() {
            self.console.write_line(&render::winner_line(winner))?;
        }
        self.pause()?;

        self.console.clear()?;
        for line in render::wall_of_fame(&self.session.leaderboard().wall_of_fame()) {
            self.console.write_line(&line)?;
        }
        Ok(GameState::AwaitRestartDecision)
    }

    fn ask_restart(&mut self) -> Result<GameState, GameError> {
        self.console.blank_line()?;
        self.console.write_line(render::RESTART_PROMPT)?;
        let answer = self.console.read_line()?;
        if answer.trim().eq_ignore_ascii_case("y") {
            Ok(GameState::NewGame)
        } else {
            log::info!("operator ended the session");
            Ok(GameState::Terminated)
        }
    }

    fn pause(&mut self) -> Result<(), GameError> {
        if self.options.pause {
            self.console.blank_line()?;
            self.console.write_line(render::CONTINUE_PROMPT)?;
            self.console.read_line()?;
        }
        Ok(())
    }
}
