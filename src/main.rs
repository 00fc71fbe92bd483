use clap::{error::ErrorKind, CommandFactory, Parser};
use hilo::{
    config::{ConfigStore, FileConfigStore},
    console::TerminalConsole,
    secret::RandomGenerator,
    ConfigError, GameLoop, GameOptions, GameSession, RangeConfig, Settings,
};
use std::{error::Error, path::PathBuf};

/// multiplayer hi-lo number guessing game with a wall of fame
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Every player hunts their own secret number. After each round you learn whether your number is higher (HI) or lower (LO) than your guess; the fastest finders land on the Wall of Fame."
)]
pub struct Cli {
    /// settings file with RangeMin / RangeMax (default: ./settings.json, then the user config dir)
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// lowest possible secret number, overrides the settings file
    #[clap(long, allow_negative_numbers = true)]
    range_min: Option<i32>,

    /// highest possible secret number, overrides the settings file
    #[clap(long, allow_negative_numbers = true)]
    range_max: Option<i32>,

    /// seed the secret number generator for a reproducible game
    #[clap(long)]
    seed: Option<u64>,

    /// skip the "Press [ENTER] to continue" screens
    #[clap(long)]
    no_pause: bool,

    /// write the settings file (defaults plus any range overrides) and exit; never overwrites
    #[clap(long)]
    init_config: bool,
}

impl Cli {
    fn store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::discover(),
        }
    }

    fn settings(&self, store: &impl ConfigStore) -> Result<Settings, ConfigError> {
        Ok(store
            .load()?
            .with_overrides(self.range_min, self.range_max))
    }

    fn options(&self) -> GameOptions {
        GameOptions {
            pause: !self.no_pause,
        }
    }

    fn generator(&self) -> RandomGenerator {
        match self.seed {
            Some(seed) => RandomGenerator::seeded(seed),
            None => RandomGenerator::from_entropy(),
        }
    }
}

fn config_failure(err: ConfigError) -> ! {
    log::error!("{err}");
    let mut cmd = Cli::command();
    cmd.error(ErrorKind::InvalidValue, err).exit()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let store = cli.store();

    if cli.init_config {
        let settings = Settings::default().with_overrides(cli.range_min, cli.range_max);
        if let Err(err) = settings.range() {
            config_failure(err);
        }
        if store.path().exists() {
            log::warn!("refusing to overwrite {}", store.path().display());
            let mut cmd = Cli::command();
            cmd.error(
                ErrorKind::ValueValidation,
                format!(
                    "{} already exists; remove it to write fresh settings",
                    store.path().display()
                ),
            )
            .exit();
        }
        store.save(&settings)?;
        println!("wrote {}", store.path().display());
        return Ok(());
    }

    let range: RangeConfig = match cli.settings(&store).and_then(|s| s.range()) {
        Ok(range) => range,
        Err(err) => config_failure(err),
    };
    log::info!("secret numbers drawn from {}..={}", range.min(), range.max());

    let session = GameSession::new(range, cli.generator());
    let mut game = GameLoop::new(TerminalConsole::stdio(), session, cli.options());

    match game.run() {
        Err(err) if err.is_end_of_input() => {
            log::info!("input closed in state {}, exiting", game.state());
            Ok(())
        }
        other => other.map_err(Into::into),
    }
}
