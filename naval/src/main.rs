// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    env,
    ffi::OsStr,
    fs::{self, File},
    io::{self, BufReader},
    path::Path,
    process,
};

use clap::{App, Arg, ArgMatches, ErrorKind};
use log::{info, warn, LevelFilter, SetLoggerError};
use simplelog::{ConfigBuilder, WriteLogger};

use navalcore::{
    board::Board,
    game::{play, Ending, Game},
    map::parse_map,
    rules::{Rules, DEFAULT_RULES, DEFAULT_RULES_FILE},
};

use self::failure::Failure;

mod failure;

/// Environment variable holding the log level.
const LOG_ENV: &str = "NAVAL_LOG";

fn main() {
    let code = match run() {
        Ok(()) => 0,
        Err(failure) => {
            println!("{}", failure);
            for cause in failure.causes() {
                warn!("{}", cause);
            }
            failure.exit_code()
        }
    };
    process::exit(code);
}

fn app() -> App<'static, 'static> {
    App::new("naval")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Sink a hidden fleet, given a rules file and a map file.")
        .arg(
            Arg::with_name("rules")
                .value_name("RULES")
                .help("board size, ship count and ship lengths")
                .index(1),
        )
        .arg(
            Arg::with_name("map")
                .value_name("MAP")
                .help("anchor and direction of each ship")
                .index(2),
        )
        .arg(
            Arg::with_name("log_file")
                .long("log-file")
                .value_name("FILE")
                .help("write the diagnostic log here instead of stderr")
                .takes_value(true),
        )
}

/// Load both files, build the board and play until the game ends.
fn run() -> Result<(), Failure> {
    let matches = parse_args()?;
    if let Err(err) = setup_logging(matches.value_of_os("log_file")) {
        eprintln!("could not set up logging: {}", err);
    }

    let (rules_path, map_path) = match (matches.value_of_os("rules"), matches.value_of_os("map"))
    {
        (Some(rules), Some(map)) => (Path::new(rules), Path::new(map)),
        _ => return Err(Failure::ParamsMissing),
    };

    let rules_file = open_rules(rules_path)?;
    let map_file = File::open(map_path).map_err(Failure::MapMissing)?;

    let rules = Rules::parse(BufReader::new(rules_file))?;
    let fleet = parse_map(BufReader::new(map_file), &rules)?;
    let board = Board::place_fleet(rules.dimensions(), &fleet)?;
    info!(
        "loaded {} and {}",
        rules_path.display(),
        map_path.display()
    );

    let mut game = Game::new(board);
    let stdin = io::stdin();
    let stdout = io::stdout();
    match play(&mut game, stdin.lock(), &mut stdout.lock()).map_err(Failure::SessionIo)? {
        Ending::GameOver => Ok(()),
        Ending::InputExhausted => Err(Failure::InputExhausted),
    }
}

/// Parse the command line. Help and version requests exit here; any other problem is
/// reported as missing parameters.
fn parse_args() -> Result<ArgMatches<'static>, Failure> {
    app().get_matches_safe().or_else(|err| match err.kind {
        ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => err.exit(),
        _ => Err(Failure::ParamsMissing),
    })
}

/// Open the rules file. The standard rules file is written out with the default rules
/// first if it does not exist yet.
fn open_rules(path: &Path) -> Result<File, Failure> {
    match File::open(path) {
        Ok(file) => Ok(file),
        Err(err)
            if err.kind() == io::ErrorKind::NotFound
                && path.file_name() == Some(OsStr::new(DEFAULT_RULES_FILE)) =>
        {
            info!("creating default rules at {}", path.display());
            fs::write(path, DEFAULT_RULES)
                .and_then(|()| File::open(path))
                .map_err(Failure::RulesMissing)
        }
        Err(err) => Err(Failure::RulesMissing(err)),
    }
}

/// Send the log to `log_file`, or stderr if none is given, at the level named by
/// `NAVAL_LOG` (default warn). Standard output is left to the game.
fn setup_logging(log_file: Option<&OsStr>) -> Result<(), SetLoggerError> {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();
    match log_file.map(File::create) {
        Some(Ok(file)) => WriteLogger::init(level, config, file),
        Some(Err(err)) => {
            let result = WriteLogger::init(level, config, io::stderr());
            warn!("could not create log file: {}", err);
            result
        }
        None => WriteLogger::init(level, config, io::stderr()),
    }
}
