//! Local smoke-test driver for the Hepburn name checker. Stands in for the
//! out-of-scope HTTP/Lambda envelope; it must not grow routing or auth.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use hepburn_core::{DictionaryConfig, DictionaryStore, Error, HepburnRomanizer, NameMatcher, ValidationRequest};

/// Validate a kanji full name against its Hepburn-romanized rendition.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory containing name_readings.json and surnames/.
    #[arg(long)]
    dict_root: PathBuf,

    #[arg(long)]
    kanji_sei: String,

    #[arg(long)]
    kanji_mei: String,

    #[arg(long)]
    romaji_sei: String,

    #[arg(long)]
    romaji_mei: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let request = ValidationRequest {
        kanji_sei: args.kanji_sei,
        kanji_mei: args.kanji_mei,
        romaji_sei: args.romaji_sei,
        romaji_mei: args.romaji_mei,
    };

    if let Err(err) = request.validate_shape() {
        eprintln!("{err}");
        return ExitCode::from(2);
    }

    let config = DictionaryConfig::builder().root(args.dict_root).build();
    let store = match DictionaryStore::open(&config) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            eprintln!("{err}");
            return exit_code_for(&err);
        }
    };

    let matcher = NameMatcher::new(store, HepburnRomanizer::default());
    let result = match matcher.validate(
        &request.kanji_sei,
        &request.kanji_mei,
        &request.romaji_sei,
        &request.romaji_mei,
    ) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{err}");
            return exit_code_for(&err);
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to serialize result: {err}");
            ExitCode::FAILURE
        }
    }
}

/// §6: 0 for any core result, 2 for malformed input, 1 for internal errors.
fn exit_code_for(err: &Error) -> ExitCode {
    match err {
        Error::InvalidInput { .. } => ExitCode::from(2),
        Error::DictIo { .. } => ExitCode::FAILURE,
    }
}
