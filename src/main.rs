use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use env_logger::Env;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use quiz_balancer::{balance_quiz, BalancedQuiz, Distribution, QuestionRecord};

/// On-disk question bank shape: either the level-keyed layout used by the
/// placement-test data files, or one flat question list.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum QuestionBank {
    Levels(BTreeMap<String, Vec<QuestionRecord>>),
    Flat(Vec<QuestionRecord>),
}

struct CliArgs {
    path: PathBuf,
    out: Option<PathBuf>,
    seed: Option<u64>,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut path = None;
    let mut out = None;
    let mut seed = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--out requires a path".to_string())?;
                out = Some(PathBuf::from(value));
            }
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--seed requires a number".to_string())?;
                let parsed = value
                    .parse::<u64>()
                    .map_err(|e| format!("invalid --seed {:?}: {}", value, e))?;
                seed = Some(parsed);
            }
            other if path.is_none() => path = Some(PathBuf::from(other)),
            other => return Err(format!("unexpected argument {:?}", other)),
        }
    }

    Ok(CliArgs {
        path: path.ok_or_else(|| "missing input path".to_string())?,
        out,
        seed,
    })
}

fn balance_set(
    label: &str,
    questions: &[QuestionRecord],
    rng: &mut StdRng,
) -> Result<Vec<QuestionRecord>, quiz_balancer::BalanceError> {
    let slots = questions.first().map(|q| q.options.len()).unwrap_or(0);
    let before = Distribution::tally(questions, slots);

    log::info!(
        "{}: {} questions, answer positions before:\n{}",
        label,
        questions.len(),
        before
    );
    if before.is_skewed(questions.len()) {
        log::warn!(
            "{}: answer distribution is uneven (spread {})",
            label,
            before.spread()
        );
    }

    let BalancedQuiz {
        questions,
        distribution,
    } = balance_quiz(rng, questions)?;

    log::info!("{}: answer positions after:\n{}", label, distribution);
    Ok(questions)
}

fn process_file(
    input: &Path,
    output: &Path,
    rng: &mut StdRng,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Loading question bank from {:?}", input);

    let content = std::fs::read_to_string(input)?;
    let bank: QuestionBank = serde_json::from_str(&content)?;

    let rebalanced = match bank {
        QuestionBank::Flat(questions) => {
            QuestionBank::Flat(balance_set("questions", &questions, rng)?)
        }
        QuestionBank::Levels(levels) => {
            let mut balanced_levels = BTreeMap::new();
            for (level, questions) in levels {
                let balanced = balance_set(&level, &questions, rng)?;
                balanced_levels.insert(level, balanced);
            }
            QuestionBank::Levels(balanced_levels)
        }
    };

    let serialized = serde_json::to_string_pretty(&rebalanced)?;
    std::fs::write(output, serialized)?;
    log::info!("Saved balanced question bank to {:?}", output);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Usage: quiz-balancer <path> [--out <path>] [--seed <n>]");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    if args.path.is_dir() {
        if args.out.is_some() {
            eprintln!("--out only applies to a single input file");
            return ExitCode::FAILURE;
        }

        let mut failures = 0usize;
        for entry in WalkDir::new(&args.path).into_iter().filter_map(|e| e.ok()) {
            if entry.path().extension().map_or(false, |ext| ext == "json") {
                if let Err(e) = process_file(entry.path(), entry.path(), &mut rng) {
                    log::error!("Skipping {:?}: {}", entry.path(), e);
                    failures += 1;
                }
            }
        }
        if failures > 0 {
            return ExitCode::FAILURE;
        }
    } else {
        let output = args.out.clone().unwrap_or_else(|| args.path.clone());
        if let Err(e) = process_file(&args.path, &output, &mut rng) {
            log::error!("Failed to balance {:?}: {}", args.path, e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
