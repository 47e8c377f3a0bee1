//! ner-review CLI — sample tweets, tag them, review the tags, export labels.
//!
//! Usage:
//!   ner-review sample [--dataset path] [--sample-size n] [--seed s]
//!   ner-review review [--show-sample]
//!   ner-review export [--script actions.txt] [--output path | --stdout]

use clap::{ArgAction, Parser, Subcommand};
use ner_review::dataset::DatasetSource;
use ner_review::export::{self, format_accuracy};
use ner_review::session::{highlight_entity, label_options, selectable_label, COMMAND_HELP};
use ner_review::{
    prepare_session, LexiconTagger, PreparedSession, ReviewCommand, ReviewSession, ReviewableRow,
    SessionConfig,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "ner-review",
    version,
    about = "Human review of named-entity tagger output"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// YAML config file (default: ~/.config/ner-review/config.yaml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// CSV dataset; demo tweets are used if it does not exist
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    /// Column holding the text
    #[arg(long, global = true)]
    text_column: Option<String>,
    /// Number of records to sample (1-200)
    #[arg(long, global = true)]
    sample_size: Option<usize>,
    /// Random seed (0-9999)
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// YAML gazetteer for the lexicon tagger
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,
    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sampled records
    Sample,
    /// Review tagged entities interactively
    Review {
        /// Print the sampled records first
        #[arg(long)]
        show_sample: bool,
    },
    /// Write the export table without an interactive session
    Export {
        /// File of review commands to apply first, one per line
        #[arg(long)]
        script: Option<PathBuf>,
        /// Output file (default from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write CSV to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Config file, then CLI flags on top.
fn resolve_config(cli: &Cli) -> Result<SessionConfig, String> {
    let mut config = SessionConfig::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(path) = &cli.dataset {
        config.dataset_path = path.clone();
    }
    if let Some(column) = &cli.text_column {
        config.text_column = column.clone();
    }
    if let Some(size) = cli.sample_size {
        config.sample_size = size;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(path) = &cli.lexicon {
        config.lexicon_path = Some(path.clone());
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn build_tagger(config: &SessionConfig) -> Result<LexiconTagger, String> {
    let tagger = match &config.lexicon_path {
        Some(path) => LexiconTagger::from_path(path),
        None => LexiconTagger::with_default_lexicon(),
    };
    tagger.map_err(|e| format!("Failed to load lexicon: {}", e))
}

fn open_session(config: &SessionConfig) -> Result<PreparedSession, String> {
    let tagger = build_tagger(config)?;
    let prepared = prepare_session(config, &tagger).map_err(|e| e.to_string())?;
    if prepared.source == DatasetSource::Demo {
        eprintln!(
            "Warning: dataset not found at {}; using tiny demo tweets instead.",
            config.dataset_path.display()
        );
    }
    Ok(prepared)
}

fn print_sample(sample: &[ner_review::Record]) {
    println!("{:>4}  TEXT", "#");
    println!("{}", "-".repeat(72));
    for (i, record) in sample.iter().enumerate() {
        println!("{:>4}  {}", i, record.text);
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let cut: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn print_row(session: &ReviewSession, row: &ReviewableRow) -> Result<(), String> {
    let state = session.judgment(row.id).map_err(|e| e.to_string())?;
    println!("Tweet (id={})", row.id);
    println!("  {}", highlight_entity(&row.tweet_text, row.tagged_entity.as_deref()));
    println!(
        "  tagged entity: {}   tagger label: {}",
        row.tagged_entity.as_deref().unwrap_or("-"),
        row.entity_label.as_deref().unwrap_or("-")
    );
    let verdict = match state.evaluation {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    };
    println!(
        "  correct? {}   your label: {}   notes: {}",
        verdict,
        selectable_label(&state.human_label),
        state.notes
    );
    Ok(())
}

fn print_table(session: &ReviewSession) -> Result<(), String> {
    let table = session.table().map_err(|e| e.to_string())?;
    println!(
        "{:>4}  {:<32}  {:<16}  {:<8}  {:<7}  {:<8}  NOTES",
        "ID", "TWEET", "ENTITY", "LABEL", "CORRECT", "YOURS"
    );
    println!("{}", "-".repeat(96));
    for row in &table {
        println!(
            "{:>4}  {:<32}  {:<16}  {:<8}  {:<7}  {:<8}  {}",
            row.tweet_id,
            truncate(&row.tweet_text, 32),
            truncate(row.tagged_entity.as_deref().unwrap_or(""), 16),
            row.entity_label.as_deref().unwrap_or(""),
            row.correct_entities,
            row.your_label.as_deref().unwrap_or(""),
            row.notes
        );
    }
    Ok(())
}

fn print_accuracy(session: &ReviewSession) -> Result<(), String> {
    match session.accuracy().map_err(|e| e.to_string())? {
        Some(value) => println!("Crude accuracy (sample): {}", format_accuracy(value)),
        None => println!("Crude accuracy (sample): n/a"),
    }
    Ok(())
}

fn write_export(session: &ReviewSession, path: &Path) -> Result<(), String> {
    let table = session.table().map_err(|e| e.to_string())?;
    export::write_csv(path, &table).map_err(|e| format!("Failed to write export: {}", e))?;
    println!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

fn cmd_sample(config: &SessionConfig) -> i32 {
    match open_session(config) {
        Ok(prepared) => {
            print_sample(&prepared.sample);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Handle one non-mutating command. Returns false on quit.
fn run_display(session: &ReviewSession, command: &ReviewCommand, config: &SessionConfig) -> Result<bool, String> {
    match command {
        ReviewCommand::Show(Some(id)) => match session.row(*id) {
            Some(row) => print_row(session, row)?,
            None => eprintln!("Error: no row with id {}", id),
        },
        ReviewCommand::Show(None) => {
            for row in session.rows() {
                print_row(session, row)?;
            }
        }
        ReviewCommand::Table => print_table(session)?,
        ReviewCommand::Accuracy => print_accuracy(session)?,
        ReviewCommand::Export(path) => {
            let path = path.clone().unwrap_or_else(|| config.output_path.clone());
            write_export(session, &path)?;
        }
        ReviewCommand::Help => {
            println!("{}", COMMAND_HELP);
            println!("labels: {}", label_options().join(", "));
        }
        ReviewCommand::Quit => return Ok(false),
        _ => {}
    }
    Ok(true)
}

fn cmd_review(config: &SessionConfig, show_sample: bool) -> i32 {
    let PreparedSession { sample, mut session, .. } = match open_session(config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if show_sample || config.show_sample {
        print_sample(&sample);
        println!();
    }
    if session.is_empty() {
        println!("No entities were detected in the sampled tweets. Increase the sample size or inspect the sample.");
        return 0;
    }

    println!("{} rows to review. Type 'help' for commands.", session.rows().len());
    if let Err(e) = print_table(&session) {
        eprintln!("Error: {}", e);
        return 1;
    }

    let stdin = io::stdin();
    loop {
        print!("review> ");
        if io::stdout().flush().is_err() {
            return 1;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
        let command = match ReviewCommand::parse(&line) {
            Ok(c) => c,
            Err(ner_review::session::CommandError::Empty) => continue,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        if command.is_mutation() {
            match session.apply(&command) {
                Ok(_) => {
                    if let ReviewCommand::Mark { id, .. }
                    | ReviewCommand::Label { id, .. }
                    | ReviewCommand::Note { id, .. } = &command
                    {
                        if let Some(row) = session.row(*id) {
                            if let Err(e) = print_row(&session, row) {
                                eprintln!("Error: {}", e);
                                return 1;
                            }
                        }
                    }
                    if let Err(e) = print_accuracy(&session) {
                        eprintln!("Error: {}", e);
                        return 1;
                    }
                }
                Err(ner_review::SessionError::NoSuchRow(id)) => {
                    eprintln!("Error: no row with id {} (0-{})", id, session.rows().len() - 1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 1;
                }
            }
            continue;
        }

        match run_display(&session, &command, config) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    0
}

/// Apply a file of review commands. Display commands are skipped.
fn apply_script(session: &mut ReviewSession, path: &Path) -> Result<(), String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command = ReviewCommand::parse(trimmed)
            .map_err(|e| format!("{}:{}: {}", path.display(), number + 1, e))?;
        if !command.is_mutation() {
            tracing::debug!(line = number + 1, "skipping display command in script");
            continue;
        }
        session
            .apply(&command)
            .map_err(|e| format!("{}:{}: {}", path.display(), number + 1, e))?;
    }
    Ok(())
}

fn cmd_export(config: &SessionConfig, script: Option<&Path>, output: Option<PathBuf>, stdout: bool) -> i32 {
    let mut session = match open_session(config) {
        Ok(p) => p.session,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if let Some(script) = script {
        if let Err(e) = apply_script(&mut session, script) {
            eprintln!("Error: {}", e);
            return 1;
        }
    }

    if stdout {
        let bytes = match session.export_csv() {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        };
        if let Err(e) = io::stdout().write_all(&bytes) {
            eprintln!("Error: {}", e);
            return 1;
        }
    } else {
        let path = output.unwrap_or_else(|| config.output_path.clone());
        if let Err(e) = write_export(&session, &path) {
            eprintln!("Error: {}", e);
            return 1;
        }
    }

    match session.accuracy() {
        Ok(Some(value)) => eprintln!("Crude accuracy (sample): {}", format_accuracy(value)),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match resolve_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Sample => cmd_sample(&config),
        Commands::Review { show_sample } => cmd_review(&config, show_sample),
        Commands::Export { script, output, stdout } => {
            cmd_export(&config, script.as_deref(), output, stdout)
        }
    };
    std::process::exit(code);
}
