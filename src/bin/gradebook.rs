//! Gradebook CLI
//!
//! Command-line front end for the record store, the derived views and the
//! arithmetic quiz.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{Cell, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, EnvFilter};

use gradebook::quiz::{
    AnswerOutcome, Difficulty, QuizHistory, QuizSession, MAX_SCORE, QUESTIONS_PER_QUIZ,
};
use gradebook::view::{self, Extremum};
use gradebook::{
    Config, FileFormat, GradebookError, RecordStore, RecordView, Result, StudentRecord, Update,
};

/// Gradebook CLI
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "Student marks manager with grades, statistics and a maths quiz")]
#[command(version)]
struct Args {
    /// Marks file
    #[arg(short, long, default_value = "studentMarks.txt", global = true)]
    file: PathBuf,

    /// Marks file format
    #[arg(long, value_enum, default_value_t = FormatArg::Text, global = true)]
    format: FormatArg,

    /// Overwrite the marks file in place instead of via temp file + rename
    #[arg(long, global = true)]
    no_durable: bool,

    /// Warn when the header count differs from the records loaded
    #[arg(long, global = true)]
    verify_count: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an empty marks file
    Init,

    /// Show all records with a summary line
    List {
        /// Sort by overall percentage
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },

    /// Find a student by code or name (partial, case-insensitive)
    Show {
        /// Search text
        query: String,

        /// Pick the Nth match (1-based) when several students match
        #[arg(long)]
        pick: Option<usize>,
    },

    /// Show the student with the highest overall mark
    Highest,

    /// Show the student with the lowest overall mark
    Lowest,

    /// Show student count and average overall percentage
    Summary,

    /// Add a student
    Add {
        /// Student code
        #[arg(long)]
        code: String,

        /// Student name
        #[arg(long)]
        name: String,

        /// Three coursework marks (0-20 each)
        #[arg(long, num_args = 3, required = true, allow_negative_numbers = true)]
        coursework: Vec<i32>,

        /// Exam mark (0-100)
        #[arg(long, allow_negative_numbers = true)]
        exam: i32,
    },

    /// Update one field of a student
    Update {
        /// Code of the student to update
        code: String,

        /// Field: code, name, coursework1, coursework2, coursework3, exam
        #[arg(long)]
        field: String,

        /// New value
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },

    /// Delete a student by exact code
    Delete {
        /// Code of the student to delete
        code: String,
    },

    /// Write the records to another file in the given format
    Convert {
        /// Target format
        #[arg(long, value_enum)]
        to: FormatArg,

        /// Target file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Play the arithmetic quiz on stdin/stdout
    Quiz {
        /// Operand size
        #[arg(short, long, value_enum, default_value_t = DifficultyArg::Easy)]
        difficulty: DifficultyArg,

        /// Seed for reproducible questions
        #[arg(long)]
        seed: Option<u64>,

        /// Seconds allowed per question (0 disables the limit)
        #[arg(long, default_value = "10")]
        time_limit: u64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Binary,
}

impl From<FormatArg> for FileFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => FileFormat::Text,
            FormatArg::Binary => FileFormat::Binary,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortOrder {
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Moderate,
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Moderate => Difficulty::Moderate,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}

fn main() {
    // Logs go to stderr so stdout stays clean for tables
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,gradebook=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_file(&args.file)
        .format(args.format.into())
        .durable_writes(!args.no_durable)
        .verify_declared_count(args.verify_count)
        .build();

    if let Err(e) = run(config, args.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: Config, command: Commands) -> Result<()> {
    match command {
        Commands::Init => {
            let store = RecordStore::create(config)?;
            println!("Created {}", store.data_file().display());
            Ok(())
        }
        Commands::List { sort } => {
            let store = RecordStore::open(config)?;
            let rows: Vec<RecordView> = match sort {
                None => store.records().iter().map(RecordView::from).collect(),
                Some(order) => {
                    let ascending = matches!(order, SortOrder::Asc);
                    view::sort_by_percentage(store.records(), ascending)
                        .into_iter()
                        .map(RecordView::from)
                        .collect()
                }
            };
            print_table(&rows);
            print_summary(store.records());
            Ok(())
        }
        Commands::Show { query, pick } => {
            let store = RecordStore::open(config)?;
            show(&store, &query, pick)
        }
        Commands::Highest => {
            let store = RecordStore::open(config)?;
            print_extremum(&store, Extremum::Max);
            Ok(())
        }
        Commands::Lowest => {
            let store = RecordStore::open(config)?;
            print_extremum(&store, Extremum::Min);
            Ok(())
        }
        Commands::Summary => {
            let store = RecordStore::open(config)?;
            print_summary(store.records());
            Ok(())
        }
        Commands::Add {
            code,
            name,
            coursework,
            exam,
        } => {
            let marks: [i32; 3] = coursework.as_slice().try_into().map_err(|_| {
                GradebookError::InvalidInput("exactly three coursework marks are required".into())
            })?;
            let mut store = RecordStore::open(config)?;
            let record = StudentRecord::new(code, name, marks, exam);
            let name = record.name.trim().to_string();
            store.add(record)?;
            println!("Student {} added successfully.", name);
            Ok(())
        }
        Commands::Update { code, field, value } => {
            let change = Update::parse(&field, &value)?;
            let mut store = RecordStore::open(config)?;
            store.update(&code, change)?;
            println!("Student record updated successfully.");
            Ok(())
        }
        Commands::Delete { code } => {
            let mut store = RecordStore::open(config)?;
            let removed = store.delete(&code)?;
            println!("Student {} deleted.", removed.name);
            Ok(())
        }
        Commands::Convert { to, output } => {
            let store = RecordStore::open(config)?;
            store.export(&output, to.into())?;
            println!(
                "Wrote {} records to {} ({})",
                store.len(),
                output.display(),
                FileFormat::from(to)
            );
            Ok(())
        }
        Commands::Quiz {
            difficulty,
            seed,
            time_limit,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let limit = (time_limit > 0).then(|| Duration::from_secs(time_limit));
            play_quiz(difficulty.into(), limit, &mut rng)
        }
    }
}

// =============================================================================
// Record Output
// =============================================================================

fn show(store: &RecordStore, query: &str, pick: Option<usize>) -> Result<()> {
    let matches = store.find(query);

    let selected = match (matches.len(), pick) {
        (0, _) => {
            println!("No student matched your search.");
            return Ok(());
        }
        (1, None) => matches[0],
        (n, Some(choice)) => {
            if choice == 0 || choice > n {
                return Err(GradebookError::InvalidInput(format!(
                    "--pick must be between 1 and {}",
                    n
                )));
            }
            matches[choice - 1]
        }
        (_, None) => {
            println!("Several students matched:");
            for (i, record) in matches.iter().enumerate() {
                println!("  {}. {} - {}", i + 1, record.code, record.name);
            }
            println!("Re-run with --pick N to choose one.");
            return Ok(());
        }
    };

    print_table(&[RecordView::from(selected)]);
    print_summary(std::slice::from_ref(selected));
    Ok(())
}

fn print_extremum(store: &RecordStore, mode: Extremum) {
    match view::extremum(store.records(), mode) {
        Some(record) => {
            let heading = match mode {
                Extremum::Max => "Student with Highest Overall Mark",
                Extremum::Min => "Student with Lowest Overall Mark",
            };
            println!("{}", heading);
            print_table(&[RecordView::from(record)]);
        }
        None => println!("No student records available."),
    }
}

fn print_table(rows: &[RecordView]) {
    let mut table = Table::new();
    table.set_header(vec![
        "Student No.",
        "Student Name",
        "Coursework (out of 60)",
        "Exam (out of 100)",
        "Overall %",
        "Grade",
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.code),
            Cell::new(&row.name),
            Cell::new(format!("{}/60", row.coursework_total)),
            Cell::new(format!("{}/100", row.exam)),
            Cell::new(format!("{:.1}%", row.percentage)),
            Cell::new(row.grade),
        ]);
    }

    println!("{table}");
}

fn print_summary(records: &[StudentRecord]) {
    match view::summary(records) {
        Some(summary) => println!(
            "Students: {}   Average overall %: {:.2}%",
            summary.count, summary.average_percentage
        ),
        None => println!("No student data available."),
    }
}

// =============================================================================
// Quiz
// =============================================================================

fn play_quiz(difficulty: Difficulty, limit: Option<Duration>, rng: &mut StdRng) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut history = QuizHistory::new();

    'sessions: loop {
        let mut session = QuizSession::new(difficulty);
        println!("Maths Quiz ({}): {} questions", difficulty, QUESTIONS_PER_QUIZ);

        while let Some(problem) = session.next_problem(rng) {
            println!(
                "Question {} of {}: {}",
                session.question_number(),
                QUESTIONS_PER_QUIZ,
                problem
            );
            let asked_at = Instant::now();

            loop {
                prompt("> ")?;
                let Some(line) = lines.next() else {
                    session.expire();
                    println!();
                    println!("Input closed, ending quiz.");
                    print_quiz_result(&session);
                    break 'sessions;
                };
                let line = line?;

                if limit.is_some_and(|l| asked_at.elapsed() > l) {
                    if let Some(answer) = session.expire() {
                        println!("Time's up! The answer was {}.", answer);
                    }
                    break;
                }

                match session.submit(&line) {
                    Ok(AnswerOutcome::Correct { points }) => {
                        println!("Correct! +{} points", points);
                        break;
                    }
                    Ok(AnswerOutcome::TryAgain) => println!("Incorrect! Try once more."),
                    Ok(AnswerOutcome::Incorrect { answer }) => {
                        println!("Wrong again! Answer: {}", answer);
                        break;
                    }
                    Err(GradebookError::InvalidInput(_)) => {
                        println!("Please enter a valid number.")
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        print_quiz_result(&session);
        history.record(&session);

        let recent: Vec<String> = history.recent(3).iter().map(u32::to_string).collect();
        println!("Recent Scores: {}", recent.join(", "));

        prompt("Play again? [y/N] ")?;
        let again = match lines.next() {
            Some(line) => line?.trim().eq_ignore_ascii_case("y"),
            None => false,
        };
        if !again {
            break;
        }
    }

    Ok(())
}

fn print_quiz_result(session: &QuizSession) {
    let grade = session.grade();
    println!(
        "Your Score: {}/{} ({:.1}%)",
        session.score(),
        MAX_SCORE,
        session.percentage()
    );
    println!("Grade: {}", grade);
    println!("{}", grade.remark());
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}
