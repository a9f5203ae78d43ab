//! Command-line administration desk for the student record store.
//!
//! # Responsibility
//! - Map subcommands onto the core service's create/list/update/delete.
//! - Resolve the database location from flags and the optional config file.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use studentdesk_core::config::{ensure_db_dir, load_config};
use studentdesk_core::{
    course_position, default_log_level, init_logging, RosterSummary, StoreConfig, Student,
    StudentFields, StudentId, StudentRepository, StudentService, StudentServiceError,
    StudentStore, COURSES,
};
use tabled::{Table, Tabled};

#[derive(Parser)]
#[command(name = "studentdesk")]
#[command(about = "Manage student records in a local SQLite database")]
#[command(version)]
struct Cli {
    /// Database file (overrides the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Config file (default: ./studentdesk.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the students table if it does not exist
    Init,
    /// Enroll a new student
    Add(FieldArgs),
    /// List every student
    List,
    /// Show one student
    Show { id: StudentId },
    /// Replace a student's name, email, phone and course
    Update {
        id: StudentId,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Permanently delete a student
    Delete {
        id: StudentId,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// List offered courses
    Courses,
    /// Show roster totals
    Summary,
}

#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    course: String,
}

impl From<FieldArgs> for StudentFields {
    fn from(args: FieldArgs) -> Self {
        StudentFields::new(args.name, args.email, args.phone, args.course)
    }
}

#[derive(Tabled)]
struct StudentRow {
    #[tabled(rename = "ID")]
    id: StudentId,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Course")]
    course: String,
    #[tabled(rename = "Enrollment Date")]
    enrollment_date: String,
}

impl From<Student> for StudentRow {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            email: student.email,
            phone: student.phone,
            course: student.course,
            enrollment_date: student.enrollment_date,
        }
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let config = resolve_config(&cli)?;
    debug!(
        "event=cli_start module=cli db_path={}",
        config.db_path.display()
    );
    ensure_db_dir(&config).with_context(|| {
        format!(
            "failed to create directory for {}",
            config.db_path.display()
        )
    })?;

    let store = StudentStore::new(config);
    store.initialize().context("failed to initialize student store")?;
    let service = StudentService::new(store);

    match cli.command {
        Commands::Init => {
            println!(
                "Student store ready at {}",
                service.repository().config().db_path.display()
            );
        }
        Commands::Add(args) => {
            let fields: StudentFields = args.into();
            service.add_student(&fields)?;
            warn_if_not_offered(&fields.course);
            println!("Student added.");
        }
        Commands::List => {
            let students = service.students()?;
            if students.is_empty() {
                println!("No students found. Add some with `studentdesk add`.");
            } else {
                let summary = RosterSummary::from_students(&students);
                let rows: Vec<StudentRow> = students.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
                print_summary(&summary);
            }
        }
        Commands::Show { id } => match service.student(id)? {
            Some(student) => print_details(&student),
            None => println!("No student with id {id}."),
        },
        Commands::Update { id, fields } => {
            let fields: StudentFields = fields.into();
            match apply_update(&service, id, &fields)? {
                UpdateOutcome::Updated => {
                    warn_if_not_offered(&fields.course);
                    println!("Student {id} updated.");
                }
                UpdateOutcome::UnknownId => {
                    println!("No student with id {id}; nothing updated.");
                }
            }
        }
        Commands::Delete { id, yes } => {
            let Some(student) = service.student(id)? else {
                println!("No student with id {id}.");
                return Ok(());
            };
            if !yes {
                print_details(&student);
                println!("Deletion is permanent. Re-run with --yes to delete this student.");
                return Ok(());
            }
            service.remove_student(id)?;
            println!("Student {id} deleted.");
        }
        Commands::Courses => {
            for (index, course) in COURSES.iter().enumerate() {
                println!("{}. {course}", index + 1);
            }
        }
        Commands::Summary => {
            print_summary(&service.roster_summary()?);
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<StoreConfig> {
    if let Some(db) = &cli.db {
        return Ok(StoreConfig::new(db));
    }
    let loaded = load_config(cli.config.as_deref()).context("failed to load config")?;
    Ok(loaded.unwrap_or_default())
}

#[derive(Debug, PartialEq, Eq)]
enum UpdateOutcome {
    Updated,
    UnknownId,
}

/// Validates first so an empty field is reported even for an unknown id.
fn apply_update<R: StudentRepository>(
    service: &StudentService<R>,
    id: StudentId,
    fields: &StudentFields,
) -> Result<UpdateOutcome, StudentServiceError> {
    fields.validate()?;
    if service.student(id)?.is_none() {
        return Ok(UpdateOutcome::UnknownId);
    }
    service.edit_student(id, fields)?;
    Ok(UpdateOutcome::Updated)
}

fn warn_if_not_offered(course: &str) {
    if course_position(course).is_none() {
        println!("Note: `{course}` is not an offered course.");
    }
}

fn print_details(student: &Student) {
    let rows = vec![
        FieldRow {
            field: "Name",
            value: student.name.clone(),
        },
        FieldRow {
            field: "Email",
            value: student.email.clone(),
        },
        FieldRow {
            field: "Phone",
            value: student.phone.clone(),
        },
        FieldRow {
            field: "Course",
            value: student.course.clone(),
        },
        FieldRow {
            field: "Enrolled",
            value: student.enrollment_date.clone(),
        },
    ];
    println!("Student {}", student.id);
    println!("{}", Table::new(rows));
}

fn print_summary(summary: &RosterSummary) {
    println!("Total students: {}", summary.total_students);
    println!("Unique courses: {}", summary.unique_courses);
}
