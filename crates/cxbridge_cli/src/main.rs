//! Command-line smoke checks for the libclang binding.
//!
//! # Responsibility
//! - Load libclang and exercise each binding operation from a shell.
//! - Keep output plain and line-oriented for quick local sanity checks.

use clap::Parser;
use cxbridge_core::{
    default_log_level, describe_flags, init_logging, Libclang, LibclangConfig, Usr,
};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "cxbridge")]
#[command(about = "Exercise a libclang installation through the cxbridge binding", long_about = None)]
struct Args {
    /// libclang file to load instead of searching LIBCLANG_PATH and system paths
    #[arg(long, global = true, value_name = "PATH")]
    libclang: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error); logs only when --log-dir is set
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print the libclang version string
    Version,

    /// Print version, build session timestamp and default option masks
    Info,

    /// Print the name of a diagnostic category number
    Category {
        #[arg(value_name = "N")]
        category: u32,
    },

    /// Construct Objective-C USRs
    #[command(subcommand)]
    Usr(UsrCommand),

    /// Change process-global libclang state
    #[command(subcommand)]
    Process(ProcessCommand),
}

#[derive(clap::Subcommand, Debug)]
enum UsrCommand {
    /// USR for a class
    Class { name: String },
    /// USR for a category of a class
    Category { class: String, category: String },
    /// USR for a protocol
    Protocol { name: String },
    /// USR for an instance variable
    Ivar {
        name: String,
        /// Containing class name
        #[arg(long = "class", value_name = "CLASS")]
        class: String,
    },
    /// USR for a method
    Method {
        name: String,
        /// Containing class name
        #[arg(long = "class", value_name = "CLASS")]
        class: String,
        /// Build a class (`+`) method USR instead of an instance method USR
        #[arg(long)]
        class_method: bool,
    },
    /// USR for a property
    Property {
        name: String,
        /// Containing class name
        #[arg(long = "class", value_name = "CLASS")]
        class: String,
    },
}

#[derive(clap::Subcommand, Debug)]
enum ProcessCommand {
    /// Install the aborting fatal error handler
    InstallHandler,
    /// Uninstall the fatal error handler
    UninstallHandler,
    /// Enable LLVM stack traces
    StackTraces,
    /// Turn crash recovery on or off
    CrashRecovery {
        #[arg(value_enum)]
        state: Toggle,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Toggle {
    On,
    Off,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    if let Some(dir) = &args.log_dir {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        let dir = dir
            .to_str()
            .ok_or_else(|| format!("log directory `{}` is not UTF-8", dir.display()))?;
        init_logging(level, dir).map_err(|err| err.to_string())?;
    }

    let config = match &args.libclang {
        Some(path) => LibclangConfig::for_path(path),
        None => LibclangConfig::from_env(),
    };
    let command = command_label(&args.command);
    let lib = Libclang::load_with(&config).map_err(|err| {
        error!(
            "event=cli_run module=cli status=error command={} error_code=load_failed error={}",
            command, err
        );
        err.to_string()
    })?;

    match args.command {
        Command::Version => println!("{}", lib.clang_version()),
        Command::Info => print_info(&lib),
        Command::Category { category } => println!("{}", lib.diagnostic_category_name(category)),
        Command::Usr(usr_command) => println!("{}", construct_usr(&lib, usr_command)?),
        Command::Process(process_command) => {
            apply_process(&lib, process_command);
            println!("ok");
        }
    }
    info!(
        "event=cli_run module=cli status=ok command={} path={}",
        command,
        lib.path().display()
    );
    Ok(())
}

/// Stable subcommand name used in log events.
fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Version => "version",
        Command::Info => "info",
        Command::Category { .. } => "category",
        Command::Usr(_) => "usr",
        Command::Process(ProcessCommand::InstallHandler) => "process.install_handler",
        Command::Process(ProcessCommand::UninstallHandler) => "process.uninstall_handler",
        Command::Process(ProcessCommand::StackTraces) => "process.stack_traces",
        Command::Process(ProcessCommand::CrashRecovery { .. }) => "process.crash_recovery",
    }
}

fn print_info(lib: &Libclang) {
    let display = lib.default_diagnostic_display_options();
    let editing = lib.default_editing_translation_unit_options();
    let completion = lib.default_code_complete_options();

    println!("library={}", lib.path().display());
    println!("version={}", lib.clang_version());
    println!("build_session_timestamp={}", lib.build_session_timestamp());
    println!(
        "diagnostic_display_options={:#x} ({})",
        display.bits(),
        describe_flags(display)
    );
    println!(
        "editing_translation_unit_options={:#x} ({})",
        editing.bits(),
        describe_flags(editing)
    );
    println!(
        "code_complete_options={:#x} ({})",
        completion.bits(),
        describe_flags(completion)
    );
}

fn construct_usr(lib: &Libclang, command: UsrCommand) -> Result<Usr, String> {
    let class_usr = |class: &str| lib.construct_usr_objc_class(class);
    let result = match command {
        UsrCommand::Class { name } => lib.construct_usr_objc_class(&name),
        UsrCommand::Category { class, category } => {
            lib.construct_usr_objc_category(&class, &category)
        }
        UsrCommand::Protocol { name } => lib.construct_usr_objc_protocol(&name),
        UsrCommand::Ivar { name, class } => class_usr(&class)
            .and_then(|class_usr| lib.construct_usr_objc_ivar(&name, &class_usr)),
        UsrCommand::Method {
            name,
            class,
            class_method,
        } => class_usr(&class).and_then(|class_usr| {
            lib.construct_usr_objc_method(&name, !class_method, &class_usr)
        }),
        UsrCommand::Property { name, class } => class_usr(&class)
            .and_then(|class_usr| lib.construct_usr_objc_property(&name, &class_usr)),
    };
    result.map_err(|err| err.to_string())
}

fn apply_process(lib: &Libclang, command: ProcessCommand) {
    match command {
        ProcessCommand::InstallHandler => lib.install_aborting_fatal_error_handler(),
        ProcessCommand::UninstallHandler => lib.uninstall_fatal_error_handler(),
        ProcessCommand::StackTraces => lib.enable_stack_traces(),
        ProcessCommand::CrashRecovery { state } => {
            lib.toggle_crash_recovery(matches!(state, Toggle::On))
        }
    }
}
