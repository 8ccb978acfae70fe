use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use ls8_core::{loader, Machine};

// Load failures (missing or malformed program) exit with 2, runtime
// faults with 1, so differential runs stay distinguishable.
const EXIT_RUN_FAULT: u8 = 1;
const EXIT_LOAD_FAULT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "ls8")]
#[command(about = "LS-8 8-bit virtual machine", long_about = None)]
struct Args {
    /// Program file: one binary instruction byte per line, `#` comments
    program: PathBuf,

    /// Print a TRACE line to stderr before each executed instruction
    #[arg(long, action = ArgAction::SetTrue)]
    trace: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let image = match loader::read_program(&args.program) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("ls8: {err}");
            return ExitCode::from(EXIT_LOAD_FAULT);
        }
    };

    let stdout = io::stdout();
    let mut machine = Machine::new(stdout.lock());
    if let Err(err) = machine.load(&image) {
        eprintln!("ls8: {err}");
        return ExitCode::from(EXIT_LOAD_FAULT);
    }
    machine.set_trace(args.trace);

    match machine.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ls8: {err}");
            ExitCode::from(EXIT_RUN_FAULT)
        }
    }
}
