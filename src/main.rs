use bfi::{InstructionStream, Interpreter, cli_util};
use clap::Parser;
use std::env;
use std::fs;
use std::io::{self, Write};

fn usage_and_exit(program: &str) -> ! {
    println!(
        r#"Usage:
  {0} "<code>"    # Run Brainfuck code given as a single argument
  {0} -f <PATH>   # Run Brainfuck code loaded from file

Options:
  -f <PATH>  Read Brainfuck code from PATH instead of positional "<code>"
  -h         Show this help

Notes:
- Input (`,`) reads a single byte from stdin; at end of input the current cell is set to 0.
- Any characters outside of Brainfuck's ><+-.,[] are ignored as comments.

Examples:
- Print an exclamation mark:
    {0} "+++++[>++++++<-]>+++."
- Load Brainfuck code from a file:
    {0} -f ./program.bf
- Read bytes from a file as stdin (`,` will consume file input):
    {0} ",[.,]" < input.txt
"#,
        program
    );
    let _ = io::stdout().flush();
    std::process::exit(1);
}

#[derive(Parser, Debug)]
#[command(name = "bfi", disable_help_flag = true)]
struct Cli {
    /// Show this help
    #[arg(short = 'h', action = clap::ArgAction::SetTrue)]
    help: bool,

    /// Read Brainfuck code from PATH instead of positional "<code>"
    #[arg(short = 'f')]
    file: Option<String>,

    /// Brainfuck code to run; may start with a hyphen
    #[arg(value_name = "code", allow_hyphen_values = true)]
    code: Option<String>,
}

fn main() {
    // We still pull the program name for help rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("bfi"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => usage_and_exit(&program),
    };

    if cli.help {
        usage_and_exit(&program);
    }

    let code = match (cli.file, cli.code) {
        (Some(path), None) => match fs::read_to_string(&path) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("{program}: failed to read {path}: {e}");
                let _ = io::stderr().flush();
                std::process::exit(1);
            }
        },
        (None, Some(code)) => code,
        // Exactly one source of code is accepted.
        _ => usage_and_exit(&program),
    };

    let result = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut bf = Interpreter::new(stdin.lock(), stdout.lock());
        bf.execute(&code)
    };
    let _ = io::stdout().flush();

    if let Err(err) = result {
        // Bracket positions index the cleaned stream, not the raw source.
        let stream = InstructionStream::from_source(&code);
        cli_util::print_error(Some(&program), &stream, &err);
        std::process::exit(1);
    }
}
