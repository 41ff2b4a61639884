use std::env;
use std::process::ExitCode;

use touch::Command;
use touch::Outcome;

fn main() -> ExitCode {
    pretty_env_logger::init_timed();

    let command = match Command::resolve(env::args_os()) {
        Ok(command) => command,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    match touch::touch(&command.file, command.no_create) {
        Ok(Outcome::Skipped) => println!(
            "File '{}' does not exist, not created due to -c flag.",
            command.file.display()
        ),
        Ok(Outcome::Touched) => println!("Successfully touched '{}'", command.file.display()),
        Err(error) => {
            eprintln!("{:#}", error);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
