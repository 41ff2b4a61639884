mod args;
mod toucher;

pub use args::ArgsError;
pub use args::Command;
pub use toucher::touch;
pub use toucher::Outcome;
