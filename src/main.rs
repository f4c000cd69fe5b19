use std::process::ExitCode;

mod args;
mod emitter;
mod sequencer;
mod songs;
mod tone;

fn main() -> ExitCode {
    ExitCode::from(args::run(std::env::args()))
}
