//! Command line dispatch.

use clap::{Arg, ArgAction, Command};

use crate::{emitter, sequencer, songs};

pub fn command() -> Command {
    Command::new("beep-box")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plays named beep melodies.")
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List the available sounds"),
        )
        .arg(
            Arg::new("sound")
                .value_name("SOUND")
                .required_unless_present("list")
                .help("Name of the sound to play"),
        )
}

/// Run the program with the given arguments, returning its exit code.
pub fn run(args: impl IntoIterator<Item = String>) -> u8 {
    let matches = match command().try_get_matches_from(args) {
        Ok(x) => x,
        Err(err) => {
            let _ = err.print();
            return 1;
        }
    };

    if matches.get_flag("list") {
        for song in songs::all() {
            println!("{}", song.name);
        }
        return 0;
    }

    let name = matches.get_one::<String>("sound").unwrap();
    let Some(song) = songs::find(name) else {
        eprintln!("[-] Unknown sound type: {name}");
        eprintln!(
            "[-] Sound types: {}",
            songs::all()
                .iter()
                .map(|x| x.name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        return 1;
    };

    let mut emitter = emitter::detect();
    println!("[*] Playing `{}` through {}", song.name, emitter.name());
    sequencer::play(song, emitter.as_mut());
    0
}

#[cfg(test)]
mod test {
    use super::run;

    fn run_with(args: &[&str]) -> u8 {
        run(std::iter::once("beep-box".into()).chain(args.iter().map(|x| x.to_string())))
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(run_with(&[]), 1);
    }

    #[test]
    fn test_unknown_sound() {
        assert_eq!(run_with(&["foo"]), 1);
    }

    #[test]
    fn test_list() {
        assert_eq!(run_with(&["--list"]), 0);
    }

    #[test]
    fn test_play() {
        assert_eq!(run_with(&["test"]), 0);
    }
}
