//! Tone emission.
//! A single capability picked at startup: the console tone generator on
//! Linux, system audio elsewhere, and the terminal bell when neither is
//! usable.

pub mod bell;
#[cfg(target_os = "linux")]
pub mod console;
pub mod stream;

use std::time::Duration;

pub trait Emitter {
    fn name(&self) -> &'static str;
    /// Emit a tone, blocking for its duration.
    /// Failures downgrade to the terminal bell, never to the caller.
    fn emit(&mut self, frequency: u32, duration: Duration);
}

/// Pick the best emitter the platform supports.
#[allow(unreachable_code)]
pub fn detect() -> Box<dyn Emitter> {
    #[cfg(target_os = "linux")]
    return Box::new(console::Console::new());

    match stream::SystemAudio::new() {
        Ok(x) => Box::new(x),
        Err(err) => {
            eprintln!("[-] No audio output ({err}), using terminal bell");
            Box::new(bell::Bell::stdout())
        }
    }
}
