//! Terminal bell fallback.
//! Rings the bell, then sleeps so playback keeps its rhythm.

use std::{
    io::{Stdout, Write},
    thread,
    time::Duration,
};

use super::Emitter;

pub struct Bell<T: Write> {
    out: T,
}

impl Bell<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<T: Write> Bell<T> {
    pub fn new(out: T) -> Self {
        Self { out }
    }
}

impl<T: Write> Emitter for Bell<T> {
    fn name(&self) -> &'static str {
        "terminal bell"
    }

    fn emit(&mut self, _frequency: u32, duration: Duration) {
        ring(&mut self.out);
        thread::sleep(duration);
    }
}

/// Write the BEL control character and flush.
/// Write errors are swallowed, the emitter contract has no failure path.
pub fn ring(out: &mut impl Write) {
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::{ring, Bell};
    use crate::emitter::Emitter;

    #[test]
    fn test_ring() {
        let mut buf = Vec::new();
        ring(&mut buf);
        assert_eq!(buf, b"\x07");
    }

    #[test]
    fn test_bell_emit() {
        let mut buf = Vec::new();
        let mut bell = Bell::new(&mut buf);
        bell.emit(440, Duration::from_millis(1));
        bell.emit(880, Duration::from_millis(1));
        assert_eq!(buf, b"\x07\x07");
    }
}
