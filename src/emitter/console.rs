//! Console tone generator.
//! Drives the PC speaker through the `KDMKTONE` ioctl on stdout.
//! If the ioctl fails (not a virtual console), that emission rings the
//! terminal bell instead.

use std::{thread, time::Duration};

use super::{bell, Emitter};

/// Frequency of the programmable interval timer, in Hz.
const PIT_TICK_RATE: u32 = 1_193_180;
const KDMKTONE: libc::c_ulong = 0x4B30;

pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }
}

impl Emitter for Console {
    fn name(&self) -> &'static str {
        "console tone generator"
    }

    fn emit(&mut self, frequency: u32, duration: Duration) {
        let start = unsafe { libc::ioctl(libc::STDOUT_FILENO, KDMKTONE, tone_arg(frequency)) };
        if start != 0 {
            bell::ring(&mut std::io::stdout());
            thread::sleep(duration);
            return;
        }

        thread::sleep(duration);

        // Stop the tone
        unsafe { libc::ioctl(libc::STDOUT_FILENO, KDMKTONE, 0) };
    }
}

/// Pack a frequency into the ioctl argument, the PIT divisor in the low
/// half and the frequency in the high half.
fn tone_arg(frequency: u32) -> libc::c_ulong {
    ((frequency as libc::c_ulong) << 16) | (PIT_TICK_RATE / frequency) as libc::c_ulong
}

#[cfg(test)]
mod test {
    use super::{tone_arg, PIT_TICK_RATE};

    #[test]
    fn test_tone_arg() {
        assert_eq!(tone_arg(800), (800 << 16) | (PIT_TICK_RATE / 800) as u64);
        assert_eq!(tone_arg(440) & 0xFFFF, 2711);
    }
}
