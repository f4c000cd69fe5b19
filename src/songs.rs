//! Static song catalog.
//! Each song is a constant table of (frequency, duration) pairs.

use std::time::Duration;

/// A single note.
/// A frequency of zero is a rest, silence for the duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    /// Frequency in hertz.
    pub frequency: u32,
    /// Duration in milliseconds.
    pub duration_ms: u32,
}

pub struct Song {
    pub name: &'static str,
    pub notes: &'static [Note],
}

impl Note {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms as u64)
    }
}

const fn note(frequency: u32, duration_ms: u32) -> Note {
    Note {
        frequency,
        duration_ms,
    }
}

const fn rest(duration_ms: u32) -> Note {
    note(0, duration_ms)
}

/// All known songs, in the order shown by usage output.
pub fn all() -> &'static [Song] {
    SONGS
}

/// Exact-match, case-sensitive lookup by name.
pub fn find(name: &str) -> Option<&'static Song> {
    SONGS.iter().find(|x| x.name == name)
}

const SONGS: &[Song] = &[
    Song {
        name: "clown",
        notes: CLOWN,
    },
    Song {
        name: "mario",
        notes: MARIO,
    },
    Song {
        name: "desperado",
        notes: DESPERADO,
    },
    Song {
        name: "test",
        notes: TEST,
    },
];

// Circus theme, the opening of "Entry of the Gladiators".
const CLOWN: &[Note] = &[
    // C5 repeated
    note(523, 200),
    note(523, 200),
    note(523, 200),
    note(523, 200),
    note(523, 200),
    note(523, 200),
    note(523, 200),
    note(523, 200),
    // E5 repeated
    note(659, 200),
    note(659, 200),
    note(659, 200),
    note(659, 200),
    note(659, 200),
    note(659, 200),
    note(659, 200),
    note(659, 200),
    // C5 repeated
    note(523, 200),
    note(523, 200),
    note(523, 200),
    note(523, 200),
    note(523, 200),
    note(523, 200),
    note(523, 200),
    note(523, 200),
    // A4 repeated
    note(440, 200),
    note(440, 200),
    note(440, 200),
    note(440, 200),
    note(440, 200),
    note(440, 200),
    note(440, 200),
    note(440, 200),
    // C-E-G-A-G-E-C-A
    note(523, 300),
    note(659, 300),
    note(784, 300),
    note(880, 400),
    note(784, 300),
    note(659, 300),
    note(523, 300),
    note(440, 400),
];

// Super Mario Bros. main theme opening.
const MARIO: &[Note] = &[
    // Opening phrase
    note(659, 200),
    note(659, 200),
    rest(100),
    note(659, 200),
    rest(100),
    note(523, 200),
    note(659, 200),
    rest(100),
    note(784, 200),
    rest(100),
    rest(100),
    rest(100),
    note(392, 200),
    rest(100),
    rest(100),
    rest(100),
    // Second phrase
    note(523, 200),
    rest(100),
    note(392, 200),
    rest(100),
    note(330, 200),
    rest(100),
    note(440, 200),
    rest(100),
    note(494, 200),
    rest(100),
    note(466, 200),
    note(440, 200),
    rest(100),
    note(392, 200),
    note(659, 200),
    note(784, 200),
    // Third phrase
    note(880, 200),
    rest(100),
    note(659, 200),
    note(523, 200),
    note(440, 200),
    rest(100),
    note(392, 200),
    rest(100),
    note(330, 200),
    rest(100),
    note(440, 200),
    rest(100),
    note(494, 200),
    rest(100),
    note(466, 200),
    note(440, 200),
    // Final phrase
    note(392, 200),
    rest(100),
    note(659, 200),
    note(523, 200),
    note(440, 200),
    rest(100),
    note(392, 200),
    rest(100),
    note(330, 200),
    rest(100),
    note(440, 200),
    rest(100),
    note(494, 200),
    rest(100),
    note(466, 200),
    note(440, 200),
];

// Eagles "Desperado" opening melody.
const DESPERADO: &[Note] = &[
    // "Desperado, why don't you come to your senses"
    note(523, 400),
    rest(100),
    note(659, 400),
    rest(100),
    note(784, 400),
    rest(100),
    note(659, 400),
    rest(100),
    note(523, 400),
    rest(100),
    note(440, 400),
    rest(100),
    note(392, 400),
    rest(100),
    note(440, 400),
    rest(100),
    // "You've been out ridin' fences for so long now"
    note(523, 400),
    rest(100),
    note(659, 400),
    rest(100),
    note(784, 400),
    rest(100),
    note(880, 400),
    rest(100),
    note(784, 400),
    rest(100),
    note(659, 400),
    rest(100),
    note(523, 400),
    rest(100),
    note(440, 400),
    rest(100),
    // "Oh, you're a hard one"
    note(392, 400),
    rest(100),
    note(440, 400),
    rest(100),
    note(523, 400),
    rest(100),
    note(659, 400),
    rest(100),
    note(523, 400),
    rest(100),
    note(440, 400),
    rest(100),
    note(392, 400),
    rest(100),
    note(330, 400),
    rest(100),
    // "But I know that you have your reasons"
    note(440, 400),
    rest(100),
    note(523, 400),
    rest(100),
    note(659, 400),
    rest(100),
    note(784, 400),
    rest(100),
    note(659, 400),
    rest(100),
    note(523, 400),
    rest(100),
    note(440, 400),
    rest(100),
    note(392, 400),
    rest(100),
];

// Single beep for checking the output path.
const TEST: &[Note] = &[note(800, 300)];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(find("clown").unwrap().name, "clown");
        assert_eq!(find("test").unwrap().name, "test");
        assert!(find("Clown").is_none());
        assert!(find("foo").is_none());
    }

    #[test]
    fn test_catalog_order() {
        let names = all().iter().map(|x| x.name).collect::<Vec<_>>();
        assert_eq!(names, ["clown", "mario", "desperado", "test"]);
    }

    #[test]
    fn test_test_song() {
        let song = find("test").unwrap();
        assert_eq!(song.notes, [note(800, 300)]);
    }

    #[test]
    fn test_clown_shape() {
        let song = find("clown").unwrap();
        assert_eq!(song.notes.len(), 40);
        assert_eq!(song.notes[0], note(523, 200));
        assert_eq!(song.notes[39], note(440, 400));
        assert!(song.notes.iter().all(|x| x.frequency != 0));
    }

    #[test]
    fn test_mario_shape() {
        let song = find("mario").unwrap();
        assert_eq!(song.notes.len(), 64);
        let rests = song.notes.iter().filter(|x| x.frequency == 0).count();
        assert_eq!(rests, 27);
    }

    #[test]
    fn test_desperado_shape() {
        let song = find("desperado").unwrap();
        assert_eq!(song.notes.len(), 64);

        // Notes and rests strictly alternate
        for (i, x) in song.notes.iter().enumerate() {
            assert_eq!(x.frequency == 0, i % 2 == 1);
        }
    }

    #[test]
    fn test_note_duration() {
        assert_eq!(note(440, 250).duration(), Duration::from_millis(250));
    }
}
