//! Note sequencer.

use std::{thread, time::Duration};

use crate::{emitter::Emitter, songs::Song};

/// Pause inserted between consecutive notes, but not after the last.
const NOTE_GAP: Duration = Duration::from_millis(50);

/// Play each note of a song in order.
/// Rests (frequency 0) sleep for their duration without touching the
/// emitter.
pub fn play(song: &Song, emitter: &mut dyn Emitter) {
    for (i, note) in song.notes.iter().enumerate() {
        if note.frequency == 0 {
            thread::sleep(note.duration());
        } else {
            emitter.emit(note.frequency, note.duration());
        }

        if i + 1 < song.notes.len() {
            thread::sleep(NOTE_GAP);
        }
    }
}
