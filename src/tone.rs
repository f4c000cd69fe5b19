use std::f32::consts::PI;

/// Sine tone generator.
/// Yields samples forever, or until the optional duration runs out.
#[derive(Clone, Copy, Debug)]
pub struct Tone {
    i: usize,
    tone: f32,
    sample_rate: f32,
    duration: Option<u32>,
}

impl Tone {
    pub fn new(tone: f32, sample_rate: u32) -> Self {
        Self {
            i: 0,
            sample_rate: sample_rate as f32,
            tone,
            duration: None,
        }
    }

    pub fn duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl Iterator for Tone {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        self.i += 1;

        match self.duration {
            Some(i) if self.i > i as usize => return None,
            _ => {}
        }

        Some((self.i as f32 * self.tone * 2.0 * PI / self.sample_rate).sin())
    }
}

#[cfg(test)]
mod test {
    use super::Tone;

    #[test]
    fn test_tone_duration() {
        let tone = Tone::new(440.0, 44100).duration(100);
        assert_eq!(tone.count(), 100);
    }

    #[test]
    fn test_tone_range() {
        let mut tone = Tone::new(800.0, 44100).duration(1000);
        assert!(tone.all(|x| (-1.0..=1.0).contains(&x)));
    }

    #[test]
    fn test_tone_period() {
        // 441 Hz at 44100 Hz repeats every 100 samples
        let samples = Tone::new(441.0, 44100).take(200).collect::<Vec<_>>();
        for i in 0..100 {
            assert!((samples[i] - samples[i + 100]).abs() < 1e-3);
        }
    }
}
