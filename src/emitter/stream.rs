//! System audio tone emitter.
//! Renders a sine tone through the default output device.

use std::{sync::Arc, thread, time::Duration};

use anyhow::Context;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use parking_lot::Mutex;

use super::Emitter;
use crate::tone::Tone;

pub struct SystemAudio {
    tone: Arc<Mutex<Option<Tone>>>,
    sample_rate: u32,
    _stream: cpal::Stream,
}

impl SystemAudio {
    /// Open an output stream on the default device.
    /// The stream idles on silence until a tone is loaded into the slot.
    pub fn new() -> anyhow::Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .context("no output device available")?;
        let config = device.default_output_config()?;
        let sample_rate = config.sample_rate().0;
        let channels = config.channels() as usize;

        let tone = Arc::new(Mutex::new(None::<Tone>));
        let stream = {
            let tone = tone.clone();
            device.build_output_stream(
                &config.into(),
                move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| {
                    let mut tone = tone.lock();
                    let mut last = 0.0;
                    for (i, e) in data.iter_mut().enumerate() {
                        if i % channels == 0 {
                            last = match tone.as_mut().and_then(|x| x.next()) {
                                Some(x) => x,
                                None => {
                                    *tone = None;
                                    0.0
                                }
                            };
                        }

                        *e = last;
                    }
                },
                move |err| eprintln!("[-] Error: {err}"),
                None,
            )?
        };
        stream.play()?;

        Ok(Self {
            tone,
            sample_rate,
            _stream: stream,
        })
    }
}

impl Emitter for SystemAudio {
    fn name(&self) -> &'static str {
        "system audio"
    }

    fn emit(&mut self, frequency: u32, duration: Duration) {
        let samples = (duration.as_secs_f32() * self.sample_rate as f32) as u32;
        *self.tone.lock() = Some(Tone::new(frequency as f32, self.sample_rate).duration(samples));
        thread::sleep(duration);
    }
}
