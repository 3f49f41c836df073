use crate::speech::interface::SpeechSynthesizer;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct SpeechSynthesizerFake {
    fail: bool,
    calls: AtomicUsize,
}

impl SpeechSynthesizerFake {
    pub fn new() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SpeechSynthesizer for SpeechSynthesizerFake {
    fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err("speech service unreachable".into());
        }
        Ok(format!("ID3 fake-mp3 [{}] {}", language, text).into_bytes())
    }
}
