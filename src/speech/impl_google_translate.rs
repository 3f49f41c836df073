use crate::library::logger::interface::Logger;
use crate::speech::interface::SpeechSynthesizer;
use std::sync::Arc;
use std::time::Duration;

/// The translate endpoint rejects longer queries.
const MAX_CHUNK_CHARS: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("nothing to speak")]
    EmptyText,
    #[error("speech request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("speech service answered with status {0}")]
    Status(u16),
    #[error("speech service returned no audio")]
    EmptyAudio,
}

/// Fetches MP3 audio from the public Google Translate speech endpoint.
pub struct SpeechSynthesizerGoogleTranslate {
    client: reqwest::blocking::Client,
    endpoint: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl SpeechSynthesizerGoogleTranslate {
    pub fn new(
        endpoint: &str,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64)")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            logger: logger.with_namespace("speech").with_namespace("google_translate"),
        })
    }

    fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, SpeechError> {
        let total = total.to_string();
        let index = index.to_string();
        let text_len = chunk.chars().count().to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("q", chunk),
                ("tl", language),
                ("total", total.as_str()),
                ("idx", index.as_str()),
                ("textlen", text_len.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Status(status.as_u16()));
        }

        Ok(response.bytes()?.to_vec())
    }
}

impl SpeechSynthesizer for SpeechSynthesizerGoogleTranslate {
    fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechError::EmptyText.into());
        }

        self.logger.info(&format!(
            "Synthesizing {} chunk(s) in {:?}",
            chunks.len(),
            language
        ))?;

        // MP3 frames are self-delimiting, so the parts play back to back.
        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            audio.extend(self.fetch_chunk(chunk, language, index, chunks.len())?);
        }

        if audio.is_empty() {
            return Err(SpeechError::EmptyAudio.into());
        }

        Ok(audio)
    }
}

/// Splits on whitespace into pieces of at most `max_chars` characters.
/// Words longer than the limit are cut.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            chunks.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if !current.is_empty() && current_len + 1 + word.len() > max_chars {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
