pub trait SpeechSynthesizer: Send + Sync {
    /// Encoded MP3 audio for `text` spoken in `language`.
    fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}
