use crate::image_classifier::preprocess::InputTensor;

pub trait ImageClassifier: Send + Sync {
    /// Index of the highest scoring class for a preprocessed batch of one.
    fn predict(&self, input: &InputTensor) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;

    /// Length of the model's output vector, when the model declares it.
    fn class_count(&self) -> Option<usize>;
}

/// Position of the first maximum. NaN scores never win.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f32)>, (index, &score)| match best {
            Some((_, best_score)) if score <= best_score || score.is_nan() => best,
            None if score.is_nan() => None,
            _ => Some((index, score)),
        })
        .map(|(index, _)| index)
}
