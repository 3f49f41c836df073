/// Source of uniform draws in `[0, 1]`.
pub trait RandomSource: Send + Sync {
    fn unit(&self) -> f64;
}
