use crate::geo::interface::RandomSource;

pub struct RandomSourceRand {}

impl RandomSourceRand {
    pub fn new() -> Self {
        Self {}
    }
}

impl RandomSource for RandomSourceRand {
    fn unit(&self) -> f64 {
        rand::random::<f64>()
    }
}
