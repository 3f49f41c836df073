pub mod fake_reading;
#[cfg(test)]
pub mod impl_fixed;
pub mod impl_rand;
pub mod interface;
