pub mod impl_google_translate;
#[cfg(test)]
pub mod impl_fake;
pub mod interface;
