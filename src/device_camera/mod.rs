pub mod impl_fake;
#[cfg(feature = "opencv-camera")]
pub mod impl_opencv;
pub mod interface;
