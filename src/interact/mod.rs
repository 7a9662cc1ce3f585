pub(crate) mod audio;
pub(crate) mod scroll;
pub(crate) mod tilt;
