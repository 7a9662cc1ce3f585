pub(crate) mod tilt;
