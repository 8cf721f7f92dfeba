pub mod hsv_wheel;
pub mod ramp_bar;
