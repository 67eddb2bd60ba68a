//! Built-in hourly samples used to seed an empty session.
//! Index 0 is the oldest hour, index 23 the most recent.

pub const SAMPLE_HOURS: usize = 24;

pub const DEFAULT_LOCATION: &str = "Bangkok";

pub const PM25: [f64; SAMPLE_HOURS] = [
    35.0, 38.0, 42.0, 48.0, 55.0, 62.0, 68.0, 75.0, 82.0, 88.0, 92.0, 85.0, 78.0, 72.0, 65.0, 58.0,
    52.0, 48.0, 45.0, 42.0, 40.0, 38.0, 36.0, 35.0,
];

pub const HARDNESS: [f64; SAMPLE_HOURS] = [
    220.0, 225.0, 235.0, 245.0, 255.0, 268.0, 275.0, 282.0, 290.0, 295.0, 292.0, 285.0, 278.0,
    270.0, 265.0, 268.0, 265.0, 260.0, 255.0, 250.0, 245.0, 240.0, 235.0, 230.0,
];

pub const TEMPERATURE: [f64; SAMPLE_HOURS] = [
    28.0, 28.5, 29.0, 30.0, 31.0, 32.0, 32.5, 32.0, 31.5, 30.5, 30.0, 29.5, 29.0, 28.8, 28.5, 28.3,
    28.2, 28.1, 28.0, 28.0, 28.0, 28.0, 28.0, 28.0,
];

pub const PH: [f64; SAMPLE_HOURS] = [
    7.6, 7.7, 7.8, 7.9, 8.0, 8.1, 8.1, 8.0, 7.9, 7.8, 7.8, 7.8, 7.8, 7.7, 7.7, 7.8, 7.8, 7.8, 7.8,
    7.7, 7.7, 7.7, 7.6, 7.6,
];
