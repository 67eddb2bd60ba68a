use ansi_term::Colour;
use serde::Serialize;
use std::fmt;

/// Air quality bucket for a PM2.5 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Pm25Status {
    Good,
    Moderate,
    Unhealthy,
}

impl Pm25Status {
    pub fn label(&self) -> &'static str {
        match self {
            Pm25Status::Good => "Good",
            Pm25Status::Moderate => "Moderate",
            Pm25Status::Unhealthy => "Unhealthy",
        }
    }

    pub fn colour(&self) -> Colour {
        match self {
            Pm25Status::Good => Colour::Green,
            Pm25Status::Moderate => Colour::RGB(255, 153, 51), // orange
            Pm25Status::Unhealthy => Colour::Red,
        }
    }
}

impl fmt::Display for Pm25Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Water hardness bucket (mg/L as CaCO₃).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HardnessStatus {
    Soft,
    ModeratelyHard,
    VeryHard,
}

impl HardnessStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HardnessStatus::Soft => "Soft",
            HardnessStatus::ModeratelyHard => "Moderately hard",
            HardnessStatus::VeryHard => "Very hard",
        }
    }

    pub fn colour(&self) -> Colour {
        match self {
            HardnessStatus::Soft => Colour::Green,
            HardnessStatus::ModeratelyHard => Colour::RGB(255, 153, 51),
            HardnessStatus::VeryHard => Colour::Red,
        }
    }
}

impl fmt::Display for HardnessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
