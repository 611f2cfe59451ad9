use std::{fmt, str::FromStr};

use serde::Serialize;

pub const DEFAULT_PLOT_SIZE: u64 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FinishQuality {
    Basic,
    #[default]
    Standard,
    Premium,
}

impl FinishQuality {
    pub const ALL: [FinishQuality; 3] = [
        FinishQuality::Basic,
        FinishQuality::Standard,
        FinishQuality::Premium,
    ];

    /// Rupees per square foot.
    pub fn rate(self) -> u64 {
        match self {
            FinishQuality::Basic => 1200,
            FinishQuality::Standard => 1500,
            FinishQuality::Premium => 1900,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FinishQuality::Basic => "Functional finishes with standard materials.",
            FinishQuality::Standard => "Enhanced durability and aesthetic appeal.",
            FinishQuality::Premium => "High-end materials and luxury features.",
        }
    }
}

impl fmt::Display for FinishQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FinishQuality::Basic => "Basic",
            FinishQuality::Standard => "Standard",
            FinishQuality::Premium => "Premium",
        };
        f.write_str(label)
    }
}

impl FromStr for FinishQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(FinishQuality::Basic),
            "standard" => Ok(FinishQuality::Standard),
            "premium" => Ok(FinishQuality::Premium),
            other => Err(format!("unknown finish quality {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub plot_size: u64,
    pub quality: FinishQuality,
    pub rate: u64,
    pub total: u64,
}

/// Totals past `u64::MAX` saturate instead of wrapping.
pub fn estimate(plot_size: u64, quality: FinishQuality) -> Estimate {
    Estimate {
        plot_size,
        quality,
        rate: quality.rate(),
        total: plot_size.saturating_mul(quality.rate()),
    }
}

/// Text field input: anything that is not a non-negative integer is 0.
pub fn parse_plot_size(raw: &str) -> u64 {
    raw.trim().parse::<i64>().map(|v| v.max(0) as u64).unwrap_or(0)
}
