use std::fmt;

/// The three benchmark datasets this tool normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dataset {
    /// Numenta Anomaly Benchmark (streaming metrics).
    Nab,
    /// Yahoo S5 / A1 benchmark (labeled time series).
    YahooS5,
    /// KDD Cup '99 network intrusion data (10 percent subset).
    Kdd99,
}

impl Dataset {
    /// Processing order: NAB, Yahoo S5, KDD'99.
    pub const ALL: [Dataset; 3] = [Dataset::Nab, Dataset::YahooS5, Dataset::Kdd99];

    pub fn name(self) -> &'static str {
        match self {
            Dataset::Nab => "NAB",
            Dataset::YahooS5 => "Yahoo S5",
            Dataset::Kdd99 => "KDD Cup '99",
        }
    }

    /// Subdirectory of the source folder holding this dataset's raw
    /// distribution, matching the upstream archive names.
    pub fn source_subdir(self) -> &'static str {
        match self {
            Dataset::Nab => "NAB-master",
            Dataset::YahooS5 => "yahoo-s5-data",
            Dataset::Kdd99 => "kdd-cup-99-data",
        }
    }

    /// The raw file or glob each pipeline looks for.
    pub fn source_pattern(self) -> &'static str {
        match self {
            Dataset::Nab => "Twitter_volume_AMZN.csv",
            Dataset::YahooS5 => "real_*.csv",
            Dataset::Kdd99 => "kddcup.data_10_percent",
        }
    }

    /// Canonical output filename.
    pub fn output_file(self) -> &'static str {
        match self {
            Dataset::Nab => "NAB_realTweets.csv",
            Dataset::YahooS5 => "Yahoo_S5_A1.csv",
            Dataset::Kdd99 => "KDD99.csv",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
