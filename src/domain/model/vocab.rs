//! Closed vocabularies of the dataset. Sentiment and airline labels are the
//! only values the dataset may use; anything else fails the load.

use anyhow::bail;
use serde::{Serialize, Serializer};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn label(&self) -> &'static str {
        use Sentiment::*;

        match self {
            Positive => "positive",
            Neutral => "neutral",
            Negative => "negative",
        }
    }

    /// Next sentiment in display order, wrapping around. Drives the `s` key
    /// in the dashboard and has no other meaning.
    pub fn next(&self) -> Sentiment {
        use Sentiment::*;

        match self {
            Positive => Neutral,
            Neutral => Negative,
            Negative => Positive,
        }
    }
}

impl FromStr for Sentiment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Sentiment::*;

        Ok(match s {
            "positive" => Positive,
            "neutral" => Neutral,
            "negative" => Negative,
            other => bail!("unknown sentiment label: {other:?}"),
        })
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Sentiment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Airline {
    UsAirways,
    United,
    American,
    Southwest,
    Delta,
    VirginAmerica,
}

impl Airline {
    pub const ALL: [Airline; 6] = [
        Airline::UsAirways,
        Airline::United,
        Airline::American,
        Airline::Southwest,
        Airline::Delta,
        Airline::VirginAmerica,
    ];

    pub fn label(&self) -> &'static str {
        use Airline::*;

        match self {
            UsAirways => "US Airways",
            United => "United",
            American => "American",
            Southwest => "Southwest",
            Delta => "Delta",
            VirginAmerica => "Virgin America",
        }
    }

    /// Short form that fits under a terminal bar.
    pub fn short_label(&self) -> &'static str {
        use Airline::*;

        match self {
            UsAirways => "USAir",
            United => "United",
            American => "American",
            Southwest => "SWest",
            Delta => "Delta",
            VirginAmerica => "Virgin",
        }
    }
}

impl FromStr for Airline {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Airline::*;

        Ok(match s {
            "US Airways" => UsAirways,
            "United" => United,
            "American" => American,
            "Southwest" => Southwest,
            "Delta" => Delta,
            "Virgin America" => VirginAmerica,
            other => bail!("unknown airline label: {other:?}"),
        })
    }
}

impl std::fmt::Display for Airline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Airline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_labels() {
        for sentiment in Sentiment::ALL {
            assert_eq!(sentiment.label().parse::<Sentiment>().unwrap(), sentiment);
        }
        for airline in Airline::ALL {
            assert_eq!(airline.label().parse::<Airline>().unwrap(), airline);
        }
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!("POSITIVE".parse::<Sentiment>().is_err());
        assert!("mixed".parse::<Sentiment>().is_err());
        assert!("JetBlue".parse::<Airline>().is_err());
        assert!("".parse::<Airline>().is_err());
    }

    #[test]
    fn sentiment_cycle_visits_all() {
        let start = Sentiment::Positive;
        assert_eq!(start.next().next().next(), start);
    }
}
