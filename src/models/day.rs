use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    MAX_LAUNCH_HUMIDITY, MAX_LAUNCH_TEMP, MAX_LAUNCH_WIND, MIN_LAUNCH_TEMP,
};

/// Cloud cover label for one day. Only `Cumulus` and `Nimbus` block a
/// launch; every other label (including unrecognized ones) is benign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudCover {
    Cumulus,
    Nimbus,
    Stratus,
    Cirrus,
    Clear,
    Other(String),
}

impl CloudCover {
    pub fn parse(s: &str) -> Self {
        match s {
            "Cumulus" => CloudCover::Cumulus,
            "Nimbus" => CloudCover::Nimbus,
            "Stratus" => CloudCover::Stratus,
            "Cirrus" => CloudCover::Cirrus,
            "Clear" => CloudCover::Clear,
            other => CloudCover::Other(other.to_string()),
        }
    }

    pub fn blocks_launch(&self) -> bool {
        matches!(self, CloudCover::Cumulus | CloudCover::Nimbus)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    Eligible,
    Disqualified,
}

/// One validated day of weather observations.
///
/// Constructed once from validated values; fields are private and there are
/// no setters, so the eligibility derived at construction can never go
/// stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    id: u32,
    temperature: i32,
    wind: i32,
    humidity: i32,
    precipitation: i32,
    lightning: bool,
    clouds: CloudCover,
    eligibility: Eligibility,
}

impl DayRecord {
    pub fn new(
        id: u32,
        temperature: i32,
        wind: i32,
        humidity: i32,
        precipitation: i32,
        lightning: bool,
        clouds: CloudCover,
    ) -> Self {
        let eligibility = derive_eligibility(
            temperature,
            wind,
            humidity,
            precipitation,
            lightning,
            &clouds,
        );

        Self {
            id,
            temperature,
            wind,
            humidity,
            precipitation,
            lightning,
            clouds,
            eligibility,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    pub fn wind(&self) -> i32 {
        self.wind
    }

    pub fn humidity(&self) -> i32 {
        self.humidity
    }

    pub fn precipitation(&self) -> i32 {
        self.precipitation
    }

    pub fn lightning(&self) -> bool {
        self.lightning
    }

    pub fn clouds(&self) -> &CloudCover {
        &self.clouds
    }

    pub fn eligibility(&self) -> Eligibility {
        self.eligibility
    }

    pub fn is_eligible(&self) -> bool {
        self.eligibility == Eligibility::Eligible
    }
}

/// Hard binary gate over the six weather fields: any violated threshold
/// disqualifies the day outright, with no weighting or partial credit.
fn derive_eligibility(
    temperature: i32,
    wind: i32,
    humidity: i32,
    precipitation: i32,
    lightning: bool,
    clouds: &CloudCover,
) -> Eligibility {
    if !(MIN_LAUNCH_TEMP..=MAX_LAUNCH_TEMP).contains(&temperature)
        || wind > MAX_LAUNCH_WIND
        || humidity > MAX_LAUNCH_HUMIDITY
        || precipitation != 0
        || lightning
        || clouds.blocks_launch()
    {
        Eligibility::Disqualified
    } else {
        Eligibility::Eligible
    }
}
