//! Baseline LoRaWAN regional parameters (eg: EU868, US915, etc).
//!
//! A [`Band`] describes a region as the LoRaWAN Regional Parameters define it: the default
//! channels, the data rate table, the TX power table and the receive window defaults. Operators
//! run different channel sets on top of this; see [`crate::region`].
use core::fmt;
use lora_modulation::{Bandwidth, LoRaDataRate, SpreadingFactor};

use crate::Error;

mod dynamic_channel_plans;
mod fixed_channel_plans;

/// Upper bound on the payload size when repeater compatibility is requested.
const REPEATER_MAX_PAYLOAD: u8 = 230;

/// Identifiers of the bands a [`BandSource`] can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
pub enum BandName {
    EU_863_870,
    US_902_928,
    CN_779_787,
    EU_433,
    AU_915_928,
    CN_470_510,
    AS_923,
    KR_920_923,
    IN_865_867,
    RU_864_870,
}

impl BandName {
    pub const fn as_str(self) -> &'static str {
        match self {
            BandName::EU_863_870 => "EU_863_870",
            BandName::US_902_928 => "US_902_928",
            BandName::CN_779_787 => "CN_779_787",
            BandName::EU_433 => "EU_433",
            BandName::AU_915_928 => "AU_915_928",
            BandName::CN_470_510 => "CN_470_510",
            BandName::AS_923 => "AS_923",
            BandName::KR_920_923 => "KR_920_923",
            BandName::IN_865_867 => "IN_865_867",
            BandName::RU_864_870 => "RU_864_870",
        }
    }
}

impl fmt::Display for BandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maximum time on air of a single uplink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DwellTime {
    NoLimit,
    Limit400ms,
}

/// Modulation of a data rate table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modulation {
    LoRa(LoRaDataRate),
    Fsk { bit_rate: u32 },
}

/// One entry of a band's data rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Datarate {
    pub modulation: Modulation,
    max_mac_payload_size: u8,
    max_mac_payload_size_with_dwell_time: u8,
}

impl Datarate {
    pub(crate) const fn lora(
        spreading_factor: SpreadingFactor,
        bandwidth: Bandwidth,
        max_mac_payload_size: u8,
        max_mac_payload_size_with_dwell_time: u8,
    ) -> Self {
        Self {
            modulation: Modulation::LoRa(LoRaDataRate::new(spreading_factor, bandwidth)),
            max_mac_payload_size,
            max_mac_payload_size_with_dwell_time,
        }
    }

    pub(crate) const fn fsk(bit_rate: u32, max_mac_payload_size: u8) -> Self {
        Self {
            modulation: Modulation::Fsk { bit_rate },
            max_mac_payload_size,
            max_mac_payload_size_with_dwell_time: max_mac_payload_size,
        }
    }
}

/// Inclusive range of data rate indices allowed on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataRateRange {
    min: u8,
    max: u8,
}

impl DataRateRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// The lowest data rate allowed on this channel.
    pub fn min_data_rate(&self) -> u8 {
        self.min
    }

    /// The highest data rate allowed on this channel.
    pub fn max_data_rate(&self) -> u8 {
        self.max
    }

    pub fn contains(&self, dr: u8) -> bool {
        (self.min..=self.max).contains(&dr)
    }

    pub fn len(&self) -> usize {
        usize::from(self.max.saturating_sub(self.min)) + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> {
        self.min..=self.max
    }
}

/// A single radio channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub frequency: u32,
    pub data_rates: DataRateRange,
    enabled: bool,
}

impl Channel {
    /// Initialize Channel with frequency and supported minimum and maximum data rates
    pub const fn new(frequency: u32, dr_min: u8, dr_max: u8) -> Self {
        Self { frequency, data_rates: DataRateRange::new(dr_min, dr_max), enabled: true }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether more than one data rate may be used on this channel. Single rate channels (eg: the
    /// FSK side channels) carry no information about the region they belong to.
    pub fn is_multi_rate(&self) -> bool {
        self.data_rates.len() > 1
    }
}

/// How downlink channels relate to uplink channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChannelPlan {
    /// RX1 uses the uplink frequency.
    Dynamic,
    /// RX1 uses downlink channel `uplink index % number of downlink channels`.
    Fixed,
}

/// Baseline configuration of a LoRaWAN band.
#[derive(Debug, Clone)]
pub struct Band {
    name: BandName,
    pub dwell_time: DwellTime,
    pub data_rates: Vec<Option<Datarate>>,
    /// TX power in dBm, indexed by TXPower.
    pub tx_power: Vec<i8>,
    pub uplink_channels: Vec<Channel>,
    pub downlink_channels: Vec<Channel>,
    pub rx2_frequency: u32,
    pub rx2_data_rate: u8,
    channel_plan: ChannelPlan,
    rx1_data_rate: fn(u8, u8, DwellTime) -> Option<u8>,
    frequency_valid: fn(u32) -> bool,
}

impl Band {
    pub fn name(&self) -> BandName {
        self.name
    }

    /// Index of the first data rate table entry with the given modulation.
    pub fn data_rate_index(&self, modulation: &Modulation) -> Option<usize> {
        self.data_rates
            .iter()
            .position(|dr| matches!(dr, Some(dr) if dr.modulation == *modulation))
    }

    pub fn disable_uplink_channel(&mut self, index: usize) -> Result<(), Error> {
        let channel = self.uplink_channels.get_mut(index).ok_or(Error::ChannelNotFound(index))?;
        channel.enabled = false;
        Ok(())
    }

    /// Replaces both uplink and downlink channels with `channels`.
    pub fn replace_channels(&mut self, channels: &[Channel]) {
        self.uplink_channels = channels.to_vec();
        self.downlink_channels = channels.to_vec();
    }

    pub fn enabled_uplink_channels(&self) -> impl Iterator<Item = &Channel> {
        self.uplink_channels.iter().filter(|c| c.enabled)
    }

    pub fn uplink_channel_index(&self, frequency: u32) -> Option<usize> {
        self.uplink_channels.iter().position(|c| c.frequency == frequency)
    }

    /// Whether the frequency falls within the band's regulatory limits.
    pub fn is_valid_frequency(&self, frequency: u32) -> bool {
        (self.frequency_valid)(frequency)
    }

    /// Maximum MAC payload size for the data rate, 0 when the data rate is unusable.
    pub fn max_payload_size(&self, datarate: usize, repeater_compatible: bool) -> u8 {
        let Some(Some(dr)) = self.data_rates.get(datarate) else {
            return 0;
        };
        let max_size = match self.dwell_time {
            DwellTime::NoLimit => dr.max_mac_payload_size,
            DwellTime::Limit400ms => dr.max_mac_payload_size_with_dwell_time,
        };
        if repeater_compatible && max_size > REPEATER_MAX_PAYLOAD {
            REPEATER_MAX_PAYLOAD
        } else {
            max_size
        }
    }

    /// Data rate of the RX1 window for an uplink at `uplink_dr` given the RX1 DR offset.
    pub fn rx1_data_rate(&self, uplink_dr: u8, rx1_dr_offset: u8) -> Option<u8> {
        (self.rx1_data_rate)(uplink_dr, rx1_dr_offset, self.dwell_time)
    }

    /// Frequency of the RX1 window for an uplink received on `uplink_frequency`.
    pub fn rx1_frequency(&self, uplink_frequency: u32) -> Result<u32, Error> {
        let index = self
            .uplink_channel_index(uplink_frequency)
            .ok_or(Error::UnknownFrequency(uplink_frequency))?;
        match self.channel_plan {
            ChannelPlan::Dynamic => Ok(uplink_frequency),
            ChannelPlan::Fixed => self
                .downlink_channels
                .get(index % self.downlink_channels.len().max(1))
                .map(|c| c.frequency)
                .ok_or(Error::UnknownFrequency(uplink_frequency)),
        }
    }
}

pub(crate) trait ChannelRegion {
    const NAME: BandName;
    const RX2: (u32, u8);

    fn datarates() -> &'static [Option<Datarate>];
    fn tx_power() -> &'static [i8];
    fn frequency_valid(frequency: u32) -> bool;
    fn rx1_data_rate(uplink_dr: u8, rx1_dr_offset: u8, dwell_time: DwellTime) -> Option<u8>;
}

/// Provides the baseline [`Band`] for a band identifier.
pub trait BandSource {
    fn band(&self, name: BandName, dwell_time: DwellTime) -> Result<Band, Error>;
}

/// The bands as defined by the LoRaWAN Regional Parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegionalParameters;

impl BandSource for RegionalParameters {
    fn band(&self, name: BandName, dwell_time: DwellTime) -> Result<Band, Error> {
        use dynamic_channel_plans::*;
        use fixed_channel_plans::*;

        let band = match name {
            BandName::EU_863_870 => dynamic_band::<EU868>(dwell_time),
            BandName::EU_433 => dynamic_band::<EU433>(dwell_time),
            BandName::CN_779_787 => dynamic_band::<CN779>(dwell_time),
            BandName::AS_923 => dynamic_band::<AS923>(dwell_time),
            BandName::KR_920_923 => dynamic_band::<KR920>(dwell_time),
            BandName::IN_865_867 => dynamic_band::<IN865>(dwell_time),
            BandName::RU_864_870 => dynamic_band::<RU864>(dwell_time),
            BandName::US_902_928 => fixed_band::<US915>(dwell_time),
            BandName::AU_915_928 => fixed_band::<AU915>(dwell_time),
            BandName::CN_470_510 => fixed_band::<CN470>(dwell_time),
        };
        Ok(band)
    }
}
