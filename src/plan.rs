//! Frequency plans: a band plus the operator's ADR bounds and join-accept CFList.
use lora_modulation::LoRaDataRate;

use crate::band::{Band, Modulation};
use crate::Error;

/// Bounds the network uses when adapting the data rate and TX power of end-devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdrConfig {
    pub min_data_rate: u8,
    pub max_data_rate: u8,
    /// dBm
    pub min_tx_power: i8,
    /// dBm
    pub max_tx_power: i8,
    pub step_tx_power: i8,
}

/// Channel frequencies sent to end-devices in the join-accept.
///
/// Unused slots are `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CfList(pub [u32; 5]);

impl CfList {
    /// CFList type byte of a list of frequencies.
    const TYPE_FREQUENCIES: u8 = 0;

    pub fn frequencies(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied().filter(|&f| f != 0)
    }

    /// Encodes the list as the 16 bytes appended to a join-accept.
    ///
    /// Each frequency is stored in units of 100 Hz as a 24 bit little endian value, followed by
    /// the CFList type.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut res = [0; 16];
        for (i, freq) in self.0.iter().enumerate() {
            let value = (freq / 100).to_le_bytes();
            res[3 * i..3 * i + 3].copy_from_slice(&value[..3]);
        }
        res[15] = Self::TYPE_FREQUENCIES;
        res
    }
}

/// A band configuration together with the operator specific parts of a region.
#[derive(Debug, Clone)]
pub struct FrequencyPlan {
    pub band: Band,
    /// `None` when the region has no ADR guidance.
    pub adr: Option<AdrConfig>,
    /// `None` when the region uses the band's default channels.
    pub cf_list: Option<CfList>,
}

impl FrequencyPlan {
    pub fn new(band: Band) -> Self {
        Self { band, adr: None, cf_list: None }
    }

    /// The `SF<n>BW<khz>` form of the data rate at `index`.
    ///
    /// Fails with [`Error::InvalidDataRate`] for reserved slots and non-LoRa data rates.
    pub fn data_rate_string(&self, index: usize) -> Result<String, Error> {
        match self.band.data_rates.get(index) {
            Some(Some(dr)) => match dr.modulation {
                Modulation::LoRa(lora) => Ok(lora.to_string()),
                Modulation::Fsk { .. } => Err(Error::InvalidDataRate(index)),
            },
            _ => Err(Error::InvalidDataRate(index)),
        }
    }

    /// Index of the data rate described by `data_rate`, eg: `SF7BW125`.
    ///
    /// When the same spreading factor and bandwidth appear more than once in the table (eg:
    /// US915 DR4 and DR12), the lowest index is returned.
    pub fn data_rate_index(&self, data_rate: &str) -> Result<usize, Error> {
        let lora: LoRaDataRate = data_rate.parse()?;
        self.band
            .data_rate_index(&Modulation::LoRa(lora))
            .ok_or_else(|| Error::DataRateNotFound(data_rate.to_owned()))
    }

    /// Index of `power` (dBm) in the TX power table. Only exact matches are returned.
    pub fn tx_power_index(&self, power: i8) -> Result<usize, Error> {
        self.band.tx_power.iter().position(|&p| p == power).ok_or(Error::TxPowerNotFound(power))
    }
}
