#![cfg_attr(not(any(test, feature = "std")), no_std)]
//! LoRa modulation characteristics and the `SF<n>BW<khz>` data rate notation
//! used by network servers and gateway forwarders.

use core::fmt;
use core::str::FromStr;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Channel width.
pub enum Bandwidth {
    _125KHz,
    _250KHz,
    _500KHz,
}

impl Bandwidth {
    /// Width of the channel in kHz, as written in data rate strings.
    pub const fn khz(self) -> u32 {
        match self {
            Bandwidth::_125KHz => 125,
            Bandwidth::_250KHz => 250,
            Bandwidth::_500KHz => 500,
        }
    }

    pub const fn from_khz(khz: u32) -> Option<Self> {
        match khz {
            125 => Some(Bandwidth::_125KHz),
            250 => Some(Bandwidth::_250KHz),
            500 => Some(Bandwidth::_500KHz),
            _ => None,
        }
    }
}

impl From<Bandwidth> for u32 {
    fn from(value: Bandwidth) -> Self {
        value.khz() * 1000
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Controls the chirp rate. Lower values are slower bandwidth, but more robust.
pub enum SpreadingFactor {
    _5,
    _6,
    _7,
    _8,
    _9,
    _10,
    _11,
    _12,
}

impl SpreadingFactor {
    pub const fn factor(self) -> u8 {
        match self {
            SpreadingFactor::_5 => 5,
            SpreadingFactor::_6 => 6,
            SpreadingFactor::_7 => 7,
            SpreadingFactor::_8 => 8,
            SpreadingFactor::_9 => 9,
            SpreadingFactor::_10 => 10,
            SpreadingFactor::_11 => 11,
            SpreadingFactor::_12 => 12,
        }
    }

    pub const fn from_factor(factor: u8) -> Option<Self> {
        match factor {
            5 => Some(SpreadingFactor::_5),
            6 => Some(SpreadingFactor::_6),
            7 => Some(SpreadingFactor::_7),
            8 => Some(SpreadingFactor::_8),
            9 => Some(SpreadingFactor::_9),
            10 => Some(SpreadingFactor::_10),
            11 => Some(SpreadingFactor::_11),
            12 => Some(SpreadingFactor::_12),
            _ => None,
        }
    }
}

impl From<SpreadingFactor> for u32 {
    fn from(sf: SpreadingFactor) -> Self {
        sf.factor() as u32
    }
}

/// A LoRa data rate: the pair of spreading factor and bandwidth.
///
/// Its textual form is `SF<n>BW<khz>`, eg: `SF7BW125`.
///
/// ```
/// use lora_modulation::{Bandwidth, LoRaDataRate, SpreadingFactor};
///
/// let dr: LoRaDataRate = "SF9BW125".parse().unwrap();
/// assert_eq!(dr, LoRaDataRate::new(SpreadingFactor::_9, Bandwidth::_125KHz));
/// assert_eq!(dr.to_string(), "SF9BW125");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoRaDataRate {
    pub spreading_factor: SpreadingFactor,
    pub bandwidth: Bandwidth,
}

impl LoRaDataRate {
    pub const fn new(spreading_factor: SpreadingFactor, bandwidth: Bandwidth) -> Self {
        Self { spreading_factor, bandwidth }
    }
}

impl fmt::Display for LoRaDataRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SF{}BW{}", self.spreading_factor.factor(), self.bandwidth.khz())
    }
}

/// Reasons a data rate string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string is not of the form `SF<n>BW<khz>`.
    Format,
    /// The spreading factor is not one LoRa supports.
    SpreadingFactor(u8),
    /// The bandwidth (in kHz) is not one LoRa supports.
    Bandwidth(u32),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Format => f.write_str("expected a data rate of the form SF<n>BW<khz>"),
            ParseError::SpreadingFactor(sf) => write!(f, "unsupported spreading factor {sf}"),
            ParseError::Bandwidth(bw) => write!(f, "unsupported bandwidth {bw} kHz"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

fn parse_digits<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::Format);
    }
    s.parse().map_err(|_| ParseError::Format)
}

impl FromStr for LoRaDataRate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix("SF").ok_or(ParseError::Format)?;
        let (sf, bw) = rest.split_once("BW").ok_or(ParseError::Format)?;
        let sf: u8 = parse_digits(sf)?;
        let bw: u32 = parse_digits(bw)?;
        Ok(LoRaDataRate {
            spreading_factor: SpreadingFactor::from_factor(sf)
                .ok_or(ParseError::SpreadingFactor(sf))?,
            bandwidth: Bandwidth::from_khz(bw).ok_or(ParseError::Bandwidth(bw))?,
        })
    }
}
