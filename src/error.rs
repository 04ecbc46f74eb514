use crate::band::BandName;

/// Errors returned while building or querying frequency plans.
///
/// None of these are transient: the same input always yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The region name is not one of the supported frequency plans.
    #[error("invalid argument: unknown frequency band `{0}`")]
    UnknownRegion(String),

    /// The data rate table entry is reserved or not a LoRa data rate.
    #[error("invalid data rate at index {0}")]
    InvalidDataRate(usize),

    #[error("invalid data rate string: {0}")]
    ParseDataRate(#[from] lora_modulation::ParseError),

    /// No entry of the data rate table matches the given data rate.
    #[error("data rate `{0}` not found")]
    DataRateNotFound(String),

    #[error("the given tx-power does not exist: {0} dBm")]
    TxPowerNotFound(i8),

    #[error("uplink channel {0} does not exist")]
    ChannelNotFound(usize),

    /// The frequency is not one of the band's uplink channels.
    #[error("frequency {0} Hz is not an uplink channel")]
    UnknownFrequency(u32),

    /// A [`BandSource`](crate::band::BandSource) could not provide the band.
    #[error("band {0} is not available")]
    BandUnavailable(BandName),
}
