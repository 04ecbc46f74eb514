use super::{Bandwidth, Datarate, SpreadingFactor};

/// Shared by EU868, EU433, CN779 and RU864.
pub(crate) const EU868_DATARATES: [Option<Datarate>; 8] = [
    // DR0
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, 59, 59)),
    // DR1
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, 59, 59)),
    // DR2
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 59, 59)),
    // DR3
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 123, 123)),
    // DR4
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 250, 250)),
    // DR5
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250, 250)),
    // DR6
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_250KHz, 250, 250)),
    // DR7: FSK 50 kbps
    Some(Datarate::fsk(50_000, 250)),
];

pub(crate) const AS923_DATARATES: [Option<Datarate>; 8] = [
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, 59, 0)),
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, 59, 0)),
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 123, 19)),
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 123, 61)),
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 250, 133)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_250KHz, 250, 250)),
    Some(Datarate::fsk(50_000, 250)),
];

pub(crate) const KR920_DATARATES: [Option<Datarate>; 6] = [
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, 59, 59)),
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, 59, 59)),
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 59, 59)),
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 123, 123)),
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 250, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250, 250)),
];

pub(crate) const IN865_DATARATES: [Option<Datarate>; 8] = [
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, 59, 59)),
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, 59, 59)),
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 59, 59)),
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 123, 123)),
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 250, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250, 250)),
    // DR6: RFU
    None,
    Some(Datarate::fsk(50_000, 250)),
];
