use super::{Bandwidth, Datarate, SpreadingFactor};

pub(crate) const US915_DATARATES: [Option<Datarate>; 14] = [
    // DR0
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 19, 19)),
    // DR1
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 61, 61)),
    // DR2
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 133, 133)),
    // DR3
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250, 250)),
    // DR4
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_500KHz, 250, 250)),
    // DR5..DR7: RFU
    None,
    None,
    None,
    // DR8
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_500KHz, 61, 61)),
    // DR9
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_500KHz, 137, 137)),
    // DR10
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_500KHz, 250, 250)),
    // DR11
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_500KHz, 250, 250)),
    // DR12
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_500KHz, 250, 250)),
    // DR13
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_500KHz, 250, 250)),
];

pub(crate) const AU915_DATARATES: [Option<Datarate>; 14] = [
    // DR0
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, 59, 0)),
    // DR1
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, 59, 0)),
    // DR2
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 59, 19)),
    // DR3
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 123, 61)),
    // DR4
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 250, 133)),
    // DR5
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250, 250)),
    // DR6
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_500KHz, 250, 250)),
    // DR7: RFU
    None,
    // DR8
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_500KHz, 61, 61)),
    // DR9
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_500KHz, 137, 137)),
    // DR10
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_500KHz, 250, 250)),
    // DR11
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_500KHz, 250, 250)),
    // DR12
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_500KHz, 250, 250)),
    // DR13
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_500KHz, 250, 250)),
];

pub(crate) const CN470_DATARATES: [Option<Datarate>; 6] = [
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, 59, 59)),
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, 59, 59)),
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 59, 59)),
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 123, 123)),
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 250, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250, 250)),
];
