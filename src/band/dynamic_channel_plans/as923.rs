//! AS923 region support (915..928 MHz)
//!
//! With the 400 ms uplink dwell time limit, DR0 and DR1 cannot carry any payload and RX1 never
//! goes below DR2.
use super::datarates::AS923_DATARATES;
use super::*;

const TX_POWER: [i8; 8] = [16, 14, 12, 10, 8, 6, 4, 2];

const JOIN_CHANNELS: [Channel; 2] =
    [Channel::new(923_200_000, 0, 5), Channel::new(923_400_000, 0, 5)];

#[allow(clippy::upper_case_acronyms)]
pub(crate) struct AS923;

impl ChannelRegion for AS923 {
    const NAME: BandName = BandName::AS_923;
    const RX2: (u32, u8) = (923_200_000, 2);

    fn datarates() -> &'static [Option<Datarate>] {
        &AS923_DATARATES
    }

    fn tx_power() -> &'static [i8] {
        &TX_POWER
    }

    fn frequency_valid(f: u32) -> bool {
        (915_000_000..=928_000_000).contains(&f)
    }

    fn rx1_data_rate(uplink_dr: u8, rx1_dr_offset: u8, dwell_time: DwellTime) -> Option<u8> {
        let min_dr = match dwell_time {
            DwellTime::NoLimit => 0,
            DwellTime::Limit400ms => 2,
        };
        rx1_signed_offset(uplink_dr, rx1_dr_offset, min_dr, 5)
    }
}

impl DynamicChannelRegion for AS923 {
    fn join_channels() -> &'static [Channel] {
        &JOIN_CHANNELS
    }
}
