//! IN865 region support (865..867 MHz)
use super::datarates::IN865_DATARATES;
use super::*;

const TX_POWER: [i8; 11] = [30, 28, 26, 24, 22, 20, 18, 16, 14, 12, 10];

const JOIN_CHANNELS: [Channel; 3] = [
    Channel::new(865_062_500, 0, 5),
    Channel::new(865_402_500, 0, 5),
    Channel::new(865_985_000, 0, 5),
];

#[allow(clippy::upper_case_acronyms)]
pub(crate) struct IN865;

impl ChannelRegion for IN865 {
    const NAME: BandName = BandName::IN_865_867;
    const RX2: (u32, u8) = (866_550_000, 2);

    fn datarates() -> &'static [Option<Datarate>] {
        &IN865_DATARATES
    }

    fn tx_power() -> &'static [i8] {
        &TX_POWER
    }

    fn frequency_valid(f: u32) -> bool {
        (865_000_000..=867_000_000).contains(&f)
    }

    fn rx1_data_rate(uplink_dr: u8, rx1_dr_offset: u8, _dwell_time: DwellTime) -> Option<u8> {
        // FSK uplinks answer on DR7 regardless of the offset
        if uplink_dr == 7 {
            return (rx1_dr_offset <= 7).then_some(7);
        }
        rx1_signed_offset(uplink_dr, rx1_dr_offset, 0, 5)
    }
}

impl DynamicChannelRegion for IN865 {
    fn join_channels() -> &'static [Channel] {
        &JOIN_CHANNELS
    }
}
