//! CN470 region support (470..510 MHz)
use super::datarates::CN470_DATARATES;
use super::*;

const TX_POWER: [i8; 8] = [19, 17, 15, 13, 11, 9, 7, 5];

#[allow(clippy::upper_case_acronyms)]
pub(crate) struct CN470;

impl ChannelRegion for CN470 {
    const NAME: BandName = BandName::CN_470_510;
    const RX2: (u32, u8) = (505_300_000, 0);

    fn datarates() -> &'static [Option<Datarate>] {
        &CN470_DATARATES
    }

    fn tx_power() -> &'static [i8] {
        &TX_POWER
    }

    fn frequency_valid(f: u32) -> bool {
        (470_000_000..=510_000_000).contains(&f)
    }

    fn rx1_data_rate(uplink_dr: u8, rx1_dr_offset: u8, _dwell_time: DwellTime) -> Option<u8> {
        if uplink_dr > 5 || rx1_dr_offset > 5 {
            return None;
        }
        Some(uplink_dr.saturating_sub(rx1_dr_offset))
    }
}

impl FixedChannelRegion for CN470 {
    fn uplink_channels() -> Vec<Channel> {
        channel_block(470_300_000, 200_000, 96, 0, 5)
    }

    fn downlink_channels() -> Vec<Channel> {
        channel_block(500_300_000, 200_000, 48, 0, 5)
    }
}
