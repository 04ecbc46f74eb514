//! Channel sets operated by The Things Network on top of the regional defaults.
use crate::band::Channel;
use crate::plan::{AdrConfig, CfList};

/// EU863-870: the 3 default channels, 5 extra channels, SF7BW250 on 868.3 MHz and FSK on
/// 868.8 MHz.
pub(super) const EU_863_870: [Channel; 9] = [
    Channel::new(868_100_000, 0, 5),
    Channel::new(868_300_000, 0, 6),
    Channel::new(868_500_000, 0, 5),
    Channel::new(867_100_000, 0, 5),
    Channel::new(867_300_000, 0, 5),
    Channel::new(867_500_000, 0, 5),
    Channel::new(867_700_000, 0, 5),
    Channel::new(867_900_000, 0, 5),
    Channel::new(868_800_000, 7, 7),
];
pub(super) const EU_863_870_CF_LIST: CfList =
    CfList([867_100_000, 867_300_000, 867_500_000, 867_700_000, 867_900_000]);
pub(super) const EU_863_870_ADR: AdrConfig = AdrConfig {
    min_data_rate: 0,
    max_data_rate: 5,
    min_tx_power: 2,
    max_tx_power: 14,
    step_tx_power: 3,
};

pub(super) const US_902_928_ADR: AdrConfig = AdrConfig {
    min_data_rate: 0,
    max_data_rate: 3,
    min_tx_power: 10,
    max_tx_power: 20,
    step_tx_power: 2,
};

pub(super) const AU_915_928_ADR: AdrConfig = AdrConfig {
    min_data_rate: 0,
    max_data_rate: 5,
    min_tx_power: 10,
    max_tx_power: 20,
    step_tx_power: 2,
};

/// Shared by all AS923 variants.
pub(super) const AS_923_ADR: AdrConfig = AdrConfig {
    min_data_rate: 0,
    max_data_rate: 5,
    min_tx_power: 2,
    max_tx_power: 14,
    step_tx_power: 2,
};

pub(super) const AS_920_923: [Channel; 10] = [
    Channel::new(923_200_000, 0, 5),
    Channel::new(923_400_000, 0, 5),
    Channel::new(922_200_000, 0, 5),
    Channel::new(922_400_000, 0, 5),
    Channel::new(922_600_000, 0, 5),
    Channel::new(922_800_000, 0, 5),
    Channel::new(923_000_000, 0, 5),
    Channel::new(922_000_000, 0, 5),
    Channel::new(922_100_000, 6, 6),
    Channel::new(921_800_000, 7, 7),
];
pub(super) const AS_920_923_CF_LIST: CfList =
    CfList([922_200_000, 922_400_000, 922_600_000, 922_800_000, 923_000_000]);

pub(super) const AS_923_925: [Channel; 10] = [
    Channel::new(923_200_000, 0, 5),
    Channel::new(923_400_000, 0, 5),
    Channel::new(923_600_000, 0, 5),
    Channel::new(923_800_000, 0, 5),
    Channel::new(924_000_000, 0, 5),
    Channel::new(924_200_000, 0, 5),
    Channel::new(924_400_000, 0, 5),
    Channel::new(924_600_000, 0, 5),
    Channel::new(924_500_000, 6, 6),
    Channel::new(924_800_000, 7, 7),
];
pub(super) const AS_923_925_CF_LIST: CfList =
    CfList([923_600_000, 923_800_000, 924_000_000, 924_200_000, 924_400_000]);

/// KR920-923: the 3 default channels and 4 extra channels.
pub(super) const KR_920_923: [Channel; 7] = [
    Channel::new(922_100_000, 0, 5),
    Channel::new(922_300_000, 0, 5),
    Channel::new(922_500_000, 0, 5),
    Channel::new(922_700_000, 0, 5),
    Channel::new(922_900_000, 0, 5),
    Channel::new(923_100_000, 0, 5),
    Channel::new(923_300_000, 0, 5),
];
pub(super) const KR_920_923_CF_LIST: CfList =
    CfList([922_700_000, 922_900_000, 923_100_000, 923_300_000, 0]);

/// RU864-870: the recommended channels used by LoRaWAN networks in Russia.
pub(super) const RU_864_870: [Channel; 7] = [
    Channel::new(868_900_000, 0, 5),
    Channel::new(869_100_000, 0, 5),
    Channel::new(864_100_000, 0, 5),
    Channel::new(864_300_000, 0, 5),
    Channel::new(864_500_000, 0, 5),
    Channel::new(864_700_000, 0, 5),
    Channel::new(864_900_000, 0, 5),
];
pub(super) const RU_864_870_CF_LIST: CfList =
    CfList([864_100_000, 864_300_000, 864_500_000, 864_700_000, 864_900_000]);
pub(super) const RU_864_870_ADR: AdrConfig = AdrConfig {
    min_data_rate: 0,
    max_data_rate: 5,
    min_tx_power: 2,
    max_tx_power: 14,
    step_tx_power: 3,
};
