use lorawan_band::{BandOptions, Region, Registry};

fn initialized() -> Registry {
    let registry = Registry::new(BandOptions::default());
    registry.initialize_tables();
    registry
}

#[test]
fn default_channels() {
    let registry = initialized();
    let cases = [
        (868_100_000, Region::EU_863_870),
        (868_300_000, Region::EU_863_870),
        (867_900_000, Region::EU_863_870),
        (865_062_500, Region::IN_865_867),
        (865_402_500, Region::IN_865_867),
        (902_300_000, Region::US_902_928),
        (914_900_000, Region::US_902_928),
        (779_500_000, Region::CN_779_787),
        (433_175_000, Region::EU_433),
        (922_200_000, Region::AS_920_923),
        (923_600_000, Region::AS_923_925),
        (922_700_000, Region::KR_920_923),
        (915_200_000, Region::AU_915_928),
        (470_300_000, Region::CN_470_510),
        (864_100_000, Region::RU_864_870),
    ];
    for (frequency, region) in cases {
        assert_eq!(registry.guess(frequency), Some(region), "{frequency} Hz");
    }
}

#[test]
fn as923_and_kr920_default_channels() {
    let registry = initialized();
    assert_eq!(registry.guess(923_200_000), Some(Region::AS_923));
    assert_eq!(registry.guess(923_400_000), Some(Region::AS_923));
    assert_eq!(registry.guess(922_100_000), Some(Region::KR_920_923));
    assert_eq!(registry.guess(922_300_000), Some(Region::KR_920_923));
    assert_eq!(registry.guess(922_500_000), Some(Region::KR_920_923));
}

#[test]
fn unknown_frequencies() {
    let registry = initialized();
    // single rate channels are not indexed
    assert_eq!(registry.guess(868_800_000), None);
    assert_eq!(registry.guess(903_000_000), None);
    assert_eq!(registry.guess(0), None);
    assert_eq!(registry.guess(1), None);
    assert_eq!(registry.guess(868_100_001), None);
    assert_eq!(registry.guess(u64::MAX), None);
}

#[test]
fn index_only_holds_multi_rate_channels() {
    let registry = initialized();
    for (&frequency, &region) in registry.channel_index().unwrap() {
        let plan = registry.get(region).unwrap();
        let channel = plan
            .band
            .uplink_channels
            .iter()
            .find(|c| c.frequency == frequency)
            .unwrap();
        assert!(channel.is_multi_rate(), "{region}: {frequency} Hz");
        // owned by the first region in priority order
        let owner = Region::PRIORITY
            .into_iter()
            .find(|r| {
                registry
                    .get(*r)
                    .unwrap()
                    .band
                    .uplink_channels
                    .iter()
                    .any(|c| c.frequency == frequency && c.is_multi_rate())
            })
            .unwrap();
        assert_eq!(owner, region);
    }
}

#[test]
fn process_wide_registry() {
    lorawan_band::initialize_tables();
    lorawan_band::initialize_tables();
    assert_eq!(lorawan_band::guess(868_500_000), Some(Region::EU_863_870));
    assert_eq!(lorawan_band::guess_name(868_500_000), "EU_863_870");
    assert_eq!(lorawan_band::guess_name(923_400_000), "AS_923");
    assert_eq!(lorawan_band::guess_name(123), "");

    let plan = lorawan_band::get("RU_864_870").unwrap();
    assert_eq!(plan.band.uplink_channels.len(), 7);
    assert!(lorawan_band::get("XX_000_000").is_err());

    // the registry exists by now
    assert_eq!(
        lorawan_band::registry::configure(BandOptions::default()),
        Err(BandOptions::default())
    );
}
