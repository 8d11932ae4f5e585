use geoutm::{lat_lon_to_utm, utm_to_lat_lon, Ellipsoid, Error, LatLon, TransverseMercator, Utm};

const TOLERANCE_DEG: f64 = 1e-6;
const TOLERANCE_M: f64 = 0.01;

// (easting, northing, zone, latitude, longitude)
const NORTH_UTM: [(f64, f64, i32, f64, f64); 6] = [
    (234_000., 712_398., 24, 6.439_349_839_009_083, -41.404_857_228_640_11),
    (498_129., 3_908_457., 3, 35.319_332_918_415_085, -165.020_584_026_106_95),
    (649_282., 1_293_870., 54, 11.701_152_956_338_074, 142.369_721_437_116_8),
    (344_509., 90_812., 12, 0.821_358_139_289_280_7, -112.397_361_571_286),
    (240_989., 1_298_731., 26, 11.738_499_978_895_081, -29.376_427_553_943_01),
    (500_918., 5_001_989., 29, 45.171_380_907_495_4, -8.988_317_635_735_969),
];

const SOUTH_UTM: [(f64, f64, i32, f64, f64); 6] = [
    (364_980., 1_239_888., 6, -78.846_683_849_714_82, -153.264_159_047_091_9),
    (801_239., 8_102_939., 48, -17.138_408_033_001_52, 107.831_171_767_011_03),
    (350_029., 2_193_879., 17, -70.316_771_588_404_08, -84.992_009_764_238_59),
    (698_711., 4_028_939., 27, -53.849_967_599_760_53, -17.978_963_122_192_87),
    (246_098., 9_007_879., 44, -8.968_079_052_679_851, 78.690_794_867_129_3),
    (355_987., 3_451_980., 60, -59.047_252_269_304_884, 174.489_529_022_128_1),
];

// (latitude, longitude, zone, easting, northing)
const AUTO_ZONE: [(f64, f64, i32, f64, f64); 6] = [
    (-28.234_982, 79.293_801, 44, 332_593.76, 6_875_587.59),
    (89.123_980, 1.238_790, 31, 496_994.11, 9_900_204.20),
    (29.109_890, -9.237_811, 29, 476_861.73, 3_220_183.95),
    (34.123_080, 19.237_891, 34, 337_498.55, 3_777_205.02),
    (-33.298_711, 127.000_999, 52, 313_878.33, 6_313_814.18),
    (60.109_830, 18.238_791, 34, 346_526.84, 6_666_849.93),
];

const EXPLICIT_ZONE: [(f64, f64, i32, f64, f64); 6] = [
    (87.012_113, 133.198_711, 53, 489_518.85, 9_664_537.05),
    (45.333_988, -134.982_133, 8, 501_399.99, 5_020_053.48),
    (-27.298_790, 89.011_000, 45, 699_015.55, 6_978_868.08),
    (-78.123_978, 11.037_809, 32, 546_806.68, 1_326_979.69),
    (32.871_032, -10.923_898, 29, 320_002.44, 3_638_630.26),
    (0.129_899, -178.129_381, 1, 374_320.30, 14_360.55),
];

#[test]
fn utm_to_lat_lon_north() {
    for (easting, northing, zone, lat, lon) in NORTH_UTM {
        let coord = utm_to_lat_lon(easting, northing, zone, false).unwrap();
        assert!((coord.latitude() - lat).abs() < TOLERANCE_DEG, "{coord} vs {lat} {lon}");
        assert!((coord.longitude() - lon).abs() < TOLERANCE_DEG, "{coord} vs {lat} {lon}");
    }
}

#[test]
fn utm_to_lat_lon_south() {
    for (easting, northing, zone, lat, lon) in SOUTH_UTM {
        let coord = utm_to_lat_lon(easting, northing, zone, true).unwrap();
        assert!((coord.latitude() - lat).abs() < TOLERANCE_DEG, "{coord} vs {lat} {lon}");
        assert!((coord.longitude() - lon).abs() < TOLERANCE_DEG, "{coord} vs {lat} {lon}");
    }
}

#[test]
fn utm_to_lat_lon_rejects_zone() {
    assert_eq!(utm_to_lat_lon(355_987., 3_451_980., 0, true), Err(Error::InvalidZone(0)));
    assert_eq!(utm_to_lat_lon(355_987., 3_451_980., 61, true), Err(Error::InvalidZone(61)));
}

#[test]
fn lat_lon_to_utm_auto_zone() {
    for (lat, lon, zone, easting, northing) in AUTO_ZONE {
        let utm = lat_lon_to_utm(lat, lon, None).unwrap();
        assert_eq!(utm.zone(), zone);
        assert_eq!(utm.is_north(), lat >= 0.);
        assert!((utm.easting() - easting).abs() < TOLERANCE_M, "{utm}");
        assert!((utm.northing() - northing).abs() < TOLERANCE_M, "{utm}");
    }
}

#[test]
fn lat_lon_to_utm_explicit_zone() {
    for (lat, lon, zone, easting, northing) in EXPLICIT_ZONE {
        let utm = lat_lon_to_utm(lat, lon, Some(zone)).unwrap();
        assert_eq!(utm.zone(), zone);
        assert!((utm.easting() - easting).abs() < TOLERANCE_M, "{utm}");
        assert!((utm.northing() - northing).abs() < TOLERANCE_M, "{utm}");
    }
}

#[test]
fn lat_lon_to_utm_rejects_zone() {
    for lat in [-60., 0.129_899, 45.] {
        for lon in [-178.129_381, 0., 120.] {
            assert_eq!(lat_lon_to_utm(lat, lon, Some(0)), Err(Error::InvalidZone(0)));
            assert_eq!(lat_lon_to_utm(lat, lon, Some(61)), Err(Error::InvalidZone(61)));
            assert_eq!(lat_lon_to_utm(lat, lon, Some(78)), Err(Error::InvalidZone(78)));
        }
    }
    // The antimeridian on the eastern side falls past zone 60
    assert_eq!(lat_lon_to_utm(10., 180., None), Err(Error::InvalidZone(61)));
}

#[test]
fn lat_lon_to_utm_rejects_unresolvable_longitude() {
    assert_eq!(lat_lon_to_utm(0., 1e300, None), Err(Error::InvalidZone(i32::MAX)));
    assert_eq!(lat_lon_to_utm(0., f64::INFINITY, None), Err(Error::InvalidZone(i32::MAX)));
    assert_eq!(lat_lon_to_utm(0., -1e300, None), Err(Error::InvalidZone(i32::MIN)));
    assert_eq!(lat_lon_to_utm(0., f64::NEG_INFINITY, None), Err(Error::InvalidZone(i32::MIN)));
    assert_eq!(lat_lon_to_utm(0., f64::NAN, None), Err(Error::InvalidZone(0)));
    assert_eq!(lat_lon_to_utm(0., 186., None), Err(Error::InvalidZone(62)));
    assert_eq!(lat_lon_to_utm(0., -180.5, None), Err(Error::InvalidZone(0)));
}

#[test]
fn equator_hemisphere_agrees() {
    for lat in [0., -0.] {
        let coord = LatLon::create(lat, 3.).unwrap();
        let utm = coord.to_utm().unwrap();
        assert!(coord.is_north());
        assert_eq!(utm.is_north(), coord.is_north());
    }
}

#[test]
fn zone_follows_longitude() {
    for zone in 1..=60 {
        let west_edge = f64::from(6 * zone - 186);
        for offset in [0., 0.5, 3., 5.999] {
            let utm = lat_lon_to_utm(12., west_edge + offset, None).unwrap();
            assert_eq!(utm.zone(), zone);
        }
    }
    assert_eq!(lat_lon_to_utm(0., -180., None).unwrap().zone(), 1);
    assert_eq!(lat_lon_to_utm(0., 179.999, None).unwrap().zone(), 60);
}

#[test]
fn central_meridian_easting() {
    for zone in [1, 17, 31, 44, 60] {
        let lon = f64::from(6 * zone - 183);
        for lat in [-79., -45., -0.5, 0., 12.5, 60., 83.] {
            let utm = lat_lon_to_utm(lat, lon, None).unwrap();
            assert_eq!(utm.zone(), zone);
            assert!((utm.easting() - 500_000.).abs() < 1e-9);
        }
    }
}

#[test]
fn round_trip() {
    for lat in (-80..=80).step_by(5) {
        for zone in [1, 17, 31, 44, 60] {
            for offset in [-2.9, -1.5, 0., 1.5, 2.9] {
                let lat = f64::from(lat);
                let lon = f64::from(6 * zone - 183) + offset;

                let utm = lat_lon_to_utm(lat, lon, None).unwrap();
                let back = utm_to_lat_lon(utm.easting(), utm.northing(), utm.zone(), !utm.is_north()).unwrap();

                assert!((back.latitude() - lat).abs() < TOLERANCE_DEG, "{lat} {lon} -> {utm} -> {back}");
                assert!((back.longitude() - lon).abs() < TOLERANCE_DEG, "{lat} {lon} -> {utm} -> {back}");
            }
        }
    }
}

#[test]
fn southern_hemisphere_wraps() {
    let utm = lat_lon_to_utm(-0.5, 3., None).unwrap();
    assert!(!utm.is_north());
    assert!(utm.northing() > 0.);
    assert!(utm.northing() < 10_000_000.);

    let back = utm.to_latlon();
    assert!((back.latitude() + 0.5).abs() < TOLERANCE_DEG);

    // Dropping the hemisphere lands on the other side of the globe
    let wrong = utm_to_lat_lon(utm.easting(), utm.northing(), utm.zone(), false).unwrap();
    assert!(wrong.latitude() > 80.);

    let equator = lat_lon_to_utm(0., 3., None).unwrap();
    assert!(equator.is_north());
    assert!(equator.northing().abs() < 1e-9);
}

#[test]
fn type_conversions_agree_with_functions() {
    let coord = LatLon::create(-27.298_790, 89.011_000).unwrap();

    let via_type = Utm::from_latlon_in_zone(&coord, 45).unwrap();
    let via_fn = lat_lon_to_utm(coord.latitude(), coord.longitude(), Some(45)).unwrap();
    assert_eq!(via_type, via_fn);

    let back = LatLon::from(via_type);
    assert!((back.latitude() - coord.latitude()).abs() < TOLERANCE_DEG);
    assert!((back.longitude() - coord.longitude()).abs() < TOLERANCE_DEG);

    assert_eq!(Utm::try_from(coord).unwrap().zone(), 45);
}

#[test]
fn sphere_projection_round_trip() {
    let tm = TransverseMercator::new(Ellipsoid::sphere(6_371_000.).unwrap(), 1.).unwrap();
    let coord = LatLon::create(51.5, -0.12).unwrap();

    let utm = coord.to_utm_with(&tm, None).unwrap();
    assert_eq!(utm.zone(), 30);

    let back = utm.to_latlon_with(&tm);
    assert!((back.latitude() - coord.latitude()).abs() < TOLERANCE_DEG);
    assert!((back.longitude() - coord.longitude()).abs() < TOLERANCE_DEG);

    // A different earth model gives a visibly different grid position
    let wgs84 = coord.to_utm().unwrap();
    assert!((wgs84.northing() - utm.northing()).abs() > 1_000.);
}

#[test]
fn text_round_trip() {
    let utm = Utm::create(18, true, 585_664.121, 4_511_315.422).unwrap();
    assert_eq!(utm.to_string(), "18n 585664.121 4511315.422");
    assert_eq!("18n 585664.121 4511315.422".parse::<Utm>().unwrap(), utm);
    assert_eq!(geoutm::from_str::<_, Utm>("48S 801239 8102939").unwrap().is_north(), false);

    let coord = LatLon::create(-33.298_711, 127.000_999).unwrap();
    assert_eq!(coord.to_string(), "-33.298711 127.000999");
    assert_eq!("-33.298711 127.000999".parse::<LatLon>().unwrap(), coord);
}

#[test]
fn text_rejects_malformed() {
    assert!(matches!("18x 585664 4511315".parse::<Utm>(), Err(Error::InvalidUtmCoords(_))));
    assert!(matches!("18n 585664".parse::<Utm>(), Err(Error::InvalidUtmCoords(_))));
    assert!(matches!("n 585664 4511315".parse::<Utm>(), Err(Error::InvalidUtmCoords(_))));
    assert!(matches!("18n".parse::<Utm>(), Err(Error::InvalidUtmCoords(_))));
    assert_eq!("0n 585664 4511315".parse::<Utm>(), Err(Error::InvalidZone(0)));

    assert!(matches!("91 0".parse::<LatLon>(), Err(Error::InvalidCoord(_))));
    assert!(matches!("north 0".parse::<LatLon>(), Err(Error::InvalidCoord(_))));
}
