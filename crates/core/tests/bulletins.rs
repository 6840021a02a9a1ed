//! End-to-end runs over the three publishers' bulletin texts, as copied
//! from real pages: extract the epicenter span, normalize it, build the
//! lookup URL.

use epimap_core::{detect, extract, lookup_url, normalize, BulletinFormat};

/// JMA seismic intensity bulletin (各地の震度に関する情報).
const JMA_BULLETIN: &str = "各地の震度に関する情報\r\n\
平成３０年　９月１５日０４時３０分　気象庁発表\r\n\
\r\n\
１５日０４時２７分ころ、地震がありました。\r\n\
震源地は、胆振地方中東部（北緯４２．７度、東経１４１．９度）で、\r\n\
震源の深さは約１０ｋｍ、地震の規模（マグニチュード）は２．７と推定されます。\r\n\
この地震による津波の心配はありません。\r\n\
\r\n\
この地震により観測された最大震度は１です。\r\n";

/// NHK earthquake information page.
const NHK_BULLETIN: &str = "各地の震度に関する情報\r\n\
2018年9月15日　4時27分ごろ　北海道胆振地方中東部\r\n\
地震に関する情報\r\n\
震源 / 深さ \t北海道胆振地方中東部  /  10km\r\n\
緯度 / 経度 \t北緯 42.7度  /  東経 141.9度\r\n\
マグニチュード \t2.7\r\n\
震度 1 \t厚真町　安平町\r\n";

/// USGS "Latest Earthquakes" entry.
const USGS_BULLETIN: &str = "M 4.3 - 31km E of Tomakomai, Japan\r\n\
Time\t2018-09-14 08:31:42 (UTC)\r\n\
Location\t42.588°N 141.977°E\r\n\
Depth\t35.0 km\r\n";

#[test]
fn jma_bulletin_round_trip() {
    let detected = detect(JMA_BULLETIN).unwrap();
    assert_eq!(detected.format, BulletinFormat::Jma);
    assert_eq!(detected.span, "（北緯４２．７度、東経１４１．９度）");

    let gps = normalize(&detected.span);
    assert_eq!(gps, "n42.7 e141.9");
    assert_eq!(
        lookup_url(&gps),
        "https://maps.google.com/maps/place/n42.7%20e141.9?hl=en"
    );
}

#[test]
fn nhk_bulletin_round_trip() {
    let detected = detect(NHK_BULLETIN).unwrap();
    assert_eq!(detected.format, BulletinFormat::Nhk);
    assert_eq!(detected.span, "北緯 42.7度  /  東経 141.9度");

    let gps = normalize(&detected.span);
    assert_eq!(gps, "n 42.7     e 141.9");
}

#[test]
fn usgs_bulletin_round_trip() {
    let detected = detect(USGS_BULLETIN).unwrap();
    assert_eq!(detected.format, BulletinFormat::Usgs);
    assert_eq!(detected.span, "\t42.588°N 141.977°E");

    let gps = normalize(&detected.span);
    assert_eq!(gps, "\t42.588N 141.977E");
    assert!(!gps.contains('°'));
}

#[test]
fn unrecognized_bulletin_yields_empty_span() {
    let weather = "天気予報\r\n明日は晴れでしょう。\r\n";
    assert_eq!(extract(weather), "");
    assert!(detect(weather).is_none());

    // the pipeline stays total all the way to the URL
    assert_eq!(
        lookup_url(&normalize(&extract(weather))),
        "https://maps.google.com/maps/place/?hl=en"
    );
}
