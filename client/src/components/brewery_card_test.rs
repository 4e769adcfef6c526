use saves::{BrewId, RawBrewery};

use super::*;

fn lagunitas(web: Option<&str>) -> BreweryRecord {
    BreweryRecord::try_from(RawBrewery {
        id: Some("lagunitas-brewing-co-petaluma".to_owned()),
        name: Some("Lagunitas Brewing Co".to_owned()),
        brewery_type: Some("large".to_owned()),
        city: Some("Petaluma".to_owned()),
        state: Some("California".to_owned()),
        website_url: web.map(str::to_owned),
        ..RawBrewery::default()
    })
    .unwrap()
}

#[test]
fn save_label_follows_saved_state() {
    assert_eq!(save_button_label(false), "Save this brewery!");
    assert_eq!(save_button_label(true), "This brewery has been saved!");
}

#[test]
fn site_link_present_with_web() {
    let record = lagunitas(Some("http://www.lagunitas.com"));
    assert_eq!(record.brew_id, BrewId::new("lagunitas-brewing-co-petaluma"));
    assert_eq!(site_href(&record).as_deref(), Some("http://www.lagunitas.com"));
}

#[test]
fn empty_web_has_no_site_link_but_is_still_saveable() {
    let record = lagunitas(Some(""));
    assert_eq!(site_href(&record), None);
    assert_eq!(save_button_label(false), SAVE_LABEL);
}

#[test]
fn missing_web_has_no_site_link() {
    assert_eq!(site_href(&lagunitas(None)), None);
}

#[test]
fn reaction_label_pluralizes() {
    assert_eq!(reaction_label(0), "0 reactions");
    assert_eq!(reaction_label(1), "1 reaction");
    assert_eq!(reaction_label(4), "4 reactions");
}
