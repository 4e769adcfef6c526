use super::*;

#[test]
fn sign_in_failed_message_formats_status() {
    assert_eq!(sign_in_failed_message(400), "sign in failed: 400");
}

#[test]
fn search_params_carry_query_and_page_size() {
    let params = search_params("lagunitas", 20);
    assert_eq!(params[0], ("query", "lagunitas".to_owned()));
    assert_eq!(params[1], ("per_page", "20".to_owned()));
}

#[test]
fn decode_search_reads_directory_entries() {
    let body = r#"[{
        "id": "lagunitas-brewing-co-petaluma",
        "name": "Lagunitas Brewing Co",
        "brewery_type": "large",
        "city": "Petaluma",
        "state": "California",
        "website_url": "http://www.lagunitas.com"
    }]"#;
    let raw = decode_search(body).unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].id.as_deref(), Some("lagunitas-brewing-co-petaluma"));
    assert_eq!(raw[0].website_url.as_deref(), Some("http://www.lagunitas.com"));
}

#[test]
fn decode_search_rejects_non_array() {
    assert!(matches!(decode_search(r#"{"message":"rate limited"}"#), Err(SearchError::Decode(_))));
}

#[test]
fn decode_envelope_returns_data() {
    let body = r#"{"data":[{"brewId":"a","name":"A","type":"micro","city":"Bend","state":"Oregon","reactionCount":3}]}"#;
    let docs: Vec<BreweryDocument> = decode_envelope(body).unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].record.brew_id.as_str(), "a");
    assert_eq!(docs[0].record.web, None);
    assert_eq!(docs[0].reaction_count, 3);
}

#[test]
fn decode_envelope_surfaces_application_errors() {
    let body = r#"{"data":null,"errors":[{"message":"sign in to continue","code":"UNAUTHENTICATED"}]}"#;
    let err = decode_envelope::<Vec<BreweryDocument>>(body).unwrap_err();
    assert_eq!(err.code(), Some("UNAUTHENTICATED"));
}

#[test]
fn decode_envelope_rejects_garbage() {
    let err = decode_envelope::<Vec<BreweryDocument>>("<html>").unwrap_err();
    assert!(matches!(err, MutationError::Decode(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn adapters_are_unavailable_without_browser() {
    use futures::executor::block_on;

    let search = block_on(OpenBreweryDb::default().fetch_breweries("lagunitas"));
    assert_eq!(search.unwrap_err(), SearchError::Unavailable);

    let token = SessionToken::new("tok");
    let saved = block_on(GraphqlClient::default().saved_breweries(&token));
    assert_eq!(saved.unwrap_err(), MutationError::Unavailable);
}
