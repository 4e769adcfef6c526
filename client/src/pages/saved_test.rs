use super::*;

#[test]
fn saved_header_counts() {
    assert_eq!(saved_header(0), "No Saved Breweries Yet");
    assert_eq!(saved_header(3), "Viewing 3 Saved Breweries");
}

#[test]
fn reaction_input_is_trimmed() {
    assert_eq!(validate_reaction_input("  cheers  "), Ok("cheers".to_owned()));
}

#[test]
fn blank_reaction_is_rejected() {
    assert_eq!(validate_reaction_input("   "), Err("Write a reaction first."));
}

#[test]
fn reaction_length_is_counted_in_characters() {
    assert!(validate_reaction_input(&"ü".repeat(MAX_REACTION_LEN)).is_ok());
    assert_eq!(
        validate_reaction_input(&"x".repeat(MAX_REACTION_LEN + 1)),
        Err("Reactions are limited to 280 characters.")
    );
}
