use discover_sync::types::{Playlist, PlaylistItem, Track, TrackArtist};
use discover_sync::utils::*;

fn playlist(id: &str, name: &str) -> Option<Playlist> {
    Some(Playlist {
        id: id.to_string(),
        name: name.to_string(),
    })
}

fn item(id: Option<&str>, name: &str) -> PlaylistItem {
    PlaylistItem {
        track: Some(Track {
            id: id.map(str::to_string),
            name: name.to_string(),
            artists: vec![TrackArtist {
                name: "Artist".to_string(),
            }],
        }),
    }
}

#[test]
fn test_generate_state() {
    let state = generate_state();
    assert_eq!(state.len(), 32);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // every login attempt gets its own value
    assert_ne!(state, generate_state());
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    assert_eq!(verifier.len(), 128);
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(verifier, generate_code_verifier());
}

#[test]
fn test_generate_code_challenge() {
    let challenge = generate_code_challenge("test_verifier_123");

    assert_eq!(challenge, generate_code_challenge("test_verifier_123"));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // SHA256 digest, URL-safe base64 without padding
    assert_eq!(challenge.len(), 43);
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_track_uri() {
    assert_eq!(
        track_uri("4uLU6hMCjMI75M1A2tKUQC"),
        "spotify:track:4uLU6hMCjMI75M1A2tKUQC"
    );
}

#[test]
fn test_filter_saved_keeps_true_positions_in_order() {
    let ids = vec!["A", "B", "C"];
    let saved = vec![true, false, true];

    assert_eq!(filter_saved(&ids, &saved), Some(vec!["A", "C"]));
}

#[test]
fn test_filter_saved_all_and_none() {
    let ids = vec!["A", "B"];

    assert_eq!(filter_saved(&ids, &[true, true]), Some(vec!["A", "B"]));
    assert_eq!(filter_saved(&ids, &[false, false]), Some(vec![]));
    assert_eq!(filter_saved::<&str>(&[], &[]), Some(vec![]));
}

#[test]
fn test_filter_saved_rejects_misaligned_results() {
    let ids = vec!["A", "B", "C"];

    assert_eq!(filter_saved(&ids, &[true, false]), None);
    assert_eq!(filter_saved(&ids, &[true, false, true, true]), None);
}

#[test]
fn test_resolve_playlists_any_position() {
    let playlists = vec![
        playlist("p1", "Road Trip"),
        playlist("target", "Keepers"),
        playlist("p3", "Focus"),
        playlist("dw", "Discover Weekly"),
    ];

    let resolved = resolve_playlists(&playlists, "Discover Weekly", "Keepers");
    assert_eq!(resolved.source_id.as_deref(), Some("dw"));
    assert_eq!(resolved.target_id.as_deref(), Some("target"));

    let reversed: Vec<Option<Playlist>> = playlists.into_iter().rev().collect();
    let resolved = resolve_playlists(&reversed, "Discover Weekly", "Keepers");
    assert_eq!(resolved.source_id.as_deref(), Some("dw"));
    assert_eq!(resolved.target_id.as_deref(), Some("target"));
}

#[test]
fn test_resolve_playlists_first_match_wins() {
    let playlists = vec![
        playlist("dw-1", "Discover Weekly"),
        playlist("k-1", "Keepers"),
        playlist("dw-2", "Discover Weekly"),
        playlist("k-2", "Keepers"),
    ];

    let resolved = resolve_playlists(&playlists, "Discover Weekly", "Keepers");
    assert_eq!(resolved.source_id.as_deref(), Some("dw-1"));
    assert_eq!(resolved.target_id.as_deref(), Some("k-1"));
}

#[test]
fn test_resolve_playlists_exact_name_only() {
    let playlists = vec![
        playlist("a", "discover weekly"),
        playlist("b", "Discover Weekly "),
        playlist("c", "Keepers 2"),
    ];

    let resolved = resolve_playlists(&playlists, "Discover Weekly", "Keepers");
    assert_eq!(resolved.source_id, None);
    assert_eq!(resolved.target_id, None);
}

#[test]
fn test_resolve_playlists_skips_null_entries() {
    let playlists = vec![
        None,
        playlist("dw", "Discover Weekly"),
        None,
        playlist("target", "Keepers"),
    ];

    let resolved = resolve_playlists(&playlists, "Discover Weekly", "Keepers");
    assert_eq!(resolved.source_id.as_deref(), Some("dw"));
    assert_eq!(resolved.target_id.as_deref(), Some("target"));
}

#[test]
fn test_playable_tracks_skips_entries_without_id() {
    let items = vec![
        item(Some("t1"), "One"),
        PlaylistItem { track: None },
        item(None, "Local file"),
        item(Some(""), "Empty id"),
        item(Some("t2"), "Two"),
    ];

    let names: Vec<String> = playable_tracks(items).into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["One", "Two"]);
}
