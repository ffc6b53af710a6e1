//! Validates undo/redo semantics, history bounds, and share-token codec behavior

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use patternplay::model::config::{PatternConfig, PatternKind, PatternState};
use patternplay::model::presets::{all_presets, default_config};
use patternplay::state::codec;
use patternplay::state::history::History;

fn named(config: PatternConfig, name: &str) -> PatternState {
    PatternState::new(config, name)
}

#[test]
fn test_undo_redo_walk_restores_endpoints() {
    let s0 = named(default_config(PatternKind::Geometric), "S0");
    let s1 = named(default_config(PatternKind::Dots), "S1");
    let s2 = named(default_config(PatternKind::Noise), "S2");

    let mut history = History::new(s0.clone());
    history.commit(s1);
    history.commit(s2.clone());

    history.undo();
    history.undo();
    assert_eq!(history.present(), &s0);
    assert!(!history.can_undo());
    assert!(history.can_redo());

    history.redo();
    history.redo();
    assert_eq!(history.present(), &s2);
    assert!(!history.can_redo());
}

#[test]
fn test_direct_commit_after_undo_branches_and_clears_future() {
    let s0 = named(default_config(PatternKind::Geometric), "S0");
    let s1 = named(default_config(PatternKind::Dots), "S1");
    let s2 = named(default_config(PatternKind::Noise), "S2");

    let mut history = History::new(s0.clone());
    history.commit(s1);
    history.undo();
    assert_eq!(history.present(), &s0);
    assert_eq!(history.redo_depth(), 1);

    // A direct user commit is not the suppressed replay; it records and
    // discards the redo branch
    history.commit(s2.clone());
    assert_eq!(history.present(), &s2);
    assert_eq!(history.redo_depth(), 0);
    assert_eq!(history.undo_depth(), 1);
}

#[test]
fn test_replay_commit_after_undo_is_swallowed_once() {
    let s0 = named(default_config(PatternKind::Geometric), "S0");
    let s1 = named(default_config(PatternKind::Dots), "S1");

    let mut history = History::new(s0.clone());
    history.commit(s1.clone());
    history.undo();

    // The state-change reaction replays the present value; exactly one such
    // commit is swallowed
    history.commit(s0.clone());
    assert_eq!(history.present(), &s0);
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 1);

    // Suppression is spent: the same value committed again records normally
    history.commit(s0.clone());
    assert_eq!(history.undo_depth(), 1);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_history_bound_evicts_oldest_entries() {
    let mut history = History::new(0_u32);
    // Default bound is 50; five extra commits evict the five oldest
    for value in 1..=55 {
        history.commit(value);
    }
    assert_eq!(history.undo_depth(), 50);
    while history.undo() {}
    assert_eq!(*history.present(), 5);
}

#[test]
fn test_independent_histories_have_independent_suppression() {
    let mut first = History::new(0_u32);
    let mut second = History::new(0_u32);
    first.commit(1);
    first.undo();

    // Arming suppression on one history must not affect the other
    second.commit(7);
    assert_eq!(second.undo_depth(), 1);
    assert_eq!(*second.present(), 7);
}

#[test]
fn test_token_round_trip_for_every_preset() {
    for preset in all_presets() {
        let token = codec::encode(&preset.config, Some(preset.name))
            .unwrap_or_else(|e| unreachable!("encode failed for '{}': {e}", preset.name));
        let state = codec::decode(&token)
            .unwrap_or_else(|| unreachable!("decode failed for '{}'", preset.name));
        assert_eq!(state.config, preset.config, "Config must survive the trip");
        assert_eq!(state.name, preset.name, "Name must survive the trip");
    }
}

#[test]
fn test_malformed_tokens_decode_to_none() {
    assert!(codec::decode("").is_none());
    assert!(codec::decode("   ").is_none());
    assert!(codec::decode("not-base64!!!").is_none());
    // Valid base64, invalid JSON
    assert!(codec::decode(&URL_SAFE_NO_PAD.encode("not json")).is_none());
    // Valid JSON missing the kind tag
    let missing_kind = serde_json::json!({
        "config": { "intensity": 50.0, "scale": 3, "colorTint": "#6366f1", "backgroundColor": "#f5f5f5" }
    });
    assert!(codec::decode(&URL_SAFE_NO_PAD.encode(missing_kind.to_string())).is_none());
    // Valid JSON missing the config
    let missing_config = serde_json::json!({ "type": "noise", "name": "Grain" });
    assert!(codec::decode(&URL_SAFE_NO_PAD.encode(missing_config.to_string())).is_none());
}

#[test]
fn test_pattern_name_normalization() {
    let config = default_config(PatternKind::Geometric);

    let blank = PatternState::new(config.clone(), "   ");
    assert_eq!(blank.name, "My Pattern");

    let trimmed = PatternState::new(config.clone(), "  Waves  ");
    assert_eq!(trimmed.name, "Waves");

    let long_name = "x".repeat(80);
    let bounded = PatternState::new(config, &long_name);
    assert_eq!(bounded.name.chars().count(), 50);
}

#[test]
fn test_all_presets_pass_validation() {
    for preset in all_presets() {
        assert!(
            preset.config.validate().is_ok(),
            "Preset '{}' should be valid",
            preset.name
        );
    }
}
