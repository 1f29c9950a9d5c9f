//! Animation State Tests
//!
//! Tests for:
//! - AnimationAction loop modes (Once, Loop, PingPong)
//! - Play / stop semantics of actions
//! - AnimationMixer action reuse and per-frame advance
//! - AnimationClip duration from keyframe times

use std::sync::Arc;

use slotmap::SlotMap;

use arbook::animation::{AnimationAction, AnimationClip, AnimationMixer, LoopMode};
use arbook::scene::NodeHandle;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn clip(duration: f32) -> Arc<AnimationClip> {
    Arc::new(AnimationClip::new("Walk", duration))
}

fn playing(duration: f32, mode: LoopMode) -> AnimationAction {
    let mut action = AnimationAction::new(clip(duration));
    action.loop_mode = mode;
    action.play();
    action
}

fn node_handle() -> NodeHandle {
    let mut nodes: SlotMap<NodeHandle, ()> = SlotMap::with_key();
    nodes.insert(())
}

// ============================================================================
// AnimationClip
// ============================================================================

#[test]
fn clip_duration_is_latest_keyframe() {
    let c = AnimationClip::from_keyframe_times("Wave", [1.5, 4.0, 2.25]);
    assert!(approx(c.duration, 4.0));
    assert_eq!(c.name, "Wave");
}

#[test]
fn clip_without_channels_has_zero_duration() {
    let c = AnimationClip::from_keyframe_times("Empty", std::iter::empty());
    assert!(approx(c.duration, 0.0));
}

// ============================================================================
// AnimationAction
// ============================================================================

#[test]
fn new_action_is_stopped() {
    let mut action = AnimationAction::new(clip(2.0));
    assert!(!action.is_running());
    action.update(0.5);
    assert!(approx(action.time, 0.0));
}

#[test]
fn loop_wraps_time() {
    let mut action = playing(2.0, LoopMode::Loop);
    action.update(1.5);
    action.update(1.0);
    assert!(approx(action.time, 0.5), "time {}", action.time);
    assert!(action.is_running());
}

#[test]
fn loop_reverse_wraps_to_end() {
    let mut action = playing(2.0, LoopMode::Loop);
    action.time_scale = -1.0;
    action.update(0.5);
    assert!(approx(action.time, 1.5), "time {}", action.time);
}

#[test]
fn loop_reverse_lands_on_start_at_exact_multiple() {
    let mut action = playing(2.0, LoopMode::Loop);
    action.time_scale = -1.0;
    action.update(2.0);
    assert!(approx(action.time, 0.0), "time {}", action.time);

    action.update(4.0);
    assert!(approx(action.time, 0.0), "time {}", action.time);
}

#[test]
fn once_clamps_and_pauses() {
    let mut action = playing(1.0, LoopMode::Once);
    action.update(1.4);
    assert!(approx(action.time, 1.0));
    assert!(action.paused);
    assert!(!action.is_running());
}

#[test]
fn ping_pong_reflects_in_second_half() {
    let mut action = playing(1.0, LoopMode::PingPong);
    action.update(1.25);
    assert!(approx(action.time, 0.75), "time {}", action.time);
}

#[test]
fn stop_rewinds() {
    let mut action = playing(3.0, LoopMode::Loop);
    action.update(1.0);
    action.stop();
    assert!(approx(action.time, 0.0));
    assert!(!action.is_running());
}

#[test]
fn zero_duration_clip_never_advances() {
    let mut action = playing(0.0, LoopMode::Loop);
    action.update(1.0);
    assert!(approx(action.time, 0.0));
}

// ============================================================================
// AnimationMixer
// ============================================================================

#[test]
fn clip_action_reuses_existing_action() {
    let mut mixer = AnimationMixer::new(node_handle());
    let c = clip(2.0);

    mixer.clip_action(&c).play();
    mixer.clip_action(&c).time_scale = 2.0;

    assert_eq!(mixer.actions().len(), 1);
    assert!(approx(mixer.actions()[0].time_scale, 2.0));
}

#[test]
fn mixer_advances_all_running_actions() {
    let mut mixer = AnimationMixer::new(node_handle());
    let a = clip(10.0);
    let b = clip(10.0);
    mixer.clip_action(&a).play();
    mixer.clip_action(&b);

    mixer.update(0.25);
    mixer.update(0.25);

    assert!(approx(mixer.actions()[0].time, 0.5));
    assert!(approx(mixer.actions()[1].time, 0.0));
    assert!(mixer.is_running());
}

#[test]
fn empty_mixer_is_not_running() {
    let mut mixer = AnimationMixer::new(node_handle());
    mixer.update(1.0);
    assert!(!mixer.is_running());
}
