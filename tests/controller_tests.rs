//! Controller Tests
//!
//! Drives every operation against a scripted fake device.

mod common;

use common::{endpoint, reply, spawn_device, Script};
use pjlink::protocol::vocab::{
    CommandCode, InputNumber, InputType, MuteState, PowerStatus, Severity,
};
use pjlink::{Controller, PjlinkError};

fn controller_for(script: Vec<Script>) -> (Controller, std::thread::JoinHandle<common::DeviceLog>) {
    let (addr, handle) = spawn_device(script);
    (Controller::new(endpoint(addr)), handle)
}

// =============================================================================
// Power
// =============================================================================

#[test]
fn test_power_on_acknowledged() {
    let (controller, handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::Power, "OK"))]);

    assert!(controller.power_on().unwrap());

    let log = handle.join().unwrap();
    assert_eq!(log.requests[0], b"%1POWR 1\r");
}

#[test]
fn test_power_off_sends_off_parameter() {
    let (controller, handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::Power, "OK"))]);

    assert!(controller.power_off().unwrap());

    let log = handle.join().unwrap();
    assert_eq!(log.requests[0], b"%1POWR 0\r");
}

#[test]
fn test_error_token_reads_as_rejection_not_failure() {
    let (controller, _handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::Power, "ERR2"))]);

    // A device-side error token is ordinary data: false, not Err.
    assert!(!controller.power_on().unwrap());
}

#[test]
fn test_query_power_cooling() {
    let (controller, _handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::Power, "2"))]);

    assert_eq!(controller.query_power().unwrap(), PowerStatus::Cooling);
}

#[test]
fn test_query_power_degenerate_statuses() {
    let (controller, _handle) = controller_for(vec![
        Script::Reply(reply(CommandCode::Power, "ERR3")),
        Script::Reply(reply(CommandCode::Power, "ERR4")),
    ]);

    assert_eq!(controller.query_power().unwrap(), PowerStatus::Unavailable);
    assert_eq!(controller.query_power().unwrap(), PowerStatus::Failure);
}

#[test]
fn test_query_power_unknown_token_is_unexpected_reply() {
    let (controller, _handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::Power, "9"))]);

    assert!(matches!(
        controller.query_power(),
        Err(PjlinkError::UnexpectedReply(data)) if data == "9"
    ));
}

// =============================================================================
// Input
// =============================================================================

#[test]
fn test_set_input_digital_one() {
    let (controller, handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::Input, "OK"))]);

    let number = InputNumber::new(1).unwrap();
    assert!(controller.set_input(InputType::Digital, number).unwrap());

    let log = handle.join().unwrap();
    assert_eq!(log.requests[0], b"%1INPT 31\r");
}

#[test]
fn test_query_input_selected() {
    let (controller, _handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::Input, "52"))]);

    let selected = controller.query_input().unwrap();
    assert_eq!(
        selected,
        Some((InputType::Network, InputNumber::new(2).unwrap()))
    );
}

#[test]
fn test_query_input_one_char_reply_is_absent() {
    let (controller, _handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::Input, "1"))]);

    assert_eq!(controller.query_input().unwrap(), None);
}

#[test]
fn test_query_input_digits_outside_catalogue_are_absent() {
    let (controller, _handle) = controller_for(vec![
        Script::Reply(reply(CommandCode::Input, "91")),
        Script::Reply(reply(CommandCode::Input, "10")),
    ]);

    // Source class 9 does not exist; input number 0 does not exist.
    assert_eq!(controller.query_input().unwrap(), None);
    assert_eq!(controller.query_input().unwrap(), None);
}

// =============================================================================
// Mute
// =============================================================================

#[test]
fn test_set_mute_audio_video() {
    let (controller, handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::Mute, "OK"))]);

    assert!(controller.set_mute(MuteState::AudioVideoMuted).unwrap());

    let log = handle.join().unwrap();
    assert_eq!(log.requests[0], b"%1AVMT 31\r");
}

#[test]
fn test_query_mute_combined_token_mutes_both() {
    let (controller, _handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::Mute, "31"))]);

    let mute = controller.query_mute().unwrap().unwrap();
    assert!(mute.audio_muted);
    assert!(mute.video_muted);
}

#[test]
fn test_query_mute_single_channel_tokens() {
    let (controller, _handle) = controller_for(vec![
        Script::Reply(reply(CommandCode::Mute, "21")),
        Script::Reply(reply(CommandCode::Mute, "11")),
        Script::Reply(reply(CommandCode::Mute, "30")),
    ]);

    let audio_only = controller.query_mute().unwrap().unwrap();
    assert!(audio_only.audio_muted);
    assert!(!audio_only.video_muted);

    let video_only = controller.query_mute().unwrap().unwrap();
    assert!(!video_only.audio_muted);
    assert!(video_only.video_muted);

    let neither = controller.query_mute().unwrap().unwrap();
    assert!(!neither.audio_muted);
    assert!(!neither.video_muted);
}

#[test]
fn test_query_mute_width_sweep() {
    let data = "0123456789";
    let script = (0..=10)
        .map(|len| Script::Reply(reply(CommandCode::Mute, &data[..len])))
        .collect();
    let (controller, _handle) = controller_for(script);

    for len in 0..=10 {
        let mute = controller.query_mute().unwrap();
        assert_eq!(mute.is_some(), len == 2, "width {len}");
    }
}

// =============================================================================
// Error Status
// =============================================================================

#[test]
fn test_query_error_status_mixed_severities() {
    let (controller, _handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::ErrorStatus, "20020"))]);

    let report = controller.query_error_status().unwrap().unwrap();
    assert_eq!(report.fan, Severity::Error);
    assert_eq!(report.lamp, Severity::Ok);
    assert_eq!(report.temperature, Severity::Ok);
    assert_eq!(report.cover, Severity::Error);
    assert_eq!(report.other, Severity::Ok);
}

#[test]
fn test_query_error_status_all_ok() {
    let (controller, _handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::ErrorStatus, "00000"))]);

    let report = controller.query_error_status().unwrap().unwrap();
    assert_eq!(report.fan, Severity::Ok);
    assert_eq!(report.other, Severity::Ok);
}

#[test]
fn test_query_error_status_width_sweep() {
    let data = "0120120120";
    let script = (0..=10)
        .map(|len| Script::Reply(reply(CommandCode::ErrorStatus, &data[..len])))
        .collect();
    let (controller, _handle) = controller_for(script);

    for len in 0..=10 {
        let report = controller.query_error_status().unwrap();
        assert_eq!(report.is_some(), len == 5, "width {len}");
    }
}

#[test]
fn test_query_error_status_non_severity_digit_is_absent() {
    let (controller, _handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::ErrorStatus, "0003X"))]);

    assert_eq!(controller.query_error_status().unwrap(), None);
}

// =============================================================================
// Informational Queries
// =============================================================================

#[test]
fn test_query_name_passes_data_through() {
    let (controller, handle) = controller_for(vec![Script::Reply(reply(
        CommandCode::Name,
        "Lobby Projector",
    ))]);

    assert_eq!(controller.query_name().unwrap(), "Lobby Projector");

    let log = handle.join().unwrap();
    assert_eq!(log.requests[0], b"%1NAME ?\r");
}

#[test]
fn test_query_class_passes_data_through() {
    let (controller, _handle) =
        controller_for(vec![Script::Reply(reply(CommandCode::Class, "1"))]);

    assert_eq!(controller.query_class().unwrap(), "1");
}

// =============================================================================
// Propagation
// =============================================================================

#[test]
fn test_garbage_reply_propagates_as_malformed_frame() {
    let (controller, _handle) =
        controller_for(vec![Script::Reply(b"garbage\r".to_vec())]);

    assert!(matches!(
        controller.power_on(),
        Err(PjlinkError::MalformedFrame(_))
    ));
}

#[test]
fn test_silent_close_propagates_as_empty_reply() {
    let (controller, _handle) = controller_for(vec![Script::CloseSilently]);

    assert!(matches!(
        controller.query_power(),
        Err(PjlinkError::EmptyReply)
    ));
}
