//! End-to-end interaction flow through `handle_event`, with the host played
//! by hand: requests are "answered" by decoding canned HTTP responses and
//! feeding them back as settlements.

use biztone::client::{self, CallContext, CallKind};
use biztone::domain::{Messages, NotificationKind};
use biztone::ui::OutputKind;
use biztone::{handle_event, Action, AppState, Config, Event};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn t0() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).single().unwrap()
}

fn app() -> AppState {
    biztone::initialize(&Config::default())
}

fn send(state: &mut AppState, event: Event, now: DateTime<Utc>) -> Vec<Action> {
    handle_event(state, &event, now).unwrap().1
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        let event = if c == '\n' {
            Event::InsertNewline
        } else {
            Event::InsertChar(c)
        };
        send(state, event, t0());
    }
}

/// Plays the host's part for a conversion: encodes the request the way the
/// shim would, checks it, and returns the settlement for `status`/`body`.
fn answer(
    endpoint: &str,
    action: &Action,
    status: u16,
    body: &[u8],
    messages: &Messages,
) -> Event {
    let Action::SendConversion {
        request_id,
        request,
    } = action
    else {
        panic!("expected SendConversion, got {action:?}");
    };

    let call = client::encode_request(endpoint, *request_id, request).unwrap();
    assert_eq!(call.url, endpoint);
    assert_eq!(
        CallContext::from_map(&call.context),
        Some(CallContext {
            kind: CallKind::Conversion,
            id: *request_id
        })
    );

    Event::ConversionSettled {
        request_id: *request_id,
        outcome: client::decode_response(status, body, messages),
    }
}

fn visible_message(state: &AppState) -> Option<(String, NotificationKind)> {
    state
        .notifications
        .visible()
        .map(|n| (n.message.clone(), n.kind))
}

#[test]
fn convert_then_copy() {
    let mut state = app();
    let endpoint = Config::default().endpoint;

    type_text(&mut state, "  내일 회의 늦을게요  ");
    send(&mut state, Event::SelectTarget(0), t0());

    let actions = send(&mut state, Event::ConvertRequested, t0());
    assert_eq!(actions.len(), 2, "request plus deadline tick");
    if let Action::SendConversion { request, .. } = &actions[0] {
        assert_eq!(request.text(), "내일 회의 늦을게요");
        assert_eq!(request.target(), "boss");
        let call = client::encode_request(&endpoint, 1, request).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&call.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "text": "내일 회의 늦을게요", "target": "boss" })
        );
    }

    let vm = state.compute_viewmodel(30, 80);
    assert!(vm.buttons.busy);
    assert!(!vm.buttons.convert.enabled);

    let settled = answer(
        &endpoint,
        &actions[0],
        200,
        br#"{"original_text":"x","converted_text":"Polished.","target":"boss"}"#,
        &state.messages,
    );
    let (render, follow_up) = handle_event(&mut state, &settled, t0()).unwrap();
    assert!(render);
    assert!(follow_up.is_empty());
    assert!(visible_message(&state).is_none(), "success shows no toast");

    let vm = state.compute_viewmodel(30, 80);
    assert!(!vm.buttons.busy);
    assert!(vm.buttons.convert.enabled);
    assert!(vm.buttons.copy.enabled);
    assert_eq!(vm.output.kind, OutputKind::Converted);
    assert_eq!(vm.output.lines, vec!["Polished.".to_string()]);

    let actions = send(&mut state, Event::CopyRequested, t0());
    let [Action::WriteClipboard { copy_id, text }] = actions.as_slice() else {
        panic!("expected one clipboard write, got {actions:?}");
    };
    assert_eq!(text, "Polished.");

    let cmd = client::clipboard::encode_write("wl-copy", *copy_id, text);
    assert_eq!(cmd.argv.last().map(String::as_str), Some("Polished."));

    let outcome = client::clipboard::decode_result(Some(0), b"");
    send(
        &mut state,
        Event::ClipboardSettled {
            copy_id: *copy_id,
            outcome,
        },
        t0(),
    );
    assert_eq!(
        visible_message(&state),
        Some((state.messages.copied.clone(), NotificationKind::Success))
    );
}

#[test]
fn validation_blocks_sending() {
    let mut state = app();

    let actions = send(&mut state, Event::ConvertRequested, t0());
    assert!(!actions.iter().any(|a| matches!(a, Action::SendConversion { .. })));
    assert_eq!(
        visible_message(&state),
        Some((state.messages.empty_input.clone(), NotificationKind::Error))
    );

    type_text(&mut state, "hello");
    let actions = send(&mut state, Event::ConvertRequested, t0());
    assert!(!actions.iter().any(|a| matches!(a, Action::SendConversion { .. })));
    assert_eq!(
        visible_message(&state),
        Some((state.messages.no_target.clone(), NotificationKind::Error))
    );

    send(&mut state, Event::ClearInput, t0());
    type_text(&mut state, " \n\t ");
    send(&mut state, Event::NextTarget, t0());
    let actions = send(&mut state, Event::ConvertRequested, t0());
    assert!(!actions.iter().any(|a| matches!(a, Action::SendConversion { .. })));
    assert_eq!(
        visible_message(&state).map(|m| m.0),
        Some(state.messages.empty_input.clone())
    );
}

#[test]
fn service_error_is_shown_and_output_marked_failed() {
    let mut state = app();
    let endpoint = Config::default().endpoint;
    type_text(&mut state, "hi");
    send(&mut state, Event::NextTarget, t0());
    let actions = send(&mut state, Event::ConvertRequested, t0());

    let settled = answer(
        &endpoint,
        &actions[0],
        500,
        br#"{"error":"Upstream model unavailable"}"#,
        &state.messages,
    );
    send(&mut state, settled, t0());

    assert_eq!(
        visible_message(&state),
        Some(("Upstream model unavailable".to_string(), NotificationKind::Error))
    );
    let vm = state.compute_viewmodel(30, 80);
    assert_eq!(vm.output.kind, OutputKind::Failed);
    assert_eq!(vm.output.lines, vec![state.messages.conversion_failed.clone()]);
    assert!(!vm.buttons.copy.enabled, "failure render is not copyable");
    assert!(vm.buttons.convert.enabled);

    let actions = send(&mut state, Event::CopyRequested, t0());
    assert!(!actions.iter().any(|a| matches!(a, Action::WriteClipboard { .. })));
    assert_eq!(
        visible_message(&state).map(|m| m.0),
        Some(state.messages.nothing_to_copy.clone())
    );
}

#[test]
fn unreachable_service_and_bad_payloads() {
    let mut state = app();
    let endpoint = Config::default().endpoint;
    type_text(&mut state, "hi");
    send(&mut state, Event::NextTarget, t0());

    let cases: [(u16, &[u8], String); 3] = [
        (400, b"", state.messages.network_failure.clone()),
        (404, br#"{"error":"   "}"#, state.messages.unknown_error.clone()),
        (200, br#"{"result":"?"}"#, state.messages.unknown_error.clone()),
    ];

    for (status, body, expected) in cases {
        let actions = send(&mut state, Event::ConvertRequested, t0());
        let settled = answer(&endpoint, &actions[0], status, body, &state.messages);
        send(&mut state, settled, t0());

        assert_eq!(visible_message(&state).map(|m| m.0), Some(expected));
        assert!(!state.orchestrator.is_busy());
    }
}

#[test]
fn second_convert_while_busy_is_ignored() {
    let mut state = app();
    type_text(&mut state, "hi");
    send(&mut state, Event::NextTarget, t0());

    let first = send(&mut state, Event::ConvertRequested, t0());
    assert!(matches!(first[0], Action::SendConversion { request_id: 1, .. }));

    let (render, second) = handle_event(&mut state, &Event::ConvertRequested, t0()).unwrap();
    assert!(!render);
    assert!(second.is_empty());
}

#[test]
fn timeout_settles_locally_and_late_answer_is_dropped() {
    let mut state = app();
    let endpoint = Config::default().endpoint;
    type_text(&mut state, "hi");
    send(&mut state, Event::NextTarget, t0());
    let actions = send(&mut state, Event::ConvertRequested, t0());
    assert!(actions.contains(&Action::ScheduleTick { after_secs: 30.0 }));

    // An early tick (e.g. a toast timer) does not fail the request.
    send(&mut state, Event::Tick, t0() + Duration::seconds(3));
    assert!(state.orchestrator.is_busy());

    send(&mut state, Event::Tick, t0() + Duration::seconds(30));
    assert!(!state.orchestrator.is_busy());
    assert_eq!(
        visible_message(&state).map(|m| m.0),
        Some(state.messages.timed_out.clone())
    );

    let late = answer(
        &endpoint,
        &actions[0],
        200,
        br#"{"converted_text":"too late"}"#,
        &state.messages,
    );
    let (render, _) =
        handle_event(&mut state, &late, t0() + Duration::seconds(31)).unwrap();
    assert!(!render);
    assert_eq!(
        state.compute_viewmodel(30, 80).output.kind,
        OutputKind::Failed
    );
}

#[test]
fn notifications_replace_and_expire() {
    let mut state = app();

    send(&mut state, Event::ConvertRequested, t0());
    send(&mut state, Event::CopyRequested, t0() + Duration::seconds(2));
    assert_eq!(
        visible_message(&state).map(|m| m.0),
        Some(state.messages.nothing_to_copy.clone())
    );

    // The first toast's timer fires but the replacement is still fresh.
    send(&mut state, Event::Tick, t0() + Duration::seconds(3));
    assert!(state.notifications.visible().is_some());

    let (render, _) =
        handle_event(&mut state, &Event::Tick, t0() + Duration::seconds(5)).unwrap();
    assert!(render);
    assert!(state.notifications.visible().is_none());
}

#[test]
fn counter_tracks_input_and_caps_at_limit() {
    let config = Config {
        max_length: 5,
        ..Config::default()
    };
    let mut state = biztone::initialize(&config);

    type_text(&mut state, "안녕");
    assert_eq!(state.compute_viewmodel(30, 80).input.counter, "2 / 5");

    type_text(&mut state, "abcdef");
    let vm = state.compute_viewmodel(30, 80);
    assert_eq!(vm.input.counter, "5 / 5");
    assert!(vm.input.at_capacity);
    assert_eq!(state.input.current_input(), "안녕abc");

    send(&mut state, Event::Backspace, t0());
    assert_eq!(state.compute_viewmodel(30, 80).input.counter, "4 / 5");
}

#[test]
fn korean_locale_messages() {
    let config = Config {
        language: "ko".to_string(),
        ..Config::default()
    };
    let mut state = biztone::initialize(&config);

    send(&mut state, Event::ConvertRequested, t0());
    assert_eq!(
        visible_message(&state).map(|m| m.0),
        Some("변환할 내용을 입력해주세요.".to_string())
    );
}
