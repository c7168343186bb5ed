//! Zellij plugin shim for BizTone.
//!
//! Translates between the Zellij host and the library: host events become
//! [`biztone::Event`]s, and the [`biztone::Action`]s that come back are
//! executed as host calls (`web_request`, `run_command`, `set_timeout`,
//! `hide_self`). Every call carries a context map so its result can be routed
//! back to the component that issued it.
//!
//! The shim only exists on `wasm32`; native builds get a stub `main` so the
//! library and its tests build on any host.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(shim::State);

#[cfg(target_arch = "wasm32")]
mod shim {
    use biztone::client::{self, CallContext, CallKind};
    use biztone::{handle_event, Action, AppState, Config, Event};
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    pub struct State {
        app: AppState,
        config: Config,
    }

    impl Default for State {
        fn default() -> Self {
            let config = Config::default();
            Self {
                app: biztone::initialize(&config),
                config,
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            biztone::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();
            tracing::debug!(endpoint = %config.endpoint, "parsed configuration");

            self.app = biztone::initialize(&config);
            self.config = config;

            request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);
            subscribe(&[
                EventType::Key,
                EventType::WebRequestResult,
                EventType::RunCommandResult,
                EventType::Timer,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let span = tracing::debug_span!(
                "plugin_update_event",
                otel.name = %format!("plugin_update::{event_name}"),
                event_type = %event_name
            );
            let _guard = span.entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    match self.map_web_result(status, &body, &context) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                    match Self::map_command_result(exit_code, &stderr, &context) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::Timer(_) => Event::Tick,
                zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                    Event::PermissionsResult {
                        granted: matches!(status, PermissionStatus::Granted),
                    }
                }
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event, chrono::Utc::now()) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render,
                        "event handled successfully"
                    );
                    for action in actions {
                        self.execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            biztone::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                    format!("WebRequestResult({status})")
                }
                zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
                zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
                zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                    "PermissionRequestResult".to_string()
                }
                _ => "Other".to_string(),
            }
        }

        fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
            tracing::debug!(bare_key = ?key.bare_key, "key event");

            if key.has_modifiers(&[KeyModifier::Ctrl]) {
                return match key.bare_key {
                    BareKey::Char('y') => Some(Event::CopyRequested),
                    BareKey::Char('u') => Some(Event::ClearInput),
                    _ => None,
                };
            }

            if key.has_modifiers(&[KeyModifier::Alt]) {
                return match key.bare_key {
                    BareKey::Enter => Some(Event::InsertNewline),
                    BareKey::Char(c @ '1'..='9') => c
                        .to_digit(10)
                        .and_then(|d| usize::try_from(d).ok())
                        .map(|d| Event::SelectTarget(d - 1)),
                    _ => None,
                };
            }

            Some(match key.bare_key {
                BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PreviousTarget,
                BareKey::Tab => Event::NextTarget,
                BareKey::Enter => Event::ConvertRequested,
                BareKey::Backspace => Event::Backspace,
                BareKey::Esc => Event::CloseFocus,
                BareKey::Char(c) => Event::InsertChar(c),
                _ => return None,
            })
        }

        fn map_web_result(
            &self,
            status: u16,
            body: &[u8],
            context: &BTreeMap<String, String>,
        ) -> Option<Event> {
            let Some(CallContext {
                kind: CallKind::Conversion,
                id,
            }) = CallContext::from_map(context)
            else {
                tracing::debug!(status, "ignoring web result without a conversion context");
                return None;
            };

            tracing::debug!(request_id = id, status, body_len = body.len(), "conversion settled");
            Some(Event::ConversionSettled {
                request_id: id,
                outcome: client::decode_response(status, body, &self.app.messages),
            })
        }

        fn map_command_result(
            exit_code: Option<i32>,
            stderr: &[u8],
            context: &BTreeMap<String, String>,
        ) -> Option<Event> {
            let Some(CallContext {
                kind: CallKind::Clipboard,
                id,
            }) = CallContext::from_map(context)
            else {
                tracing::debug!(exit_code = ?exit_code, "ignoring command result without a clipboard context");
                return None;
            };

            tracing::debug!(copy_id = id, exit_code = ?exit_code, "clipboard write settled");
            Some(Event::ClipboardSettled {
                copy_id: id,
                outcome: client::clipboard::decode_result(exit_code, stderr),
            })
        }

        #[tracing::instrument(level = "debug", skip(self))]
        fn execute_action(&mut self, action: Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("hiding plugin pane");
                    hide_self();
                }
                Action::SendConversion {
                    request_id,
                    request,
                } => match client::encode_request(&self.config.endpoint, request_id, &request) {
                    Ok(call) => {
                        web_request(call.url, HttpVerb::Post, call.headers, call.body, call.context);
                    }
                    Err(e) => {
                        // Settle locally so the orchestrator leaves Submitting.
                        tracing::error!(request_id, error = %e, "failed to encode conversion request");
                        let outcome = Err(biztone::domain::ConversionError::new(
                            biztone::domain::ConversionErrorKind::Transport,
                            self.app.messages.network_failure.clone(),
                        ));
                        let event = Event::ConversionSettled {
                            request_id,
                            outcome,
                        };
                        if let Ok((_, actions)) =
                            handle_event(&mut self.app, &event, chrono::Utc::now())
                        {
                            for action in actions {
                                self.execute_action(action);
                            }
                        }
                    }
                },
                Action::WriteClipboard { copy_id, text } => {
                    let call = client::clipboard::encode_write(
                        &self.config.clipboard_command,
                        copy_id,
                        &text,
                    );
                    let argv: Vec<&str> = call.argv.iter().map(String::as_str).collect();
                    run_command(&argv, call.context);
                }
                Action::ScheduleTick { after_secs } => set_timeout(after_secs),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("biztone is a Zellij plugin; build it with --target wasm32-wasip1 and load the .wasm from Zellij");
}
