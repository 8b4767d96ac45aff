use crate::{is_valid_url, strings, Effect, FormState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            let long_url = state.raw_input().trim().to_owned();
            if !is_valid_url(&long_url) {
                state.show_error(strings::INVALID_URL);
                return (state, Vec::new());
            }
            // A submit while loading is allowed here; the trigger is disabled
            // by the presentation layer, not by the state machine.
            let request_id = state.begin_request(long_url.clone());
            vec![Effect::Shorten {
                request_id,
                long_url,
            }]
        }
        Msg::ShortenSucceeded {
            request_id,
            short_url,
        } => {
            // Last write wins: responses are applied in arrival order.
            if state.apply_success(request_id, short_url) {
                vec![Effect::ClearInput]
            } else {
                Vec::new()
            }
        }
        Msg::ShortenFailed {
            request_id,
            failure,
        } => {
            state.apply_failure(request_id, failure.user_message());
            Vec::new()
        }
        Msg::CopyClicked => match state.last_result() {
            Some(result) => vec![Effect::WriteClipboard {
                text: result.short_url.clone(),
            }],
            None => Vec::new(),
        },
        Msg::CopySucceeded { at } => {
            state.confirm_copy(at);
            Vec::new()
        }
        Msg::CopyFailed => {
            state.show_error(strings::COPY_FAILED);
            Vec::new()
        }
        Msg::VisitClicked => match state.visit_target() {
            Some(url) => vec![Effect::OpenUrl {
                url: url.to_owned(),
            }],
            None => Vec::new(),
        },
        Msg::Tick(now) => {
            state.expire_copy_confirmation(now);
            Vec::new()
        }
    };

    (state, effects)
}
