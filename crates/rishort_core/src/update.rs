use crate::{is_valid_url, AppState, Effect, LifecycleSignal, Msg, COPIED_RESET_DELAY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::Submitted => {
            // The submit control is disabled while loading or while the input is flagged.
            if !state.can_submit() {
                return (state, Vec::new());
            }
            if !is_valid_url(state.input()) {
                state.reject_input();
                return (state, Vec::new());
            }
            let long_url = state.input().to_string();
            let submission_id = state.begin_submission();
            vec![Effect::Submit {
                submission_id,
                long_url,
            }]
        }
        Msg::SubmissionSignal {
            submission_id,
            signal,
        } => {
            if !state.is_active(submission_id) {
                return (state, Vec::new());
            }
            match signal {
                LifecycleSignal::Idle | LifecycleSignal::Submitting => {}
                LifecycleSignal::Retrying => state.mark_retrying(),
                LifecycleSignal::Completed(result) => state.complete_submission(result),
            }
            Vec::new()
        }
        Msg::CopyClicked => match state.short_url() {
            Some(short_url) => {
                let text = short_url.to_string();
                state.begin_copy();
                vec![Effect::CopyToClipboard { text }]
            }
            None => Vec::new(),
        },
        Msg::CopyCompleted(result) => {
            let succeeded = result.is_ok();
            state.finish_copy(result);
            if succeeded {
                vec![Effect::ResetCopiedAfter(COPIED_RESET_DELAY)]
            } else {
                Vec::new()
            }
        }
        Msg::CopiedResetElapsed => {
            state.reset_copied();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
