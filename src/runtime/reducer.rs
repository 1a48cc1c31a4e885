use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::form::FormState;
use crate::widgets::traits::InteractionResult;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut FormState, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Exit => {
                state.request_exit();
                vec![Effect::RequestRender]
            }
            Intent::Submit => submit(state),
            Intent::NextFocus => {
                state.focus_next();
                vec![Effect::RequestRender]
            }
            Intent::PrevFocus => {
                state.focus_prev();
                vec![Effect::RequestRender]
            }
            Intent::InputKey(key) => {
                let result = state.dispatch_key_to_focused(key);
                collect_effects(state, result)
            }
            Intent::TextAction(action) => {
                let result = state.dispatch_text_action_to_focused(action);
                collect_effects(state, result)
            }
            Intent::Tick => vec![],
        }
    }
}

fn submit(state: &mut FormState) -> Vec<Effect> {
    state.submit();
    vec![Effect::RequestRender]
}

fn collect_effects(state: &mut FormState, result: InteractionResult) -> Vec<Effect> {
    if result.is_input_done() {
        return submit(state);
    }
    if result.request_render {
        vec![Effect::RequestRender]
    } else {
        vec![]
    }
}
