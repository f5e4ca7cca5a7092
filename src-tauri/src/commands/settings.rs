//! Settings commands

use manta_core::Config;
use tauri::State;

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn get_settings(state: State<AppState>) -> CommandResult<Config> {
    CommandResult::ok(state.config())
}

#[tauri::command]
pub fn set_search_engine(state: State<AppState>, template: String) -> CommandResult<Config> {
    match state.set_search_engine(template) {
        Ok(config) => CommandResult::ok(config),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
