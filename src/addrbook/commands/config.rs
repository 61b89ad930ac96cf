use crate::commands::{CmdMessage, CmdResult};
use crate::config::AddrBookConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates `config`. A successful `Set` is written to `dir` right away.
pub fn run(config: &mut AddrBookConfig, dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(format!("{key} = {val}"))),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {key}")))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e)));
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            Ok(CmdResult::default()
                .with_config(config.clone())
                .with_message(CmdMessage::success(format!("{key} set to {display_val}"))))
        }
    }
}
