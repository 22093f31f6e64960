use crate::commands::{CmdMessage, CmdResult, OrreryPaths};
use crate::config::OrreryConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &OrreryPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = OrreryConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in OrreryConfig::KEYS {
                result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(key)?)));
            }
        }
        ConfigAction::ShowKey(key) => {
            result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(&key)?)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}
