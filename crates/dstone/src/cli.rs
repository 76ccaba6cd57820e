use dstone_core::ui_bridge::{UiMessage, UiProvider, UiUpdateType};

/// A plain-text UI provider for the command line.
///
/// Prints status and mount messages without timestamps so the output is
/// stable enough for scripting; log messages are left to the logger.
pub struct CliUiProvider;

impl UiProvider for CliUiProvider {
    fn name(&self) -> &'static str {
        "cli"
    }

    fn initialize(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn handle_message(&mut self, message: &UiMessage) -> Result<(), String> {
        match &message.update_type {
            UiUpdateType::Status(text) => println!("{}", text),
            UiUpdateType::Mount(view) => println!("Mounted view '{}' from {}", view, message.source),
            UiUpdateType::Log(_, _) => {}
        }
        Ok(())
    }

    fn update(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), String> {
        Ok(())
    }
}
