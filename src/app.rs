//! Main application logic for the Frameless demo

use anyhow::Result;
use log::info;

use frameless::ChromeConfig;

use crate::window::WindowManager;

/// Main application state
pub struct Application {
    window_manager: WindowManager,
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &ChromeConfig) -> Result<Self> {
        info!("Initializing demo application (frameless={})", config.frameless);
        let window_manager = WindowManager::new(config)?;
        Ok(Self { window_manager })
    }

    /// Run the application
    pub fn run(&mut self) -> Result<()> {
        info!("Starting main loop");
        self.window_manager.show();
        self.window_manager.run_message_loop()?;
        info!("Main loop ended");
        Ok(())
    }
}
