use std::sync::Arc;

use hero_client::{HeroRoster, HeroService, HeroStore, MessageLog};
use hero_config::HeroConfig;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext<S> {
    pub service: HeroService<S>,
    pub roster: HeroRoster<S>,
    pub messages: Arc<MessageLog>,
    pub config: HeroConfig,
}

impl<S: HeroStore> AppContext<S> {
    /// Wire the service, roster and message log around `store`.
    ///
    /// Unless `--quiet`, every logged message is echoed to stderr as it
    /// arrives.
    pub fn init(store: S, config: HeroConfig, flags: &GlobalFlags) -> Self {
        let messages = Arc::new(MessageLog::new());
        if !flags.quiet {
            messages.subscribe(|message| eprintln!("{message}"));
        }

        let service = HeroService::new(store, Arc::clone(&messages));
        let roster = HeroRoster::new(service.clone());

        Self {
            service,
            roster,
            messages,
            config,
        }
    }
}
