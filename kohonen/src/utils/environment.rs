use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by a map.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific settings which influence map behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator used to initialize weights.
    pub random: Arc<dyn Random>,

    /// A logger used to report training progress.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates an instance of `Environment` with repeatable random and the given logger.
    pub fn new_repeatable(seed: u64, logger: InfoLogger) -> Self {
        Self::new(Arc::new(DefaultRandom::new_repeatable(seed)), logger)
    }

    /// Returns a logger which ignores all messages.
    pub fn silent_logger() -> InfoLogger {
        Arc::new(|_| ())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), Arc::new(|msg| println!("{msg}")))
    }
}
