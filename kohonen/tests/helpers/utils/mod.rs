use crate::utils::{Environment, InfoLogger};
use std::sync::{Arc, Mutex};

/// Creates an environment with repeatable random and a silent logger.
pub fn create_test_environment() -> Environment {
    Environment::new_repeatable(42, Environment::silent_logger())
}

/// Creates a logger which collects all messages.
pub fn create_collecting_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let sink = messages.clone();

    (Arc::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string())), messages)
}
