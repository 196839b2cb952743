use std::time::Duration;

/// Shown before the first status tick
pub const CONNECTING_MESSAGE: &str = "CONNECTING_TO_DB";

/// Status labels cycled while a fetch is in flight
pub const LOADING_MESSAGES: [&str; 4] = [
    "HANDSHAKE_INIT",
    "QUERYING_INDEX",
    "FETCHING_VECTORS",
    "RENDERING_ASSETS",
];

/// Time between status label changes
pub const LOADING_TICK: Duration = Duration::from_millis(150);

/// Status label for a fetch that has been running for `elapsed`
pub fn loading_message(elapsed: Duration) -> &'static str {
    let ticks = elapsed.as_millis() / LOADING_TICK.as_millis();
    if ticks == 0 {
        return CONNECTING_MESSAGE;
    }
    LOADING_MESSAGES[((ticks - 1) % LOADING_MESSAGES.len() as u128) as usize]
}
