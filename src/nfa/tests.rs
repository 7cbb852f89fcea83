use super::*;


fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn set(states: &[StateId]) -> StateSet {
    states.iter().copied().collect()
}
