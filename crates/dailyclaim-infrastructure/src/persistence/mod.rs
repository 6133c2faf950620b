mod run_counter;

pub use run_counter::FileRunCounter;
