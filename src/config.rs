use crate::models::BatchRunnerConfig;

pub const DEFAULT_BATCH_RUNNER_CONFIG: BatchRunnerConfig = BatchRunnerConfig {
    num_workers: None,
    output_path: None,
};
