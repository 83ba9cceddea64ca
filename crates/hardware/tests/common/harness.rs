use crate::common::regfile::TestRegFile;
use o3sim_core::config::Config;
use o3sim_core::core::units::lvp::HistoryEntry;
use o3sim_core::{CompSimplifier, LoadValuePredictor};

/// A bench bundling both speculation units with a scriptable register file.
///
/// The default bench enables both units and shrinks the prediction table to
/// 64 entries so index-aliasing scenarios stay easy to construct.
pub struct TestBench {
    pub lvp: LoadValuePredictor,
    pub simp: CompSimplifier,
    pub regs: TestRegFile,
}

impl Default for TestBench {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBench {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.lvp.enabled = true;
        config.lvp.table_size = 64;
        config.comp_simp.enabled = true;
        Self::with_config(&config)
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        Self {
            lvp: LoadValuePredictor::new(&config.lvp),
            simp: CompSimplifier::new(&config.comp_simp),
            regs: TestRegFile::new(),
        }
    }

    /// Issue-side step for a load: consult the predictor and record the
    /// in-flight entry, exactly as the host pipeline would at dispatch.
    pub fn dispatch_load(&mut self, seq_num: u64, pc: u64, tid: usize) -> Option<u64> {
        let predicted_value = self.lvp.predict(pc, tid);
        self.lvp.add_history(HistoryEntry {
            seq_num,
            pc,
            tid,
            predicted_value: predicted_value.unwrap_or(0),
            predicted: predicted_value.is_some(),
        });
        predicted_value
    }

    /// Writeback-side step for a load: validate the speculated value and
    /// train the table with what memory actually returned.
    pub fn writeback_load(&mut self, seq_num: u64, pc: u64, actual: u64) -> bool {
        let correct = self.lvp.validate(seq_num, actual);
        self.lvp.update(pc, actual);
        correct
    }
}

/// Installs the test log subscribers, once per process.
///
/// Honors `RUST_LOG` so a failing run can be re-executed with tracing
/// enabled. Subsequent calls are no-ops.
pub fn init_tracing() {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
