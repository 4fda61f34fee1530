use crate::circular_buffer::BoundedRing;
use crate::config::ScenarioKind;

/// Ring depth used by every scenario; small so the ring is full almost
/// immediately and each insert exercises eviction.
pub const RING_DEPTH: usize = 3;

type PayloadRing = BoundedRing<Vec<u8>, RING_DEPTH>;

pub trait Scenario {
    fn id(&self) -> &str;
    fn label(&self) -> &str;
    fn run_once(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Copy,
    Move,
}

/// Builds a fresh payload, then inserts it by copy or by move.
pub struct InsertScenario {
    id: String,
    label: String,
    mode: Mode,
    payload_bytes: usize,
    ring: PayloadRing,
}

impl InsertScenario {
    pub fn new(id: &str, mode: Mode, payload_bytes: usize) -> Self {
        let label = match mode {
            Mode::Copy => "insert(copy)",
            Mode::Move => "insert(move)",
        };
        Self {
            id: id.to_string(),
            label: label.to_string(),
            mode,
            payload_bytes,
            ring: PayloadRing::new(),
        }
    }
}

impl Scenario for InsertScenario {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn run_once(&mut self) {
        let payload = vec![1u8; self.payload_bytes];
        match self.mode {
            Mode::Copy => self.ring.insert_copy(&payload),
            Mode::Move => self.ring.insert_move(payload),
        }
    }
}

/// Inserts a fresh payload by move, then extracts the oldest by copy or by move.
pub struct ExtractScenario {
    id: String,
    label: String,
    mode: Mode,
    payload_bytes: usize,
    ring: PayloadRing,
}

impl ExtractScenario {
    pub fn new(id: &str, mode: Mode, payload_bytes: usize) -> Self {
        let label = match mode {
            Mode::Copy => "extract(copy)",
            Mode::Move => "extract(move)",
        };
        Self {
            id: id.to_string(),
            label: label.to_string(),
            mode,
            payload_bytes,
            ring: PayloadRing::new(),
        }
    }
}

impl Scenario for ExtractScenario {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn run_once(&mut self) {
        self.ring.insert_move(vec![1u8; self.payload_bytes]);
        let extracted = match self.mode {
            Mode::Copy => self.ring.extract_copy(),
            Mode::Move => self.ring.extract_move(),
        };
        debug_assert_eq!(extracted.map(|v| v.len()), Ok(self.payload_bytes));
    }
}

/// Expand one configured entry into its copy/move pair.
pub fn build_scenarios(
    id: &str,
    kind: ScenarioKind,
    payload_bytes: usize,
) -> Vec<Box<dyn Scenario>> {
    match kind {
        ScenarioKind::Insert => vec![
            Box::new(InsertScenario::new(id, Mode::Copy, payload_bytes)),
            Box::new(InsertScenario::new(id, Mode::Move, payload_bytes)),
        ],
        ScenarioKind::Extract => vec![
            Box::new(ExtractScenario::new(id, Mode::Copy, payload_bytes)),
            Box::new(ExtractScenario::new(id, Mode::Move, payload_bytes)),
        ],
    }
}

pub fn default_scenarios(payload_bytes: usize) -> Vec<Box<dyn Scenario>> {
    let mut out = build_scenarios("insert", ScenarioKind::Insert, payload_bytes);
    out.extend(build_scenarios("extract", ScenarioKind::Extract, payload_bytes));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenarios_cover_all_forms() {
        let scenarios = default_scenarios(16);
        let labels: Vec<&str> = scenarios.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["insert(copy)", "insert(move)", "extract(copy)", "extract(move)"]
        );
        assert_eq!(scenarios[0].id(), "insert");
        assert_eq!(scenarios[3].id(), "extract");
    }

    #[test]
    fn test_insert_scenario_keeps_ring_full() {
        let mut s = InsertScenario::new("ins", Mode::Move, 8);
        for _ in 0..10 {
            s.run_once();
        }
        assert!(s.ring.full());
        assert_eq!(s.ring.front().map(Vec::len), Some(8));

        let mut s = InsertScenario::new("ins", Mode::Copy, 8);
        s.run_once();
        assert_eq!(s.ring.size(), 1);
    }

    #[test]
    fn test_extract_scenario_drains_each_round() {
        for mode in [Mode::Copy, Mode::Move] {
            let mut s = ExtractScenario::new("ext", mode, 4);
            for _ in 0..5 {
                s.run_once();
            }
            assert!(s.ring.empty());
        }
    }
}
