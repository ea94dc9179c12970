use super::*;

fn histogram(counts: [(Severity, usize); 5]) -> IndexMap<Severity, usize> {
    counts.into_iter().collect()
}

#[test]
fn gate_passes_with_no_findings() {
    let gate = QualityGate::evaluate(0, 0, &QualityGateConfig::default());
    assert_eq!(gate, QualityGate::Passed);
}

#[test]
fn gate_critical_boundary() {
    let policy = QualityGateConfig::default();
    assert_eq!(QualityGate::evaluate(0, 5, &policy), QualityGate::Passed);
    assert_eq!(QualityGate::evaluate(0, 6, &policy), QualityGate::Failed);
}

#[test]
fn gate_fails_on_any_blocker() {
    let gate = QualityGate::evaluate(1, 0, &QualityGateConfig::default());
    assert_eq!(gate, QualityGate::Failed);
    assert!(!gate.is_passed());
}

#[test]
fn gate_thresholds_are_configurable() {
    let policy = QualityGateConfig {
        max_blocker: 2,
        max_critical: 0,
    };
    assert_eq!(QualityGate::evaluate(2, 0, &policy), QualityGate::Passed);
    assert_eq!(QualityGate::evaluate(0, 1, &policy), QualityGate::Failed);
}

#[test]
fn gate_serializes_uppercase() {
    assert_eq!(
        serde_json::to_string(&QualityGate::Failed).unwrap(),
        "\"FAILED\""
    );
    assert_eq!(QualityGate::Passed.to_string(), "PASSED");
}

#[test]
fn debt_weights_severity_counts() {
    let by_severity = histogram([
        (Severity::Blocker, 1),
        (Severity::Critical, 1),
        (Severity::Major, 3),
        (Severity::Minor, 10),
        (Severity::Info, 10),
    ]);

    let debt = TechnicalDebt::estimate(&by_severity, &DebtWeights::default());

    assert_eq!(debt.minutes(), 120 + 60 + 90);
    assert_eq!(debt.to_string(), "4h 30min");
}

#[test]
fn debt_uses_custom_weights() {
    let weights = DebtWeights {
        minor: 5,
        ..DebtWeights::default()
    };
    let by_severity = histogram([
        (Severity::Blocker, 0),
        (Severity::Critical, 0),
        (Severity::Major, 0),
        (Severity::Minor, 7),
        (Severity::Info, 0),
    ]);

    assert_eq!(TechnicalDebt::estimate(&by_severity, &weights).to_string(), "0h 35min");
}

#[test]
fn debt_display_has_no_rounding_carry() {
    assert_eq!(TechnicalDebt::from_minutes(0).to_string(), "0h 0min");
    assert_eq!(TechnicalDebt::from_minutes(59).to_string(), "0h 59min");
    assert_eq!(TechnicalDebt::from_minutes(90).to_string(), "1h 30min");
    assert_eq!(TechnicalDebt::from_minutes(150).to_string(), "2h 30min");
}

#[test]
fn debt_serializes_as_display_string() {
    let json = serde_json::to_string(&TechnicalDebt::from_minutes(61)).unwrap();
    assert_eq!(json, "\"1h 1min\"");
}
