use super::builtin_engine;
use crate::{
    Engine, EngineConfig, EngineError, KeyPos, LayoutId, LayoutRegistry, LayoutTable, Script,
    layouts,
};

#[test]
fn duplicate_layout_is_rejected() {
    let err = Engine::new(
        &[
            (LayoutId::EN_US, layouts::EN_US),
            (LayoutId::EN_US, layouts::EN_US),
        ],
        EngineConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, EngineError::DuplicateLayout(LayoutId::EN_US));
}

#[test]
fn non_injective_table_is_rejected() {
    let layout = LayoutId(7);
    let pairs = [(KeyPos::new(0, 0), 'a'), (KeyPos::new(0, 1), 'a')];
    let err = LayoutTable::from_pairs(layout, &pairs).unwrap_err();
    assert_eq!(err, EngineError::MalformedTable { layout, glyph: 'a' });
}

#[test]
fn double_assigned_key_is_rejected() {
    let layout = LayoutId(7);
    let pairs = [(KeyPos::new(0, 0), 'a'), (KeyPos::new(0, 0), 'b')];
    let err = LayoutTable::from_pairs(layout, &pairs).unwrap_err();
    assert_eq!(err, EngineError::MalformedTable { layout, glyph: 'a' });
}

#[test]
fn reregistration_under_same_id_is_rejected() {
    let mut registry = LayoutRegistry::new();
    let table = LayoutTable::from_pairs(LayoutId(3), &[(KeyPos::new(1, 0), 'q')]).unwrap();
    registry.register(LayoutId(3), table.clone()).unwrap();
    assert_eq!(
        registry.register(LayoutId(3), table),
        Err(EngineError::DuplicateLayout(LayoutId(3)))
    );
}

#[test]
fn unknown_layout_reported_before_any_work() {
    let engine = builtin_engine();
    let missing = LayoutId(42);
    assert_eq!(
        engine.remap("ghbdtn", LayoutId::EN_US, missing).unwrap_err(),
        EngineError::UnknownLayout(missing)
    );
    assert_eq!(
        engine.remap("ghbdtn", missing, LayoutId::RU_RU).unwrap_err(),
        EngineError::UnknownLayout(missing)
    );
    assert_eq!(
        engine.evaluate_switch("ghbdtn", missing).unwrap_err(),
        EngineError::UnknownLayout(missing)
    );
    assert_eq!(
        engine.correct_if_needed("ghbdtn", missing).unwrap_err(),
        EngineError::UnknownLayout(missing)
    );
}

#[test]
fn script_classified_from_glyph_range() {
    let engine = builtin_engine();
    let registry = engine.registry();
    assert_eq!(registry.lookup(LayoutId::EN_US).unwrap().script(), Script::Latin);
    assert_eq!(
        registry.lookup(LayoutId::RU_RU).unwrap().script(),
        Script::Cyrillic
    );

    let symbols = LayoutTable::from_pairs(
        LayoutId(9),
        &[(KeyPos::new(0, 1), '-'), (KeyPos::new(0, 2), '=')],
    )
    .unwrap();
    assert_eq!(symbols.script(), Script::Other);
}

#[test]
fn registry_iteration_is_ordered() {
    let engine = builtin_engine();
    let ids: Vec<LayoutId> = engine.registry().layouts().collect();
    assert_eq!(ids, vec![LayoutId::EN_US, LayoutId::RU_RU]);
    assert_eq!(engine.registry().len(), 2);
    assert!(!engine.registry().is_empty());
}

#[test]
fn inverse_lookup_matches_forward_table() {
    let engine = builtin_engine();
    for id in [LayoutId::EN_US, LayoutId::RU_RU] {
        let table = engine.registry().lookup(id).unwrap();
        for (pos, glyph) in table.iter() {
            assert_eq!(table.position_of(glyph), Some(pos));
            assert_eq!(table.glyph_at(pos), Some(glyph));
        }
    }
}
