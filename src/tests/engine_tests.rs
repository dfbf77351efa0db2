use super::builtin_engine;
use crate::{Engine, EngineConfig, KeyPos, LayoutId};

#[test]
fn correct_if_needed_applies_recommended_remap() {
    let engine = builtin_engine();
    let (layout, result) = engine
        .correct_if_needed("ghbdtn", LayoutId::EN_US)
        .unwrap()
        .expect("wrong-layout token should be corrected");
    assert_eq!(layout, LayoutId::RU_RU);
    assert_eq!(result.text, "привет");
    assert!(result.fully_mapped());
}

#[test]
fn correct_if_needed_leaves_legitimate_words_alone() {
    let engine = builtin_engine();
    assert_eq!(
        engine.correct_if_needed("hello", LayoutId::EN_US).unwrap(),
        None
    );
    assert_eq!(
        engine.correct_if_needed("привет", LayoutId::RU_RU).unwrap(),
        None
    );
}

#[test]
fn host_defined_layouts_work_alongside_builtin_ids() {
    // Toy three-key layouts on ids the built-ins do not use.
    let alpha = LayoutId(10);
    let omega = LayoutId(11);
    let alpha_pairs: &[(KeyPos, char)] = &[
        (KeyPos::new(1, 0), 'a'),
        (KeyPos::new(1, 1), 'b'),
        (KeyPos::new(1, 2), 'c'),
    ];
    let omega_pairs: &[(KeyPos, char)] = &[
        (KeyPos::new(1, 0), 'x'),
        (KeyPos::new(1, 1), 'y'),
        (KeyPos::new(1, 2), 'z'),
    ];
    let engine = Engine::new(
        &[(alpha, alpha_pairs), (omega, omega_pairs)],
        EngineConfig::default(),
    )
    .unwrap();

    let result = engine.remap("cab", alpha, omega).unwrap();
    assert_eq!(result.text, "zxy");
    let back = engine.remap("zxy", omega, alpha).unwrap();
    assert_eq!(back.text, "cab");
}

#[test]
fn config_defaults_favor_precision() {
    let config = EngineConfig::default();
    assert_eq!(config.switch_threshold, 0.25);
    assert_eq!(config.min_token_len, 4);
}

#[test]
fn engine_debug_output_omits_the_scorer() {
    // Result<Engine, _> combinators like unwrap_err need this impl; the
    // boxed scorer has no Debug of its own and stays opaque.
    let rendered = format!("{:?}", builtin_engine());
    assert!(rendered.starts_with("Engine"));
    assert!(rendered.contains("config"));
    assert!(rendered.contains(".."));
}

#[test]
fn results_are_owned_values() {
    // The engine keeps no reference to a returned result: dropping the
    // result and calling again must give an equal, independent value.
    let engine = builtin_engine();
    let first = engine
        .remap("ghbdtn", LayoutId::EN_US, LayoutId::RU_RU)
        .unwrap();
    let text = first.text.clone();
    drop(first);
    let second = engine
        .remap("ghbdtn", LayoutId::EN_US, LayoutId::RU_RU)
        .unwrap();
    assert_eq!(second.text, text);
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(builtin_engine());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                engine
                    .remap("ghbdtn", LayoutId::EN_US, LayoutId::RU_RU)
                    .unwrap()
                    .text
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "привет");
    }
}
